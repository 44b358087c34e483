//! Paginated list envelope.
//!
//! The backend answers list requests with an array wrapping a single object
//! that holds both the rows and the total:
//!
//! ```json
//! [{ "DCStocks": [ ... ], "TotalDCStockCount": 42 }]
//! ```

use super::errors::EnvelopeError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A backend collection that can be listed page by page.
pub trait ListResource: 'static {
    type Row: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Base path, e.g. `/api/DCStock`.
    const ENDPOINT: &'static str;
    /// Key of the row collection inside the envelope.
    const ROWS_KEY: &'static str;
    /// Key of the total counter inside the envelope.
    const TOTAL_KEY: &'static str;
    /// Fixed page size of the page listing this resource.
    const PAGE_SIZE: usize;
}

/// A list that can also be downloaded as a spreadsheet with the same filters.
pub trait Exportable: ListResource {
    const EXPORT_FILE_NAME: &'static str;

    fn export_path() -> String {
        format!("{}/Export", Self::ENDPOINT)
    }

    /// Shown while the spreadsheet is being generated.
    fn export_notice() -> String {
        format!("Preparing {}...", Self::EXPORT_FILE_NAME)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

fn unwrap_envelope(value: Value) -> Result<Option<Map<String, Value>>, EnvelopeError> {
    match value {
        Value::Array(items) => match items.into_iter().next() {
            None => Ok(None),
            Some(Value::Object(obj)) => Ok(Some(obj)),
            Some(_) => Err(EnvelopeError::NotAnObject),
        },
        Value::Object(obj) => Ok(Some(obj)),
        _ => Err(EnvelopeError::NotAnObject),
    }
}

fn take_rows<T: DeserializeOwned>(
    obj: &mut Map<String, Value>,
    rows_key: &str,
) -> Result<Vec<T>, EnvelopeError> {
    let rows = obj
        .remove(rows_key)
        .ok_or_else(|| EnvelopeError::MissingRows(rows_key.to_string()))?;
    if rows.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(rows).map_err(|e| EnvelopeError::BadRows {
        key: rows_key.to_string(),
        reason: e.to_string(),
    })
}

fn read_total(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .map(|v| v as usize),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

/// Decodes a paginated envelope. A missing total falls back to the row count.
pub fn decode_page<T: DeserializeOwned>(
    value: Value,
    rows_key: &str,
    total_key: &str,
) -> Result<Page<T>, EnvelopeError> {
    let Some(mut obj) = unwrap_envelope(value)? else {
        return Ok(Page::default());
    };
    let rows: Vec<T> = take_rows(&mut obj, rows_key)?;
    let total = read_total(obj.get(total_key)).unwrap_or(rows.len());
    Ok(Page { rows, total })
}

/// Decodes an unpaged reference collection (`[{ "Projects": [...] }]`).
pub fn decode_collection<T: DeserializeOwned>(
    value: Value,
    rows_key: &str,
) -> Result<Vec<T>, EnvelopeError> {
    match unwrap_envelope(value)? {
        Some(mut obj) => take_rows(&mut obj, rows_key),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Row {
        id: i64,
    }

    struct Sheets;

    impl ListResource for Sheets {
        type Row = Row;
        const ENDPOINT: &'static str = "/api/Sheet";
        const ROWS_KEY: &'static str = "Sheets";
        const TOTAL_KEY: &'static str = "TotalSheetCount";
        const PAGE_SIZE: usize = 10;
    }

    impl Exportable for Sheets {
        const EXPORT_FILE_NAME: &'static str = "sheets.xlsx";
    }

    #[test]
    fn export_reuses_endpoint_and_names_the_file() {
        assert_eq!(Sheets::export_path(), "/api/Sheet/Export");
        assert_eq!(Sheets::export_notice(), "Preparing sheets.xlsx...");
    }

    #[test]
    fn decodes_array_wrapped_envelope() {
        let body = json!([{ "DCStocks": [{ "Id": 1 }, { "Id": 2 }], "TotalDCStockCount": 42 }]);
        let page: Page<Row> = decode_page(body, "DCStocks", "TotalDCStockCount").unwrap();
        assert_eq!(page.rows, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total, 42);
    }

    #[test]
    fn accepts_bare_object_and_string_total() {
        let body = json!({ "Trolleys": [{ "Id": 5 }], "TotalTrolleyCount": "11" });
        let page: Page<Row> = decode_page(body, "Trolleys", "TotalTrolleyCount").unwrap();
        assert_eq!(page.total, 11);
    }

    #[test]
    fn missing_total_falls_back_to_row_count() {
        let body = json!([{ "Trolleys": [{ "Id": 5 }, { "Id": 6 }] }]);
        let page: Page<Row> = decode_page(body, "Trolleys", "TotalTrolleyCount").unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn float_total_is_read_as_integer() {
        let body = json!([{ "Trolleys": [{ "Id": 5 }], "TotalTrolleyCount": 42.0 }]);
        let page: Page<Row> = decode_page(body, "Trolleys", "TotalTrolleyCount").unwrap();
        assert_eq!(page.total, 42);
    }

    #[test]
    fn negative_or_fractional_total_falls_back_to_row_count() {
        for total in [json!(-3), json!(2.5)] {
            let body = json!([{ "Trolleys": [{ "Id": 5 }, { "Id": 6 }, { "Id": 7 }], "TotalTrolleyCount": total }]);
            let page: Page<Row> = decode_page(body, "Trolleys", "TotalTrolleyCount").unwrap();
            assert_eq!(page.total, 3);
        }
    }

    #[test]
    fn empty_array_is_empty_page() {
        let page: Page<Row> = decode_page(json!([]), "Trolleys", "TotalTrolleyCount").unwrap();
        assert_eq!(page, Page::default());
    }

    #[test]
    fn null_rows_are_empty() {
        let body = json!([{ "Trolleys": null, "TotalTrolleyCount": 0 }]);
        let page: Page<Row> = decode_page(body, "Trolleys", "TotalTrolleyCount").unwrap();
        assert!(page.rows.is_empty());
    }

    #[test]
    fn missing_rows_key_is_an_error() {
        let body = json!([{ "Other": [] }]);
        let err = decode_page::<Row>(body, "Trolleys", "TotalTrolleyCount").unwrap_err();
        assert_eq!(err, EnvelopeError::MissingRows("Trolleys".into()));
    }

    #[test]
    fn scalar_body_is_rejected() {
        assert_eq!(
            decode_collection::<Row>(json!(3), "Projects").unwrap_err(),
            EnvelopeError::NotAnObject
        );
    }

    #[test]
    fn collection_without_total() {
        let rows: Vec<Row> = decode_collection(json!([{ "Projects": [{ "Id": 3 }] }]), "Projects").unwrap();
        assert_eq!(rows, vec![Row { id: 3 }]);
    }
}
