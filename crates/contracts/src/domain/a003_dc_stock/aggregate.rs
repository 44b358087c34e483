use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

/// Distribution-center stock line for one uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DcStock {
    pub id: i64,
    pub uniform_id: i64,
    pub uniform_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub gender: String,
    pub stock_count: i64,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub created_date: Option<String>,
}

pub struct DcStocks;

impl ListResource for DcStocks {
    type Row = DcStock;
    const ENDPOINT: &'static str = "/api/DCStock";
    const ROWS_KEY: &'static str = "DCStocks";
    const TOTAL_KEY: &'static str = "TotalDCStockCount";
    const PAGE_SIZE: usize = 8;
}

/// Free stock of one uniform, used to cap requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableStock {
    pub available_stock: i64,
    #[serde(default)]
    pub unit_price: f64,
}

pub const AVAILABLE_ENDPOINT: &str = "/api/DCStock/Available";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DcStockPayload {
    pub uniform_id: i64,
    pub stock_count: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DcStockForm {
    pub id: Option<i64>,
    pub uniform_id: Option<i64>,
    stock_count: Option<i64>,
    unit_price: Option<f64>,
    total_price: Option<f64>,
}

impl DcStockForm {
    pub fn from_existing(row: &DcStock) -> Self {
        let mut f = Self {
            id: Some(row.id),
            uniform_id: Some(row.uniform_id),
            stock_count: Some(row.stock_count),
            unit_price: Some(row.unit_price),
            total_price: None,
        };
        f.recompute();
        f
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn stock_count(&self) -> Option<i64> {
        self.stock_count
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }

    pub fn set_stock_count(&mut self, value: Option<i64>) {
        self.stock_count = value;
        self.recompute();
    }

    pub fn set_unit_price(&mut self, value: Option<f64>) {
        self.unit_price = value;
        self.recompute();
    }

    pub fn total_price(&self) -> Option<f64> {
        self.total_price
    }

    fn recompute(&mut self) {
        self.total_price = form::total_price(self.stock_count, self.unit_price);
    }
}

impl FormModel for DcStockForm {
    type Payload = DcStockPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_id(self.uniform_id, "Uniform")?;
        form::require_count(self.stock_count, "Stock count")?;
        form::require_amount(self.unit_price, "Unit price")?;
        Ok(())
    }

    fn to_payload(&self) -> DcStockPayload {
        DcStockPayload {
            uniform_id: self.uniform_id.unwrap_or_default(),
            stock_count: self.stock_count.unwrap_or_default(),
            unit_price: self.unit_price.unwrap_or_default(),
            total_price: self.total_price.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_follows_either_input() {
        let mut f = DcStockForm::default();
        f.set_stock_count(Some(12));
        assert_eq!(f.total_price(), None);
        f.set_unit_price(Some(7.5));
        assert_eq!(f.total_price(), Some(90.0));
        f.set_stock_count(Some(4));
        assert_eq!(f.total_price(), Some(30.0));
        f.set_unit_price(None);
        assert_eq!(f.total_price(), None);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut f = DcStockForm {
            uniform_id: Some(3),
            ..Default::default()
        };
        f.set_stock_count(Some(-1));
        f.set_unit_price(Some(1.0));
        assert_eq!(f.prepare(), Err(ValidationError::Negative("Stock count")));
    }

    #[test]
    fn payload_carries_derived_total() {
        let mut f = DcStockForm {
            uniform_id: Some(3),
            ..Default::default()
        };
        f.set_stock_count(Some(10));
        f.set_unit_price(Some(2.5));
        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "UniformId": 3, "StockCount": 10, "UnitPrice": 2.5, "TotalPrice": 25.0 })
        );
    }

    #[test]
    fn edit_form_starts_from_row() {
        let row = DcStock {
            id: 9,
            uniform_id: 2,
            uniform_name: "Cap".into(),
            code: "U-2".into(),
            size: String::new(),
            gender: "Unisex".into(),
            stock_count: 3,
            unit_price: 4.0,
            total_price: 12.0,
            created_date: None,
        };
        let mut f = DcStockForm::from_existing(&row);
        assert!(f.is_edit());
        assert_eq!(f.stock_count(), Some(3));
        assert_eq!(f.unit_price(), Some(4.0));
        assert_eq!(f.total_price(), Some(12.0));
        f.set_unit_price(Some(5.0));
        assert_eq!(f.unit_price(), Some(5.0));
        assert_eq!(f.total_price(), Some(15.0));
    }
}
