use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

/// Multipart field carrying the picture.
pub const IMAGE_FIELD: &str = "Image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrolleyType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub struct TrolleyTypes;

impl ListResource for TrolleyTypes {
    type Row = TrolleyType;
    const ENDPOINT: &'static str = "/api/TrolleyType";
    const ROWS_KEY: &'static str = "TrolleyTypes";
    const TOTAL_KEY: &'static str = "TotalTrolleyTypeCount";
    const PAGE_SIZE: usize = 5;
}

/// Text part of a trolley type upload. Travels in the query string while the
/// picture goes in the multipart body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrolleyTypeMeta {
    pub name: String,
    pub description: String,
}

impl TrolleyTypeMeta {
    pub fn to_query(&self) -> String {
        format!(
            "Name={}&Description={}",
            urlencoding::encode(&self.name),
            urlencoding::encode(&self.description)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrolleyTypeForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    /// Name of the picked file, if any. The file itself stays in the browser.
    pub image_name: Option<String>,
    pub existing_image: Option<String>,
}

impl TrolleyTypeForm {
    pub fn from_existing(row: &TrolleyType) -> Self {
        Self {
            id: Some(row.id),
            name: row.name.clone(),
            description: row.description.clone().unwrap_or_default(),
            image_name: None,
            existing_image: row.image_url.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl FormModel for TrolleyTypeForm {
    type Payload = TrolleyTypeMeta;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_text(&self.name, "Name")?;
        // An edit may keep the stored picture.
        if !self.is_edit() && self.image_name.is_none() {
            return Err(ValidationError::Required("Image"));
        }
        Ok(())
    }

    fn to_payload(&self) -> TrolleyTypeMeta {
        TrolleyTypeMeta {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::submit_with;

    #[test]
    fn empty_name_never_reaches_the_sender() {
        let f = TrolleyTypeForm {
            name: "   ".into(),
            image_name: Some("cart.png".into()),
            ..Default::default()
        };
        let mut calls = 0;
        let result = submit_with(&f, |_| calls += 1);
        assert_eq!(result, Err(ValidationError::Required("Name")));
        assert_eq!(result.unwrap_err().to_string(), "Name is required");
        assert_eq!(calls, 0);
    }

    #[test]
    fn new_type_needs_a_picture_but_edit_does_not() {
        let mut f = TrolleyTypeForm {
            name: "Cart".into(),
            ..Default::default()
        };
        assert_eq!(f.prepare(), Err(ValidationError::Required("Image")));
        f.id = Some(3);
        assert!(f.prepare().is_ok());
    }

    #[test]
    fn meta_is_query_encoded() {
        let meta = TrolleyTypeForm {
            name: " Big cart ".into(),
            description: "2 wheels & brake".into(),
            image_name: Some("a.png".into()),
            ..Default::default()
        }
        .prepare()
        .unwrap();
        assert_eq!(meta.to_query(), "Name=Big%20cart&Description=2%20wheels%20%26%20brake");
    }

    #[test]
    fn meta_serializes_with_backend_field_names() {
        let meta = TrolleyTypeMeta {
            name: "Cart".into(),
            description: "Steel".into(),
        };
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            serde_json::json!({ "Name": "Cart", "Description": "Steel" })
        );
    }
}
