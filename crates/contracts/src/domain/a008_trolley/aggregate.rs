use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trolley {
    pub id: i64,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: String,
    pub trolley_type_id: i64,
    #[serde(default)]
    pub trolley_type_name: String,
    pub working_count: i64,
    pub broken_count: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Trolley {
    pub fn total_count(&self) -> i64 {
        self.working_count + self.broken_count
    }
}

pub struct Trolleys;

impl ListResource for Trolleys {
    type Row = Trolley;
    const ENDPOINT: &'static str = "/api/Trolley";
    const ROWS_KEY: &'static str = "Trolleys";
    const TOTAL_KEY: &'static str = "TotalTrolleyCount";
    const PAGE_SIZE: usize = 7;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrolleyPayload {
    pub project_id: i64,
    pub trolley_type_id: i64,
    pub working_count: i64,
    pub broken_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrolleyForm {
    pub id: Option<i64>,
    pub project_id: Option<i64>,
    pub trolley_type_id: Option<i64>,
    pub working_count: Option<i64>,
    pub broken_count: Option<i64>,
}

impl TrolleyForm {
    pub fn from_existing(row: &Trolley) -> Self {
        Self {
            id: Some(row.id),
            project_id: Some(row.project_id),
            trolley_type_id: Some(row.trolley_type_id),
            working_count: Some(row.working_count),
            broken_count: Some(row.broken_count),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl FormModel for TrolleyForm {
    type Payload = TrolleyPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_id(self.project_id, "Project")?;
        form::require_id(self.trolley_type_id, "Trolley type")?;
        form::require_count(self.working_count, "Working count")?;
        form::require_count(self.broken_count, "Broken count")?;
        Ok(())
    }

    fn to_payload(&self) -> TrolleyPayload {
        TrolleyPayload {
            project_id: self.project_id.unwrap_or_default(),
            trolley_type_id: self.trolley_type_id.unwrap_or_default(),
            working_count: self.working_count.unwrap_or_default(),
            broken_count: self.broken_count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_must_be_non_negative() {
        let f = TrolleyForm {
            project_id: Some(1),
            trolley_type_id: Some(2),
            working_count: Some(4),
            broken_count: Some(-1),
            ..Default::default()
        };
        assert_eq!(f.prepare(), Err(ValidationError::Negative("Broken count")));
    }

    #[test]
    fn trolley_type_is_required() {
        let f = TrolleyForm {
            project_id: Some(1),
            working_count: Some(0),
            broken_count: Some(0),
            ..Default::default()
        };
        assert_eq!(f.prepare(), Err(ValidationError::Required("Trolley type")));
    }

    #[test]
    fn row_total_adds_both_counts() {
        let row: Trolley = serde_json::from_value(serde_json::json!({
            "Id": 1, "ProjectId": 1, "TrolleyTypeId": 2,
            "WorkingCount": 8, "BrokenCount": 3, "ImageUrl": "carts/a.png"
        }))
        .unwrap();
        assert_eq!(row.total_count(), 11);
        assert_eq!(row.image_url.as_deref(), Some("carts/a.png"));
    }
}
