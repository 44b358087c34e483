use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PalletDeposit {
    pub id: i64,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: String,
    pub deposit_count: i64,
    #[serde(default)]
    pub date: Option<String>,
}

pub struct PalletDeposits;

impl ListResource for PalletDeposits {
    type Row = PalletDeposit;
    const ENDPOINT: &'static str = "/api/PalletDeposit";
    const ROWS_KEY: &'static str = "PalletDeposits";
    const TOTAL_KEY: &'static str = "TotalPalletDepositCount";
    const PAGE_SIZE: usize = 6;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PalletDepositPayload {
    pub project_id: i64,
    pub deposit_count: i64,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PalletDepositForm {
    pub id: Option<i64>,
    pub project_id: Option<i64>,
    pub deposit_count: Option<i64>,
    /// `YYYY-MM-DD` as produced by a date input.
    pub date: String,
}

impl PalletDepositForm {
    pub fn from_existing(row: &PalletDeposit) -> Self {
        Self {
            id: Some(row.id),
            project_id: Some(row.project_id),
            deposit_count: Some(row.deposit_count),
            date: row
                .date
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl FormModel for PalletDepositForm {
    type Payload = PalletDepositPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_id(self.project_id, "Project")?;
        form::require_count(self.deposit_count, "Deposit count")?;
        form::require_text(&self.date, "Date")?;
        if chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(ValidationError::Invalid(format!(
                "Date '{}' is not a valid date",
                self.date
            )));
        }
        Ok(())
    }

    fn to_payload(&self) -> PalletDepositPayload {
        PalletDepositPayload {
            project_id: self.project_id.unwrap_or_default(),
            deposit_count: self.deposit_count.unwrap_or_default(),
            date: self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_keeps_only_the_date_part() {
        let row = PalletDeposit {
            id: 3,
            project_id: 1,
            project_name: "Baku".into(),
            deposit_count: 40,
            date: Some("2024-05-02T00:00:00".into()),
        };
        let f = PalletDepositForm::from_existing(&row);
        assert!(f.is_edit());
        assert_eq!(f.date, "2024-05-02");
    }

    #[test]
    fn negative_deposit_is_rejected() {
        let f = PalletDepositForm {
            project_id: Some(1),
            deposit_count: Some(-1),
            date: "2024-05-02".into(),
            ..Default::default()
        };
        assert_eq!(f.prepare(), Err(ValidationError::Negative("Deposit count")));
    }

    #[test]
    fn garbage_date_is_rejected() {
        let f = PalletDepositForm {
            project_id: Some(1),
            deposit_count: Some(3),
            date: "02.05.2024".into(),
            ..Default::default()
        };
        assert!(matches!(f.prepare(), Err(ValidationError::Invalid(_))));
    }

    #[test]
    fn payload_is_pascal_case() {
        let f = PalletDepositForm {
            project_id: Some(2),
            deposit_count: Some(0),
            date: "2024-05-02".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"ProjectId": 2, "DepositCount": 0, "Date": "2024-05-02"})
        );
    }
}
