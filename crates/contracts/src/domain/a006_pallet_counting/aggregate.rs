//! Daily pallet count per project.
//!
//! The backend names the count columns in Azerbaijani; those names are kept
//! on the wire only and mapped onto English field names here.

use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use serde::{Deserialize, Serialize};

pub const DAY_STATUS_ENDPOINT: &str = "/api/PalletCounting/DayStatus";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletCounting {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "ProjectId")]
    pub project_id: i64,
    #[serde(rename = "ProjectName", default)]
    pub project_name: String,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "DepozitAvto", default)]
    pub deposit_auto: i64,
    #[serde(rename = "DCQəbulPaletSayı", default)]
    pub dc_accepted: i64,
    #[serde(rename = "DCTəhvilPaletSayı", default)]
    pub dc_delivered: i64,
    #[serde(rename = "QalıqAvto", default)]
    pub remainder_auto: i64,
    #[serde(rename = "DepozitPaletQalığı", default)]
    pub deposit_remainder: i64,
}

pub struct PalletCountings;

impl ListResource for PalletCountings {
    type Row = PalletCounting;
    const ENDPOINT: &'static str = "/api/PalletCounting";
    const ROWS_KEY: &'static str = "PalletCountings";
    const TOTAL_KEY: &'static str = "TotalPalletCountingCount";
    const PAGE_SIZE: usize = 5;
}

/// Whether counting is open for today. New counts are only allowed while it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayStatus {
    pub is_day_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalletCountingPayload {
    #[serde(rename = "ProjectId")]
    pub project_id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "DepozitAvto")]
    pub deposit_auto: i64,
    #[serde(rename = "DCQəbulPaletSayı")]
    pub dc_accepted: i64,
    #[serde(rename = "DCTəhvilPaletSayı")]
    pub dc_delivered: i64,
    #[serde(rename = "QalıqAvto")]
    pub remainder_auto: i64,
    #[serde(rename = "DepozitPaletQalığı")]
    pub deposit_remainder: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PalletCountingForm {
    pub id: Option<i64>,
    pub project_id: Option<i64>,
    pub date: String,
    pub deposit_auto: Option<i64>,
    pub dc_accepted: Option<i64>,
    pub dc_delivered: Option<i64>,
    /// Remainder counted by hand on the floor.
    pub deposit_remainder: Option<i64>,
}

impl PalletCountingForm {
    pub fn from_existing(row: &PalletCounting) -> Self {
        Self {
            id: Some(row.id),
            project_id: Some(row.project_id),
            date: row
                .date
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
            deposit_auto: Some(row.deposit_auto),
            dc_accepted: Some(row.dc_accepted),
            dc_delivered: Some(row.dc_delivered),
            deposit_remainder: Some(row.deposit_remainder),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// `deposit + accepted - delivered`, only once all three are entered and
    /// none is negative.
    pub fn auto_remainder(&self) -> Option<i64> {
        let deposit = self.deposit_auto.filter(|v| *v >= 0)?;
        let accepted = self.dc_accepted.filter(|v| *v >= 0)?;
        let delivered = self.dc_delivered.filter(|v| *v >= 0)?;
        Some(deposit + accepted - delivered)
    }
}

impl FormModel for PalletCountingForm {
    type Payload = PalletCountingPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_id(self.project_id, "Project")?;
        form::require_text(&self.date, "Date")?;
        form::require_count(self.deposit_auto, "Deposit")?;
        form::require_count(self.dc_accepted, "DC accepted pallets")?;
        form::require_count(self.dc_delivered, "DC delivered pallets")?;
        form::require_count(self.deposit_remainder, "Deposit remainder")?;
        Ok(())
    }

    fn to_payload(&self) -> PalletCountingPayload {
        PalletCountingPayload {
            project_id: self.project_id.unwrap_or_default(),
            date: self.date.clone(),
            deposit_auto: self.deposit_auto.unwrap_or_default(),
            dc_accepted: self.dc_accepted.unwrap_or_default(),
            dc_delivered: self.dc_delivered.unwrap_or_default(),
            remainder_auto: self.auto_remainder().unwrap_or_default(),
            deposit_remainder: self.deposit_remainder.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(deposit: i64, accepted: i64, delivered: i64) -> PalletCountingForm {
        PalletCountingForm {
            project_id: Some(1),
            date: "2024-06-01".into(),
            deposit_auto: Some(deposit),
            dc_accepted: Some(accepted),
            dc_delivered: Some(delivered),
            deposit_remainder: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn remainder_is_deposit_plus_accepted_minus_delivered() {
        for (d, a, t) in [(0, 0, 0), (5, 0, 9), (100, 10, 5), (7, 3, 10)] {
            assert_eq!(filled(d, a, t).auto_remainder(), Some(d + a - t));
        }
    }

    #[test]
    fn remainder_hidden_when_input_missing_or_negative() {
        let mut f = filled(1, 2, 3);
        f.dc_accepted = None;
        assert_eq!(f.auto_remainder(), None);
        let f = filled(1, -2, 3);
        assert_eq!(f.auto_remainder(), None);
    }

    #[test]
    fn count_scenario_produces_expected_payload() {
        let mut f = filled(100, 10, 5);
        f.deposit_remainder = Some(20);
        assert_eq!(f.auto_remainder(), Some(105));

        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert_eq!(body["QalıqAvto"], 105);
        assert_eq!(body["DCQəbulPaletSayı"], 10);
        assert_eq!(body["DCTəhvilPaletSayı"], 5);
        assert_eq!(body["DepozitPaletQalığı"], 20);
        assert_eq!(body["DepozitAvto"], 100);
    }

    #[test]
    fn negative_input_blocks_submit() {
        let f = filled(1, 2, -3);
        assert_eq!(
            f.prepare(),
            Err(ValidationError::Negative("DC delivered pallets"))
        );
    }

    #[test]
    fn rows_decode_from_backend_names() {
        let row: PalletCounting = serde_json::from_value(serde_json::json!({
            "Id": 9, "ProjectId": 2, "ProjectName": "Sumqayit",
            "DepozitAvto": 50, "DCQəbulPaletSayı": 4, "DCTəhvilPaletSayı": 1,
            "QalıqAvto": 53, "DepozitPaletQalığı": 52
        }))
        .unwrap();
        assert_eq!(row.remainder_auto, 53);
        assert_eq!(row.deposit_remainder, 52);
        assert_eq!(row.date, None);
    }

    #[test]
    fn day_status_decodes() {
        let s: DayStatus = serde_json::from_str(r#"{"IsDayActive":true}"#).unwrap();
        assert!(s.is_day_active);
    }
}
