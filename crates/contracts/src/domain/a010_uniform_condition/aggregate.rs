//! How many items of a uniform a position is entitled to.

use crate::shared::errors::ValidationError;
use crate::shared::form::{self, FormModel};
use crate::shared::list::ListResource;
use crate::shared::reference::gender_matches;
use serde::{Deserialize, Serialize};

pub const FOR_POSITION_ENDPOINT: &str = "/api/UniformCondition/ForPosition";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UniformCondition {
    pub id: i64,
    pub position: String,
    #[serde(default)]
    pub functional_area: Option<String>,
    #[serde(default)]
    pub uniform_id: i64,
    #[serde(default)]
    pub uniform_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub uniform_type: Option<String>,
    pub required_count: i64,
}

pub struct UniformConditions;

impl ListResource for UniformConditions {
    type Row = UniformCondition;
    const ENDPOINT: &'static str = "/api/UniformCondition";
    const ROWS_KEY: &'static str = "UniformConditions";
    const TOTAL_KEY: &'static str = "TotalUniformConditionCount";
    const PAGE_SIZE: usize = 7;
}

pub fn for_position_query(position: &str) -> String {
    format!("position={}", urlencoding::encode(position.trim()))
}

/// Entitlement of a person for one uniform, or `None` when no condition covers it.
/// With several matches the largest allowance wins.
pub fn allowed_count(
    conditions: &[UniformCondition],
    uniform_id: i64,
    person_gender: &str,
) -> Option<i64> {
    conditions
        .iter()
        .filter(|c| c.uniform_id == uniform_id && gender_matches(&c.gender, person_gender))
        .map(|c| c.required_count)
        .max()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UniformConditionPayload {
    pub position: String,
    pub functional_area: Option<String>,
    pub uniform_id: i64,
    pub gender: String,
    pub required_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformConditionForm {
    pub id: Option<i64>,
    pub position: String,
    pub functional_area: String,
    pub uniform_id: Option<i64>,
    pub gender: String,
    pub required_count: Option<i64>,
}

impl UniformConditionForm {
    pub fn from_existing(row: &UniformCondition) -> Self {
        Self {
            id: Some(row.id),
            position: row.position.clone(),
            functional_area: row.functional_area.clone().unwrap_or_default(),
            uniform_id: Some(row.uniform_id).filter(|id| *id > 0),
            gender: row.gender.clone(),
            required_count: Some(row.required_count),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }
}

impl FormModel for UniformConditionForm {
    type Payload = UniformConditionPayload;

    fn validate(&self) -> Result<(), ValidationError> {
        form::require_text(&self.position, "Position")?;
        form::require_id(self.uniform_id, "Uniform")?;
        form::require_text(&self.gender, "Gender")?;
        let count = form::require_count(self.required_count, "Required count")?;
        if count == 0 {
            return Err(ValidationError::Invalid(
                "Required count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn to_payload(&self) -> UniformConditionPayload {
        let area = self.functional_area.trim();
        UniformConditionPayload {
            position: self.position.trim().to_string(),
            functional_area: (!area.is_empty()).then(|| area.to_string()),
            uniform_id: self.uniform_id.unwrap_or_default(),
            gender: self.gender.clone(),
            required_count: self.required_count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(uniform_id: i64, gender: &str, count: i64) -> UniformCondition {
        UniformCondition {
            id: uniform_id * 10 + count,
            position: "Picker".into(),
            functional_area: None,
            uniform_id,
            uniform_name: "Vest".into(),
            gender: gender.into(),
            uniform_type: None,
            required_count: count,
        }
    }

    #[test]
    fn allowance_respects_gender() {
        let list = vec![condition(1, "Male", 2), condition(1, "Female", 3)];
        assert_eq!(allowed_count(&list, 1, "Female"), Some(3));
        assert_eq!(allowed_count(&list, 1, "Male"), Some(2));
        assert_eq!(allowed_count(&list, 2, "Male"), None);
    }

    #[test]
    fn unisex_condition_applies_to_everyone() {
        let list = vec![condition(4, "Unisex", 1), condition(4, "Male", 2)];
        assert_eq!(allowed_count(&list, 4, "Female"), Some(1));
        assert_eq!(allowed_count(&list, 4, "Male"), Some(2));
    }

    #[test]
    fn position_query_is_encoded() {
        assert_eq!(for_position_query(" Shift lead "), "position=Shift%20lead");
    }

    #[test]
    fn blank_functional_area_is_sent_as_null() {
        let f = UniformConditionForm {
            position: "Driver".into(),
            functional_area: "  ".into(),
            uniform_id: Some(5),
            gender: "Male".into(),
            required_count: Some(2),
            ..Default::default()
        };
        let body = serde_json::to_value(f.prepare().unwrap()).unwrap();
        assert!(body["FunctionalArea"].is_null());
        assert_eq!(body["RequiredCount"], 2);
    }

    #[test]
    fn zero_allowance_is_rejected() {
        let f = UniformConditionForm {
            position: "Driver".into(),
            uniform_id: Some(5),
            gender: "Male".into(),
            required_count: Some(0),
            ..Default::default()
        };
        assert!(matches!(f.prepare(), Err(ValidationError::Invalid(_))));
    }
}
