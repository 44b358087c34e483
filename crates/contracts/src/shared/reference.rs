//! Dropdown reference data fetched on page or modal open.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Unpaged reference collection, returned as `[{ "<RowsKey>": [...] }]`.
pub trait ReferenceResource: 'static {
    type Row: DeserializeOwned + Clone + Send + Sync + 'static;

    const ENDPOINT: &'static str;
    const ROWS_KEY: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UniformType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub id: i64,
    pub name: String,
}

pub struct Projects;

impl ReferenceResource for Projects {
    type Row = Project;
    const ENDPOINT: &'static str = "/api/Project";
    const ROWS_KEY: &'static str = "Projects";
}

pub struct UniformTypes;

impl ReferenceResource for UniformTypes {
    type Row = UniformType;
    const ENDPOINT: &'static str = "/api/UniformType";
    const ROWS_KEY: &'static str = "UniformTypes";
}

pub struct Positions;

impl ReferenceResource for Positions {
    type Row = Position;
    const ENDPOINT: &'static str = "/api/Position";
    const ROWS_KEY: &'static str = "Positions";
}

/// Gender values the backend stores on uniforms, employees and conditions.
pub const GENDERS: &[&str] = &["Male", "Female", "Unisex"];

/// Whether a uniform of `uniform_gender` can be issued to `person_gender`.
pub fn gender_matches(uniform_gender: &str, person_gender: &str) -> bool {
    uniform_gender.eq_ignore_ascii_case("Unisex")
        || person_gender.trim().is_empty()
        || uniform_gender.eq_ignore_ascii_case(person_gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::decode_collection;
    use serde_json::json;

    #[test]
    fn decodes_projects() {
        let rows: Vec<Project> = decode_collection(
            json!([{ "Projects": [{ "Id": 1, "Name": "Bravo Gənclik" }] }]),
            Projects::ROWS_KEY,
        )
        .unwrap();
        assert_eq!(rows[0].name, "Bravo Gənclik");
    }

    #[test]
    fn unisex_matches_anyone() {
        assert!(gender_matches("Unisex", "Female"));
        assert!(gender_matches("male", "Male"));
        assert!(!gender_matches("Male", "Female"));
        assert!(gender_matches("Female", ""));
    }
}
