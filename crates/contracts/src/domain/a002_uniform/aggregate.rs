use crate::shared::reference::ReferenceResource;
use serde::{Deserialize, Serialize};

/// Uniform item (reference data for stock, requests and transactions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Uniform {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(rename = "Type", default)]
    pub uniform_type: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub gender: String,
}

impl Uniform {
    /// `"U-017 Polo shirt (M, Female)"`
    pub fn label(&self) -> String {
        let mut details = Vec::new();
        if !self.size.is_empty() {
            details.push(self.size.as_str());
        }
        if !self.gender.is_empty() {
            details.push(self.gender.as_str());
        }
        if details.is_empty() {
            format!("{} {}", self.code, self.name)
        } else {
            format!("{} {} ({})", self.code, self.name, details.join(", "))
        }
    }
}

pub struct Uniforms;

impl ReferenceResource for Uniforms {
    type Row = Uniform;
    const ENDPOINT: &'static str = "/api/Uniform";
    const ROWS_KEY: &'static str = "Uniforms";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(size: &str, gender: &str) -> Uniform {
        Uniform {
            id: 1,
            code: "U-017".into(),
            name: "Polo shirt".into(),
            uniform_type: "Top".into(),
            size: size.into(),
            gender: gender.into(),
        }
    }

    #[test]
    fn label_includes_available_details() {
        assert_eq!(uniform("M", "Female").label(), "U-017 Polo shirt (M, Female)");
        assert_eq!(uniform("", "").label(), "U-017 Polo shirt");
    }

    #[test]
    fn type_field_is_renamed() {
        let u: Uniform = serde_json::from_str(
            r#"{"Id":2,"Code":"U-2","Name":"Cap","Type":"Headwear","Size":"","Gender":"Unisex"}"#,
        )
        .unwrap();
        assert_eq!(u.uniform_type, "Headwear");
    }
}
