use serde::{Deserialize, Serialize};

/// Employee as returned by the badge lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    pub id: i64,
    pub badge: String,
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub shirt_size: Option<String>,
    #[serde(default)]
    pub pants_size: Option<String>,
    #[serde(default)]
    pub shoe_size: Option<String>,
}

impl Employee {
    /// `"B1024 · Aysel Quliyeva"`
    pub fn display_name(&self) -> String {
        format!("{} · {}", self.badge, self.full_name)
    }

    /// Compact size summary for the autocomplete dropdown.
    pub fn sizes_summary(&self) -> String {
        let parts: Vec<String> = [
            ("Shirt", &self.shirt_size),
            ("Pants", &self.pants_size),
            ("Shoes", &self.shoe_size),
        ]
        .iter()
        .filter_map(|(label, v)| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| format!("{} {}", label, s))
        })
        .collect();
        parts.join(", ")
    }
}

pub const SEARCH_BY_BADGE_ENDPOINT: &str = "/api/Employee/SearchByBadge";
pub const EMPLOYEES_KEY: &str = "Employees";

/// Minimum number of characters before the badge autocomplete queries the backend.
pub const BADGE_LOOKUP_MIN_CHARS: usize = 2;

pub fn badge_lookup_query(badge: &str) -> Option<String> {
    let badge = badge.trim();
    if badge.chars().count() < BADGE_LOOKUP_MIN_CHARS {
        return None;
    }
    Some(format!("badge={}", urlencoding::encode(badge)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::decode_collection;
    use serde_json::json;

    #[test]
    fn decodes_lookup_with_optional_sizes() {
        let rows: Vec<Employee> = decode_collection(
            json!([{ "Employees": [{
                "Id": 4, "Badge": "B1024", "FullName": "Aysel Quliyeva",
                "Position": "Cashier", "Gender": "Female", "ShirtSize": "M"
            }]}]),
            EMPLOYEES_KEY,
        )
        .unwrap();
        let e = &rows[0];
        assert_eq!(e.display_name(), "B1024 · Aysel Quliyeva");
        assert_eq!(e.sizes_summary(), "Shirt M");
    }

    #[test]
    fn short_badges_do_not_query() {
        assert_eq!(badge_lookup_query(" B "), None);
        assert_eq!(badge_lookup_query("B1 0").as_deref(), Some("badge=B1%200"));
    }
}
