//! Query string for list and export endpoints.

use chrono::NaiveDate;

/// Filters a list page can apply. Every page uses a subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub project_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of filters that would end up in the query string.
    pub fn active_count(&self) -> usize {
        self.pairs().len()
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(id) = self.project_id {
            out.push(("projectId", id.to_string()));
        }
        if let Some(d) = self.start_date {
            out.push(("startDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            out.push(("endDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(s) = self.status.as_deref().filter(|s| !s.trim().is_empty()) {
            out.push(("status", s.trim().to_string()));
        }
        if let Some(s) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            out.push(("search", s.trim().to_string()));
        }
        out
    }

    /// Filter-only query, used by export endpoints. Empty when no filter is set.
    pub fn to_query(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `page` is 1-based.
    pub fn to_page_query(&self, page: usize, take: usize) -> String {
        let mut query = format!("page={}&take={}", page.max(1), take);
        let filters = self.to_query();
        if !filters.is_empty() {
            query.push('&');
            query.push_str(&filters);
        }
        query
    }
}

/// Joins a path and a query string.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_without_filters() {
        assert_eq!(ListFilter::default().to_page_query(3, 8), "page=3&take=8");
    }

    #[test]
    fn page_zero_is_sent_as_first_page() {
        assert_eq!(ListFilter::default().to_page_query(0, 5), "page=1&take=5");
    }

    #[test]
    fn filters_are_encoded_in_stable_order() {
        let f = ListFilter {
            project_id: Some(7),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            status: Some("Pending".into()),
            search: Some("Ali Məmmədov".into()),
        };
        assert_eq!(
            f.to_page_query(1, 8),
            "page=1&take=8&projectId=7&startDate=2024-03-01&endDate=2024-03-31&status=Pending&search=Ali%20M%C9%99mm%C9%99dov"
        );
        assert_eq!(f.active_count(), 5);
    }

    #[test]
    fn blank_strings_are_not_filters() {
        let f = ListFilter {
            status: Some("  ".into()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(f.is_empty());
        assert_eq!(f.to_query(), "");
    }

    #[test]
    fn with_query_skips_empty() {
        assert_eq!(with_query("/api/Payroll/Export", ""), "/api/Payroll/Export");
        assert_eq!(with_query("/api/Payroll/Export", "projectId=2"), "/api/Payroll/Export?projectId=2");
    }
}
