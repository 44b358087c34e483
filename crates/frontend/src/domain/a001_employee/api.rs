use contracts::domain::a001_employee::aggregate::{
    badge_lookup_query, Employee, EMPLOYEES_KEY, SEARCH_BY_BADGE_ENDPOINT,
};
use contracts::shared::query::with_query;
use contracts::shared::RequestError;

use crate::shared::api_utils;

/// Employees whose badge starts with or contains `badge`. Too-short input
/// returns nothing without a request.
pub async fn search_by_badge(badge: &str) -> Result<Vec<Employee>, RequestError> {
    let Some(query) = badge_lookup_query(badge) else {
        return Ok(Vec::new());
    };
    api_utils::fetch_collection(&with_query(SEARCH_BY_BADGE_ENDPOINT, &query), EMPLOYEES_KEY).await
}
