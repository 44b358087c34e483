use contracts::domain::a010_uniform_condition::aggregate::{
    for_position_query, UniformCondition, UniformConditions, FOR_POSITION_ENDPOINT,
};
use contracts::shared::query::with_query;
use contracts::shared::{ListResource, RequestError};

use crate::shared::api_utils;

/// Every condition defined for `position`.
pub async fn fetch_for_position(position: &str) -> Result<Vec<UniformCondition>, RequestError> {
    let path = with_query(FOR_POSITION_ENDPOINT, &for_position_query(position));
    api_utils::fetch_collection(&path, UniformConditions::ROWS_KEY).await
}
