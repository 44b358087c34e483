use contracts::domain::a003_dc_stock::aggregate::{AvailableStock, AVAILABLE_ENDPOINT};
use contracts::shared::query::with_query;
use contracts::shared::RequestError;

use crate::shared::api_utils;

/// Free stock and current unit price of one uniform.
pub async fn fetch_available(uniform_id: i64) -> Result<AvailableStock, RequestError> {
    let path = with_query(AVAILABLE_ENDPOINT, &format!("uniformId={}", uniform_id));
    api_utils::get_json(&path).await
}
