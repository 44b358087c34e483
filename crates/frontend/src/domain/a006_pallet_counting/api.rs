use contracts::domain::a006_pallet_counting::aggregate::{DayStatus, DAY_STATUS_ENDPOINT};
use contracts::shared::RequestError;

use crate::shared::api_utils;

pub async fn fetch_day_status() -> Result<DayStatus, RequestError> {
    api_utils::get_json(DAY_STATUS_ENDPOINT).await
}
