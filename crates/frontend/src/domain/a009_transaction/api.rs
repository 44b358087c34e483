use contracts::domain::a009_transaction::aggregate::{
    reassign_path, ReassignPayload, TransactionAction, TransactionIdsPayload,
};
use contracts::shared::mutation::MutationResult;
use contracts::shared::RequestError;

use crate::shared::api_utils;

/// Moves every transaction in `ids` one workflow step forward.
pub async fn apply_action(
    action: TransactionAction,
    ids: Vec<i64>,
) -> Result<MutationResult, RequestError> {
    log::info!("{:?} on {} transactions", action, ids.len());
    api_utils::put_json(&action.path(), &TransactionIdsPayload { ids }).await
}

pub async fn reassign(payload: ReassignPayload) -> Result<MutationResult, RequestError> {
    api_utils::put_json(&reassign_path(), &payload).await
}
