use contracts::domain::a007_trolley_type::aggregate::{
    TrolleyType, TrolleyTypeMeta, TrolleyTypes, IMAGE_FIELD,
};
use contracts::shared::mutation::MutationResult;
use contracts::shared::query::with_query;
use contracts::shared::{ListResource, RequestError};
use web_sys::{File, FormData};

use crate::shared::api_utils::{self, UploadMethod};

/// Upper bound for the trolley form dropdown; the type catalogue is small.
const ALL_TYPES_TAKE: usize = 500;

/// Creates (`id == None`) or updates a trolley type. The picture is optional on update.
pub async fn save(
    id: Option<i64>,
    meta: TrolleyTypeMeta,
    image: Option<File>,
) -> Result<MutationResult, RequestError> {
    let form = FormData::new().map_err(|e| RequestError::Decode(format!("{:?}", e)))?;
    if let Some(file) = image {
        form.append_with_blob_and_filename(IMAGE_FIELD, &file, &file.name())
            .map_err(|e| RequestError::Decode(format!("{:?}", e)))?;
    }
    let (method, base) = match id {
        Some(id) => (UploadMethod::Put, format!("{}/{}", TrolleyTypes::ENDPOINT, id)),
        None => (UploadMethod::Post, TrolleyTypes::ENDPOINT.to_string()),
    };
    log::debug!("uploading trolley type via {:?} {}", method, base);
    api_utils::send_multipart(method, &with_query(&base, &meta.to_query()), form).await
}

/// Every trolley type, for pickers.
pub async fn fetch_all() -> Result<Vec<TrolleyType>, RequestError> {
    let path = with_query(
        TrolleyTypes::ENDPOINT,
        &format!("page=1&take={}", ALL_TYPES_TAKE),
    );
    api_utils::fetch_collection(&path, TrolleyTypes::ROWS_KEY).await
}
