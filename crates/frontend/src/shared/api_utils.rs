//! HTTP helpers shared by every page.
//!
//! All calls attach the bearer token, map failures into [`RequestError`] and
//! end the session on a 401. Callers log and surface the error themselves.

use contracts::shared::list::{decode_collection, decode_page, Exportable};
use contracts::shared::mutation::MutationResult;
use contracts::shared::query::{with_query, ListFilter};
use contracts::shared::reference::ReferenceResource;
use contracts::shared::{ListResource, Page, RequestError};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, FormData};

use super::config::config;
use crate::system::auth::{context, storage};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn api_base() -> String {
    config().api_base.clone()
}

/// Full URL for an `/api/...` path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn auth_header() -> Result<String, RequestError> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(RequestError::NotAuthenticated)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, RequestError> {
    Ok(builder.header("Authorization", &auth_header()?))
}

async fn check(response: Response) -> Result<Response, RequestError> {
    if response.status() == 401 {
        context::expire_session();
        return Err(RequestError::Unauthorized);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(RequestError::http(response.status(), &body));
    }
    Ok(response)
}

async fn send(builder: RequestBuilder) -> Result<Response, RequestError> {
    let response = builder
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    check(response).await
}

async fn send_request(request: Request) -> Result<Response, RequestError> {
    let response = request
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;
    check(response).await
}

/// Reads a mutation reply. A success body that is not JSON still counts as
/// success; an explicit `"Success": false` is an error.
async fn mutation_result(response: Response) -> Result<MutationResult, RequestError> {
    let body = response.text().await.unwrap_or_default();
    MutationResult::from_body(&body).into_result()
}

async fn get_value(path: &str) -> Result<serde_json::Value, RequestError> {
    let response = send(authorized(Request::get(&api_url(path)))?).await?;
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, RequestError> {
    let value = get_value(path).await?;
    serde_json::from_value(value).map_err(|e| RequestError::Decode(e.to_string()))
}

/// `GET {endpoint}?page=..&take=..&filters` decoded from the list envelope.
pub async fn fetch_page<R: ListResource>(
    filter: &ListFilter,
    page: usize,
) -> Result<Page<R::Row>, RequestError> {
    let path = with_query(R::ENDPOINT, &filter.to_page_query(page, R::PAGE_SIZE));
    let value = get_value(&path).await?;
    Ok(decode_page(value, R::ROWS_KEY, R::TOTAL_KEY)?)
}

pub async fn fetch_collection<T: DeserializeOwned>(
    path: &str,
    rows_key: &str,
) -> Result<Vec<T>, RequestError> {
    let value = get_value(path).await?;
    Ok(decode_collection(value, rows_key)?)
}

pub async fn fetch_reference<R: ReferenceResource>() -> Result<Vec<R::Row>, RequestError> {
    fetch_collection(R::ENDPOINT, R::ROWS_KEY).await
}

fn json_request<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, RequestError> {
    authorized(builder)?
        .json(body)
        .map_err(|e| RequestError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<MutationResult, RequestError> {
    let response = send_request(json_request(Request::post(&api_url(path)), body)?).await?;
    mutation_result(response).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<MutationResult, RequestError> {
    let response = send_request(json_request(Request::put(&api_url(path)), body)?).await?;
    mutation_result(response).await
}

pub async fn delete(path: &str) -> Result<MutationResult, RequestError> {
    let response = send(authorized(Request::delete(&api_url(path)))?).await?;
    mutation_result(response).await
}

/// `POST` with an abort controller that fires after `timeout_ms`.
/// An aborted request is reported as [`RequestError::Timeout`].
pub async fn post_json_with_timeout<B: Serialize>(
    path: &str,
    body: &B,
    timeout_ms: u32,
) -> Result<MutationResult, RequestError> {
    let controller =
        AbortController::new().map_err(|e| RequestError::Network(format!("{:?}", e)))?;
    let signal = controller.signal();

    let request = json_request(
        Request::post(&api_url(path)).abort_signal(Some(&signal)),
        body,
    )?;

    let abort_on = controller.clone();
    let timer = Timeout::new(timeout_ms, move || abort_on.abort());

    let sent = request.send().await;
    // Dropping the timer cancels it.
    drop(timer);

    let response = match sent {
        Ok(response) => response,
        Err(_) if signal.aborted() => return Err(RequestError::Timeout),
        Err(e) => return Err(RequestError::Network(e.to_string())),
    };
    let response = check(response).await?;
    mutation_result(response).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMethod {
    Post,
    Put,
}

/// Sends a multipart form. Text metadata is expected in `path`'s query string.
pub async fn send_multipart(
    method: UploadMethod,
    path: &str,
    form: FormData,
) -> Result<MutationResult, RequestError> {
    let url = api_url(path);
    let builder = match method {
        UploadMethod::Post => Request::post(&url),
        UploadMethod::Put => Request::put(&url),
    };
    let request = authorized(builder)?
        .body(form)
        .map_err(|e| RequestError::Decode(e.to_string()))?;
    let response = send_request(request).await?;
    mutation_result(response).await
}

/// Re-issues the current filters against `{endpoint}/Export` and saves the
/// spreadsheet under the resource's file name.
pub async fn export_list<R: Exportable>(filter: &ListFilter) -> Result<(), RequestError> {
    let path = with_query(&R::export_path(), &filter.to_query());
    let builder = authorized(Request::get(&api_url(&path)))?.header("Accept", XLSX_MIME);
    let response = send(builder).await?;
    let bytes = response
        .binary()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))?;
    super::export::save_bytes(&bytes, XLSX_MIME, R::EXPORT_FILE_NAME)
        .map_err(RequestError::Decode)
}
