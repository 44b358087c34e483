use contracts::shared::RequestError;
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_ENDPOINT};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchanges credentials for a bearer token. Sent without authorization.
pub async fn login(username: String, password: String) -> Result<LoginResponse, RequestError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url(LOGIN_ENDPOINT))
        .json(&request)
        .map_err(|e| RequestError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Err(RequestError::Http {
            status: 401,
            message: "Invalid username or password".to_string(),
        });
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(RequestError::http(response.status(), &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}
