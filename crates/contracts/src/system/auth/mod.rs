use serde::{Deserialize, Serialize};

pub const LOGIN_ENDPOINT: &str = "/api/Auth/Login";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_wire_format() {
        let body = serde_json::to_value(LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"Username": "admin", "Password": "secret"}));

        let resp: LoginResponse = serde_json::from_str(r#"{"Token":"abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.full_name, None);
    }
}
