//! Mail service: one-time verification codes.

use serde::{Deserialize, Serialize};

use super::client::{post_json, ApiError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthCodeRequest<'a> {
    username: &'a str,
    mail_address: &'a str,
}

/// Success body of the send-code endpoint. `auth_code` is the issued code the
/// client compares the user's entry against.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCodeResponse {
    pub message: Option<String>,
    pub auth_code: String,
}

/// Ask the mail service to send a verification code to `mail_address`.
pub async fn send_auth_code(username: &str, mail_address: &str) -> Result<AuthCodeResponse, ApiError> {
    post_json(
        "/mail-service/send-auth-code-mail",
        &AuthCodeRequest {
            username,
            mail_address,
        },
        "Failed to send the verification code",
    )
    .await
}
