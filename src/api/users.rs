//! User service: account creation and login.

use serde::{Deserialize, Serialize};

use super::client::{post_json, ApiError};

/// Role assigned to accounts created through the public signup form.
const CUSTOMER_ROLE: &str = "customer";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    username: &'a str,
    mail_address: &'a str,
    password: &'a str,
    role: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: Option<String>,
    pub token: String,
    pub mail_address: String,
}

/// Create the account. Only called after the verification code matched.
pub async fn register(
    username: &str,
    mail_address: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    post_json(
        "/user-service/register",
        &RegisterRequest {
            username,
            mail_address,
            password,
            role: CUSTOMER_ROLE,
        },
        "Failed to create the account",
    )
    .await
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    mail_address: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: Option<String>,
    pub token: String,
    pub username: String,
}

/// Password login for existing accounts. Keyed by mail address.
pub async fn login(mail_address: &str, password: &str) -> Result<LoginResponse, ApiError> {
    post_json(
        "/user-service/login",
        &LoginRequest {
            mail_address,
            password,
        },
        "Failed to login",
    )
    .await
}
