//! JSON-over-HTTP client layer for the backend services.

mod client;
mod mail;
mod rates;
mod users;

pub use client::{default_base_url, init_base_url, ApiError};
pub use mail::{send_auth_code, AuthCodeResponse};
pub use rates::{gold_price, usd_try_rate};
pub use users::{login, register, LoginResponse, RegisterResponse};
