//! Durable token store.
//!
//! Browser builds persist to `localStorage`; other builds (native checks,
//! tests) keep the token in process memory so the session module behaves the
//! same everywhere.

#[cfg(feature = "web")]
const TOKEN_KEY: &str = "zehep.session.token";

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(feature = "web"))]
static TOKEN: std::sync::Mutex<Option<String>> = std::sync::Mutex::new(None);

/// Persist the session token.
pub fn persist_token(token: &str) {
    #[cfg(feature = "web")]
    if let Some(storage) = local_storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            tracing::warn!("failed to persist session token to local storage");
        }
    }

    #[cfg(not(feature = "web"))]
    {
        *TOKEN.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }
}

/// The currently stored token, if any.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "web")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    #[cfg(not(feature = "web"))]
    {
        TOKEN.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "web")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }

    #[cfg(not(feature = "web"))]
    {
        *TOKEN.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
