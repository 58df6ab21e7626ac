//! Process-wide session context.
//!
//! The verified identity lives in one place and is handed to the rest of the
//! app through explicit read and write capabilities, rather than auth flags
//! threaded through individual components. The signup flow only ever calls
//! [`SessionContext::establish`]; the account menu only ever calls
//! [`SessionContext::clear`].

pub mod store;

use dioxus::prelude::*;

/// A verified identity: display name plus the opaque backend token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub full_name: String,
    pub token: String,
}

/// Session context provided to the entire app.
#[derive(Clone, Copy)]
pub struct SessionContext {
    identity: Signal<Option<Identity>>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.identity.read().is_some()
    }

    pub fn full_name(&self) -> Option<String> {
        self.identity.read().as_ref().map(|id| id.full_name.clone())
    }

    /// Authentication sink: record a verified identity and persist its token
    /// to the durable store. One atomic step from the caller's point of view.
    pub fn establish(&mut self, full_name: &str, token: &str) {
        store::persist_token(token);
        self.identity.set(Some(Identity {
            full_name: full_name.to_string(),
            token: token.to_string(),
        }));
        tracing::info!(user = %full_name, "session established");
    }

    /// Logout: clear the identity and the stored token.
    pub fn clear(&mut self) {
        store::clear_token();
        self.identity.set(None);
        tracing::info!("session cleared");
    }
}

/// Session provider component that wraps the app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let identity = use_signal(|| None::<Identity>);
    use_context_provider(|| SessionContext { identity });

    children
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
