//! Sign-in popup for existing accounts.

use dioxus::prelude::*;

use crate::api;
use crate::session::use_session;

/// Login needs both fields filled in; the counterpart of the draft gate on
/// the signup side. The mail address is compared trimmed.
fn can_submit(mail_address: &str, password: &str) -> bool {
    !mail_address.trim().is_empty() && !password.is_empty()
}

/// Password login form. No verification step: the account already proved its
/// mail address when it was created.
#[component]
pub fn SigninPopup(on_close: EventHandler<()>) -> Element {
    let session = use_session();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        let mail_address = email().trim().to_string();
        let pass = password();
        if !can_submit(&mail_address, &pass) {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        let mut session = session;
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match api::login(&mail_address, &pass).await {
                Ok(response) => {
                    session.establish(&response.username, &response.token);
                    on_close.call(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "signin bg-white rounded-lg p-6 shadow-lg w-80",

            if let Some(message) = error() {
                div {
                    class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                    "{message}"
                }
            }

            input {
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                class: "w-full mb-2 px-3 py-2 border border-gray-300 rounded",
                disabled: is_pending(),
                oninput: move |e| email.set(e.value()),
            }
            input {
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                class: "w-full mb-4 px-3 py-2 border border-gray-300 rounded",
                disabled: is_pending(),
                oninput: move |e| password.set(e.value()),
            }
            button {
                class: "w-full bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600 disabled:opacity-50",
                disabled: is_pending(),
                onclick: handle_submit,
                if is_pending() { "Signing in..." } else { "Sign In" }
            }
            button {
                class: "cancel-btn w-full mt-2 text-gray-500 py-2 px-4 rounded hover:bg-gray-100",
                onclick: move |_| on_close.call(()),
                "Cancel"
            }
        }
    }
}
