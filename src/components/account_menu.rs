//! Account menu for an authenticated session.

use dioxus::prelude::*;

use crate::session::use_session;

/// "Welcome, {name}" toggle with the settings/logout popup.
#[component]
pub fn AccountMenu() -> Element {
    let session = use_session();
    let mut is_open = use_signal(|| false);

    let full_name = session.full_name().unwrap_or_default();

    let handle_logout = move |_| {
        let mut session = session;
        session.clear();
        is_open.set(false);
    };

    rsx! {
        div {
            class: "relative",
            h2 {
                class: "cursor-pointer text-white font-medium",
                onclick: move |_| is_open.set(!is_open()),
                "Welcome, {full_name} \u{23f7}"
            }

            if is_open() {
                div {
                    class: "popup-menu absolute right-0 mt-2 bg-white rounded shadow-lg py-1 w-36",
                    button {
                        class: "popup-button block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                        "Settings"
                    }
                    button {
                        class: "popup-button block w-full text-left px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}
