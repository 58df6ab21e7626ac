//! Site header: brand, market strip, and the auth entry points.

use dioxus::prelude::*;

use super::account_menu::AccountMenu;
use super::rates::{GoldPrice, UsdTryRate};
use super::signin::SigninPopup;
use crate::session::use_session;
use crate::signup::SignupPopup;

/// Which popup is open, if any. Plain view state; the signup workflow itself
/// lives inside the popup and dies with it.
#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenPopup {
    None,
    Signin,
    Signup,
}

#[component]
pub fn Header() -> Element {
    let session = use_session();
    let mut open_popup = use_signal(|| OpenPopup::None);

    rsx! {
        header {
            class: "bg-gray-800 text-white p-4 fixed top-0 w-full flex justify-between items-center shadow-lg z-50",
            h1 { class: "text-xl font-bold", "ZEHEP" }

            div {
                class: "flex items-center gap-6",
                UsdTryRate {}
                GoldPrice {}
            }

            if session.is_authenticated() {
                AccountMenu {}
            } else {
                div {
                    class: "space-x-4",
                    button {
                        class: "bg-blue-500 text-white py-2 px-4 rounded hover:bg-blue-600",
                        onclick: move |_| open_popup.set(OpenPopup::Signin),
                        "SIGN IN"
                    }
                    button {
                        class: "bg-green-500 text-white py-2 px-4 rounded hover:bg-green-600",
                        onclick: move |_| open_popup.set(OpenPopup::Signup),
                        "SIGN UP"
                    }
                }
            }
        }

        // Modal overlay; clicking outside the panel closes the popup and
        // discards whatever was entered in it.
        if open_popup() != OpenPopup::None {
            div {
                class: "fixed inset-0 bg-black bg-opacity-50 z-50 flex justify-center items-center",
                onclick: move |_| open_popup.set(OpenPopup::None),
                div {
                    onclick: move |e| e.stop_propagation(),
                    match open_popup() {
                        OpenPopup::Signin => rsx! {
                            SigninPopup { on_close: move |_| open_popup.set(OpenPopup::None) }
                        },
                        OpenPopup::Signup => rsx! {
                            SignupPopup { on_close: move |_| open_popup.set(OpenPopup::None) }
                        },
                        OpenPopup::None => rsx! {},
                    }
                }
            }
        }
    }
}
