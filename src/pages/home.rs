//! Home page component

use dioxus::prelude::*;

use crate::components::Header;

/// Public landing page: header with the market strip and auth entry points.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-gray-50 to-white",
            Header {}

            main {
                class: "max-w-7xl mx-auto px-4 pt-24 pb-12",
                div {
                    class: "text-center max-w-2xl mx-auto",
                    h2 {
                        class: "text-3xl font-bold text-gray-900 mb-4",
                        "Follow the market. Trade with confidence."
                    }
                    p {
                        class: "text-lg text-gray-600",
                        "Live USD/TRY and gram-gold prices, refreshed every few seconds. "
                        "Sign up to get started."
                    }
                }
            }
        }
    }
}
