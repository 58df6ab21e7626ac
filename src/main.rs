//! ZEHEP - Dioxus web frontend
//!
//! Client UI for the ZEHEP market site: sign-in / sign-up with
//! email-verification-gated registration, plus live USD/TRY and gold-price
//! widgets backed by the market-data services.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod session;
mod signup;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Backend origin while developing, relative paths in release.
    api::init_base_url(api::default_base_url());

    dioxus::launch(app::App);
}
