//! Reusable UI components

mod account_menu;
mod header;
mod rates;
mod signin;

pub use account_menu::*;
pub use header::*;
pub use rates::*;
pub use signin::*;
