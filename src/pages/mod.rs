//! Page components

mod home;

pub use home::*;
