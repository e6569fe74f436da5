//! Form state for the login screen

mod field;
mod login_form;

pub use field::*;
pub use login_form::*;
