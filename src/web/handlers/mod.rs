//! HTML template rendering handlers.

mod signin;

pub use signin::{SignInTemplate, signin_page_handler};
