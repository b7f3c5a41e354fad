//! Axum glue: request scopes, CSRF tokens, and HTTP responses.

pub mod csrf;
pub mod response;
pub mod scope;

pub use csrf::CsrfToken;
pub use response::{WebError, html_response, render_block_to_response, render_to_response};
pub use scope::request_scope;
