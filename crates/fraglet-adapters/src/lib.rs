//! Infrastructure adapters for Fraglet.
//!
//! This crate implements the ports defined in
//! `fraglet_core::application::ports`. It contains all external
//! dependencies: the minijinja template engine and the axum web glue.

pub mod renderer;
pub mod web;

// Re-export commonly used adapters
pub use renderer::JinjaRenderer;
pub use web::{
    CsrfToken, WebError, html_response, render_block_to_response, render_to_response,
    request_scope,
};
