//! # Fraglet demo
//!
//! A small axum application showing block-level template rendering: the
//! same template serves both the full page and, by default, just its
//! `content` block — the pattern htmx-style frontends rely on.
//!
//! The router lives in this library crate so integration tests can drive it
//! with `tower::ServiceExt::oneshot` without binding a socket; the `fraglet`
//! binary wraps it with CLI parsing, configuration, and logging.

pub mod server;

pub use server::{AppState, build_registry, create_app};
