//! Application layer for Fraglet.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`RendererHelper`, `render_block`)
//! - **Ports**: interface definitions (traits) for template engines
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! engine-specific logic. Engine behavior lives behind the ports and is
//! implemented in `fraglet-adapters`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{RendererHelper, render, render_block};

// Re-export port traits (for adapter implementation)
pub use ports::{BlockRenderer, TemplateRenderer};

pub use error::ApplicationError;
