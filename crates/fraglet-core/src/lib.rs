//! Fraglet Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Fraglet, a
//! block-level ("fragment") template-rendering extension for web handlers,
//! following hexagonal (ports and adapters) architecture.
//!
//! A view handler asks for one named block of a template instead of the whole
//! page; the fragment comes back as a string ready to be used as an HTTP
//! response body. This is the building block of hypermedia-driven partial
//! page updates (htmx and friends).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        web handlers / fraglet-demo      │
//! │      (call render_block / render)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │   (RendererHelper, render_block)        │
//! │      Orchestrates Block Rendering       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (TemplateRenderer, BlockRenderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fraglet-adapters (Infrastructure)    │
//! │   (JinjaRenderer, axum request glue)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The engine (minijinja) and the web framework (axum) never appear in this
//! crate; they sit behind the ports and the [`request::RequestScope`]
//! snapshot.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fraglet_core::{render_block, ContextMap, Registry};
//!
//! # fn renderer() -> Arc<dyn fraglet_core::application::ports::TemplateRenderer> { unimplemented!() }
//! // 1. Build a registry once at startup
//! let registry = Registry::builder()
//!     .renderer("jinja2", renderer())
//!     .build();
//! Registry::set_global(registry).unwrap();
//!
//! // 2. Render one block from a handler
//! let html = render_block("simple_page.html.jinja2", "content", &ContextMap::new(), None, None).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Framework-facing building blocks
pub mod events;
pub mod registry;
pub mod request;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{BlockRenderer, TemplateRenderer},
        services::{RendererHelper, render, render_block},
    };
    pub use crate::domain::{AssetSpec, ContextMap, CsrfTokenFn, SystemValues};
    pub use crate::error::{FragletError, FragletResult};
    pub use crate::events::BeforeRender;
    pub use crate::registry::{Registry, RegistryBuilder};
    pub use crate::request::{RequestInfo, RequestScope, ResponseOverrides};
}

pub use application::services::{RendererHelper, render, render_block};
pub use domain::{ContextMap, CsrfTokenFn, SystemValues};
pub use error::{FragletError, FragletResult};
pub use events::BeforeRender;
pub use registry::{Registry, RegistryBuilder};
pub use request::{RequestInfo, RequestScope, ResponseOverrides};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
