//! Application ports (traits) for template engines.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fraglet-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by application, implemented by
//!   infrastructure
//!   - `TemplateRenderer`: full-template rendering
//!   - `BlockRenderer`: single-block rendering (optional capability)
//!
//! - **Driving (Input) Ports**: called by the external world, implemented
//!   by the application
//!   - (`render_block` / `render` in the services module)

pub mod output;

pub use output::{BlockRenderer, TemplateRenderer};
