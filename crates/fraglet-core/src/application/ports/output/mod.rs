//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from a template engine.
//! The `fraglet-adapters` crate provides the minijinja implementation.

use crate::domain::{ContextMap, SystemValues};
use crate::error::FragletResult;

/// Port for full-template rendering.
///
/// Implemented by:
/// - `fraglet_adapters::JinjaRenderer` (production)
/// - test stubs in `tests/integration_tests.rs`
///
/// ## Design Notes
///
/// - `system` and `context` arrive separately so the engine controls the
///   merge (caller keys win) and can inject non-JSON values such as the
///   CSRF accessor callable
/// - Block support is an optional capability discovered through
///   [`TemplateRenderer::block_renderer`], not a downcast
pub trait TemplateRenderer: Send + Sync {
    /// Short renderer identity used in diagnostics ("jinja").
    fn name(&self) -> &str;

    /// Render the whole template with the merged context.
    fn render(
        &self,
        template: &str,
        system: &SystemValues,
        context: &ContextMap,
    ) -> FragletResult<String>;

    /// The block-rendering capability, if this renderer has one.
    fn block_renderer(&self) -> Option<&dyn BlockRenderer> {
        None
    }
}

/// Port for rendering one named block of a template.
pub trait BlockRenderer: Send + Sync {
    /// Render `block` of `template` with the merged context and return the
    /// concatenated fragment.
    ///
    /// A missing block must surface as `DomainError::BlockNotFound`; any
    /// other engine failure goes through the renderer's configured error
    /// handler.
    fn render_block(
        &self,
        template: &str,
        block: &str,
        system: &SystemValues,
        context: &ContextMap,
    ) -> FragletResult<String>;
}
