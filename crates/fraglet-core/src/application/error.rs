//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving and driving a render.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No registry on the request scope and no ambient global registry.
    #[error("No registry available: pass a request scope or install a global registry")]
    RegistryUnavailable,

    /// No renderer registered for the template-name extension.
    #[error("No renderer registered for '.{extension}' templates")]
    RendererNotRegistered { extension: String },

    /// The resolved renderer cannot render individual blocks.
    #[error("Block rendering requires a block-capable renderer; '{renderer}' does not support blocks")]
    BlockRenderingUnsupported { renderer: String },

    /// The engine could not load or compile the template.
    #[error("Failed to load template '{template}': {reason}")]
    TemplateLoad { template: String, reason: String },

    /// The engine failed while executing the template or block body.
    ///
    /// Produced by the renderer's configured error handler; the adapter
    /// never classifies engine failures itself.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RegistryUnavailable => vec![
                "Build a Registry at startup and install it with Registry::set_global".into(),
                "Or attach one to the request scope with RequestScope::with_registry".into(),
            ],
            Self::RendererNotRegistered { extension } => vec![
                format!("Nothing is registered for '.{}' templates", extension),
                "Register a renderer: Registry::builder().renderer(\"jinja2\", ...)".into(),
            ],
            Self::BlockRenderingUnsupported { renderer } => vec![
                format!("The '{}' renderer cannot render individual blocks", renderer),
                "Register a block-capable renderer such as JinjaRenderer".into(),
            ],
            Self::TemplateLoad { template, .. } => vec![
                format!("Could not load '{}'", template),
                "Check the template directory and the template's syntax".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "The template engine reported an execution failure".into(),
                "Run with -vv to see the full engine error chain".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RegistryUnavailable => ErrorCategory::Configuration,
            Self::RendererNotRegistered { .. } => ErrorCategory::Configuration,
            Self::BlockRenderingUnsupported { .. } => ErrorCategory::Configuration,
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
