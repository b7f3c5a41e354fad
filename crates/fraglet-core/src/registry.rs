//! Renderer registry and before-render listener hub.
//!
//! A [`Registry`] is built once at startup, then shared immutably behind an
//! `Arc`: renderers keyed by template-name extension, the before-render
//! listeners, and the default package. Requests may carry their own registry
//! (via [`crate::request::RequestScope`]); otherwise the process-global
//! ambient registry installed with [`Registry::set_global`] is used.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::application::ports::TemplateRenderer;
use crate::error::{FragletError, FragletResult};
use crate::events::{BeforeRender, BeforeRenderFn};

static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();

/// Immutable registry of renderers and render-event listeners.
pub struct Registry {
    renderers: HashMap<String, Arc<dyn TemplateRenderer>>,
    listeners: Vec<BeforeRenderFn>,
    default_package: Option<String>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the renderer registered for a template-name extension.
    /// A leading dot is accepted (`.jinja2` == `jinja2`).
    pub fn renderer_for(&self, extension: &str) -> Option<Arc<dyn TemplateRenderer>> {
        self.renderers
            .get(extension.trim_start_matches('.'))
            .cloned()
    }

    /// The package used when neither the asset spec nor the call names one.
    pub fn default_package(&self) -> Option<&str> {
        self.default_package.as_deref()
    }

    /// Publish a before-render event to every listener, in registration
    /// order.
    pub fn notify(&self, event: &mut BeforeRender<'_>) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ── ambient registry ──────────────────────────────────────────────────

    /// Install the process-global registry. Fails if one is already set.
    pub fn set_global(registry: Arc<Registry>) -> FragletResult<()> {
        GLOBAL.set(registry).map_err(|_| FragletError::Configuration {
            message: "a global registry is already installed".into(),
        })
    }

    /// The ambient registry, if one was installed.
    pub fn global() -> Option<Arc<Registry>> {
        GLOBAL.get().cloned()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("extensions", &self.renderers.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .field("default_package", &self.default_package)
            .finish()
    }
}

/// Builder for [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    renderers: HashMap<String, Arc<dyn TemplateRenderer>>,
    listeners: Vec<BeforeRenderFn>,
    default_package: Option<String>,
}

impl RegistryBuilder {
    /// Register a renderer for a template-name extension.
    pub fn renderer(mut self, extension: &str, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderers
            .insert(extension.trim_start_matches('.').to_string(), renderer);
        self
    }

    /// Subscribe a before-render listener.
    pub fn subscribe(mut self, listener: impl Fn(&mut BeforeRender<'_>) + Send + Sync + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    pub fn default_package(mut self, package: impl Into<String>) -> Self {
        self.default_package = Some(package.into());
        self
    }

    pub fn build(self) -> Arc<Registry> {
        Arc::new(Registry {
            renderers: self.renderers,
            listeners: self.listeners,
            default_package: self.default_package,
        })
    }
}
