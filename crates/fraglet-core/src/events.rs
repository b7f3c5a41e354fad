//! Pre-render notification event.
//!
//! Before any render — block or full page — the registry publishes one
//! [`BeforeRender`] event to its listeners. Listeners may mutate the system
//! values (inject globals, rewrite the view reference); the caller context
//! is read-only to them and wins over system values at merge time anyway.

use crate::domain::{ContextMap, SystemValues};

/// The event handed to before-render listeners, once per render.
pub struct BeforeRender<'a> {
    system: &'a mut SystemValues,
    context: &'a ContextMap,
}

impl<'a> BeforeRender<'a> {
    pub fn new(system: &'a mut SystemValues, context: &'a ContextMap) -> Self {
        Self { system, context }
    }

    /// The mutable system values for this render.
    pub fn system(&mut self) -> &mut SystemValues {
        self.system
    }

    /// The caller-supplied context (read-only).
    pub fn context(&self) -> &ContextMap {
        self.context
    }
}

/// A registered before-render listener.
pub type BeforeRenderFn = std::sync::Arc<dyn Fn(&mut BeforeRender<'_>) + Send + Sync>;
