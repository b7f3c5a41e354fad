//! Framework-agnostic request scope.
//!
//! A [`RequestScope`] is the snapshot of the current HTTP request the
//! renderer needs: a serializable summary for templates, the route context,
//! an optional registry handle, the CSRF accessor, and a slot for pending
//! response overrides.
//!
//! The response slot exists so the full-page render path can stash headers
//! it intends to apply. Fragment rendering must not pick those up, so
//! [`RequestScope::suppress_response`] empties the slot for the duration of
//! a call and restores it on drop — on every exit path, including errors
//! and panics.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde_json::Value as Json;

use crate::domain::CsrfTokenFn;
use crate::registry::Registry;

/// Serializable request summary exposed to templates as `request` / `req`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestInfo {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
}

/// Response adjustments a handler queued up before rendering.
///
/// Only meaningful to the full-page pathway; fragments ignore them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseOverrides {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
}

/// Per-request state handed to the render pipeline.
pub struct RequestScope {
    registry: Option<Arc<Registry>>,
    info: RequestInfo,
    context: Option<Json>,
    csrf: Option<CsrfTokenFn>,
    response: Mutex<Option<ResponseOverrides>>,
}

impl RequestScope {
    pub fn new(info: RequestInfo) -> Self {
        Self {
            registry: None,
            info,
            context: None,
            csrf: None,
            response: Mutex::new(None),
        }
    }

    /// Attach the registry this request resolves renderers against.
    /// Takes precedence over the ambient global registry.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Attach the route/resource context value exposed to templates.
    pub fn with_context(mut self, context: Json) -> Self {
        self.context = Some(context);
        self
    }

    /// Bind a lazily-evaluated CSRF token accessor to this request.
    pub fn with_csrf(mut self, csrf: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.csrf = Some(Arc::new(csrf));
        self
    }

    pub fn registry(&self) -> Option<&Arc<Registry>> {
        self.registry.as_ref()
    }

    pub fn info(&self) -> &RequestInfo {
        &self.info
    }

    /// The request summary as a JSON value (`null` only if serialization
    /// fails, which plain strings and maps cannot).
    pub fn info_value(&self) -> Json {
        serde_json::to_value(&self.info).unwrap_or(Json::Null)
    }

    pub fn context(&self) -> Option<&Json> {
        self.context.as_ref()
    }

    pub fn csrf(&self) -> Option<CsrfTokenFn> {
        self.csrf.clone()
    }

    // ── pending response slot ─────────────────────────────────────────────

    pub fn set_response(&self, overrides: ResponseOverrides) {
        *self.lock_response() = Some(overrides);
    }

    pub fn response(&self) -> Option<ResponseOverrides> {
        self.lock_response().clone()
    }

    pub fn take_response(&self) -> Option<ResponseOverrides> {
        self.lock_response().take()
    }

    /// Empty the response slot until the returned guard drops.
    ///
    /// Restoration happens in `Drop`, so it is guaranteed on early returns,
    /// `?` propagation, and unwinding alike.
    pub fn suppress_response(&self) -> ResponseGuard<'_> {
        let saved = self.lock_response().take();
        ResponseGuard { scope: self, saved }
    }

    fn lock_response(&self) -> std::sync::MutexGuard<'_, Option<ResponseOverrides>> {
        // A poisoned lock only means a panic mid-render; the slot itself is
        // still valid.
        self.response.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestScope")
            .field("info", &self.info)
            .field("context", &self.context)
            .field("registry", &self.registry.is_some())
            .field("csrf", &self.csrf.is_some())
            .field("response", &self.response())
            .finish()
    }
}

/// Restores the suppressed response overrides when dropped.
pub struct ResponseGuard<'a> {
    scope: &'a RequestScope,
    saved: Option<ResponseOverrides>,
}

impl Drop for ResponseGuard<'_> {
    fn drop(&mut self) {
        *self.scope.lock_response() = self.saved.take();
    }
}
