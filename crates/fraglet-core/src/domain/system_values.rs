//! Framework-injected template values.
//!
//! Every render — full page or single block — receives the same conventional
//! set of "system values" alongside the caller's context: the request
//! snapshot, the renderer identity, the route context, and a CSRF token
//! accessor. Before-render listeners may mutate them; caller context wins
//! over them on key collision.

use std::fmt;

use serde_json::Value as Json;

use super::{ContextMap, CsrfTokenFn};
use crate::request::RequestScope;

/// The default system-values mapping plus the CSRF accessor.
///
/// The accessor lives outside the JSON map because it is a callable; engine
/// adapters surface it to templates as `get_csrf_token` unless that key is
/// already taken by a system or caller value.
pub struct SystemValues {
    values: ContextMap,
    csrf: Option<CsrfTokenFn>,
}

impl SystemValues {
    /// An empty mapping with no CSRF accessor. Mostly useful in tests and
    /// for callers that build their own values from scratch.
    pub fn empty() -> Self {
        Self {
            values: ContextMap::new(),
            csrf: None,
        }
    }

    /// Build the default mapping for one render.
    ///
    /// Keys mirror the conventional set a full-page render would receive:
    /// `view` (unset here), `renderer_name` (kept for backward
    /// compatibility), `renderer_info`, `context`, and the request snapshot
    /// under both `request` and `req`. Keys are always present; absent
    /// inputs become `null` so listeners and templates can rely on them.
    pub fn for_render(
        renderer_name: &str,
        renderer_info: Json,
        request: Option<&RequestScope>,
    ) -> Self {
        let request_value = request.map(RequestScope::info_value).unwrap_or(Json::Null);
        let context_value = request
            .and_then(|r| r.context().cloned())
            .unwrap_or(Json::Null);

        let mut values = ContextMap::new();
        values.insert("view".into(), Json::Null);
        values.insert("renderer_name".into(), Json::String(renderer_name.into()));
        values.insert("renderer_info".into(), renderer_info);
        values.insert("context".into(), context_value);
        values.insert("request".into(), request_value.clone());
        values.insert("req".into(), request_value);

        Self {
            values,
            csrf: request.and_then(RequestScope::csrf),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Json> {
        self.values.get(key)
    }

    /// Insert or replace a value. This is what before-render listeners use.
    pub fn insert(&mut self, key: impl Into<String>, value: Json) {
        self.values.insert(key.into(), value);
    }

    pub fn values(&self) -> &ContextMap {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ContextMap {
        &mut self.values
    }

    /// The CSRF accessor, if one is bound to the request.
    pub fn csrf_token(&self) -> Option<CsrfTokenFn> {
        self.csrf.clone()
    }

    pub fn set_csrf_token(&mut self, csrf: Option<CsrfTokenFn>) {
        self.csrf = csrf;
    }

    /// System values merged with caller context; caller keys win.
    pub fn merged_with(&self, caller: &ContextMap) -> ContextMap {
        let mut merged = self.values.clone();
        for (k, v) in caller {
            merged.insert(k.clone(), v.clone());
        }
        merged
    }
}

impl fmt::Debug for SystemValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemValues")
            .field("values", &self.values)
            .field("csrf", &self.csrf.is_some())
            .finish()
    }
}
