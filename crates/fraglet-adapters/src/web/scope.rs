//! Building a [`RequestScope`] out of an axum request.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::http::request::Parts;

use fraglet_core::registry::Registry;
use fraglet_core::request::{RequestInfo, RequestScope};

use super::csrf::CsrfToken;

/// Snapshot the request into a scope bound to `registry`.
///
/// The CSRF token is taken from the request extensions when a middleware
/// already minted one, otherwise generated here. Either way templates see
/// the same token for the whole request.
pub fn request_scope(parts: &Parts, registry: Arc<Registry>) -> RequestScope {
    let info = RequestInfo {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parse_query(parts.uri.query().unwrap_or_default()),
    };

    let token = parts
        .extensions
        .get::<CsrfToken>()
        .cloned()
        .unwrap_or_else(CsrfToken::generate);

    RequestScope::new(info)
        .with_registry(registry)
        .with_csrf(move || token.to_string())
}

fn parse_query(raw: &str) -> BTreeMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
