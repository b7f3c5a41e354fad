//! Router, application state, and the demo registry.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::trace::TraceLayer;

use fraglet_adapters::{
    JinjaRenderer, WebError, render_block_to_response, render_to_response, request_scope,
};
use fraglet_core::{ContextMap, Registry};

const SIMPLE_PAGE: &str = "simple_page.html.jinja2";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Registry with the minijinja renderer bound to `.jinja2` templates.
///
/// The subscribed listener stamps every render with the application name,
/// so templates can refer to `app_name` without each handler passing it.
pub fn build_registry(template_dir: impl AsRef<Path>) -> Arc<Registry> {
    let renderer = JinjaRenderer::from_dir(template_dir);
    Registry::builder()
        .renderer("jinja2", Arc::new(renderer))
        .subscribe(|event| {
            event.system().insert("app_name", json!("fraglet-demo"));
        })
        .build()
}

pub fn create_app(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/simple_page", get(simple_page))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { registry })
}

async fn health() -> &'static str {
    "ok"
}

/// Serve the `content` block of the page unless the caller explicitly asks
/// for the whole document with `?only_content=false`.
async fn simple_page(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, WebError> {
    let (parts, _body) = request.into_parts();
    let scope = request_scope(&parts, state.registry.clone());

    let full_page = scope
        .info()
        .query
        .get("only_content")
        .is_some_and(|v| v.eq_ignore_ascii_case("false"));

    let context = ContextMap::new();
    if full_page {
        render_to_response(SIMPLE_PAGE, &context, &scope, None)
    } else {
        render_block_to_response(SIMPLE_PAGE, "content", &context, &scope, None)
    }
}
