//! MiniJinja renderer adapter.
//!
//! Implements both ports over a [`minijinja::Environment`]. Block rendering
//! uses the engine's own block machinery (`eval_to_state` +
//! `render_block`), so a fragment is byte-for-byte what the full page would
//! contain for that block.
//!
//! Engine failures during execution are not classified here: they go to the
//! renderer's configured error handler, which owns the translation into a
//! `FragletError`. A missing block is the one exception — it becomes the
//! dedicated `BlockNotFound` domain error before the handler ever sees it.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use minijinja::{Environment, ErrorKind, path_loader};
use tracing::instrument;

use fraglet_core::{
    application::{
        ApplicationError,
        ports::{BlockRenderer, TemplateRenderer},
    },
    domain::{ContextMap, DomainError, SystemValues},
    error::{FragletError, FragletResult},
};

/// Translates engine errors into `FragletError`s.
pub type ErrorHandler = Arc<dyn Fn(&str, minijinja::Error) -> FragletError + Send + Sync>;

/// Block-capable renderer backed by minijinja.
pub struct JinjaRenderer {
    env: Environment<'static>,
    on_error: ErrorHandler,
}

impl JinjaRenderer {
    /// Wrap an already configured environment.
    pub fn new(env: Environment<'static>) -> Self {
        Self {
            env,
            on_error: Arc::new(default_error_handler),
        }
    }

    /// An environment loading templates from a directory tree.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir.as_ref()));
        Self::new(env)
    }

    /// Replace the configured error handler.
    ///
    /// The handler decides what an engine execution failure becomes; the
    /// default preserves the engine's error chain inside
    /// `ApplicationError::RenderingFailed`.
    pub fn with_error_handler(
        mut self,
        handler: impl Fn(&str, minijinja::Error) -> FragletError + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Arc::new(handler);
        self
    }

    pub fn env(&self) -> &Environment<'static> {
        &self.env
    }

    fn template(&self, name: &str) -> FragletResult<minijinja::Template<'_, '_>> {
        self.env.get_template(name).map_err(|e| {
            ApplicationError::TemplateLoad {
                template: name.to_string(),
                reason: error_chain(&e),
            }
            .into()
        })
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn name(&self) -> &str {
        "jinja"
    }

    #[instrument(skip_all, fields(template = %template))]
    fn render(
        &self,
        template: &str,
        system: &SystemValues,
        context: &ContextMap,
    ) -> FragletResult<String> {
        let tmpl = self.template(template)?;
        let ctx = execution_context(system, context);
        tmpl.render(ctx).map_err(|e| (self.on_error)(template, e))
    }

    fn block_renderer(&self) -> Option<&dyn BlockRenderer> {
        Some(self)
    }
}

impl BlockRenderer for JinjaRenderer {
    #[instrument(skip_all, fields(template = %template, block = %block))]
    fn render_block(
        &self,
        template: &str,
        block: &str,
        system: &SystemValues,
        context: &ContextMap,
    ) -> FragletResult<String> {
        let tmpl = self.template(template)?;
        let ctx = execution_context(system, context);

        match tmpl
            .eval_to_state(ctx)
            .and_then(|mut state| state.render_block(block))
        {
            Ok(fragment) => Ok(fragment),
            Err(e) if e.kind() == ErrorKind::UnknownBlock => Err(DomainError::BlockNotFound {
                block: block.to_string(),
                template: template.to_string(),
            }
            .into()),
            Err(e) => Err((self.on_error)(template, e)),
        }
    }
}

/// System values merged with caller context (caller wins), with the CSRF
/// accessor exposed as a callable unless that key is already taken.
fn execution_context(system: &SystemValues, context: &ContextMap) -> minijinja::Value {
    let merged = system.merged_with(context);
    let inject_csrf = !merged.contains_key("get_csrf_token");

    let mut ctx: BTreeMap<String, minijinja::Value> = merged
        .into_iter()
        .map(|(k, v)| (k, minijinja::Value::from_serialize(&v)))
        .collect();

    if inject_csrf {
        if let Some(token) = system.csrf_token() {
            ctx.insert(
                "get_csrf_token".into(),
                minijinja::Value::from_function(move || token()),
            );
        }
    }

    minijinja::Value::from_iter(ctx)
}

/// Join an engine error with its sources ("a: b: c"), the way minijinja
/// recommends surfacing chained errors.
fn error_chain(err: &minijinja::Error) -> String {
    let mut out = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn default_error_handler(template: &str, err: minijinja::Error) -> FragletError {
    ApplicationError::RenderingFailed {
        reason: format!("{}: {}", template, error_chain(&err)),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as Json, json};

    const PAGE: &str = "<!DOCTYPE html>\n<html>\n  <body>\n    <main>{% block content %}<p>Hello {{ name }}!</p>{% endblock %}</main>\n  </body>\n</html>\n";

    fn renderer() -> JinjaRenderer {
        let mut env = Environment::new();
        env.add_template("page.html.jinja2", PAGE).unwrap();
        env.add_template("meta.html.jinja2", "{% block meta %}{{ renderer_name }}{% endblock %}")
            .unwrap();
        env.add_template("csrf.html.jinja2", "{% block f %}{{ get_csrf_token() }}{% endblock %}")
            .unwrap();
        // calling an unknown function fails at render time, inside the block
        env.add_template("boom.html.jinja2", "{% block b %}{{ no_such_fn() }}{% endblock %}")
            .unwrap();
        JinjaRenderer::new(env)
    }

    fn context(entries: &[(&str, Json)]) -> ContextMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn block_matches_the_full_page_section() {
        let r = renderer();
        let ctx = context(&[("name", json!("World"))]);
        let system = SystemValues::empty();

        let full = r.render("page.html.jinja2", &system, &ctx).unwrap();
        let fragment = r
            .render_block("page.html.jinja2", "content", &system, &ctx)
            .unwrap();

        assert_eq!(fragment, "<p>Hello World!</p>");
        assert!(full.contains(&fragment));
    }

    #[test]
    fn unknown_block_is_block_not_found() {
        let r = renderer();
        let err = r
            .render_block("page.html.jinja2", "sidebar", &SystemValues::empty(), &ContextMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            FragletError::Domain(DomainError::BlockNotFound { ref block, ref template })
                if block == "sidebar" && template == "page.html.jinja2"
        ));
    }

    #[test]
    fn system_values_are_visible_in_blocks() {
        let r = renderer();
        let system = SystemValues::for_render("meta.html.jinja2", Json::Null, None);
        let out = r
            .render_block("meta.html.jinja2", "meta", &system, &ContextMap::new())
            .unwrap();
        assert_eq!(out, "meta.html.jinja2");
    }

    #[test]
    fn caller_context_overrides_system_values() {
        let r = renderer();
        let system = SystemValues::for_render("meta.html.jinja2", Json::Null, None);
        let ctx = context(&[("renderer_name", json!("overridden"))]);
        let out = r
            .render_block("meta.html.jinja2", "meta", &system, &ctx)
            .unwrap();
        assert_eq!(out, "overridden");
    }

    #[test]
    fn csrf_accessor_is_callable_from_templates() {
        let r = renderer();
        let mut system = SystemValues::empty();
        system.set_csrf_token(Some(Arc::new(|| "tok-123".to_string())));

        let out = r
            .render_block("csrf.html.jinja2", "f", &system, &ContextMap::new())
            .unwrap();
        assert_eq!(out, "tok-123");
    }

    #[test]
    fn missing_template_is_a_load_error() {
        let r = renderer();
        let err = r
            .render_block("nope.html.jinja2", "content", &SystemValues::empty(), &ContextMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            FragletError::Application(ApplicationError::TemplateLoad { ref template, .. })
                if template == "nope.html.jinja2"
        ));
    }

    #[test]
    fn execution_failures_go_through_the_error_handler() {
        let r = renderer().with_error_handler(|template, _err| FragletError::Internal {
            message: format!("handled: {template}"),
        });
        let err = r
            .render_block("boom.html.jinja2", "b", &SystemValues::empty(), &ContextMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            FragletError::Internal { ref message } if message == "handled: boom.html.jinja2"
        ));
    }

    #[test]
    fn default_handler_preserves_the_engine_chain() {
        let r = renderer();
        let err = r
            .render_block("boom.html.jinja2", "b", &SystemValues::empty(), &ContextMap::new())
            .unwrap_err();
        assert!(matches!(
            err,
            FragletError::Application(ApplicationError::RenderingFailed { ref reason })
                if reason.contains("boom.html.jinja2")
        ));
    }

    #[test]
    fn from_dir_loads_templates_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("disk.html.jinja2"), PAGE).unwrap();

        let r = JinjaRenderer::from_dir(dir.path());
        let ctx = context(&[("name", json!("Disk"))]);
        let out = r
            .render_block("disk.html.jinja2", "content", &SystemValues::empty(), &ctx)
            .unwrap();
        assert_eq!(out, "<p>Hello Disk!</p>");
    }
}
