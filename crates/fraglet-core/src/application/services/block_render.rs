//! Block-render orchestration - the main application service.
//!
//! This service coordinates the whole fragment-rendering workflow:
//! 1. Resolve the registry (request scope first, ambient global second)
//! 2. Resolve a renderer for the template and verify block capability
//! 3. Build system values, publish the before-render event
//! 4. Delegate execution to the engine port
//!
//! The response-override slot on the request is suppressed for the duration
//! of a block render and restored on all exit paths, so the full-page
//! pathway's pending headers never leak into a fragment.

use std::sync::Arc;

use serde_json::{Value as Json, json};
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{BlockRenderer, TemplateRenderer},
    },
    domain::{AssetSpec, ContextMap, DomainError, SystemValues},
    error::FragletResult,
    events::BeforeRender,
    registry::Registry,
    request::RequestScope,
};

/// Resolves a renderer name against a registry and drives renders through it.
///
/// Transient and cheap: one helper per call, no lifecycle beyond it.
pub struct RendererHelper {
    raw_name: String,
    spec: AssetSpec,
    template: String,
    registry: Arc<Registry>,
}

impl RendererHelper {
    /// Parse `name` and scope the helper to (name, package, registry).
    pub fn new(name: &str, package: Option<&str>, registry: Arc<Registry>) -> FragletResult<Self> {
        let spec = AssetSpec::parse(name)?;
        let template = spec.qualified(package, registry.default_package());
        Ok(Self {
            raw_name: name.to_string(),
            spec,
            template,
            registry,
        })
    }

    /// The renderer name exactly as the caller passed it.
    pub fn name(&self) -> &str {
        &self.raw_name
    }

    /// The engine-facing (package-qualified) template name.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// The `renderer_info` value exposed to templates and listeners.
    pub fn info_value(&self) -> Json {
        json!({
            "name": self.raw_name,
            "template": self.template,
            "package": self.spec.package(),
        })
    }

    fn resolve(&self) -> FragletResult<Arc<dyn TemplateRenderer>> {
        let extension = self.spec.extension().unwrap_or_default();
        self.registry.renderer_for(extension).ok_or_else(|| {
            ApplicationError::RendererNotRegistered {
                extension: extension.to_string(),
            }
            .into()
        })
    }

    /// Fail unless the resolved renderer supports block rendering.
    pub fn ensure_block_capable(&self) -> FragletResult<()> {
        let renderer = self.resolve()?;
        if renderer.block_renderer().is_none() {
            return Err(ApplicationError::BlockRenderingUnsupported {
                renderer: renderer.name().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn system_values(&self, request: Option<&RequestScope>) -> SystemValues {
        SystemValues::for_render(&self.raw_name, self.info_value(), request)
    }

    /// Render one named block of the template.
    ///
    /// When `system` is `None` the default system values are built from the
    /// request. One before-render event is published either way, before
    /// block execution begins.
    #[instrument(skip_all, fields(template = %self.template, block = %block_name))]
    pub fn render_block(
        &self,
        block_name: &str,
        value: &ContextMap,
        system: Option<SystemValues>,
        request: Option<&RequestScope>,
    ) -> FragletResult<String> {
        if block_name.is_empty() {
            return Err(DomainError::EmptyBlockName.into());
        }

        let renderer = self.resolve()?;
        let block: &dyn BlockRenderer = renderer.block_renderer().ok_or_else(|| {
            ApplicationError::BlockRenderingUnsupported {
                renderer: renderer.name().to_string(),
            }
        })?;

        let mut system = system.unwrap_or_else(|| self.system_values(request));
        self.notify(&mut system, value);

        debug!("rendering block");
        block.render_block(&self.template, block_name, &system, value)
    }

    /// Render the whole template through the same pipeline.
    #[instrument(skip_all, fields(template = %self.template))]
    pub fn render(&self, value: &ContextMap, request: Option<&RequestScope>) -> FragletResult<String> {
        let renderer = self.resolve()?;

        let mut system = self.system_values(request);
        self.notify(&mut system, value);

        renderer.render(&self.template, &system, value)
    }

    fn notify(&self, system: &mut SystemValues, value: &ContextMap) {
        let mut event = BeforeRender::new(system, value);
        self.registry.notify(&mut event);
    }
}

/// Render a template's block using the registered renderer with the given
/// context.
///
/// * `renderer_name` - the template holding the block (may be an asset
///   specification, `package:relative/path`)
/// * `block_name` - the block to render
/// * `value` - the variables available in the block's context; they win over
///   system values on key collision
/// * `request` - the current request scope, if any; supplies the registry,
///   the request system values, and the CSRF accessor
/// * `package` - explicit package scope; defaults to the registry's
///   configured default package
pub fn render_block(
    renderer_name: &str,
    block_name: &str,
    value: &ContextMap,
    request: Option<&RequestScope>,
    package: Option<&str>,
) -> FragletResult<String> {
    let registry = registry_for(request)?;
    let helper = RendererHelper::new(renderer_name, package, registry)?;
    helper.ensure_block_capable()?;

    // Pending response overrides must not leak into the fragment; the guard
    // restores them even if rendering fails.
    let _guard = request.map(RequestScope::suppress_response);
    helper.render_block(block_name, value, None, request)
}

/// Render the whole template using the registered renderer.
pub fn render(
    renderer_name: &str,
    value: &ContextMap,
    request: Option<&RequestScope>,
    package: Option<&str>,
) -> FragletResult<String> {
    let registry = registry_for(request)?;
    let helper = RendererHelper::new(renderer_name, package, registry)?;
    helper.render(value, request)
}

fn registry_for(request: Option<&RequestScope>) -> FragletResult<Arc<Registry>> {
    request
        .and_then(|r| r.registry().cloned())
        .or_else(Registry::global)
        .ok_or_else(|| ApplicationError::RegistryUnavailable.into())
}
