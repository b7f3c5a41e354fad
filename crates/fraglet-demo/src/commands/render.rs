//! `fraglet render` — one-shot rendering to stdout.
//!
//! Installs the registry as the process-global one and renders without a
//! request scope, the same path library users take outside a web handler.

use serde_json::Value as Json;
use tracing::{debug, instrument};

use fraglet_core::{ContextMap, Registry, render, render_block};
use fraglet_demo::build_registry;

use crate::cli::RenderArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template_dir = args.templates.unwrap_or(config.templates.dir);
    if !template_dir.is_dir() {
        return Err(CliError::ConfigError {
            message: format!(
                "template directory '{}' does not exist",
                template_dir.display()
            ),
            source: None,
        });
    }

    let context = parse_vars(&args.vars)?;
    debug!(vars = context.len(), "context assembled");

    Registry::set_global(build_registry(&template_dir))?;

    let rendered = match args.block.as_deref() {
        Some(block) => render_block(&args.template, block, &context, None, None)?,
        None => render(&args.template, &context, None, None)?,
    };

    // The rendered payload always goes to stdout, even under --quiet, so it
    // can be piped; status lines go through the output manager.
    println!("{rendered}");
    output.success("Rendered")?;

    Ok(())
}

/// Parse repeated `--var key=value` pairs into a context map.
///
/// Values that parse as JSON keep their type (`--var count=3` is a number);
/// everything else becomes a string.
fn parse_vars(vars: &[String]) -> CliResult<ContextMap> {
    let mut context = ContextMap::new();
    for pair in vars {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CliError::InvalidInput {
                message: format!("expected key=value, got '{pair}'"),
            });
        };
        if key.is_empty() {
            return Err(CliError::InvalidInput {
                message: format!("empty variable name in '{pair}'"),
            });
        }
        let value = serde_json::from_str::<Json>(value)
            .unwrap_or_else(|_| Json::String(value.to_string()));
        context.insert(key.to_string(), value);
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vars_parse_into_typed_values() {
        let context = parse_vars(&[
            "name=World".to_string(),
            "count=3".to_string(),
            "flag=true".to_string(),
        ])
        .unwrap();
        assert_eq!(context.get("name"), Some(&json!("World")));
        assert_eq!(context.get("count"), Some(&json!(3)));
        assert_eq!(context.get("flag"), Some(&json!(true)));
    }

    #[test]
    fn value_may_contain_equals() {
        let context = parse_vars(&["query=a=b".to_string()]).unwrap();
        assert_eq!(context.get("query"), Some(&json!("a=b")));
    }

    #[test]
    fn missing_equals_is_invalid_input() {
        let err = parse_vars(&["oops".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn empty_key_is_invalid_input() {
        let err = parse_vars(&["=value".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
