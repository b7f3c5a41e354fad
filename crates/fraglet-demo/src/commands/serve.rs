//! `fraglet serve` — run the demo HTTP server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use fraglet_demo::{build_registry, create_app};

use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

#[instrument(skip_all)]
pub fn execute(args: ServeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let addr_str = args.addr.unwrap_or(config.server.addr);
    let addr: SocketAddr = addr_str
        .parse()
        .map_err(|e: std::net::AddrParseError| CliError::ConfigError {
            message: format!("invalid listen address '{addr_str}'"),
            source: Some(Box::new(e)),
        })?;

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

    let registry = build_registry(&template_dir);
    let app = create_app(registry);

    output.info(&format!(
        "Serving templates from {}",
        template_dir.display()
    ))?;
    output.success(&format!("Listening on http://{addr}"))?;

    // The rest of the CLI is synchronous; only the server needs a runtime.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::ServerError {
            message: "failed to start async runtime".into(),
            source: Some(Box::new(e)),
        })?;

    runtime.block_on(async {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CliError::ServerError {
                message: format!("failed to bind {addr}"),
                source: Some(Box::new(e)),
            })?;
        info!(%addr, "server started");
        axum::serve(listener, app)
            .await
            .map_err(|e| CliError::ServerError {
                message: "server terminated abnormally".into(),
                source: Some(Box::new(e)),
            })
    })
}
