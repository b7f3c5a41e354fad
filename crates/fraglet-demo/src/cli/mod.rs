//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fraglet",
    bin_name = "fraglet",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9e9} Block-level template rendering",
    long_about = "Fraglet renders single blocks of Jinja-style templates, \
                  either one-shot on the command line or behind an HTTP \
                  endpoint for htmx-style partial page updates.",
    after_help = "EXAMPLES:\n\
        \x20 fraglet serve\n\
        \x20 fraglet serve --addr 0.0.0.0:3000 --templates ./templates\n\
        \x20 fraglet render simple_page.html.jinja2 --block content\n\
        \x20 fraglet render simple_page.html.jinja2 --var name=World",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the demo HTTP server.
    #[command(
        visible_alias = "s",
        about = "Run the demo HTTP server",
        after_help = "EXAMPLES:\n\
            \x20 fraglet serve\n\
            \x20 fraglet serve --addr 127.0.0.1:3000\n\
            \x20 fraglet serve --templates ./my-templates"
    )]
    Serve(ServeArgs),

    /// Render a template (or one of its blocks) to stdout.
    #[command(
        visible_alias = "r",
        about = "Render a template or block to stdout",
        after_help = "EXAMPLES:\n\
            \x20 fraglet render simple_page.html.jinja2\n\
            \x20 fraglet render simple_page.html.jinja2 --block content\n\
            \x20 fraglet render simple_page.html.jinja2 --var name=World"
    )]
    Render(RenderArgs),
}

// ── Per-command arguments ─────────────────────────────────────────────────────

/// Arguments for `fraglet serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Socket address to listen on (overrides config).
    #[arg(long, value_name = "ADDR", help = "Address to bind, e.g. 127.0.0.1:8080")]
    pub addr: Option<String>,

    /// Template directory (overrides config).
    #[arg(long, value_name = "DIR", help = "Directory templates are loaded from")]
    pub templates: Option<PathBuf>,
}

/// Arguments for `fraglet render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template name, resolved against the template directory.
    #[arg(value_name = "TEMPLATE", help = "Template to render, e.g. simple_page.html.jinja2")]
    pub template: String,

    /// Render only this block instead of the whole template.
    #[arg(short, long, value_name = "NAME", help = "Block to render")]
    pub block: Option<String>,

    /// Template directory (overrides config).
    #[arg(long, value_name = "DIR", help = "Directory templates are loaded from")]
    pub templates: Option<PathBuf>,

    /// Context variables, `key=value`, repeatable.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        help = "Add a context variable (repeatable)"
    )]
    pub vars: Vec<String>,
}
