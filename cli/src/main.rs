//! inertia CLI — driving adapter for the inertia renderer.
//!
//! Subcommands:
//! - `render <config> --component C --url U [--method M] [--header K=V...] [--props JSON]`
//!   — render one request and print the response
//! - `check <config>` — validate the config parses and its template loads

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use inertia::{HttpResponse, InertiaConfig, Props, Renderer};
use inertia_http::HttpRequest;

/// Render Inertia protocol responses from a renderer config
#[derive(Parser, Debug)]
#[command(name = "inertia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page for a simulated request and print the response
    Render(RenderArgs),

    /// Validate a config file and load its template
    Check {
        /// Config file (.yaml, .yml or .json)
        config: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Config file (.yaml, .yml or .json)
    config: PathBuf,

    /// Component to render
    #[arg(long)]
    component: String,

    /// Page URL
    #[arg(long)]
    url: String,

    /// Request method
    #[arg(long, default_value = "GET")]
    method: String,

    /// Request header as `Name=value` (repeatable)
    #[arg(long = "header", value_name = "NAME=VALUE")]
    headers: Vec<String>,

    /// Props as a JSON object
    #[arg(long)]
    props: Option<String>,

    /// Clear previously encrypted history
    #[arg(long)]
    clear_history: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => cmd_render(&args).map(|out| print!("{out}")),
        Command::Check { config } => cmd_check(&config).map(|out| println!("{out}")),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_render(args: &RenderArgs) -> Result<String> {
    let config = load_config(&args.config)?;
    let renderer = Renderer::from_config(&config).context("failed to build renderer")?;

    let mut request = HttpRequest::builder().method(&args.method).path(&args.url);
    for pair in &args.headers {
        let (name, value) = parse_header(pair)?;
        request = request.header(name, value);
    }
    let request = request.build();

    let mut options = config.options(&args.component, &args.url);
    options.clear_history = args.clear_history;
    if let Some(props) = &args.props {
        options.props = Some(parse_props(props)?);
    }

    let response = renderer.render(&request, &options)?;
    Ok(format_response(&response))
}

fn cmd_check(path: &Path) -> Result<String> {
    let config = load_config(path)?;
    Renderer::from_config(&config).context("config invalid")?;
    Ok(format!(
        "Config valid (template: {})",
        config.template_path.display()
    ))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

/// Load a config, resolving a relative template path against the config's directory.
fn load_config(path: &Path) -> Result<InertiaConfig> {
    let mut config = InertiaConfig::from_path(path)?;

    if config.template_path.is_relative() {
        if let Some(dir) = path.parent() {
            config.template_path = dir.join(&config.template_path);
        }
    }

    tracing::debug!(template = %config.template_path.display(), "resolved template path");
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

fn parse_header(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => bail!("invalid header \"{pair}\", expected NAME=VALUE"),
    }
}

fn parse_props(json: &str) -> Result<Props> {
    serde_json::from_str(json).context("--props must be a JSON object")
}

fn format_response(response: &HttpResponse) -> String {
    let mut out = format!("HTTP {}\n", response.status());
    for (name, value) in response.headers() {
        out.push_str(&format!("{name}: {value}\n"));
    }
    if let Some(body) = response.body() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    out
}
