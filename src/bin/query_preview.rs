//! # Query Preview
//!
//! Prints the search request body an analytics intent would send, without
//! contacting a search engine. Exits non-zero when the parameters are invalid.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};
use workflow_analytics::config::ConfigManager;
use workflow_analytics::logging;
use workflow_analytics::models::{TenantScope, TimeRange};
use workflow_analytics::query_builder::{AnalyticsQueries, QueryIntent};

#[derive(Parser)]
#[command(name = "query-preview")]
#[command(about = "Print the OpenSearch request body for a workflow analytics query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Analytics question (failed-executions, integrations, execution-totals, daily-metrics)
    #[arg(short, long)]
    intent: QueryIntent,

    /// Tenant whose events are queried
    #[arg(short, long, env = "ANALYTICS_OWNER_ID")]
    owner_id: String,

    /// Window start, ISO-8601 (inclusive)
    #[arg(long)]
    from: String,

    /// Window end, ISO-8601 (inclusive)
    #[arg(long)]
    to: String,

    /// Query externally triggered executions instead of internal ones
    #[arg(long)]
    include_external: bool,

    /// Single-line output, byte-identical to what is sent over the wire
    #[arg(long)]
    compact: bool,

    /// Configuration directory; when given, the target index is printed to stderr
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity); overrides LOG_LEVEL
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the request body
    logging::init_stderr(verbosity_level(cli.verbose));

    match run(&cli) {
        Ok(body) => {
            println!("{body}");
        }
        Err(e) => {
            error!("Query preview failed: {:#}", e);
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    if let Some(config_dir) = &cli.config_dir {
        let manager = ConfigManager::load_from_directory(Some(config_dir.clone()))
            .with_context(|| format!("loading configuration from {}", config_dir.display()))?;
        eprintln!("index: {}", manager.config().search.index);
    }

    let scope = TenantScope::new(cli.owner_id.as_str(), cli.include_external)?;
    let range = TimeRange::parse(&cli.from, &cli.to)?;
    let request = AnalyticsQueries::build(cli.intent, &scope, &range)?;

    debug!(
        intent = %cli.intent,
        filters = request.filters().len(),
        aggregations = request.aggregations().len(),
        "Built search request"
    );

    if cli.compact {
        Ok(request.to_json_string())
    } else {
        serde_json::to_string_pretty(&request).context("rendering request body")
    }
}
