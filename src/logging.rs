//! # Structured Logging Module
//!
//! Environment-aware console logging using the tracing ecosystem.
//! Designed for containerized services where logs go to stdout.
//!
//! This module provides:
//! - Console-only logging, human-readable or JSON (`ANALYTICS_LOG_FORMAT=json`)
//! - Environment-based log level configuration
//! - Domain-specific structured logging macros ([`log_search!`](crate::log_search),
//!   [`log_config!`](crate::log_config))
//! - TTY-aware ANSI color output
//!
//! Every analytics call carries a `correlation_id` (UUID v4) that is logged on
//! the request, the failure and the completion events of that call.

use std::io::IsTerminal;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Where console log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    Stdout,
    Stderr,
}

/// Initialize console logging with environment-derived defaults
///
/// Safe to call more than once and safe to call when another subscriber is
/// already installed; only the first call has any effect.
pub fn init_console_only() {
    init_with(LogSink::Stdout, |environment| {
        resolve_log_level(environment, None)
    });
}

/// Initialize console logging, using `config.level` when neither `LOG_LEVEL`
/// nor `RUST_LOG` is set
pub fn init_from_config(config: &LoggingConfig) {
    init_with(LogSink::Stdout, |environment| {
        resolve_log_level(environment, Some(config.level.as_str()))
    });
}

/// Initialize logging on stderr for command-line tools whose stdout carries output
///
/// An explicit `level` wins over the environment; otherwise `LOG_LEVEL`,
/// then `RUST_LOG`, then `warn`. `ANALYTICS_LOG_FORMAT` applies as usual.
pub fn init_stderr(level: Option<&str>) {
    init_with(LogSink::Stderr, |environment| match level {
        Some(level) => level.to_lowercase(),
        None => resolve_log_level(environment, Some("warn")),
    });
}

fn init_with(sink: LogSink, log_level: impl FnOnce(&str) -> String) {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = log_level(&environment);
        let json_output = use_json_format();
        let use_ansi = !json_output
            && match sink {
                LogSink::Stdout => IsTerminal::is_terminal(&std::io::stdout()),
                LogSink::Stderr => IsTerminal::is_terminal(&std::io::stderr()),
            };

        let console_layer = match (json_output, sink) {
            (true, LogSink::Stdout) => fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_filter(EnvFilter::new(&log_level))
                .boxed(),
            (true, LogSink::Stderr) => fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::new(&log_level))
                .boxed(),
            (false, LogSink::Stdout) => fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_filter(EnvFilter::new(&log_level))
                .boxed(),
            (false, LogSink::Stderr) => fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::new(&log_level))
                .boxed(),
        };

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                json_output = json_output,
                ansi_colors = use_ansi,
                sink = ?sink,
                "Console logging initialized"
            );
        }
    });
}

fn use_json_format() -> bool {
    std::env::var("ANALYTICS_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn get_environment() -> String {
    std::env::var("ANALYTICS_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// LOG_LEVEL, then RUST_LOG, then the configured fallback, then per-environment defaults
fn resolve_log_level(environment: &str, fallback: Option<&str>) -> String {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        return level.to_lowercase();
    }

    if let Some(level) = fallback {
        return level.to_lowercase();
    }

    default_level_for(environment).to_string()
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log search operations with a structured, grep-friendly format
#[macro_export]
macro_rules! log_search {
    // Full form with correlation_id
    ($level:ident, $operation:expr, correlation_id: $correlation_id:expr, $($key:ident: $value:expr),* $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            correlation_id = %$correlation_id,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "SEARCH_{}", $operation
        );
    };
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "SEARCH_{}", $operation
        );
    };
    // Generic form with additional fields
    ($level:ident, $operation:expr, $($key:ident: $value:expr),+ $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "SEARCH_{}", $operation
        );
    };
}

/// Log configuration operations
#[macro_export]
macro_rules! log_config {
    // Simple form - just operation
    ($level:ident, $operation:expr $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        );
    };
    // Generic form with additional fields
    ($level:ident, $operation:expr, $($key:ident: $value:expr),+ $(,)?) => {
        tracing::$level!(
            operation = %$operation,
            $($key = ?$value,)*
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "{}", $operation
        );
    };
}
