// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";

const LOG_FILE_PREFIX: &str = "taskboard-";

/// Installs the global file subscriber. The returned guard flushes buffered
/// lines on drop, so the caller keeps it alive until exit.
pub fn init_logging(log_dir: &Path, config_level: &str) -> Result<(PathBuf, WorkerGuard)> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;

    let log_file_path = log_file_path(log_dir, OffsetDateTime::now_utc());
    let file = fs::File::create(&log_file_path)
        .with_context(|| format!("create log file {}", log_file_path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_log_filter(config_level))
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(path = %log_file_path.display(), "logging initialized");
    Ok((log_file_path, guard))
}

fn build_log_filter(config_level: &str) -> EnvFilter {
    EnvFilter::new(resolve_log_level(
        env::var(LOG_LEVEL_ENV).ok().as_deref(),
        config_level,
    ))
}

/// The env var wins when it names a valid level; otherwise the config value.
fn resolve_log_level(env_level: Option<&str>, config_level: &str) -> &'static str {
    env_level
        .and_then(normalize_log_level)
        .or_else(|| normalize_log_level(config_level))
        .unwrap_or("warn")
}

pub fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

fn log_file_path(log_dir: &Path, now: OffsetDateTime) -> PathBuf {
    let timestamp = now
        .format(format_description!(
            "[year]-[month]-[day]_[hour]-[minute]-[second]"
        ))
        .unwrap_or_else(|_| now.unix_timestamp().to_string());
    log_dir.join(format!("{LOG_FILE_PREFIX}{timestamp}.log"))
}
