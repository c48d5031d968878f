// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::logging::normalize_log_level;
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use taskboard_app::TaskStatus;

pub const APP_NAME: &str = "taskboard";
pub const CONFIG_PATH_ENV: &str = "TASKBOARD_CONFIG_PATH";

const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_tab: Option<String>,
    pub confirm_status_changes: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_tab: Some(TaskStatus::ToDo.as_str().to_owned()),
            confirm_status_changes: Some(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub dir: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            dir: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` at the top and keep settings under [ui] and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Run `taskboard --print-example-config` for a template",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(start_tab) = &self.ui.start_tab
            && TaskStatus::parse(start_tab).is_none()
        {
            bail!(
                "ui.start_tab in {} must be one of TO_DO, IN_PROGRESS, DONE, DELETED, got {:?}",
                path.display(),
                start_tab
            );
        }

        if let Some(level) = &self.log.level
            && normalize_log_level(level).is_none()
        {
            bail!(
                "log.level in {} must be one of trace, debug, info, warn, error, got {:?}",
                path.display(),
                level
            );
        }

        if let Some(dir) = &self.log.dir
            && dir.trim().is_empty()
        {
            bail!(
                "log.dir in {} is empty; remove it to use the default log directory",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start_tab(&self) -> TaskStatus {
        self.ui
            .start_tab
            .as_deref()
            .and_then(TaskStatus::parse)
            .unwrap_or(TaskStatus::ToDo)
    }

    pub fn confirm_status_changes(&self) -> bool {
        self.ui.confirm_status_changes.unwrap_or(true)
    }

    pub fn log_level(&self) -> &'static str {
        self.log
            .level
            .as_deref()
            .and_then(normalize_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        match &self.log.dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => {
                let data_dir = dirs::data_local_dir().ok_or_else(|| {
                    anyhow!("cannot resolve local data directory; set [log].dir in the config")
                })?;
                Ok(data_dir.join(APP_NAME).join("logs"))
            }
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# taskboard config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# One of TO_DO, IN_PROGRESS, DONE, DELETED\nstart_tab = \"TO_DO\"\n# Ask before single-task status changes. Deletes and bulk changes always ask.\nconfirm_status_changes = true\n\n[log]\n# trace, debug, info, warn or error; {} overrides it\nlevel = \"{}\"\n# Optional. Default is platform data dir (for example ~/.local/share/taskboard/logs)\n# dir = \"/absolute/path/to/logs\"\n",
            path.display(),
            crate::logging::LOG_LEVEL_ENV,
            DEFAULT_LOG_LEVEL,
        )
    }
}
