use std::{fs, path::Path};

use anyhow::Context;
use board_core::log::DEFAULT_LOG_CAPACITY;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "chipboard.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub board_length: usize,
    pub log_filter: String,
    pub log_capacity: usize,
    pub debug_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_length: 4,
            log_filter: "info".into(),
            log_capacity: DEFAULT_LOG_CAPACITY,
            debug_snapshots: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    board_length: Option<usize>,
    log_filter: Option<String>,
    log_capacity: Option<usize>,
    debug_snapshots: Option<bool>,
}

/// Defaults, then the settings file, then the process environment.
///
/// An explicit `path` must exist; without one `chipboard.toml` in the working directory is
/// read if present.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        let file_cfg: FileSettings = toml::from_str(&raw).context("invalid config file")?;
        apply_file(&mut settings, file_cfg);
    }

    apply_env(&mut settings, env);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.board_length.filter(|len| *len > 0) {
        settings.board_length = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.log_capacity {
        settings.log_capacity = v;
    }
    if let Some(v) = file_cfg.debug_snapshots {
        settings.debug_snapshots = v;
    }
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    for key in ["CHIPBOARD_BOARD_LENGTH", "APP__BOARD_LENGTH"] {
        if let Some(parsed) = env(key).and_then(|v| v.trim().parse::<usize>().ok()) {
            if parsed > 0 {
                settings.board_length = parsed;
            }
        }
    }

    if let Some(v) = env("CHIPBOARD_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(parsed) = env("APP__LOG_CAPACITY").and_then(|v| v.trim().parse::<usize>().ok()) {
        settings.log_capacity = parsed;
    }

    if let Some(v) = env("APP__DEBUG_SNAPSHOTS") {
        match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => settings.debug_snapshots = true,
            "0" | "false" | "no" | "off" => settings.debug_snapshots = false,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
