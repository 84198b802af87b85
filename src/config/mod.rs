// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: the defaults merged into
//! every toast and the animation timings, loaded from and saved to a
//! `toast.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::notifications::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.toast.position = Position::Bottom;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notifications::{Position, ToastType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

/// Values applied to every option a caller leaves unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    #[serde(rename = "type")]
    pub toast_type: ToastType,
    pub duration_ms: u64,
    pub position: Position,
    pub auto_close: bool,
    pub close_on_press: bool,
    pub show_progress: bool,
}

impl ToastDefaults {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            toast_type: ToastType::Info,
            duration_ms: DEFAULT_DURATION_MS,
            position: Position::Top,
            auto_close: DEFAULT_AUTO_CLOSE,
            close_on_press: DEFAULT_CLOSE_ON_PRESS,
            show_progress: DEFAULT_SHOW_PROGRESS,
        }
    }
}

/// Entrance and exit timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enter_fade_ms: u64,
    pub exit_ms: u64,
}

impl AnimationConfig {
    #[must_use]
    pub fn enter_fade(&self) -> Duration {
        Duration::from_millis(self.enter_fade_ms)
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_fade_ms: DEFAULT_ENTER_FADE_MS,
            exit_ms: DEFAULT_EXIT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub toast: ToastDefaults,
    pub animation: AnimationConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid toast config {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
