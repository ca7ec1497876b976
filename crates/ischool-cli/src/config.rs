//! Configuration loading for the iSchool CLI

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File};
use ischool_client::{ApiClient, DEFAULT_BASE_URL};
use ischool_core::ErrorMode;
use serde::{Deserialize, Serialize};

use crate::views::ViewOptions;

/// Configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// 0 disables the timeout
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub error_mode: ErrorMode,
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Uniform,
            width: 80,
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// `explicit` wins over the usual search locations.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = &config_path {
            tracing::debug!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path.clone()).required(explicit.is_some()));
        } else {
            tracing::debug!("No config file found, using defaults");
        }

        // Environment variables, e.g. ISCHOOL__API__BASE_URL ("__" also follows the prefix)
        builder = builder.add_source(
            Environment::with_prefix("ISCHOOL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Find the configuration file
    pub fn find_config_file() -> Option<PathBuf> {
        // Check in order: ISCHOOL_CONFIG env, ./ischool.toml, <config dir>/ischool/ischool.toml
        if let Ok(path) = std::env::var("ISCHOOL_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("ischool.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(dir) = dirs::config_dir() {
            let user_config = dir.join("ischool").join("ischool.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }

    pub fn client(&self) -> Result<ApiClient> {
        if self.api.timeout_seconds == 0 {
            return Ok(ApiClient::new(&self.api.base_url));
        }
        ApiClient::with_timeout(
            &self.api.base_url,
            Duration::from_secs(self.api.timeout_seconds),
        )
        .context("Failed to create API client")
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            width: self.display.width.max(40),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
