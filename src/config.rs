use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_SECRET_KEY};

/// Configuration file structure for the Orchestra client.
///
/// Lets users save connection settings and pagination defaults instead
/// of repeating them as CLI flags. Loaded from `./orchestra.toml` or an
/// explicitly specified path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Orchestra API bearer token
    pub token: Option<String>,

    /// Orchestra API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Secret name resolved through the credential provider when no
    /// token is given directly
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Default page number for paginated calls
    #[serde(default = "default_page")]
    pub page: u32,

    /// Default page size for paginated calls
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            secret_key: default_secret_key(),
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    100
}

impl Config {
    /// Load configuration from a file.
    ///
    /// With an explicit path the file must exist and parse. Without
    /// one, `./orchestra.toml` is used if present, otherwise defaults
    /// are returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let candidate = Path::new("orchestra.toml");
        if candidate.exists() {
            return Self::load_from_path(candidate);
        }

        Ok(Self::default())
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}
