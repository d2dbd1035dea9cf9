use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "https://job-board-backend-m64n.onrender.com/api";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Bearer token that overrides any saved session
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// How long the "job posted" banner stays up
    pub banner_secs: u64,
    pub tick_rate_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("JOBBOARD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        let log_dir = env::var("JOBBOARD_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("logs"));

        Ok(Self {
            api: ApiConfig {
                base_url: env::var("JOBBOARD_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                timeout_secs: env::var("JOBBOARD_HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("JOBBOARD_HTTP_TIMEOUT_SECS must be a number of seconds")?,
                token: env::var("JOBBOARD_TOKEN").ok().filter(|t| !t.is_empty()),
            },
            storage: StorageConfig { data_dir, log_dir },
            ui: UiConfig {
                banner_secs: env::var("JOBBOARD_BANNER_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("JOBBOARD_BANNER_SECS must be a number of seconds")?,
                tick_rate_ms: env::var("JOBBOARD_TICK_MS")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .context("JOBBOARD_TICK_MS must be a number of milliseconds")?,
            },
        })
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, api_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.api.token = Some(token);
        }
        self
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobboard")
}
