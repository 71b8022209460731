use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use url::Url;

use crate::capture::CaptureSettings;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    #[serde(default = "default_ticks_per_symbol")]
    pub ticks_per_symbol: usize,
    #[serde(default = "default_min_symbols")]
    pub min_symbols: usize,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    #[serde(default = "default_session_deadline_secs")]
    pub session_deadline_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_ws_url() -> String {
    "ws://localhost:7999/ws".to_string()
}

fn default_ticks_per_symbol() -> usize {
    20
}

fn default_min_symbols() -> usize {
    3
}

fn default_read_timeout_secs() -> u64 {
    5
}

fn default_session_deadline_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            ticks_per_symbol: default_ticks_per_symbol(),
            min_symbols: default_min_symbols(),
            read_timeout_secs: default_read_timeout_secs(),
            session_deadline_secs: default_session_deadline_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl CaptureConfig {
    pub fn settings(&self) -> CaptureSettings {
        CaptureSettings {
            ticks_per_symbol: self.ticks_per_symbol,
            min_symbols: self.min_symbols,
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            session_deadline: Duration::from_secs(self.session_deadline_secs),
        }
    }
}

impl Config {
    /// Load `config/default.toml` when present, falling back to built-in
    /// defaults otherwise. `QUOTE_AUDIT_WS_URL` (environment or `.env`)
    /// overrides the endpoint either way.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let mut config = if config_path.exists() {
            let config_str = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&config_str).context("failed to parse config/default.toml")?
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var("QUOTE_AUDIT_WS_URL") {
            config.stream.ws_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.stream.ws_url)
            .with_context(|| format!("invalid stream.ws_url '{}'", self.stream.ws_url))?;
        if url.scheme() != "ws" && url.scheme() != "wss" {
            bail!(
                "invalid stream.ws_url '{}': scheme must be ws or wss",
                self.stream.ws_url
            );
        }
        if self.capture.ticks_per_symbol == 0 {
            bail!("capture.ticks_per_symbol must be > 0");
        }
        Ok(())
    }
}
