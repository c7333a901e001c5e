use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default public PokéAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the catalog API
    pub api_base_url: String,

    /// Number of items fetched per page; fixed for the whole session
    pub page_size: u64,

    /// Event loop tick interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 10,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    /// Initialize configuration from defaults, config files and
    /// environment variables, in that order of increasing priority.
    pub async fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = match Self::load_from_file().await {
            Ok(file_config) => file_config,
            Err(e) => {
                debug!("No configuration file loaded: {}", e);
                Self::default()
            }
        };

        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        if let Ok(base_url) = std::env::var("RUSTDEX_BASE_URL") {
            self.api_base_url = base_url;
        }

        if let Ok(page_size_str) = std::env::var("RUSTDEX_PAGE_SIZE") {
            if let Ok(page_size) = page_size_str.parse() {
                self.page_size = page_size;
            }
        }

        if let Ok(tick_str) = std::env::var("RUSTDEX_TICK_RATE_MS") {
            if let Ok(tick_rate_ms) = tick_str.parse() {
                self.tick_rate_ms = tick_rate_ms;
            }
        }
    }

    /// Load configuration from rustdex.json files.
    ///
    /// Priority:
    /// 1. ./.rustdex.json
    /// 2. ./rustdex.json
    /// 3. $HOME/.config/rustdex/rustdex.json
    pub async fn load_from_file() -> Result<Self> {
        let mut config_paths = vec![
            PathBuf::from("./.rustdex.json"),
            PathBuf::from("./rustdex.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("rustdex").join("rustdex.json"));
        }

        for path in config_paths {
            if path.exists() {
                debug!("Loading configuration from: {}", path.display());
                let content = tokio::fs::read_to_string(&path).await?;
                let config: Self = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Err(anyhow::anyhow!("No configuration file found"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow::anyhow!("page_size must be at least 1"));
        }
        if self.page_size > 100 {
            return Err(anyhow::anyhow!("page_size must be at most 100"));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "api_base_url must be an http(s) URL, got: {}",
                self.api_base_url
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(anyhow::anyhow!("tick_rate_ms must be at least 1"));
        }
        Ok(())
    }
}
