use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::MonitorError;

use super::{paths, Config};

pub const RC_ADDR_ENV: &str = "RCLONE_RC_ADDR";

impl Config {
    /// Load configuration from config.json in the app directory
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let mut config = match paths::get_config_path() {
            Ok(path) => Self::load_from(&path).await,
            Err(err) => {
                warn!(error = ?err, "Failed to locate config.json, using defaults");
                Self::default()
            }
        };

        if let Ok(addr) = env::var(RC_ADDR_ENV) {
            config.apply_addr_override(&addr);
        }

        info!(
            rc_addr = %config.rc_addr,
            interval_ms = config.poll_interval_ms,
            "Loaded configuration"
        );
        config
    }

    /// Load configuration from an explicit path, falling back to defaults on any error.
    pub async fn load_from(path: &Path) -> Self {
        match Self::try_load(path).await {
            Ok(config) => config,
            Err(err) => {
                warn!(error = ?err, path = %path.display(), "Failed to load config.json, using defaults");
                Self::default()
            }
        }
    }

    async fn try_load(path: &Path) -> Result<Self, MonitorError> {
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .await
            .map_err(|err| MonitorError::Config(format!("Failed to read config file: {err}")))?;

        serde_json::from_str(&contents)
            .map_err(|err| MonitorError::Config(format!("Failed to parse config.json: {err}")))
    }

    pub(crate) fn apply_addr_override(&mut self, addr: &str) {
        let trimmed = addr.trim();
        if !trimmed.is_empty() {
            self.rc_addr = trimmed.to_string();
        }
    }
}
