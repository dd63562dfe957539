use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::types::MonitorError;

use super::api::{CoreStats, Snapshot, VfsStats};
use super::helpers::{extract_rc_error, join_url, origin_for, CORE_STATS_PATH, VFS_STATS_PATH};

/// HTTP client for the rclone remote-control stats endpoints.
#[derive(Clone)]
pub struct RcloneClient {
    http: Client,
    base_url: String,
}

impl RcloneClient {
    pub fn new(config: &Config) -> Result<Self, MonitorError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(MonitorError::Http)?;

        Ok(Self {
            http,
            base_url: origin_for(&config.rc_addr),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn compose_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn core_stats(&self) -> Result<CoreStats, MonitorError> {
        let stats: Option<CoreStats> = self.post_json(CORE_STATS_PATH).await?;
        Ok(stats.unwrap_or_default())
    }

    pub async fn vfs_stats(&self) -> Result<VfsStats, MonitorError> {
        let stats: Option<VfsStats> = self.post_json(VFS_STATS_PATH).await?;
        Ok(stats.unwrap_or_default())
    }

    /// Fetch core stats then VFS stats. Either failing fails the snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, MonitorError> {
        let core = self.core_stats().await?;
        let vfs = self.vfs_stats().await?;
        Ok(Snapshot { core, vfs })
    }

    async fn post_json<T>(&self, path: &str) -> Result<T, MonitorError>
    where
        T: DeserializeOwned,
    {
        let url = self.compose_url(path);
        debug!(url = %url, "Querying rc endpoint");

        let response = self.http.post(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MonitorError::Rclone(match extract_rc_error(&body) {
                Some(message) => format!("{path} returned {status}: {message}"),
                None => format!("{path} returned {status}"),
            }));
        }

        response.json::<T>().await.map_err(MonitorError::Http)
    }
}
