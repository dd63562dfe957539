use serde::Deserialize;

/// Payload of `core/stats`. Only the fields the monitor displays are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreStats {
    #[serde(default)]
    pub elapsed_time: Option<f64>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub transferring: Option<Vec<TransferringItem>>,
}

/// One in-flight transfer from `core/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferringItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bytes: Option<f64>,
    /// rclone reports `-1` when the size is not known.
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub speed_avg: Option<f64>,
    #[serde(default)]
    pub eta: Option<f64>,
}

/// Payload of `vfs/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VfsStats {
    #[serde(default)]
    pub disk_cache: Option<DiskCache>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskCache {
    #[serde(default)]
    pub uploads_in_progress: Option<u64>,
    #[serde(default)]
    pub uploads_queued: Option<u64>,
    #[serde(default)]
    pub bytes_used: Option<u64>,
    #[serde(default)]
    pub out_of_space: Option<bool>,
}
