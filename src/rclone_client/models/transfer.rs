use tracing::warn;

use crate::readable::{bytes_to_human, seconds_to_hms, ByteMode};
use crate::rclone_client::api::TransferringItem;

use super::NOT_AVAILABLE;

/// A file currently being transferred, keyed by its name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferEntry {
    pub name: String,
    pub bytes: Option<f64>,
    pub size: Option<f64>,
    pub percentage: Option<f64>,
    pub speed_avg: Option<f64>,
    pub eta: Option<f64>,
}

impl TransferEntry {
    pub fn from_item(item: &TransferringItem) -> Option<Self> {
        let name = item.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            bytes: item.bytes,
            size: item.size.filter(|size| *size >= 0.0),
            percentage: item.percentage,
            speed_avg: item.speed_avg,
            eta: item.eta,
        })
    }

    /// Project the `transferring` list, skipping entries without a file name.
    pub fn collect(items: &[TransferringItem]) -> Vec<Self> {
        items
            .iter()
            .filter_map(|item| {
                let entry = Self::from_item(item);
                if entry.is_none() {
                    warn!(?item, "Skipping transfer without a file name");
                }
                entry
            })
            .collect()
    }

    /// `1.5KB/3.0KB (50%)`
    pub fn progress_tag(&self) -> String {
        let percentage = self
            .percentage
            .filter(|value| value.is_finite())
            .map(|value| format!("{}%", value.floor() as i64))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        format!(
            "{}/{} ({})",
            short_or_placeholder(self.bytes),
            short_or_placeholder(self.size),
            percentage
        )
    }

    /// `1.0KB/s`
    pub fn speed_tag(&self) -> String {
        format!("{}/s", short_or_placeholder(self.speed_avg))
    }

    /// `ETA: 1m 5s`
    pub fn eta_tag(&self) -> String {
        let eta = self
            .eta
            .map(seconds_to_hms)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        format!("ETA: {eta}")
    }
}

fn short_or_placeholder(bytes: Option<f64>) -> String {
    bytes
        .map(|value| bytes_to_human(value, ByteMode::Short))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
