use crate::readable::{bytes_to_full, seconds_to_hms};
use crate::rclone_client::api::CoreStats;

use super::NOT_AVAILABLE;

/// Daemon-wide counters from `core/stats`, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralStatus {
    pub running_time: String,
    pub total_bytes: String,
}

impl GeneralStatus {
    pub fn from_core(core: &CoreStats) -> Self {
        Self {
            running_time: core
                .elapsed_time
                .map(seconds_to_hms)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            total_bytes: core
                .bytes
                .map(bytes_to_full)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reported_fields() {
        let status = GeneralStatus::from_core(&CoreStats {
            elapsed_time: Some(3725.4),
            bytes: Some(1536),
            transferring: None,
        });
        assert_eq!(status.running_time, "1h 2m 5s");
        assert_eq!(status.total_bytes, "1KB 512B");
    }

    #[test]
    fn large_byte_totals_are_exact() {
        let status = GeneralStatus::from_core(&CoreStats {
            bytes: Some((1u64 << 53) + 1),
            ..CoreStats::default()
        });
        assert_eq!(status.total_bytes, "8192TB 0GB 0MB 0KB 1B");
    }

    #[test]
    fn missing_fields_render_placeholder() {
        let status = GeneralStatus::from_core(&CoreStats::default());
        assert_eq!(status.running_time, NOT_AVAILABLE);
        assert_eq!(status.total_bytes, NOT_AVAILABLE);
    }
}
