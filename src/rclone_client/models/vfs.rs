use std::fmt;

use crate::readable::bytes_to_full;
use crate::rclone_client::api::VfsStats;

use super::NOT_AVAILABLE;

/// Summary of upload queue activity in the VFS cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusyState {
    NotBusy,
    Busy,
    #[default]
    Unknown,
}

impl BusyState {
    /// Unknown if either counter is missing, not busy only when both are zero.
    pub fn from_counts(in_progress: Option<u64>, queued: Option<u64>) -> Self {
        match (in_progress, queued) {
            (Some(0), Some(0)) => BusyState::NotBusy,
            (Some(_), Some(_)) => BusyState::Busy,
            _ => BusyState::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusyState::NotBusy => "not busy",
            BusyState::Busy => "busy",
            BusyState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BusyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// VFS cache state from `vfs/stats`, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsStatus {
    pub busy: BusyState,
    pub uploads_in_progress: String,
    pub uploads_queued: String,
    pub cache_used: String,
    pub out_of_space: String,
}

impl VfsStatus {
    pub fn from_vfs(vfs: &VfsStats) -> Self {
        let cache = vfs.disk_cache.clone().unwrap_or_default();

        Self {
            busy: BusyState::from_counts(cache.uploads_in_progress, cache.uploads_queued),
            uploads_in_progress: count_or_placeholder(cache.uploads_in_progress),
            uploads_queued: count_or_placeholder(cache.uploads_queued),
            cache_used: cache
                .bytes_used
                .map(bytes_to_full)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            out_of_space: match cache.out_of_space {
                Some(true) => "Yes".to_string(),
                Some(false) => "No".to_string(),
                None => NOT_AVAILABLE.to_string(),
            },
        }
    }
}

fn count_or_placeholder(count: Option<u64>) -> String {
    count
        .map(|value| value.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rclone_client::api::DiskCache;

    fn vfs(in_progress: Option<u64>, queued: Option<u64>) -> VfsStats {
        VfsStats {
            disk_cache: Some(DiskCache {
                uploads_in_progress: in_progress,
                uploads_queued: queued,
                bytes_used: Some(2048),
                out_of_space: Some(false),
            }),
        }
    }

    #[test]
    fn idle_queue_is_not_busy() {
        let status = VfsStatus::from_vfs(&vfs(Some(0), Some(0)));
        assert_eq!(status.busy, BusyState::NotBusy);
        assert_eq!(status.busy.to_string(), "not busy");
        assert_eq!(status.cache_used, "2KB 0B");
        assert_eq!(status.out_of_space, "No");
    }

    #[test]
    fn missing_counter_is_unknown() {
        assert_eq!(BusyState::from_counts(None, Some(0)), BusyState::Unknown);
        assert_eq!(BusyState::from_counts(Some(3), None), BusyState::Unknown);

        let status = VfsStatus::from_vfs(&vfs(None, Some(2)));
        assert_eq!(status.busy, BusyState::Unknown);
        assert_eq!(status.uploads_in_progress, NOT_AVAILABLE);
        assert_eq!(status.uploads_queued, "2");
    }

    #[test]
    fn any_nonzero_counter_is_busy() {
        assert_eq!(BusyState::from_counts(Some(1), Some(0)), BusyState::Busy);
        assert_eq!(BusyState::from_counts(Some(0), Some(4)), BusyState::Busy);
    }

    #[test]
    fn absent_disk_cache_is_all_placeholders() {
        let status = VfsStatus::from_vfs(&VfsStats::default());
        assert_eq!(status.busy, BusyState::Unknown);
        assert_eq!(status.cache_used, NOT_AVAILABLE);
        assert_eq!(status.out_of_space, NOT_AVAILABLE);
    }
}
