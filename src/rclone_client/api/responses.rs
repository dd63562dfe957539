use super::types::{CoreStats, VfsStats};

/// Both stats payloads fetched during a single poll cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub core: CoreStats,
    pub vfs: VfsStats,
}
