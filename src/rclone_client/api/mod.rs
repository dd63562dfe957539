mod responses;
mod types;

pub use responses::Snapshot;
pub use types::{CoreStats, DiskCache, TransferringItem, VfsStats};
