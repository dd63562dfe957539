mod api;
mod client;
mod helpers;
mod models;

pub use api::{CoreStats, DiskCache, Snapshot, TransferringItem, VfsStats};
pub use client::RcloneClient;
pub use models::{BusyState, GeneralStatus, TransferEntry, VfsStatus, NOT_AVAILABLE};
