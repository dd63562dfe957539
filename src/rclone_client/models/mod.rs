mod general;
mod transfer;
mod vfs;

pub use general::GeneralStatus;
pub use transfer::TransferEntry;
pub use vfs::{BusyState, VfsStatus};

/// Rendered in place of any value the daemon did not report.
pub const NOT_AVAILABLE: &str = "N/A";
