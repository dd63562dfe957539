//! Incrementally reconciled display state.
//!
//! Each list keeps one node per key. Feeding a list new data removes nodes
//! whose key disappeared, patches surviving nodes in place (their node id is
//! preserved), and appends nodes for new keys in the order they arrive.

mod info_list;
mod reconcile;
mod transfer_list;

pub use info_list::{InfoList, Row, RowNode};
pub use reconcile::{reconcile, Keyed, NodeId, NodeIds, ReconcileReport, ViewNode};
pub use transfer_list::{TransferCard, TransferList};
