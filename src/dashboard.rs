use std::fmt;

use chrono::{DateTime, Local};

use crate::rclone_client::{GeneralStatus, Snapshot, TransferEntry, VfsStatus, NOT_AVAILABLE};
use crate::view::{InfoList, NodeIds, ReconcileReport, Row, TransferList};

pub const STATE: &str = "State";
pub const LAST_UPDATE: &str = "Last update";
pub const RUNNING_TIME: &str = "Running time";
pub const TOTAL_BYTES: &str = "Total transferred";

pub const BUSY: &str = "Busy";
pub const UPLOADS_IN_PROGRESS: &str = "Uploads in progress";
pub const UPLOADS_QUEUED: &str = "Uploads queued";
pub const CACHE_USED: &str = "Cache used";
pub const OUT_OF_SPACE: &str = "Out of space";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of the most recent poll cycle, shown in the State row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    Starting,
    Updating,
    Ok,
    Failed(String),
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollState::Starting => f.write_str("Starting"),
            PollState::Updating => f.write_str("Updating..."),
            PollState::Ok => f.write_str("OK"),
            PollState::Failed(reason) => write!(f, "Failed, {reason}"),
        }
    }
}

/// Everything the monitor displays.
#[derive(Debug)]
pub struct Dashboard {
    ids: NodeIds,
    general: InfoList,
    vfs: InfoList,
    transfers: TransferList,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        let mut dashboard = Self {
            ids: NodeIds::default(),
            general: InfoList::default(),
            vfs: InfoList::default(),
            transfers: TransferList::default(),
        };

        let general = vec![
            Row::new(STATE, PollState::Starting.to_string()),
            Row::new(LAST_UPDATE, NOT_AVAILABLE),
            Row::new(RUNNING_TIME, NOT_AVAILABLE),
            Row::new(TOTAL_BYTES, NOT_AVAILABLE),
        ];
        dashboard.general.set_data(&general, &mut dashboard.ids);

        let vfs = vfs_rows(&VfsStatus::from_vfs(&Default::default()));
        dashboard.vfs.set_data(&vfs, &mut dashboard.ids);
        dashboard
    }

    pub fn general(&self) -> &InfoList {
        &self.general
    }

    pub fn vfs(&self) -> &InfoList {
        &self.vfs
    }

    pub fn transfers(&self) -> &TransferList {
        &self.transfers
    }

    pub fn state(&self) -> &str {
        self.general.value(STATE).unwrap_or(NOT_AVAILABLE)
    }

    pub fn begin_update(&mut self) -> ReconcileReport {
        self.set_state(PollState::Updating)
    }

    /// Record a failed cycle. Only the State row changes.
    pub fn fail(&mut self, reason: &impl fmt::Display) -> ReconcileReport {
        self.set_state(PollState::Failed(reason.to_string()))
    }

    /// Project a snapshot onto every section.
    pub fn apply(&mut self, snapshot: &Snapshot, now: DateTime<Local>) -> ReconcileReport {
        let general = GeneralStatus::from_core(&snapshot.core);
        let rows = vec![
            Row::new(STATE, PollState::Ok.to_string()),
            Row::new(LAST_UPDATE, now.format(TIMESTAMP_FORMAT).to_string()),
            Row::new(RUNNING_TIME, general.running_time),
            Row::new(TOTAL_BYTES, general.total_bytes),
        ];
        let mut report = self.general.set_data(&rows, &mut self.ids);

        let vfs = VfsStatus::from_vfs(&snapshot.vfs);
        report.merge(self.vfs.set_data(&vfs_rows(&vfs), &mut self.ids));

        let entries = snapshot
            .core
            .transferring
            .as_deref()
            .map(TransferEntry::collect)
            .unwrap_or_default();
        report.merge(self.transfers.set_data(&entries, &mut self.ids));

        report
    }

    fn set_state(&mut self, state: PollState) -> ReconcileReport {
        self.general.patch(STATE, &state.to_string(), &mut self.ids)
    }
}

fn vfs_rows(vfs: &VfsStatus) -> Vec<Row> {
    vec![
        Row::new(BUSY, vfs.busy.label()),
        Row::new(UPLOADS_IN_PROGRESS, vfs.uploads_in_progress.clone()),
        Row::new(UPLOADS_QUEUED, vfs.uploads_queued.clone()),
        Row::new(CACHE_USED, vfs.cache_used.clone()),
        Row::new(OUT_OF_SPACE, vfs.out_of_space.clone()),
    ]
}
