use crate::rclone_client::TransferEntry;

use super::reconcile::{reconcile, Keyed, NodeId, NodeIds, ReconcileReport, ViewNode};

impl Keyed for TransferEntry {
    fn key(&self) -> &str {
        &self.name
    }
}

/// A mounted card for one in-flight transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferCard {
    id: NodeId,
    entry: TransferEntry,
    progress: String,
    speed: String,
    eta: String,
}

impl TransferCard {
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Progress, speed and ETA tags in display order.
    pub fn tags(&self) -> [&str; 3] {
        [&self.progress, &self.speed, &self.eta]
    }
}

impl Keyed for TransferCard {
    fn key(&self) -> &str {
        &self.entry.name
    }
}

impl ViewNode for TransferCard {
    type Data = TransferEntry;

    fn mount(id: NodeId, data: &TransferEntry) -> Self {
        Self {
            id,
            entry: data.clone(),
            progress: data.progress_tag(),
            speed: data.speed_tag(),
            eta: data.eta_tag(),
        }
    }

    fn patch(&mut self, data: &TransferEntry) -> bool {
        let progress = data.progress_tag();
        let speed = data.speed_tag();
        let eta = data.eta_tag();
        let changed = progress != self.progress || speed != self.speed || eta != self.eta;

        self.entry = data.clone();
        self.progress = progress;
        self.speed = speed;
        self.eta = eta;
        changed
    }

    fn id(&self) -> NodeId {
        self.id
    }
}

/// Cards for every file currently transferring, keyed by file name.
#[derive(Debug, Default)]
pub struct TransferList {
    cards: Vec<TransferCard>,
}

impl TransferList {
    pub fn cards(&self) -> &[TransferCard] {
        &self.cards
    }

    pub fn data(&self) -> Vec<TransferEntry> {
        self.cards.iter().map(|card| card.entry.clone()).collect()
    }

    pub fn set_data(&mut self, entries: &[TransferEntry], ids: &mut NodeIds) -> ReconcileReport {
        reconcile(&mut self.cards, entries, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, bytes: f64) -> TransferEntry {
        TransferEntry {
            name: name.to_string(),
            bytes: Some(bytes),
            size: Some(4096.0),
            percentage: Some(bytes / 4096.0 * 100.0),
            speed_avg: Some(512.0),
            eta: None,
        }
    }

    #[test]
    fn finished_transfers_disappear() {
        let mut ids = NodeIds::default();
        let mut list = TransferList::default();
        list.set_data(&[entry("a", 1024.0), entry("b", 2048.0)], &mut ids);
        let b_id = list.cards()[1].id();

        let report = list.set_data(&[entry("b", 3072.0), entry("c", 0.0)], &mut ids);

        assert_eq!(report.removed, vec!["a"]);
        assert_eq!(report.changed, vec!["b"]);
        assert_eq!(report.added, vec!["c"]);
        assert_eq!(list.cards()[0].id(), b_id);
        assert_eq!(list.cards()[0].tags(), ["3.0KB/4.0KB (75%)", "512.0B/s", "ETA: N/A"]);
        assert_eq!(list.cards()[1].name(), "c");
    }

    #[test]
    fn invisible_changes_are_not_reported() {
        let mut ids = NodeIds::default();
        let mut list = TransferList::default();
        list.set_data(&[entry("a", 1024.0)], &mut ids);

        // 1025 bytes still renders as 1.0KB and 25%
        let report = list.set_data(&[entry("a", 1025.0)], &mut ids);

        assert!(report.is_empty());
        assert_eq!(list.data()[0].bytes, Some(1025.0));
    }
}
