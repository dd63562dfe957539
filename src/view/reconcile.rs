use std::collections::{HashMap, HashSet};

pub type NodeId = u64;

/// Hands out node ids; ids are never reused.
#[derive(Debug, Default)]
pub struct NodeIds {
    last: NodeId,
}

impl NodeIds {
    pub fn allocate(&mut self) -> NodeId {
        self.last += 1;
        self.last
    }
}

pub trait Keyed {
    fn key(&self) -> &str;
}

/// A mounted node bound to one keyed data item.
pub trait ViewNode: Keyed {
    type Data: Keyed;

    fn mount(id: NodeId, data: &Self::Data) -> Self;

    /// Apply new data. Returns true if anything visible changed.
    fn patch(&mut self, data: &Self::Data) -> bool;

    fn id(&self) -> NodeId;
}

/// Keys touched by one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub removed: Vec<String>,
    pub changed: Vec<String>,
    pub added: Vec<String>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.changed.is_empty() && self.added.is_empty()
    }

    pub fn merge(&mut self, other: ReconcileReport) {
        self.removed.extend(other.removed);
        self.changed.extend(other.changed);
        self.added.extend(other.added);
    }
}

/// Bring `nodes` in line with `incoming`.
///
/// Stale nodes go first, then every incoming item either patches the node
/// holding its key or mounts a new node at the end. A key repeated within
/// `incoming` maps to a single node carrying the last occurrence.
pub fn reconcile<N>(nodes: &mut Vec<N>, incoming: &[N::Data], ids: &mut NodeIds) -> ReconcileReport
where
    N: ViewNode,
{
    let mut report = ReconcileReport::default();
    let wanted: HashSet<&str> = incoming.iter().map(Keyed::key).collect();

    nodes.retain(|node| {
        let keep = wanted.contains(node.key());
        if !keep {
            report.removed.push(node.key().to_string());
        }
        keep
    });

    let mut positions: HashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.key().to_string(), idx))
        .collect();

    for item in incoming {
        let key = item.key();
        match positions.get(key) {
            Some(&idx) => {
                let changed = nodes[idx].patch(item);
                let already_reported =
                    report.added.iter().chain(&report.changed).any(|seen| seen == key);
                if changed && !already_reported {
                    report.changed.push(key.to_string());
                }
            }
            None => {
                positions.insert(key.to_string(), nodes.len());
                nodes.push(N::mount(ids.allocate(), item));
                report.added.push(key.to_string());
            }
        }
    }

    report
}
