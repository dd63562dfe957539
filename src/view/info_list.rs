use super::reconcile::{reconcile, Keyed, NodeId, NodeIds, ReconcileReport, ViewNode};

/// A label with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub value: String,
}

impl Row {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Keyed for Row {
    fn key(&self) -> &str {
        &self.key
    }
}

/// A mounted label/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowNode {
    id: NodeId,
    key: String,
    value: String,
}

impl RowNode {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Keyed for RowNode {
    fn key(&self) -> &str {
        &self.key
    }
}

impl ViewNode for RowNode {
    type Data = Row;

    fn mount(id: NodeId, data: &Row) -> Self {
        Self {
            id,
            key: data.key.clone(),
            value: data.value.clone(),
        }
    }

    fn patch(&mut self, data: &Row) -> bool {
        if self.value == data.value {
            return false;
        }
        self.value.clone_from(&data.value);
        true
    }

    fn id(&self) -> NodeId {
        self.id
    }
}

/// Key/value display list with label-to-node association.
#[derive(Debug, Default)]
pub struct InfoList {
    nodes: Vec<RowNode>,
}

impl InfoList {
    pub fn nodes(&self) -> &[RowNode] {
        &self.nodes
    }

    pub fn get(&self, key: &str) -> Option<&RowNode> {
        self.nodes.iter().find(|node| node.key == key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).map(RowNode::value)
    }

    pub fn data(&self) -> Vec<Row> {
        self.nodes
            .iter()
            .map(|node| Row::new(node.key.clone(), node.value.clone()))
            .collect()
    }

    pub fn set_data(&mut self, rows: &[Row], ids: &mut NodeIds) -> ReconcileReport {
        reconcile(&mut self.nodes, rows, ids)
    }

    /// Update a single row, appending it if the label is new.
    pub fn patch(&mut self, key: &str, value: &str, ids: &mut NodeIds) -> ReconcileReport {
        let mut rows = self.data();
        match rows.iter_mut().find(|row| row.key == key) {
            Some(row) => row.value = value.to_string(),
            None => rows.push(Row::new(key, value)),
        }
        self.set_data(&rows, ids)
    }
}
