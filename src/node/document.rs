//! Documents: the immutable, ordered top-level node sequences which make up one question.

use std::{collections::BTreeSet, ops::Index, sync::Arc};

use crate::{flatten::Flattenable, node::{InputSlot, Node}};

/// An ordered sequence of top-level nodes forming one renderable question. The order is the
/// reading order, the LaTeX concatenation order, and the layout order.
///
/// A `Document` is an immutable snapshot. Cloning one is cheap and shares the same snapshot;
/// "modifying" a document (see [append](crate::builder::append)) produces a new snapshot and
/// leaves every existing handle untouched.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Arc<Vec<Node>>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes: Arc::new(nodes) }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Returns true if both handles refer to the very same snapshot. Structurally equal documents
    /// built separately are equal under `==`, but are not the same snapshot.
    pub fn same_snapshot(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Returns a new snapshot with `node` added at the end.
    pub(crate) fn with_appended(&self, node: Node) -> Document {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend(self.nodes.iter().cloned());
        nodes.push(node);
        Document::new(nodes)
    }

    /// Finds the answer slot with the given id. If the id is (wrongly) used more than once, the
    /// first slot in canonical order is returned.
    pub fn input(&self, id: &str) -> Option<&InputSlot> {
        self.collect_inputs().into_iter().find(|slot| slot.id == id)
    }

    /// The ids of every answer slot, in the order focus should move through them.
    pub fn focus_order(&self) -> Vec<&str> {
        self.collect_inputs().into_iter().map(|slot| slot.id.as_str()).collect()
    }

    /// Lists every input id which appears more than once, in the order the repeats are found.
    /// Content sources are responsible for unique ids, so this is empty for a well-formed
    /// document.
    pub fn duplicate_input_ids(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut duplicates = vec![];
        for slot in self.collect_inputs() {
            if !seen.insert(slot.id.as_str()) && !duplicates.contains(&slot.id.as_str()) {
                duplicates.push(slot.id.as_str());
            }
        }
        duplicates
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.same_snapshot(other) || self.nodes == other.nodes
    }
}

impl Eq for Document {}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Document {
    type Output = Node;

    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
