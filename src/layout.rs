//! Partitions a document's top-level nodes into row and column groups, using each node's
//! [layout hints](crate::node::LayoutHints).
//!
//! The grouper makes a single left-to-right pass with no lookahead. Nodes accumulate into a
//! pending group, which closes after a node that:
//!   - is placed on a new line,
//!   - has `break-after` continuation, or
//!   - is the last node of the document.
//!
//! A group is laid out in the direction of the container it was accumulated in. The first
//! container is a row; after a group closes, the next container is a column if the closing node
//! was placed on a new line, and a row otherwise.
//!
//! Groups are contiguous and in order, so concatenating them gives back the document.

use std::ops::Range;

use crate::node::{Continuation, Document, Node, Placement};

/// The direction a group's nodes are laid out in.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum GroupKind {
    Row,
    Column,
}

/// A contiguous run of a document's nodes, laid out together.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Group<'a> {
    pub kind: GroupKind,
    pub nodes: &'a [Node],
}

/// The position of a group within the node sequence it was computed from.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct GroupSpan {
    pub kind: GroupKind,
    pub range: Range<usize>,
}

impl GroupSpan {
    /// Resolves this span against the nodes it was computed from.
    pub fn resolve<'a>(&self, nodes: &'a [Node]) -> Group<'a> {
        Group { kind: self.kind, nodes: &nodes[self.range.clone()] }
    }
}

fn closes_group(node: &Node, is_last: bool) -> bool {
    node.layout.placement == Placement::NewLine
        || node.layout.continuation == Continuation::BreakAfter
        || is_last
}

/// Computes group boundaries for a sequence of nodes. An empty sequence has no groups.
pub fn group_spans(nodes: &[Node]) -> Vec<GroupSpan> {
    let mut spans = vec![];
    let mut container = GroupKind::Row;
    let mut start = 0;

    for (index, node) in nodes.iter().enumerate() {
        if !closes_group(node, index + 1 == nodes.len()) {
            continue;
        }

        spans.push(GroupSpan { kind: container, range: start..(index + 1) });
        start = index + 1;
        container = match node.layout.placement {
            Placement::NewLine => GroupKind::Column,
            Placement::Inline => GroupKind::Row,
        };
    }

    spans
}

/// Groups a document's top-level nodes for layout.
pub fn group(document: &Document) -> Vec<Group<'_>> {
    group_spans(document.nodes())
        .iter()
        .map(|span| span.resolve(document.nodes()))
        .collect()
}
