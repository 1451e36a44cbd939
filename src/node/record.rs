//! The loosely-typed record form of a node, as handed over by a content source.
//!
//! A record is a flat bag of optional fields plus a `kind` tag, which is how question content is
//! usually authored and stored, e.g. as JSON:
//!
//! ```json
//! { "kind": "fraction", "children": [
//!     { "kind": "decimal", "value": "3" },
//!     { "kind": "decimal", "value": "4" }
//! ] }
//! ```
//!
//! Converting a record into a [Node] goes through the same constructors as building one by hand,
//! so shape rules are enforced on load. A record with a `kind` the engine does not know becomes a
//! [NodeKind::Unrecognized] node rather than an error, so one bad node cannot stop a whole
//! question from loading.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::ShapeError, node::{Continuation, Document, InputSlot, LayoutHints, Node, NodeKind, Placement}};

#[derive(PartialEq, Eq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The only required field. A record without one is malformed, not unrecognized.
    pub kind: String,

    /// Literal content of `text` and `decimal` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    #[serde(default, skip_serializing_if = "is_default")]
    pub placement: Placement,

    #[serde(default, skip_serializing_if = "is_default")]
    pub continuation: Continuation,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

fn required(kind: &'static str, field: &'static str, value: Option<String>) -> Result<String, ShapeError> {
    value.ok_or(ShapeError::MissingField { kind, field })
}

impl TryFrom<NodeRecord> for Node {
    type Error = ShapeError;

    fn try_from(record: NodeRecord) -> Result<Self, Self::Error> {
        let NodeRecord { kind, value, children, markup, id, expected, payload, placement, continuation } = record;

        let convert_children = || children
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>();

        let node = match kind.as_str() {
            NodeKind::TEXT => Node::text(required(NodeKind::TEXT, "value", value)?),
            NodeKind::DECIMAL => Node::decimal(required(NodeKind::DECIMAL, "value", value)?),
            NodeKind::FRACTION => Node::fraction(convert_children()?, markup)?,
            NodeKind::EXPONENT => Node::exponent(convert_children()?, markup)?,
            NodeKind::ALGEBRAIC => Node::algebraic(convert_children()?, markup),
            NodeKind::EQUATION => Node::equation(convert_children()?, markup),
            NodeKind::INPUT => Node::input(
                required(NodeKind::INPUT, "id", id)?,
                required(NodeKind::INPUT, "expected", expected)?,
            )?,
            NodeKind::RICH => Node::rich(required(NodeKind::RICH, "payload", payload)?),

            _ => {
                debug!("loading record of unknown kind `{}` as an unrecognized node", kind);
                Node::new(NodeKind::Unrecognized(kind))
            }
        };

        Ok(node.with_placement(placement).with_continuation(continuation))
    }
}

impl From<Node> for NodeRecord {
    fn from(node: Node) -> Self {
        let Node { kind, layout: LayoutHints { placement, continuation } } = node;
        let mut record = NodeRecord {
            kind: kind.name().to_string(),
            placement,
            continuation,
            ..NodeRecord::default()
        };

        match kind {
            NodeKind::Text(value) | NodeKind::Decimal(value) => record.value = Some(value),

            NodeKind::Fraction { numerator: first, denominator: second, markup }
            | NodeKind::Exponent { base: first, exponent: second, markup } => {
                record.children = vec![(*first).into(), (*second).into()];
                record.markup = markup;
            }

            NodeKind::Algebraic { children, markup } | NodeKind::Equation { children, markup } => {
                record.children = children.into_iter().map(NodeRecord::from).collect();
                record.markup = markup;
            }

            NodeKind::Input(InputSlot { id, expected }) => {
                record.id = Some(id);
                record.expected = Some(expected);
            }

            NodeKind::Rich(payload) => record.payload = Some(payload),

            NodeKind::Unrecognized(_) => (),
        }

        record
    }
}

impl Serialize for Document {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().cloned().map(NodeRecord::from))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Document::new(Vec::<Node>::deserialize(deserializer)?))
    }
}

impl Document {
    /// Loads a document from a JSON array of node records.
    pub fn from_json(json: &str) -> Result<Document, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Writes this document as a JSON array of node records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
