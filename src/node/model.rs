//! The definition of the node tree itself.

use serde::{Deserialize, Serialize};

use crate::{error::ShapeError, node::NodeRecord};

/// Where a node starts relative to the node before it.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Continue on the same line as the previous node.
    #[default]
    Inline,

    /// Start a new line. The node closes the group it is in, and the following group is laid out
    /// as a column.
    NewLine,
}

/// Whether the group containing a node carries on after it.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Continuation {
    #[default]
    Continue,

    /// Close the current group after this node.
    BreakAfter,
}

/// Layout hints carried by every node. These are only read by the
/// [layout grouper](crate::layout); no projection looks at them.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Hash)]
pub struct LayoutHints {
    pub placement: Placement,
    pub continuation: Continuation,
}

/// A fill-in-the-blank answer slot.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct InputSlot {
    /// Identifies the slot within its document. Answers are keyed by this.
    pub id: String,

    /// The answer which is marked as correct.
    pub expected: String,
}

/// The kind-specific content of a [Node].
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub enum NodeKind {
    /// Literal text.
    Text(String),

    /// A literal number, kept exactly as written.
    Decimal(String),

    /// A fraction. `markup`, if present, replaces the compiled children in LaTeX output only.
    Fraction {
        numerator: Box<Node>,
        denominator: Box<Node>,
        markup: Option<String>,
    },

    /// A power. `markup` behaves as for `Fraction`.
    Exponent {
        base: Box<Node>,
        exponent: Box<Node>,
        markup: Option<String>,
    },

    /// A run of nodes forming an expression, such as `3x+1`.
    Algebraic {
        children: Vec<Node>,
        markup: Option<String>,
    },

    /// A run of nodes forming an equation. When `markup` is present, LaTeX output wraps it in
    /// display delimiters.
    Equation {
        children: Vec<Node>,
        markup: Option<String>,
    },

    /// An answer slot.
    Input(InputSlot),

    /// Opaque content for an external rich-text renderer. The payload is never interpreted,
    /// except for stripping tags when it is read aloud.
    Rich(String),

    /// A node whose kind tag was not recognised when it was loaded. Every projection renders
    /// this as nothing, and logs a warning.
    Unrecognized(String),
}

/// One element of an expression tree.
///
/// Nodes (de)serialize through [NodeRecord], so loading a malformed record fails with the same
/// [ShapeError] as the constructors below.
#[derive(PartialEq, Eq, Debug, Clone, Hash, Serialize, Deserialize)]
#[serde(try_from = "NodeRecord", into = "NodeRecord")]
pub struct Node {
    pub kind: NodeKind,
    pub layout: LayoutHints,
}

/// Takes exactly two nodes out of `children`, or fails with the child count.
fn exactly_two(kind: &'static str, children: Vec<Node>) -> Result<(Box<Node>, Box<Node>), ShapeError> {
    let got = children.len();
    let mut children = children.into_iter();
    match (children.next(), children.next(), children.next()) {
        (Some(first), Some(second), None) => Ok((Box::new(first), Box::new(second))),
        _ => Err(ShapeError::ChildCount { kind, got }),
    }
}

impl Node {
    /// Wraps a kind with default layout hints.
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, layout: LayoutHints::default() }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    pub fn decimal(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Decimal(content.into()))
    }

    pub fn rich(payload: impl Into<String>) -> Self {
        Self::new(NodeKind::Rich(payload.into()))
    }

    pub fn algebraic(children: Vec<Node>, markup: Option<String>) -> Self {
        Self::new(NodeKind::Algebraic { children, markup })
    }

    pub fn equation(children: Vec<Node>, markup: Option<String>) -> Self {
        Self::new(NodeKind::Equation { children, markup })
    }

    /// Creates a fraction from `[numerator, denominator]`. Any other number of children is
    /// rejected.
    pub fn fraction(children: Vec<Node>, markup: Option<String>) -> Result<Self, ShapeError> {
        let (numerator, denominator) = exactly_two(NodeKind::FRACTION, children)?;
        Ok(Self::new(NodeKind::Fraction { numerator, denominator, markup }))
    }

    /// Creates an exponent from `[base, exponent]`. Any other number of children is rejected.
    pub fn exponent(children: Vec<Node>, markup: Option<String>) -> Result<Self, ShapeError> {
        let (base, exponent) = exactly_two(NodeKind::EXPONENT, children)?;
        Ok(Self::new(NodeKind::Exponent { base, exponent, markup }))
    }

    /// Creates an answer slot. The id may not be blank; uniqueness is a property of the document
    /// and is checked when the node is appended to one.
    pub fn input(id: impl Into<String>, expected: impl Into<String>) -> Result<Self, ShapeError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShapeError::BlankInputId);
        }

        Ok(Self::new(NodeKind::Input(InputSlot { id, expected: expected.into() })))
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.layout.placement = placement;
        self
    }

    pub fn with_continuation(mut self, continuation: Continuation) -> Self {
        self.layout.continuation = continuation;
        self
    }

    /// Shorthand for `with_placement(Placement::NewLine)`.
    pub fn on_new_line(self) -> Self {
        self.with_placement(Placement::NewLine)
    }

    /// Shorthand for `with_continuation(Continuation::BreakAfter)`.
    pub fn break_after(self) -> Self {
        self.with_continuation(Continuation::BreakAfter)
    }

    /// The structural children of this node, in reading order. Leaf kinds, including `Rich`,
    /// have none.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Fraction { numerator: first, denominator: second, .. }
            | NodeKind::Exponent { base: first, exponent: second, .. }
                => vec![first.as_ref(), second.as_ref()],

            NodeKind::Algebraic { children, .. } | NodeKind::Equation { children, .. }
                => children.iter().collect(),

            NodeKind::Text(_) | NodeKind::Decimal(_) | NodeKind::Input(_)
            | NodeKind::Rich(_) | NodeKind::Unrecognized(_)
                => vec![],
        }
    }

    /// The override markup attached to this node, if any.
    pub fn markup(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Fraction { markup, .. }
            | NodeKind::Exponent { markup, .. }
            | NodeKind::Algebraic { markup, .. }
            | NodeKind::Equation { markup, .. }
                => markup.as_deref(),

            _ => None,
        }
    }
}

impl NodeKind {
    pub const TEXT: &'static str = "text";
    pub const DECIMAL: &'static str = "decimal";
    pub const FRACTION: &'static str = "fraction";
    pub const EXPONENT: &'static str = "exponent";
    pub const ALGEBRAIC: &'static str = "algebraic";
    pub const EQUATION: &'static str = "equation";
    pub const INPUT: &'static str = "input";
    pub const RICH: &'static str = "rich";

    /// The tag naming this kind, as used in records and error messages.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Text(_) => Self::TEXT,
            NodeKind::Decimal(_) => Self::DECIMAL,
            NodeKind::Fraction { .. } => Self::FRACTION,
            NodeKind::Exponent { .. } => Self::EXPONENT,
            NodeKind::Algebraic { .. } => Self::ALGEBRAIC,
            NodeKind::Equation { .. } => Self::EQUATION,
            NodeKind::Input(_) => Self::INPUT,
            NodeKind::Rich(_) => Self::RICH,
            NodeKind::Unrecognized(kind) => kind,
        }
    }
}
