//! Building documents from authoring drafts.
//!
//! An authoring surface collects the values for a new node into a [Draft] and hands it to
//! [append]. The draft is checked against its kind's declared [Arity] before anything is
//! constructed; if it passes, the node is built and appended to a copy of the document. The
//! original document is never modified, so keeping old snapshots around gives undo for free.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::ShapeError, node::{Continuation, Document, Node, NodeKind, Placement}, number::is_decimal};

/// How many values a draft kind takes.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Arity {
    Single,
    Dual,
}

impl Arity {
    pub fn value_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Dual => 2,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Single => "single-value",
            Self::Dual => "dual-value",
        }
    }
}

/// The kinds of node which can be authored.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DraftKind {
    Text,
    Decimal,
    Fraction,
    Exponent,
    Algebraic,
    Equation,
    Input,
    Rich,
}

impl DraftKind {
    pub const ALL: [DraftKind; 8] = [
        Self::Text, Self::Decimal, Self::Fraction, Self::Exponent,
        Self::Algebraic, Self::Equation, Self::Input, Self::Rich,
    ];

    /// The declared arity of this kind:
    ///   - `Fraction` and `Exponent` take their two operands.
    ///   - `Input` takes an id and an expected answer.
    ///   - Everything else takes one value. `Algebraic` and `Equation` values are split into
    ///     children (see [tokenize]).
    pub fn arity(&self) -> Arity {
        match self {
            Self::Fraction | Self::Exponent | Self::Input => Arity::Dual,
            Self::Text | Self::Decimal | Self::Algebraic | Self::Equation | Self::Rich => Arity::Single,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => NodeKind::TEXT,
            Self::Decimal => NodeKind::DECIMAL,
            Self::Fraction => NodeKind::FRACTION,
            Self::Exponent => NodeKind::EXPONENT,
            Self::Algebraic => NodeKind::ALGEBRAIC,
            Self::Equation => NodeKind::EQUATION,
            Self::Input => NodeKind::INPUT,
            Self::Rich => NodeKind::RICH,
        }
    }

    /// Returns true if nodes of this kind can carry override markup.
    pub fn accepts_markup(&self) -> bool {
        matches!(self, Self::Fraction | Self::Exponent | Self::Algebraic | Self::Equation)
    }
}

/// The pending values for a node which hasn't been built yet.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub kind: DraftKind,
    pub values: Vec<String>,

    #[serde(default)]
    pub markup: Option<String>,

    #[serde(default)]
    pub placement: Placement,

    #[serde(default)]
    pub continuation: Continuation,
}

impl Draft {
    pub fn new<S: Into<String>>(kind: DraftKind, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            values: values.into_iter().map(Into::into).collect(),
            markup: None,
            placement: Placement::default(),
            continuation: Continuation::default(),
        }
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(markup.into());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_continuation(mut self, continuation: Continuation) -> Self {
        self.continuation = continuation;
        self
    }

    /// Checks this draft against its kind's declared arity: exactly the declared number of
    /// values, none of them blank. Also rejects markup on kinds which can't carry it.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let kind = self.kind.name();
        let arity = self.kind.arity();

        if self.values.len() != arity.value_count() {
            return Err(ShapeError::ValueCount {
                kind,
                arity: arity.describe(),
                expected: arity.value_count(),
                got: self.values.len(),
            });
        }

        if let Some(index) = self.values.iter().position(|v| v.trim().is_empty()) {
            return Err(ShapeError::BlankValue { kind, arity: arity.describe(), index });
        }

        if self.markup.is_some() && !self.kind.accepts_markup() {
            return Err(ShapeError::MarkupNotSupported(kind));
        }

        Ok(())
    }
}

/// Splits an expression into nodes, in the manner of typing it on a calculator: each run of
/// digits and decimal points becomes one `Decimal` node, every other character becomes its own
/// `Text` node, and whitespace is dropped.
///
/// ```
/// # use quizexpr::{builder::tokenize, node::Node};
/// assert_eq!(
///     tokenize("12 + x"),
///     vec![Node::decimal("12"), Node::text("+"), Node::text("x")],
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Node> {
    let mut nodes = vec![];
    let mut number = String::new();

    for c in expression.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }

        if !number.is_empty() {
            nodes.push(Node::decimal(std::mem::take(&mut number)));
        }
        if !c.is_whitespace() {
            nodes.push(Node::text(c.to_string()));
        }
    }

    if !number.is_empty() {
        nodes.push(Node::decimal(number));
    }

    nodes
}

/// Builds the operand of a fraction or exponent: a `Decimal` if the value is a number, `Text`
/// otherwise.
fn operand(value: &str) -> Node {
    let value = value.trim();
    if is_decimal(value) {
        Node::decimal(value)
    } else {
        Node::text(value)
    }
}

/// Constructs the node for an already-validated draft.
fn build(document: &Document, draft: &Draft) -> Result<Node, ShapeError> {
    let values = &draft.values;
    let markup = draft.markup.clone();

    let node = match draft.kind {
        DraftKind::Text => Node::text(values[0].as_str()),
        DraftKind::Decimal => {
            if !is_decimal(&values[0]) {
                return Err(ShapeError::NotADecimal(values[0].clone()));
            }
            Node::decimal(values[0].trim())
        }
        DraftKind::Fraction => Node::fraction(vec![operand(&values[0]), operand(&values[1])], markup)?,
        DraftKind::Exponent => Node::exponent(vec![operand(&values[0]), operand(&values[1])], markup)?,
        DraftKind::Algebraic => Node::algebraic(tokenize(&values[0]), markup),
        DraftKind::Equation => Node::equation(tokenize(&values[0]), markup),
        DraftKind::Input => {
            let id = values[0].trim();
            if document.input(id).is_some() {
                return Err(ShapeError::DuplicateInputId(id.to_string()));
            }
            Node::input(id, values[1].as_str())?
        }
        DraftKind::Rich => Node::rich(values[0].as_str()),
    };

    Ok(node.with_placement(draft.placement).with_continuation(draft.continuation))
}

/// Validates `draft`, builds its node, and returns a new document with the node appended. On
/// failure, the error names the violated rule and `document` is left as it was.
pub fn append(document: &Document, draft: &Draft) -> Result<Document, ShapeError> {
    let node = draft.validate().and_then(|_| build(document, draft));
    match node {
        Ok(node) => Ok(document.with_appended(node)),
        Err(e) => {
            debug!("refused to append {} draft: {}", draft.kind.name(), e);
            Err(e)
        }
    }
}
