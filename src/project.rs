//! Projections of node trees into strings for external renderers.
//!
//! A [Projector] supplies one method per node kind, and gets a recursive [Projector::project]
//! which dispatches to them. Each projector decides for itself whether to honour override markup;
//! the markup is always passed in, so ignoring it is a visible choice in the implementation.
//!
//! Both shipped projectors live in [crate::projectors].

use log::warn;

use crate::node::{Document, InputSlot, Node, NodeKind};

pub trait Projector {
    /// A short name for this projector, used in log messages.
    fn name(&self) -> &'static str;

    fn text(&self, content: &str) -> String;

    fn decimal(&self, content: &str) -> String;

    fn fraction(&self, numerator: &Node, denominator: &Node, markup: Option<&str>) -> String;

    fn exponent(&self, base: &Node, exponent: &Node, markup: Option<&str>) -> String;

    fn algebraic(&self, children: &[Node], markup: Option<&str>) -> String;

    fn equation(&self, children: &[Node], markup: Option<&str>) -> String;

    fn input(&self, slot: &InputSlot) -> String;

    fn rich(&self, payload: &str) -> String;

    /// Combines the projections of a run of sibling nodes.
    fn join(&self, fragments: Vec<String>) -> String;

    /// Projects a node of a kind this projector does not know. This degrades to an empty
    /// fragment for that node alone, so the rest of the tree still renders.
    fn unrecognized(&self, kind: &str) -> String {
        warn!("{} projector does not recognise node kind `{}`; projecting it as nothing", self.name(), kind);
        String::new()
    }

    /// Projects a node tree into a string.
    fn project(&self, node: &Node) -> String {
        match &node.kind {
            NodeKind::Text(content) => self.text(content),
            NodeKind::Decimal(content) => self.decimal(content),
            NodeKind::Fraction { numerator, denominator, markup }
                => self.fraction(numerator, denominator, markup.as_deref()),
            NodeKind::Exponent { base, exponent, markup }
                => self.exponent(base, exponent, markup.as_deref()),
            NodeKind::Algebraic { children, markup } => self.algebraic(children, markup.as_deref()),
            NodeKind::Equation { children, markup } => self.equation(children, markup.as_deref()),
            NodeKind::Input(slot) => self.input(slot),
            NodeKind::Rich(payload) => self.rich(payload),
            NodeKind::Unrecognized(kind) => self.unrecognized(kind),
        }
    }

    /// Projects a run of sibling nodes and joins the results.
    fn project_all(&self, nodes: &[Node]) -> String {
        self.join(nodes.iter().map(|node| self.project(node)).collect())
    }

    /// Projects every top-level node of a document, in order, and joins the results.
    fn project_document(&self, document: &Document) -> String {
        self.project_all(document.nodes())
    }
}
