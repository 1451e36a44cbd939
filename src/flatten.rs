//! Defines and implements the [Flattenable] trait, for collecting the answer slots of a tree.

use crate::node::{Document, InputSlot, Node, NodeKind};

/// Implemented by types which contain answer slots.
pub trait Flattenable {
    /// Returns every answer slot in this tree, in canonical order: depth-first, pre-order,
    /// left-to-right. This is the order focus moves through the slots, and the order answers are
    /// checked in.
    ///
    /// Every structural child is visited whether or not its parent has override markup. The
    /// payload of a `Rich` node is opaque and is never searched.
    fn collect_inputs(&self) -> Vec<&InputSlot> {
        let mut slots = vec![];
        self.collect_inputs_into(&mut slots);
        slots
    }

    /// Appends this tree's answer slots to `slots`, in canonical order.
    fn collect_inputs_into<'a>(&'a self, slots: &mut Vec<&'a InputSlot>);
}

impl Flattenable for Node {
    fn collect_inputs_into<'a>(&'a self, slots: &mut Vec<&'a InputSlot>) {
        match &self.kind {
            NodeKind::Input(slot) => slots.push(slot),

            NodeKind::Fraction { numerator: first, denominator: second, .. }
            | NodeKind::Exponent { base: first, exponent: second, .. } => {
                first.collect_inputs_into(slots);
                second.collect_inputs_into(slots);
            }

            NodeKind::Algebraic { children, .. } | NodeKind::Equation { children, .. } => {
                for child in children {
                    child.collect_inputs_into(slots);
                }
            }

            NodeKind::Text(_) | NodeKind::Decimal(_) | NodeKind::Rich(_) | NodeKind::Unrecognized(_) => (),
        }
    }
}

impl Flattenable for [Node] {
    fn collect_inputs_into<'a>(&'a self, slots: &mut Vec<&'a InputSlot>) {
        for node in self {
            node.collect_inputs_into(slots);
        }
    }
}

impl Flattenable for Document {
    fn collect_inputs_into<'a>(&'a self, slots: &mut Vec<&'a InputSlot>) {
        self.nodes().collect_inputs_into(slots)
    }
}

/// Returns the answer slots of a document in canonical order. See [Flattenable::collect_inputs].
pub fn collect_inputs(document: &Document) -> Vec<&InputSlot> {
    document.collect_inputs()
}
