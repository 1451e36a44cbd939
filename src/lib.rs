//! An expression tree engine for rendering and grading math quiz questions.
//!
//! A question is a [Document] of [Node]s - text, numbers, fractions, exponents, algebraic runs,
//! equations, answer slots and opaque rich content. Over that one data model sit several
//! independent interpreters:
//!   - [collect_inputs] finds the answer slots in canonical order.
//!   - [to_latex] compiles a node for an external math typesetter.
//!   - [to_speech_text] linearizes a node for an external speech engine.
//!   - [group] partitions a document into row/column layout groups.
//!   - [score] grades an [AnswerSet] against a document.
//!
//! New nodes are authored with [append], which validates a [Draft](builder::Draft) and returns a
//! new document. Nothing in this crate performs I/O or keeps state between calls; warnings are
//! reported through the [log] facade.

pub mod error;
pub mod node;
pub mod flatten;
pub mod project;
pub mod projectors;
pub mod layout;
pub mod number;
pub mod score;
pub mod builder;
pub mod attempt;
pub mod settings;
pub mod cache;

#[cfg(test)]
mod tests;

pub use crate::{
    builder::{append, Draft, DraftKind},
    error::ShapeError,
    flatten::collect_inputs,
    layout::{group, Group, GroupKind},
    node::{Document, Node, NodeKind},
    projectors::{to_latex, to_speech_text},
    score::{score, AnswerSet, Score},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
