//! Error types. Each variant's message names the rule which was broken, so that an authoring
//! surface can show it to the user as-is.

use thiserror::Error;

/// A node or draft did not have the shape its kind requires. Raised synchronously by node
/// constructors and by [append](crate::builder::append); when one is returned, nothing was built.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ShapeError {
    #[error("{kind} requires exactly two children, but got {got}")]
    ChildCount { kind: &'static str, got: usize },

    #[error("{kind} is {arity} and takes {expected} value(s), but got {got}")]
    ValueCount { kind: &'static str, arity: &'static str, expected: usize, got: usize },

    #[error("{kind} is {arity}, but value {index} is blank")]
    BlankValue { kind: &'static str, arity: &'static str, index: usize },

    #[error("input id must not be blank")]
    BlankInputId,

    #[error("input id `{0}` is already used in this document")]
    DuplicateInputId(String),

    #[error("`{0}` is not a decimal number")]
    NotADecimal(String),

    #[error("override markup is not supported by {0}")]
    MarkupNotSupported(&'static str),

    #[error("{kind} record is missing `{field}`")]
    MissingField { kind: &'static str, field: &'static str },
}

/// Misuse of an [Attempt](crate::attempt::Attempt).
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum AttemptError {
    #[error("the document has no input with id `{0}`")]
    UnknownInput(String),

    #[error("this attempt has already been scored")]
    AlreadyScored,
}

/// Settings could not be read.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
}
