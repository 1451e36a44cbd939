//! The expression tree data model.
//!
//! A question is a [Document]: an ordered list of top-level [Node]s. Nodes nest - fractions and
//! exponents hold exactly two children, algebraic and equation nodes hold any number - and the
//! leaves are text, numbers, answer slots and opaque rich content.
//!
//! Everything else in the crate is an interpreter over this tree: the [flattener](crate::flatten),
//! the [projectors](crate::projectors), the [layout grouper](crate::layout) and the
//! [scorer](crate::score). The [builder](crate::builder) is the only thing which makes new trees,
//! and it always does so by producing a new document.

mod model;
pub use model::*;

mod document;
pub use document::*;

mod record;
pub use record::*;
