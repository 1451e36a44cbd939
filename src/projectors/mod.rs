//! The shipped [Projector](crate::project::Projector)s.

mod latex;
pub use latex::*;

mod speech;
pub use speech::*;
