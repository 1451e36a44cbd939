#[macro_use]
mod util;

mod model;
mod layout;
mod number;
mod properties;
