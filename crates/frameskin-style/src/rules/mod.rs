//! Style rules and stylesheets.

mod rule;
mod stylesheet;

pub use rule::{Declaration, Rule};
pub use stylesheet::Stylesheet;
