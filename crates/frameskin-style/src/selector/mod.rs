//! Selector types and matching.

mod matcher;
mod types;

pub use matcher::{SelectorMatcher, StyleTree, query};
pub use types::*;
