//! CSS-like stylesheet engine for window decorations.
//!
//! This crate styles a hierarchical decoration tree (windows, frames, tab
//! bars, tabs) from a small rule language:
//!
//! - **Parsing**: a tokenizer and recursive-descent parser producing [`Stylesheet`]s
//! - **Properties**: a registry validating declaration values (lengths, colors, keywords)
//! - **Selectors**: element, class, `:first-child`/`:last-child` and
//!   descendant, child and adjacent-sibling combinators, matched against any
//!   [`StyleTree`]
//! - **Printing**: a canonical, idempotent rendering of parsed stylesheets
//! - **Computed style**: source-order folding of matching declarations into longhands
//!
//! # Example
//!
//! ```
//! use frameskin_style::prelude::*;
//!
//! let sheet = Stylesheet::from_css(".tab { border-width: 1px; } .tab.focused { border-color: #9fbc00; }").unwrap();
//! let tree = AdhocTree::parse("(tabbar (tab) (tab focused))").unwrap();
//!
//! let focused = tree.node_at_path("1").unwrap();
//! let style = sheet.compute_style(&tree, focused);
//! assert_eq!(style.get("border-left-width"), Some("1px"));
//! assert_eq!(style.get("border-top-color"), Some("#9fbc00"));
//! ```

pub mod parser;
pub mod print;
pub mod properties;
pub mod rules;
pub mod selector;
pub mod style;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use rules::Stylesheet;
pub use selector::StyleTree;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::parser::{
        ParseOptions, UnknownPropertyPolicy, parse_selector_list, parse_stylesheet,
        parse_stylesheet_with,
    };
    pub use crate::print::render;
    pub use crate::properties::{
        Color, EdgeValues, LengthValue, PropertyRegistry, PropertySpec, PropertyValue, ValueError,
        ValueKind,
    };
    pub use crate::rules::{Declaration, Rule, Stylesheet};
    pub use crate::selector::{
        Combinator, PseudoClass, Selector, SelectorList, SelectorMatcher, SelectorPart, StyleTree,
        TypeSelector, query,
    };
    pub use crate::style::ComputedStyle;
    pub use crate::tree::{AdhocTree, NodeId};
    pub use crate::{Error, Result};
}
