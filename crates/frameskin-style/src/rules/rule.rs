//! Single style rule definition.

use crate::properties::{PropertyRegistry, PropertyValue};
use crate::selector::SelectorList;

/// One `property: value…;` entry of a rule block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written.
    pub property: String,
    /// Raw value lexemes, in source order.
    pub values: Vec<String>,
    /// Typed value produced by the registry.
    pub value: PropertyValue,
}

impl Declaration {
    /// The `(longhand, value)` assignments this declaration makes.
    ///
    /// Box shorthands expand onto their four edge properties; everything
    /// else assigns its own name with the values joined by single spaces.
    pub fn longhands(&self) -> Vec<(String, String)> {
        let expanded = PropertyRegistry::global()
            .get(&self.property)
            .and_then(|spec| spec.expand(&self.values));

        match expanded {
            Some(edges) => edges
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            None => vec![(self.property.clone(), self.values.join(" "))],
        }
    }
}

/// A style rule mapping a selector list to declarations.
///
/// Declarations are kept in source order, duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selectors for matching nodes.
    pub selectors: SelectorList,
    /// The declarations to apply, in source order.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Create a new style rule.
    pub fn new(selectors: SelectorList, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// Whether the block is `{ }`.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
