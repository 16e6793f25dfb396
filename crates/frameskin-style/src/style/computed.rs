//! Computed style: the longhand values a node ends up with.

use std::collections::BTreeMap;
use std::fmt;

/// Resolved longhand properties for one node, ordered by property name.
///
/// Values are kept as the source text of the winning declaration, so a
/// renderer can re-validate them through the property registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    values: BTreeMap<String, String>,
}

impl ComputedStyle {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a property, replacing any earlier value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.values.insert(property.into(), value.into());
    }

    /// The value of `property`, if any rule assigned it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(property, value)` pairs sorted by property name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ComputedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in self.iter() {
            writeln!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}
