//! Stylesheet collection.

use std::path::{Path, PathBuf};

use crate::parser::{ParseOptions, parse_stylesheet_with};
use crate::rules::Rule;
use crate::selector::{SelectorMatcher, StyleTree};
use crate::style::ComputedStyle;
use crate::{Error, Result};

/// A parsed stylesheet: its rules in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The rules in this stylesheet.
    pub rules: Vec<Rule>,
    /// Source file path, when loaded with [`Stylesheet::from_file`].
    pub source_path: Option<PathBuf>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stylesheet from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    /// Load a stylesheet from a file with explicit parse options.
    pub fn from_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut sheet = parse_stylesheet_with(&content, options)?;
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Parse a stylesheet from text.
    pub fn from_css(css: &str) -> Result<Self> {
        parse_stylesheet_with(css, &ParseOptions::default())
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Rules whose selector list matches `node`, in source order.
    pub fn matching_rules<'s, T: StyleTree>(
        &'s self,
        tree: &'s T,
        node: T::Node,
    ) -> impl Iterator<Item = &'s Rule> {
        self.rules
            .iter()
            .filter(move |rule| SelectorMatcher::matches_any(tree, &rule.selectors, node))
    }

    /// Fold the declarations of every matching rule into longhand values.
    ///
    /// Rules and declarations apply in source order; a later assignment to
    /// the same longhand replaces an earlier one.
    pub fn compute_style<T: StyleTree>(&self, tree: &T, node: T::Node) -> ComputedStyle {
        let mut style = ComputedStyle::new();
        let mut applied = 0usize;
        for rule in self.matching_rules(tree, node) {
            applied += 1;
            for declaration in &rule.declarations {
                for (property, value) in declaration.longhands() {
                    style.set(property, value);
                }
            }
        }
        tracing::trace!("{} of {} rules applied, {} properties set", applied, self.len(), style.len());
        style
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::tree::AdhocTree;

    #[test]
    fn stylesheet_creation() {
        let sheet = Stylesheet::new();
        assert!(sheet.is_empty());

        let sheet = Stylesheet::from_css("a { } b { }").unwrap();
        assert_eq!(sheet.len(), 2);
        assert!(sheet.source_path.is_none());
    }

    #[test]
    fn from_file_records_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ".tab {{ border-width: 2px; }}").unwrap();

        let sheet = Stylesheet::from_file(file.path()).unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.source_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Stylesheet::from_file(dir.path().join("missing.css")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.position().is_none());
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a {{").unwrap();
        let err = Stylesheet::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Expected } but got EOF"));
    }

    #[test]
    fn compute_style_source_order() {
        let sheet = Stylesheet::from_css(
            ".tab { border-width: 1px; color: red; }
             .focused { border-top-width: 3px; }
             .urgent { color: blue; }",
        )
        .unwrap();
        let tree = AdhocTree::parse("(bar (tab focused))").unwrap();
        let tab = tree.node_at_path("0").unwrap();

        let style = sheet.compute_style(&tree, tab);
        assert_eq!(style.get("border-top-width"), Some("3px"));
        assert_eq!(style.get("border-left-width"), Some("1px"));
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("border-width"), None);
        assert_eq!(sheet.matching_rules(&tree, tab).count(), 2);
    }

    #[test]
    fn compute_style_later_rule_wins() {
        let sheet = Stylesheet::from_css("* { padding: 1px; } .a { padding-left: 0; } * { padding: 2px 4px; }")
            .unwrap();
        let tree = AdhocTree::parse("(a)").unwrap();
        let style = sheet.compute_style(&tree, tree.root());
        assert_eq!(style.get("padding-left"), Some("4px"));
        assert_eq!(style.get("padding-top"), Some("2px"));
    }
}
