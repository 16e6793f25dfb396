//! Canonical stylesheet rendering.
//!
//! Every rule is printed as its selectors, one per line and joined by ` ,`,
//! followed by ` {`, one indented declaration per line, and a closing `}`.
//! Rules are separated by a blank line. Printing a parsed stylesheet and
//! parsing the result again yields the same output.

use std::fmt;

use crate::rules::{Declaration, Rule, Stylesheet};

const INDENT: &str = "    ";

/// Render a stylesheet in canonical form.
///
/// # Example
///
/// ```
/// use frameskin_style::parser::parse_stylesheet;
/// use frameskin_style::print::render;
///
/// let sheet = parse_stylesheet("a.b{border-width:2px}").unwrap();
/// assert_eq!(render(&sheet), "a.b {\n    border-width: 2px;\n}\n");
/// ```
pub fn render(sheet: &Stylesheet) -> String {
    sheet.to_string()
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.property)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        write!(f, ";")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selectors)?;
        for declaration in &self.declarations {
            writeln!(f, "{}{}", INDENT, declaration)?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}
