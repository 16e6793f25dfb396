//! Selector type definitions.

use std::fmt;

/// A non-empty, comma-separated list of selectors (e.g. `.tab , .tabbar > *`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorList(Vec<Selector>);

impl SelectorList {
    /// Build a list; `None` when `selectors` is empty.
    pub fn new(selectors: Vec<Selector>) -> Option<Self> {
        (!selectors.is_empty()).then_some(Self(selectors))
    }

    /// Selectors in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Selector> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built through [`SelectorList::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Selector] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SelectorList {
    type Item = &'a Selector;
    type IntoIter = std::slice::Iter<'a, Selector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Selector> for SelectorList {
    fn from(selector: Selector) -> Self {
        Self(vec![selector])
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ,\n")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}

/// A complex selector (e.g. `.window > .tabbar .tab:first-child`).
///
/// A selector consists of one or more compound parts connected by combinators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Compound parts, left to right.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// A selector made of a single compound part.
    pub fn new(part: SelectorPart) -> Self {
        Self {
            parts: vec![part],
            combinators: vec![],
        }
    }

    /// Create a simple element selector.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(SelectorPart::element(name))
    }

    /// Create a universal selector (*).
    pub fn universal() -> Self {
        Self::new(SelectorPart::universal())
    }

    /// Create a class selector.
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::new(SelectorPart::class_only(class_name))
    }

    /// Append `part`, joined to the current rightmost part by `combinator`.
    pub fn push(&mut self, combinator: Combinator, part: SelectorPart) {
        self.combinators.push(combinator);
        self.parts.push(part);
    }

    /// Add a descendant selector part.
    pub fn descendant(mut self, part: SelectorPart) -> Self {
        self.push(Combinator::Descendant, part);
        self
    }

    /// Add a child selector part.
    pub fn child(mut self, part: SelectorPart) -> Self {
        self.push(Combinator::Child, part);
        self
    }

    /// Add an adjacent-sibling selector part.
    pub fn adjacent(mut self, part: SelectorPart) -> Self {
        self.push(Combinator::AdjacentSibling, part);
        self
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.combinators[i - 1])?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A compound selector (e.g. `tab.focused:last-child`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Element name or universal.
    pub type_selector: Option<TypeSelector>,
    /// Class selectors (.class), duplicates kept.
    pub classes: Vec<String>,
    /// At most one structural pseudo-class.
    pub pseudo_class: Option<PseudoClass>,
}

impl SelectorPart {
    /// Create a new empty selector part.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element-only selector.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            type_selector: Some(TypeSelector::Element(name.into())),
            ..Default::default()
        }
    }

    /// Create a universal selector part.
    pub fn universal() -> Self {
        Self {
            type_selector: Some(TypeSelector::Universal),
            ..Default::default()
        }
    }

    /// Create a class-only selector.
    pub fn class_only(class_name: impl Into<String>) -> Self {
        Self {
            classes: vec![class_name.into()],
            ..Default::default()
        }
    }

    /// Add a class selector.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the pseudo-class.
    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_class = Some(pseudo);
        self
    }

    /// A part with no constraint at all. The parser never produces one.
    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none() && self.classes.is_empty() && self.pseudo_class.is_none()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_selector {
            Some(TypeSelector::Universal) => write!(f, "*")?,
            Some(TypeSelector::Element(name)) => write!(f, "{}", name)?,
            None => {}
        }

        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        if let Some(pseudo) = &self.pseudo_class {
            write!(f, ":{}", pseudo)?;
        }

        Ok(())
    }
}

/// Type selector - matches the element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// Universal selector (*) - matches any element.
    Universal,
    /// Named element (e.g. "tab", "window").
    Element(String),
}

/// Combinator between selector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any ancestor.
    Descendant,
    /// Child combinator (>): matches the direct parent only.
    Child,
    /// Adjacent sibling (+): matches the immediately preceding sibling.
    AdjacentSibling,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => write!(f, " "),
            Combinator::Child => write!(f, " > "),
            Combinator::AdjacentSibling => write!(f, " + "),
        }
    }
}

/// Structural pseudo-classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    /// :first-child - first among siblings.
    FirstChild,
    /// :last-child - last among siblings.
    LastChild,
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoClass::FirstChild => write!(f, "first-child"),
            PseudoClass::LastChild => write!(f, "last-child"),
        }
    }
}

impl PseudoClass {
    /// Parse a pseudo-class name (without the colon). Names are case-sensitive.
    pub fn from_css(s: &str) -> Option<Self> {
        match s {
            "first-child" => Some(Self::FirstChild),
            "last-child" => Some(Self::LastChild),
            _ => None,
        }
    }
}
