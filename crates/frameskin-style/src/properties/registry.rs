//! The table of known declaration properties.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Color, EdgeValues, LengthValue, PropertyValue, ValueError};

/// Process-wide registry, built on first use and never mutated afterwards.
static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();

const BORDER_WIDTHS: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];
const BORDER_COLORS: [&str; 4] = [
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
];
const PADDINGS: [&str; 4] = ["padding-top", "padding-right", "padding-bottom", "padding-left"];
const MARGINS: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];

/// How the values of a property are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Number immediately followed by a unit.
    Length,
    /// Hex or named color.
    Color,
    /// One of a fixed set of words.
    Keyword(&'static [&'static str]),
    /// Anything the lexer produces as a value or identifier.
    Generic,
}

/// Arity and type rules for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub min_values: usize,
    pub max_values: usize,
    pub kind: ValueKind,
    /// Per-edge properties (top, right, bottom, left) for box shorthands.
    pub longhands: Option<[&'static str; 4]>,
}

impl PropertySpec {
    const fn single(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            min_values: 1,
            max_values: 1,
            kind,
            longhands: None,
        }
    }

    const fn shorthand(name: &'static str, kind: ValueKind, longhands: [&'static str; 4]) -> Self {
        Self {
            name,
            min_values: 1,
            max_values: 4,
            kind,
            longhands: Some(longhands),
        }
    }

    /// Whether this property expands onto the four box edges.
    pub fn is_shorthand(&self) -> bool {
        self.longhands.is_some()
    }

    /// Check the arity, then parse every value according to the kind.
    pub fn validate<S: AsRef<str>>(&self, values: &[S]) -> Result<PropertyValue, ValueError> {
        let count = values.len();
        if count < self.min_values || count > self.max_values {
            return Err(ValueError::Arity {
                property: self.name.to_string(),
                count,
                min: self.min_values,
                max: self.max_values,
            });
        }

        match self.kind {
            ValueKind::Length => {
                let lengths = values
                    .iter()
                    .map(|v| LengthValue::parse(v.as_ref()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(self.edges_or_single(lengths, PropertyValue::Lengths, PropertyValue::Length))
            }
            ValueKind::Color => {
                let colors = values
                    .iter()
                    .map(|v| Color::parse(v.as_ref()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(self.edges_or_single(colors, PropertyValue::Colors, PropertyValue::Color))
            }
            ValueKind::Keyword(allowed) => {
                let word = values[0].as_ref();
                if allowed.iter().any(|candidate| *candidate == word) {
                    Ok(PropertyValue::Keyword(word.to_string()))
                } else {
                    Err(ValueError::InvalidKeyword {
                        property: self.name.to_string(),
                        value: word.to_string(),
                        allowed: allowed.join(", "),
                    })
                }
            }
            ValueKind::Generic => Ok(PropertyValue::Generic(
                values.iter().map(|v| v.as_ref().to_string()).collect(),
            )),
        }
    }

    fn edges_or_single<T: Clone>(
        &self,
        mut parsed: Vec<T>,
        edges: fn(EdgeValues<T>) -> PropertyValue,
        single: fn(T) -> PropertyValue,
    ) -> PropertyValue {
        if self.is_shorthand() {
            // Arity was checked against 1..=4 above.
            match EdgeValues::from_shorthand(&parsed) {
                Some(expanded) => edges(expanded),
                None => single(parsed.remove(0)),
            }
        } else {
            single(parsed.remove(0))
        }
    }

    /// Pair each edge longhand with the raw value it receives.
    ///
    /// Returns `None` for properties that are not box shorthands or when the
    /// value count cannot be expanded.
    pub fn expand<'v, S: AsRef<str>>(&self, values: &'v [S]) -> Option<[(&'static str, &'v str); 4]> {
        let names = self.longhands?;
        let raw: Vec<&'v str> = values.iter().map(|v| v.as_ref()).collect();
        let [top, right, bottom, left] = EdgeValues::from_shorthand(&raw)?.into_array();
        Some([
            (names[0], top),
            (names[1], right),
            (names[2], bottom),
            (names[3], left),
        ])
    }
}

/// Lookup table of every known property.
#[derive(Debug)]
pub struct PropertyRegistry {
    specs: Vec<PropertySpec>,
    by_name: HashMap<&'static str, usize>,
}

impl PropertyRegistry {
    /// The shared registry of built-in properties.
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::builtin)
    }

    fn builtin() -> Self {
        use ValueKind::{Generic, Keyword, Length};

        let mut specs = vec![
            PropertySpec::shorthand("border-width", Length, BORDER_WIDTHS),
            PropertySpec::shorthand("border-color", ValueKind::Color, BORDER_COLORS),
            PropertySpec::shorthand("padding", Length, PADDINGS),
            PropertySpec::shorthand("margin", Length, MARGINS),
        ];
        specs.extend(BORDER_WIDTHS.into_iter().map(|name| PropertySpec::single(name, Length)));
        specs.extend(BORDER_COLORS.into_iter().map(|name| PropertySpec::single(name, ValueKind::Color)));
        specs.extend(PADDINGS.into_iter().map(|name| PropertySpec::single(name, Length)));
        specs.extend(MARGINS.into_iter().map(|name| PropertySpec::single(name, Length)));
        specs.extend([
            PropertySpec::single("outline-width", Length),
            PropertySpec::single("outline-color", ValueKind::Color),
            PropertySpec::single("background-color", ValueKind::Color),
            PropertySpec::single("color", ValueKind::Color),
            PropertySpec::single("min-width", Length),
            PropertySpec::single("min-height", Length),
            PropertySpec::single("border-style", Keyword(&["none", "solid"])),
            PropertySpec::single("text-align", Keyword(&["left", "center", "right"])),
            PropertySpec::single("display", Keyword(&["flex", "none"])),
            PropertySpec {
                name: "font",
                min_values: 1,
                max_values: 16,
                kind: Generic,
                longhands: None,
            },
        ]);

        let by_name = specs
            .iter()
            .enumerate()
            .map(|(idx, spec)| (spec.name, idx))
            .collect();
        tracing::debug!("property registry initialized with {} properties", specs.len());
        Self { specs, by_name }
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.by_name.get(name).map(|&idx| &self.specs[idx])
    }

    /// Whether `name` is a known property.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All known properties in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertySpec> {
        self.specs.iter()
    }

    /// Number of known properties.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
