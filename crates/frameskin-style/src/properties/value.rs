//! Typed declaration values.
//!
//! The parser keeps every declaration's raw lexemes for printing; the types
//! here are what the property registry turns those lexemes into, so that a
//! decoration renderer can consume widths and colors without re-parsing.
//!
//! # Example
//!
//! ```
//! use frameskin_style::prelude::{EdgeValues, LengthValue};
//!
//! let width = LengthValue::parse("4px").unwrap();
//! assert_eq!(width, LengthValue::Px(4.0));
//!
//! // Two values: (top & bottom, left & right)
//! let edges = EdgeValues::from_shorthand(&["4px", "2px"]).unwrap();
//! assert_eq!(edges.into_array(), ["4px", "2px", "4px", "2px"]);
//! ```

use super::ValueError;

/// CSS-like length values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Relative to current font size.
    Em(f32),
    /// Relative to root font size.
    Rem(f32),
    /// Percentage of containing box.
    Percent(f32),
    /// The unitless literal `0`.
    #[default]
    Zero,
}

impl LengthValue {
    /// Parse a numeric literal immediately followed by a unit.
    ///
    /// Recognized units are `px`, `em`, `rem` and `%`. A bare `0` is the zero
    /// length; any other unitless number is rejected.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let split = numeric_prefix_len(text);
        if split == 0 {
            return Err(ValueError::NotALength(text.to_string()));
        }
        let (number, suffix) = text.split_at(split);
        let value: f32 = number
            .parse()
            .map_err(|_| ValueError::NotALength(text.to_string()))?;

        match suffix {
            "px" => Ok(Self::Px(value)),
            "em" => Ok(Self::Em(value)),
            "rem" => Ok(Self::Rem(value)),
            "%" => Ok(Self::Percent(value)),
            "" if value == 0.0 => Ok(Self::Zero),
            "" => Err(ValueError::MissingUnit(text.to_string())),
            _ => Err(ValueError::UnparsableSuffix {
                value: text.to_string(),
                suffix: suffix.to_string(),
            }),
        }
    }
}

/// Length of the `-?digits(.digits)?` prefix of `text`, or 0 if there is none.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = usize::from(bytes.first() == Some(&b'-'));
    let digits_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    if idx == digits_start {
        return 0;
    }
    if bytes.get(idx) == Some(&b'.') && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit) {
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
    }
    idx
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Alpha in `0.0..=1.0`.
    pub alpha: f32,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a CSS color name.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidColor(text.to_string());
        match text.strip_prefix('#') {
            Some(hex) => cssparser::color::parse_hash_color(hex.as_bytes())
                .map(|(red, green, blue, alpha)| Self {
                    red,
                    green,
                    blue,
                    alpha,
                })
                .map_err(|()| invalid()),
            None => cssparser::color::parse_named_color(&text.to_ascii_lowercase())
                .map(|(red, green, blue)| Self::rgb(red, green, blue))
                .map_err(|()| invalid()),
        }
    }
}

/// Per-edge values for box properties (widths, colors).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeValues<T> {
    /// Top edge value.
    pub top: T,
    /// Right edge value.
    pub right: T,
    /// Bottom edge value.
    pub bottom: T,
    /// Left edge value.
    pub left: T,
}

impl<T: Clone> EdgeValues<T> {
    /// Create uniform edge values.
    pub fn uniform(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical.clone(),
            bottom: vertical,
            left: horizontal.clone(),
            right: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Expand 1 to 4 shorthand values onto the four edges.
    ///
    /// 1 value applies to all edges; 2 are (top & bottom, left & right);
    /// 3 are (top, left & right, bottom); 4 are (top, right, bottom, left).
    pub fn from_shorthand(values: &[T]) -> Option<Self> {
        match values {
            [all] => Some(Self::uniform(all.clone())),
            [vertical, horizontal] => Some(Self::symmetric(vertical.clone(), horizontal.clone())),
            [top, horizontal, bottom] => Some(Self::new(
                top.clone(),
                horizontal.clone(),
                bottom.clone(),
                horizontal.clone(),
            )),
            [top, right, bottom, left] => Some(Self::new(
                top.clone(),
                right.clone(),
                bottom.clone(),
                left.clone(),
            )),
            _ => None,
        }
    }

    /// The edges in (top, right, bottom, left) order.
    pub fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// The typed value of a validated declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single length.
    Length(LengthValue),
    /// A box shorthand of lengths, already expanded onto the edges.
    Lengths(EdgeValues<LengthValue>),
    /// A single color.
    Color(Color),
    /// A box shorthand of colors, already expanded onto the edges.
    Colors(EdgeValues<Color>),
    /// One word out of a fixed set.
    Keyword(String),
    /// Free-form words, kept verbatim.
    Generic(Vec<String>),
    /// A property the registry does not know, accepted without checks.
    Opaque(Vec<String>),
}
