//! Declaration properties: the registry of known names and the typed values
//! their raw lexemes validate into.

mod registry;
mod value;

pub use registry::{PropertyRegistry, PropertySpec, ValueKind};
pub use value::{Color, EdgeValues, LengthValue, PropertyValue};

/// A declaration value rejected by the property registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The property name is not registered.
    #[error("unknown property \"{0}\"")]
    UnknownProperty(String),

    /// Too few or too many values.
    #[error("\"{property}\" does not accept {count} values (expected {min} to {max})")]
    Arity {
        property: String,
        count: usize,
        min: usize,
        max: usize,
    },

    /// A number followed by a unit that is not recognized.
    #[error("unparsable suffix \"{suffix}\" in \"{value}\"")]
    UnparsableSuffix { value: String, suffix: String },

    /// No numeric prefix at all.
    #[error("expected a length but got \"{0}\"")]
    NotALength(String),

    /// A non-zero number without a unit.
    #[error("missing unit in \"{0}\"")]
    MissingUnit(String),

    #[error("invalid color \"{0}\"")]
    InvalidColor(String),

    #[error("\"{property}\" does not accept \"{value}\" (expected one of {allowed})")]
    InvalidKeyword {
        property: String,
        value: String,
        allowed: String,
    },
}
