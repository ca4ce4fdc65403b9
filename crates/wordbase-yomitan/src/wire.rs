//! Closed vocabularies of the interchange format, and the policies used to
//! resolve raw values into them.
//!
//! Every vocabulary is a [`WireEnum`] backed by a constant lookup table. On
//! top of that, each one implements exactly one of:
//! - [`Strict`]: an unknown value is a decode error. Used for fields that
//!   decide the shape of the decoded tree, like a markup tag.
//! - [`Lenient`]: an unknown or absent value falls back to [`Default`]. Used
//!   for cosmetic fields, like a font weight.
//!
//! The policy belongs to the type, so a field always resolves the same way
//! no matter where it is read from.

use {crate::DecodeError, serde_json::Value};

/// Enum which maps one-to-one onto a fixed set of wire strings.
pub trait WireEnum: Sized + Copy + PartialEq + 'static {
    /// Wire name of the field this vocabulary is read from, used in errors.
    const FIELD: &'static str;

    /// Every variant alongside its wire value.
    const TABLE: &'static [(&'static str, Self)];

    /// Gets the wire value of this variant.
    fn as_str(self) -> &'static str;

    /// Looks up the variant with the given wire value.
    #[must_use]
    fn from_wire(value: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(wire, _)| *wire == value)
            .map(|(_, variant)| *variant)
    }
}

/// Resolution policy where an unmatched value fails decoding.
pub trait Strict: WireEnum {
    /// Resolves a raw string.
    ///
    /// # Errors
    ///
    /// Errors if `value` is not a known wire value.
    fn resolve(value: &str) -> Result<Self, DecodeError> {
        Self::from_wire(value).ok_or_else(|| DecodeError::UnknownVariant {
            field: Self::FIELD,
            value: value.to_owned(),
        })
    }

    /// Resolves an optional field: absent or null is [`None`], anything else
    /// must resolve.
    ///
    /// # Errors
    ///
    /// Errors if the node is present but is not a known wire value.
    fn optional(node: Option<&Value>) -> Result<Option<Self>, DecodeError> {
        match node {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Self::resolve(value).map(Some),
            Some(other) => Err(DecodeError::UnknownVariant {
                field: Self::FIELD,
                value: other.to_string(),
            }),
        }
    }

    /// Resolves a required field.
    ///
    /// # Errors
    ///
    /// Errors if the node is absent, null, or not a known wire value.
    fn require(node: Option<&Value>) -> Result<Self, DecodeError> {
        Self::optional(node)?.ok_or(DecodeError::MissingField { field: Self::FIELD })
    }
}

/// Resolution policy where an unmatched value silently becomes the default.
pub trait Lenient: WireEnum + Default {
    /// Resolves a raw string, or the default if there is no match.
    #[must_use]
    fn resolve(value: Option<&str>) -> Self {
        value.and_then(Self::from_wire).unwrap_or_default()
    }

    /// Resolves a node, or the default if it is absent or not a string.
    #[must_use]
    fn resolve_node(node: Option<&Value>) -> Self {
        Self::resolve(node.and_then(Value::as_str))
    }
}

/// Defines a [`WireEnum`] alongside its lookup table, [`Display`] and
/// [`Serialize`] impls.
///
/// [`Display`]: std::fmt::Display
/// [`Serialize`]: serde::Serialize
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $field:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $crate::wire::WireEnum for $name {
            const FIELD: &'static str = $field;
            const TABLE: &'static [(&'static str, Self)] = &[$(($wire, Self::$variant)),*];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::wire::WireEnum::as_str(*self))
            }
        }
    };
}

pub(crate) use wire_enum;
