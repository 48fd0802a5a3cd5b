//! Validation errors.

use crate::value::EnumValue;
use thiserror::Error;

/// A value was rejected by an enum type.
///
/// Every variant carries the name of the enum type that rejected the value so
/// it can be logged, but the message only names the value. Callers should
/// treat this as a programming or configuration error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidValue {
    /// No value was given and the enum type declares no default.
    #[error("Enum value is not defined")]
    Undefined { enum_name: &'static str },

    /// The value is not one of the enum type's declared values.
    #[error("Value \"{value}\" is not defined")]
    NotDeclared {
        enum_name: &'static str,
        value: EnumValue,
    },

    /// The value is declared, but an integer-only view was asked for.
    #[error("Value \"{value}\" is not an integer")]
    NotInteger {
        enum_name: &'static str,
        value: EnumValue,
    },
}

impl InvalidValue {
    pub const fn undefined(enum_name: &'static str) -> Self {
        Self::Undefined { enum_name }
    }

    pub const fn not_declared(enum_name: &'static str, value: EnumValue) -> Self {
        Self::NotDeclared { enum_name, value }
    }

    pub const fn not_integer(enum_name: &'static str, value: EnumValue) -> Self {
        Self::NotInteger { enum_name, value }
    }

    /// Name of the enum type that rejected the value.
    pub const fn enum_name(&self) -> &'static str {
        match self {
            Self::Undefined { enum_name }
            | Self::NotDeclared { enum_name, .. }
            | Self::NotInteger { enum_name, .. } => enum_name,
        }
    }

    /// The rejected value, if one was given.
    pub const fn value(&self) -> Option<&EnumValue> {
        match self {
            Self::Undefined { .. } => None,
            Self::NotDeclared { value, .. } | Self::NotInteger { value, .. } => Some(value),
        }
    }
}

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
