//! Scalar values held by enum types.
//!
//! An enum type declares its legal values as a closed set of scalars. Each
//! scalar is either a string or an integer, and a single enum type may mix
//! both. Values compare by exact type and content: `Integer(2)` and
//! `String("2")` are different values and never coerce into each other.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A declared (or candidate) enum scalar.
///
/// Declared constants are `'static` and borrow their text; values built at
/// runtime from owned strings are stored owned. Both compare equal when their
/// text is equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(Cow<'static, str>),
    Integer(i64),
}

impl EnumValue {
    /// Build a string value from a `'static` literal without allocating.
    pub const fn from_static(text: &'static str) -> Self {
        Self::String(Cow::Borrowed(text))
    }

    pub const fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    /// The text of a string value, `None` for integers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    /// The number held by an integer value, `None` for strings.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::String(_) => None,
        }
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// The single-value domain this scalar belongs to.
    pub const fn domain(&self) -> ValueDomain {
        match self {
            Self::String(_) => ValueDomain::String,
            Self::Integer(_) => ValueDomain::Integer,
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&'static str> for EnumValue {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl From<String> for EnumValue {
    fn from(text: String) -> Self {
        Self::String(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for EnumValue {
    fn from(text: Cow<'static, str>) -> Self {
        Self::String(text)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for EnumValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

// =============================================================================
// ValueDomain
// =============================================================================

/// The scalar families spanned by a set of declared values.
///
/// | Domain | Declared values |
/// |--------|-----------------|
/// | Empty | none |
/// | String | strings only |
/// | Integer | integers only |
/// | Mixed | both strings and integers |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ValueDomain {
    Empty,
    String,
    Integer,
    Mixed,
}

impl ValueDomain {
    /// Derive the domain spanned by `values`.
    pub fn of<'a>(values: impl IntoIterator<Item = &'a EnumValue>) -> Self {
        values
            .into_iter()
            .fold(Self::Empty, |domain, value| domain.widen(value.domain()))
    }

    /// Smallest domain containing both `self` and `other`.
    pub const fn widen(self, other: Self) -> Self {
        match (self, other) {
            (Self::Empty, other) => other,
            (this, Self::Empty) => this,
            (Self::String, Self::String) => Self::String,
            (Self::Integer, Self::Integer) => Self::Integer,
            _ => Self::Mixed,
        }
    }

    /// Whether a value of this scalar family may belong to the domain.
    ///
    /// Admission is necessary but not sufficient for membership: the value
    /// must still be declared.
    pub const fn admits(self, value: &EnumValue) -> bool {
        match (self, value) {
            (Self::Mixed, _) => true,
            (Self::String, EnumValue::String(_)) => true,
            (Self::Integer, EnumValue::Integer(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
