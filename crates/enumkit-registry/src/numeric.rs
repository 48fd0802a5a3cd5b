//! Integer-only view over an enum type.
//!
//! `NumericEnum<T>` exposes the integer members of `T` with `i64`-typed
//! accessors. It shares `T`'s definition and validation with `Enum<T>`.

use crate::declaration::EnumType;
use crate::instance::{Candidate, Enum};
use crate::registry::EnumRegistry;
use enumkit_common::{EnumValue, InvalidValue};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated integer value of the enum type `T`.
pub struct NumericEnum<T> {
    inner: Enum<T>,
    value: i64,
}

impl<T: EnumType> NumericEnum<T> {
    pub fn new(value: i64) -> Result<Self, InvalidValue> {
        Self::try_from(Enum::<T>::new(value)?)
    }

    /// Build an instance in `registry` rather than the global one.
    pub fn with_registry(registry: &EnumRegistry, value: i64) -> Result<Self, InvalidValue> {
        Self::try_from(registry.construct::<T>(Some(EnumValue::from(value)))?)
    }

    /// Declared integer values of `T`, in declaration order.
    pub fn values() -> Vec<i64> {
        Enum::<T>::values()
            .iter()
            .filter_map(EnumValue::as_integer)
            .collect()
    }

    pub fn has_value(value: i64) -> bool {
        Enum::<T>::has_value(&EnumValue::from(value))
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    pub fn label(&self) -> String {
        self.inner.label()
    }

    pub const fn as_enum(&self) -> &Enum<T> {
        &self.inner
    }

    pub fn into_enum(self) -> Enum<T> {
        self.inner
    }

    /// Compare with another instance of the same type. Both sides are
    /// already validated, so this cannot fail.
    pub fn is(&self, other: &NumericEnum<T>) -> bool {
        self.value == other.value
    }

    /// Compare with a raw integer, validating it first.
    pub fn is_value(&self, value: i64) -> Result<bool, InvalidValue> {
        self.inner.is(value)
    }

    pub fn is_in(&self, values: impl IntoIterator<Item = i64>) -> Result<bool, InvalidValue> {
        self.inner.is_in(values.into_iter().map(Candidate::from))
    }
}

impl<T: EnumType> TryFrom<Enum<T>> for NumericEnum<T> {
    type Error = InvalidValue;

    /// Fails with [`InvalidValue::NotInteger`] for instances holding a
    /// string value.
    fn try_from(inner: Enum<T>) -> Result<Self, Self::Error> {
        match inner.value().as_integer() {
            Some(value) => Ok(Self { inner, value }),
            None => Err(InvalidValue::not_integer(T::NAME, inner.into_value())),
        }
    }
}

impl<'a, T> From<&'a NumericEnum<T>> for Candidate<'a> {
    fn from(instance: &'a NumericEnum<T>) -> Self {
        Candidate::from(&instance.inner)
    }
}

impl<T> Clone for NumericEnum<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            value: self.value,
        }
    }
}

impl<T> PartialEq for NumericEnum<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for NumericEnum<T> {}

impl<T> fmt::Debug for NumericEnum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T> fmt::Display for NumericEnum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for NumericEnum<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

#[cfg(test)]
#[path = "../tests/numeric_tests.rs"]
mod tests;
