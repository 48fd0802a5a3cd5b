//! Validated enum instances.
//!
//! An [`Enum<T>`] holds one declared value of the enum type `T`. Construction
//! is atomic: it either yields an instance holding a declared value or fails
//! with [`InvalidValue`]. Instances are immutable afterwards.

use crate::declaration::EnumType;
use crate::definition::EnumDefinition;
use crate::registry::EnumRegistry;
use enumkit_common::{EnumValue, InvalidValue};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

// =============================================================================
// Candidate - operand of is / is_in
// =============================================================================

/// A value to compare an instance against.
///
/// Instances of any enum type unwrap to their value; plain scalars are taken
/// as is. `Absent` stands for a missing value and never validates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Candidate<'a> {
    Absent,
    Owned(EnumValue),
    Borrowed(&'a EnumValue),
}

impl Candidate<'_> {
    pub const fn as_value(&self) -> Option<&EnumValue> {
        match self {
            Self::Absent => None,
            Self::Owned(value) => Some(value),
            Self::Borrowed(value) => Some(value),
        }
    }
}

impl From<EnumValue> for Candidate<'_> {
    fn from(value: EnumValue) -> Self {
        Self::Owned(value)
    }
}

impl<'a> From<&'a EnumValue> for Candidate<'a> {
    fn from(value: &'a EnumValue) -> Self {
        Self::Borrowed(value)
    }
}

impl From<&'static str> for Candidate<'_> {
    fn from(value: &'static str) -> Self {
        Self::Owned(EnumValue::from(value))
    }
}

impl From<String> for Candidate<'_> {
    fn from(value: String) -> Self {
        Self::Owned(EnumValue::from(value))
    }
}

impl From<i64> for Candidate<'_> {
    fn from(value: i64) -> Self {
        Self::Owned(EnumValue::from(value))
    }
}

impl From<i32> for Candidate<'_> {
    fn from(value: i32) -> Self {
        Self::Owned(EnumValue::from(value))
    }
}

impl<'a, U> From<&'a Enum<U>> for Candidate<'a> {
    fn from(instance: &'a Enum<U>) -> Self {
        Self::Borrowed(&instance.value)
    }
}

impl<'a, V: Into<Candidate<'a>>> From<Option<V>> for Candidate<'a> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// =============================================================================
// Enum - validated instance
// =============================================================================

/// One validated value of the enum type `T`.
///
/// The shorthand constructors and type-level queries go through
/// [`EnumRegistry::global`]; use the registry methods directly to work
/// against a registry of your own.
pub struct Enum<T> {
    value: EnumValue,
    definition: Arc<EnumDefinition>,
    marker: PhantomData<fn() -> T>,
}

impl<T: EnumType> Enum<T> {
    /// Validate `value` against `definition` and wrap it.
    pub(crate) fn with_definition(
        definition: Arc<EnumDefinition>,
        value: Option<EnumValue>,
    ) -> Result<Self, InvalidValue> {
        definition.check(value.as_ref())?;
        let Some(value) = value else {
            return Err(InvalidValue::undefined(definition.name()));
        };
        Ok(Self {
            value,
            definition,
            marker: PhantomData,
        })
    }

    /// Build an instance holding `value`.
    pub fn new(value: impl Into<EnumValue>) -> Result<Self, InvalidValue> {
        EnumRegistry::global().construct::<T>(Some(value.into()))
    }

    /// Build an instance; `None` falls back to the declared default.
    pub fn from_option(value: Option<EnumValue>) -> Result<Self, InvalidValue> {
        EnumRegistry::global().construct::<T>(value)
    }

    /// Build an instance holding the declared default.
    pub fn default_instance() -> Result<Self, InvalidValue> {
        EnumRegistry::global().create_default::<T>()
    }

    /// The declared default, unvalidated.
    pub fn default_value() -> Option<EnumValue> {
        EnumRegistry::global().default_value::<T>()
    }

    pub fn values() -> Arc<[EnumValue]> {
        EnumRegistry::global().values::<T>()
    }

    pub fn instances() -> Arc<IndexMap<EnumValue, Enum<T>>> {
        EnumRegistry::global().instances::<T>()
    }

    pub fn labels() -> Arc<IndexMap<EnumValue, String>> {
        EnumRegistry::global().labels::<T>()
    }

    pub fn has_value(value: &EnumValue) -> bool {
        EnumRegistry::global().has_value::<T>(value)
    }

    pub const fn value(&self) -> &EnumValue {
        &self.value
    }

    pub fn into_value(self) -> EnumValue {
        self.value
    }

    pub const fn definition(&self) -> &Arc<EnumDefinition> {
        &self.definition
    }

    /// Display label, as defined by `T`'s `Labeled` impl.
    pub fn label(&self) -> String {
        T::label(&self.value)
    }

    /// Name of the constant this value was declared under.
    pub fn constant_name(&self) -> Option<&'static str> {
        self.definition.constant_name(&self.value)
    }

    /// Compare with `other`.
    ///
    /// `other` is validated against `T` first: comparing with an absent or
    /// undeclared value is an error rather than `false`.
    pub fn is<'a>(&self, other: impl Into<Candidate<'a>>) -> Result<bool, InvalidValue> {
        let other = other.into();
        self.definition.check(other.as_value())?;
        Ok(other.as_value() == Some(&self.value))
    }

    /// Whether any of `candidates` equals this value.
    ///
    /// Every candidate is validated before comparing, including those after a
    /// match.
    pub fn is_in<'a, I>(&self, candidates: I) -> Result<bool, InvalidValue>
    where
        I: IntoIterator,
        I::Item: Into<Candidate<'a>>,
    {
        let candidates: SmallVec<[Candidate<'a>; 4]> =
            candidates.into_iter().map(Into::into).collect();
        for candidate in &candidates {
            self.definition.check(candidate.as_value())?;
        }
        Ok(candidates
            .iter()
            .any(|candidate| candidate.as_value() == Some(&self.value)))
    }
}

impl<T: EnumType> TryFrom<EnumValue> for Enum<T> {
    type Error = InvalidValue;

    fn try_from(value: EnumValue) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> Clone for Enum<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            definition: Arc::clone(&self.definition),
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Enum<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Enum<T> {}

impl<T> PartialEq<EnumValue> for Enum<T> {
    fn eq(&self, other: &EnumValue) -> bool {
        self.value == *other
    }
}

impl<T> Hash for Enum<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.definition.name(), self.value)
    }
}

impl<T> fmt::Display for Enum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T> Serialize for Enum<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../tests/instance_tests.rs"]
mod tests;
