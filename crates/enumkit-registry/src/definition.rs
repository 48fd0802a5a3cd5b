//! Per-type enum metadata.
//!
//! An [`EnumDefinition`] is the resolved form of an [`EnumType`] declaration:
//! the declared values in order, a membership set, the derived domain and the
//! default. Labels are filled in lazily by the registry, at most once.

use crate::declaration::{Constant, EnumType};
use enumkit_common::{EnumValue, InvalidValue, ValueDomain};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Resolved metadata for one concrete enum type.
pub struct EnumDefinition {
    name: &'static str,
    constants: Vec<Constant>,
    /// Declared values, declaration order, duplicates preserved.
    values: Arc<[EnumValue]>,
    members: FxHashSet<EnumValue>,
    domain: ValueDomain,
    default_value: Option<EnumValue>,
    labels: OnceCell<Arc<IndexMap<EnumValue, String>>>,
}

impl EnumDefinition {
    /// Evaluate the declaration of `T`.
    pub(crate) fn resolve<T: EnumType>() -> Self {
        let constants = T::constants();
        let values: Arc<[EnumValue]> = constants.iter().map(|c| c.value.clone()).collect();
        let members = values.iter().cloned().collect();
        let domain = ValueDomain::of(values.iter());

        Self {
            name: T::NAME,
            constants,
            values,
            members,
            domain,
            default_value: T::default_value(),
            labels: OnceCell::new(),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared constants, in declaration order.
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Declared values, in declaration order.
    pub const fn values(&self) -> &Arc<[EnumValue]> {
        &self.values
    }

    pub const fn domain(&self) -> ValueDomain {
        self.domain
    }

    pub const fn default_value(&self) -> Option<&EnumValue> {
        self.default_value.as_ref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is declared. Strict: no coercion between strings and
    /// integers.
    pub fn has_value(&self, value: &EnumValue) -> bool {
        self.domain.admits(value) && self.members.contains(value)
    }

    /// Name of the first constant declaring `value`.
    pub fn constant_name(&self, value: &EnumValue) -> Option<&'static str> {
        self.constants
            .iter()
            .find(|c| c.value == *value)
            .map(|c| c.name)
    }

    /// Validate a possibly absent value against this definition.
    pub fn check(&self, value: Option<&EnumValue>) -> Result<(), InvalidValue> {
        let Some(value) = value else {
            debug!(enum_name = self.name, "enum value is not defined");
            return Err(InvalidValue::undefined(self.name));
        };
        if !self.has_value(value) {
            debug!(enum_name = self.name, value = %value, "enum value is not declared");
            return Err(InvalidValue::not_declared(self.name, value.clone()));
        }
        Ok(())
    }

    pub(crate) const fn labels_cell(&self) -> &OnceCell<Arc<IndexMap<EnumValue, String>>> {
        &self.labels
    }
}

impl fmt::Debug for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDefinition")
            .field("name", &self.name)
            .field("values", &self.values)
            .field("domain", &self.domain)
            .field("default_value", &self.default_value)
            .field("labels_cached", &self.labels.get().is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/definition_tests.rs"]
mod tests;
