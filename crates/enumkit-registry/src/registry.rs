//! Per-type definition cache.
//!
//! The registry resolves each concrete enum type's declaration the first time
//! the type is used and serves every later query from that resolution.
//!
//! ## Caching
//!
//! | Query | Cached | Computed from |
//! |-------|--------|---------------|
//! | `definition` / `values` | once per type | `EnumType::constants` |
//! | `instances` | once per type | `construct` over each declared value |
//! | `labels` | once per type | `label()` of each cached instance |
//!
//! Entries are never invalidated. Concurrent first access is guarded by a
//! once-cell per type, so every caller observes the same definition. Cells
//! are initialized outside the map's shard locks.
//!
//! Cached instances point at their definition, so they are owned by the
//! registry rather than the definition. Dropping a registry frees everything
//! it resolved.

use crate::declaration::EnumType;
use crate::definition::EnumDefinition;
use crate::instance::Enum;
use dashmap::DashMap;
use enumkit_common::{EnumValue, InvalidValue};
use indexmap::IndexMap;
use once_cell::sync::{Lazy, OnceCell};
use rustc_hash::FxBuildHasher;
use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Counter for assigning unique instance IDs to registries, for tracing.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

static GLOBAL: Lazy<EnumRegistry> = Lazy::new(EnumRegistry::new);

type Slot<V> = Arc<OnceCell<V>>;
type SlotMap<V> = DashMap<TypeId, Slot<V>, FxBuildHasher>;

/// `IndexMap<EnumValue, Enum<T>>` for the keyed type `T`.
type ErasedInstances = Arc<dyn Any + Send + Sync>;

fn slot_for<V>(map: &SlotMap<V>, key: TypeId) -> Slot<V> {
    if let Some(slot) = map.get(&key) {
        return Arc::clone(&slot);
    }
    Arc::clone(&map.entry(key).or_default())
}

/// Thread-safe cache of enum definitions keyed by concrete type.
///
/// ## Usage
///
/// ```
/// use enumkit_registry::{EnumRegistry, EnumValue, declare_enum};
///
/// declare_enum! {
///     pub struct Status {
///         const OPEN: &'static str = "open";
///         const CLOSED: &'static str = "closed";
///     }
///     default = OPEN;
/// }
///
/// let registry = EnumRegistry::new();
/// assert_eq!(registry.values::<Status>().len(), 2);
///
/// let status = registry.create_default::<Status>().unwrap();
/// assert_eq!(status.value(), &EnumValue::from("open"));
/// ```
pub struct EnumRegistry {
    instance_id: u64,
    definitions: SlotMap<Arc<EnumDefinition>>,
    instances: SlotMap<ErasedInstances>,
}

impl Default for EnumRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumRegistry {
    pub fn new() -> Self {
        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst);
        trace!(instance_id, "EnumRegistry::new - creating new instance");
        Self {
            instance_id,
            definitions: DashMap::with_hasher(FxBuildHasher),
            instances: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// The process-wide registry used by the `Enum<T>` shorthands.
    pub fn global() -> &'static EnumRegistry {
        &GLOBAL
    }

    /// Resolved definition of `T`, computed on first use.
    pub fn definition<T: EnumType>(&self) -> Arc<EnumDefinition> {
        let slot = slot_for(&self.definitions, TypeId::of::<T>());
        let definition = slot.get_or_init(|| {
            let definition = EnumDefinition::resolve::<T>();
            trace!(
                instance_id = self.instance_id,
                enum_name = T::NAME,
                values = definition.len(),
                domain = ?definition.domain(),
                "EnumRegistry::definition - resolved"
            );
            Arc::new(definition)
        });
        Arc::clone(definition)
    }

    /// Whether `T` has been resolved by this registry.
    pub fn contains<T: EnumType>(&self) -> bool {
        self.definitions
            .get(&TypeId::of::<T>())
            .is_some_and(|slot| slot.value().get().is_some())
    }

    /// Number of resolved enum types.
    pub fn len(&self) -> usize {
        self.definitions
            .iter()
            .filter(|slot| slot.value().get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared values of `T` in declaration order. Every call returns the
    /// same shared sequence.
    pub fn values<T: EnumType>(&self) -> Arc<[EnumValue]> {
        Arc::clone(self.definition::<T>().values())
    }

    /// Whether `value` is a declared value of `T`. Never fails.
    pub fn has_value<T: EnumType>(&self, value: &EnumValue) -> bool {
        self.definition::<T>().has_value(value)
    }

    /// Declared default of `T`, unvalidated.
    pub fn default_value<T: EnumType>(&self) -> Option<EnumValue> {
        self.definition::<T>().default_value().cloned()
    }

    /// Build a validated instance of `T`; an absent value falls back to the
    /// declared default.
    pub fn construct<T: EnumType>(&self, value: Option<EnumValue>) -> Result<Enum<T>, InvalidValue> {
        let definition = self.definition::<T>();
        let value = value.or_else(|| definition.default_value().cloned());
        Enum::with_definition(definition, value)
    }

    /// Build an instance holding the declared default. Fails when `T` has no
    /// default.
    pub fn create_default<T: EnumType>(&self) -> Result<Enum<T>, InvalidValue> {
        self.construct::<T>(None)
    }

    /// One instance per declared value, keyed by value.
    pub fn instances<T: EnumType>(&self) -> Arc<IndexMap<EnumValue, Enum<T>>> {
        let slot = slot_for(&self.instances, TypeId::of::<T>());
        let erased = slot.get_or_init(|| {
            let definition = self.definition::<T>();
            let mut instances = IndexMap::with_capacity(definition.len());
            for value in definition.values().iter() {
                // Declared values always pass validation.
                if let Ok(instance) =
                    Enum::<T>::with_definition(Arc::clone(&definition), Some(value.clone()))
                {
                    instances.insert(value.clone(), instance);
                }
            }
            trace!(
                instance_id = self.instance_id,
                enum_name = T::NAME,
                instances = instances.len(),
                "EnumRegistry::instances - cached"
            );
            Arc::new(instances) as ErasedInstances
        });

        match Arc::clone(erased).downcast::<IndexMap<EnumValue, Enum<T>>>() {
            Ok(instances) => instances,
            Err(_) => unreachable!("instance cache of {} holds another type", T::NAME),
        }
    }

    /// Display label of every declared value, keyed by value.
    pub fn labels<T: EnumType>(&self) -> Arc<IndexMap<EnumValue, String>> {
        let definition = self.definition::<T>();
        let labels = definition.labels_cell().get_or_init(|| {
            let labels: IndexMap<EnumValue, String> = self
                .instances::<T>()
                .iter()
                .map(|(value, instance)| (value.clone(), instance.label()))
                .collect();
            trace!(
                instance_id = self.instance_id,
                enum_name = T::NAME,
                labels = labels.len(),
                "EnumRegistry::labels - cached"
            );
            Arc::new(labels)
        });
        Arc::clone(labels)
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
