use super::*;
use crate::declare_enum;
use crate::declaration::Labeled;
use crate::fixtures::{
    Duplicated, EmployeeName, EmployeeNameWithLabel, EntityStatus, EntityStatusMixed,
    ExtendedLabeledName, Misconfigured, Nothing, SavedByDefault,
};
use rayon::prelude::*;
use std::sync::atomic::AtomicUsize;

#[test]
fn test_registry_starts_empty() {
    let registry = EnumRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.contains::<EmployeeName>());
}

#[test]
fn test_registry_resolves_on_first_use() {
    let registry = EnumRegistry::new();

    assert!(registry.has_value::<EmployeeName>(&EnumValue::from("george-jones")));
    assert!(registry.contains::<EmployeeName>());
    assert!(!registry.contains::<EntityStatus>());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_values_are_cached() {
    let registry = EnumRegistry::new();

    let first = registry.values::<EmployeeName>();
    let second = registry.values::<EmployeeName>();

    assert_eq!(first.len(), 5);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(
        &registry.definition::<EmployeeName>(),
        &registry.definition::<EmployeeName>()
    ));
}

#[test]
fn test_registries_are_independent() {
    let a = EnumRegistry::new();
    let b = EnumRegistry::new();

    let from_a = a.definition::<EntityStatus>();
    let from_b = b.definition::<EntityStatus>();

    assert!(!Arc::ptr_eq(&from_a, &from_b));
    assert_eq!(from_a.values(), from_b.values());
}

#[test]
fn test_has_value_is_total() {
    let registry = EnumRegistry::new();

    assert!(registry.has_value::<EntityStatusMixed>(&EnumValue::from(2)));
    assert!(!registry.has_value::<EntityStatusMixed>(&EnumValue::from("2")));
    assert!(!registry.has_value::<EntityStatusMixed>(&EnumValue::from("invalid")));
    assert!(!registry.has_value::<Nothing>(&EnumValue::from("new")));
}

#[test]
fn test_construct_with_value() {
    let registry = EnumRegistry::new();

    let status = registry
        .construct::<EntityStatus>(Some(EnumValue::from("saved")))
        .unwrap();
    assert_eq!(status.value(), &EnumValue::from("saved"));
}

#[test]
fn test_construct_absent_uses_default() {
    let registry = EnumRegistry::new();

    let status = registry.construct::<EntityStatus>(None).unwrap();
    assert_eq!(status.value(), &EnumValue::from("new"));
    assert_eq!(
        registry.default_value::<EntityStatus>(),
        Some(EnumValue::from("new"))
    );
}

#[test]
fn test_create_default_without_default_fails() {
    let registry = EnumRegistry::new();

    let err = registry.create_default::<EmployeeName>().unwrap_err();
    assert_eq!(err, InvalidValue::undefined("EmployeeName"));
    assert_eq!(err.to_string(), "Enum value is not defined");
}

#[test]
fn test_create_default_with_undeclared_default_fails() {
    let registry = EnumRegistry::new();

    assert_eq!(
        registry.default_value::<Misconfigured>(),
        Some(EnumValue::from("missing"))
    );
    let err = registry.create_default::<Misconfigured>().unwrap_err();
    assert_eq!(err.to_string(), "Value \"missing\" is not defined");
}

#[test]
fn test_instances() {
    let registry = EnumRegistry::new();

    let instances = registry.instances::<EmployeeName>();
    assert_eq!(instances.len(), 5);
    assert_eq!(
        instances.get_index(0).map(|(value, _)| value),
        Some(&EnumValue::from("john-smith"))
    );

    let george = &instances[&EnumValue::from("george-jones")];
    assert_eq!(george.value(), &EnumValue::from("george-jones"));
    assert!(Arc::ptr_eq(&instances, &registry.instances::<EmployeeName>()));
}

#[test]
fn test_instances_collapse_duplicate_values() {
    let registry = EnumRegistry::new();

    assert_eq!(registry.values::<Duplicated>().len(), 3);

    let instances = registry.instances::<Duplicated>();
    let keys: Vec<_> = instances.keys().cloned().collect();
    assert_eq!(keys, [EnumValue::from("a"), EnumValue::from("b")]);
}

#[test]
fn test_empty_enum_yields_empty_collections() {
    let registry = EnumRegistry::new();

    assert!(registry.values::<Nothing>().is_empty());
    assert!(registry.instances::<Nothing>().is_empty());
    assert!(registry.labels::<Nothing>().is_empty());
    assert!(registry.construct::<Nothing>(None).is_err());
}

#[test]
fn test_default_labels() {
    let registry = EnumRegistry::new();

    let labels = registry.labels::<EmployeeName>();
    assert_eq!(labels.len(), 5);
    assert_eq!(
        labels.get(&EnumValue::from("george-jones")).map(String::as_str),
        Some("george-jones")
    );
}

#[test]
fn test_mixed_labels_keep_integer_keys() {
    let registry = EnumRegistry::new();

    let labels = registry.labels::<EntityStatusMixed>();
    assert_eq!(labels.get(&EnumValue::from(2)).map(String::as_str), Some("2"));
    assert_eq!(labels.get(&EnumValue::from("2")), None);
}

#[test]
fn test_custom_labels() {
    let registry = EnumRegistry::new();

    let labels = registry.labels::<EmployeeNameWithLabel>();
    assert_eq!(
        labels.get(&EnumValue::from("george-jones")).map(String::as_str),
        Some("Label of value: george-jones (12 character long)")
    );
}

#[test]
fn test_extended_type_inherits_labels() {
    let registry = EnumRegistry::new();

    let labels = registry.labels::<ExtendedLabeledName>();
    assert_eq!(labels.len(), 6);
    assert_eq!(
        labels.get(&EnumValue::from("anna-kowalska")).map(String::as_str),
        Some("Label of value: anna-kowalska (13 character long)")
    );
}

static COUNTED_LABEL_CALLS: AtomicUsize = AtomicUsize::new(0);

declare_enum! {
    struct Counted {
        const RED: &'static str = "red";
        const GREEN: &'static str = "green";
        const BLUE: &'static str = "blue";
    }
    label = custom;
}

impl Labeled for Counted {
    fn label(value: &EnumValue) -> String {
        COUNTED_LABEL_CALLS.fetch_add(1, Ordering::SeqCst);
        value.to_string().to_uppercase()
    }
}

#[test]
fn test_concurrent_first_access_computes_once() {
    let registry = EnumRegistry::new();

    let labels: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| registry.labels::<Counted>())
        .collect();
    let definitions: Vec<_> = (0..64)
        .into_par_iter()
        .map(|_| registry.definition::<Counted>())
        .collect();

    assert!(labels.iter().all(|l| Arc::ptr_eq(l, &labels[0])));
    assert!(definitions.iter().all(|d| Arc::ptr_eq(d, &definitions[0])));
    assert_eq!(COUNTED_LABEL_CALLS.load(Ordering::SeqCst), 3);

    let keys: Vec<_> = labels[0].values().cloned().collect();
    assert_eq!(keys, ["RED", "GREEN", "BLUE"]);
}

#[test]
fn test_dropping_registry_frees_cached_definitions() {
    let registry = EnumRegistry::new();
    let definition = Arc::downgrade(&registry.definition::<EmployeeName>());

    let instances = registry.instances::<EmployeeName>();
    assert_eq!(registry.labels::<EmployeeName>().len(), 5);
    drop(instances);

    drop(registry);
    assert!(definition.upgrade().is_none());
}

#[test]
fn test_cached_instances_outlive_their_registry() {
    let registry = EnumRegistry::new();
    let definition = Arc::downgrade(&registry.definition::<EmployeeName>());
    let instances = registry.instances::<EmployeeName>();

    drop(registry);
    assert!(definition.upgrade().is_some());
    assert_eq!(instances[0].definition().name(), "EmployeeName");

    drop(instances);
    assert!(definition.upgrade().is_none());
}

#[test]
fn test_create_default_from_inherited_constant() {
    let registry = EnumRegistry::new();

    let status = registry.create_default::<SavedByDefault>().unwrap();
    assert_eq!(status.value(), &EnumValue::from("saved"));
    assert_eq!(status.constant_name(), Some("SAVED_ENTITY"));
}

#[test]
fn test_global_registry_is_shared() {
    assert!(std::ptr::eq(EnumRegistry::global(), EnumRegistry::global()));
}
