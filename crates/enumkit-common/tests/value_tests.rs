use super::*;

#[test]
fn test_value_equality_is_type_strict() {
    assert_eq!(EnumValue::from("new"), EnumValue::from("new".to_string()));
    assert_eq!(EnumValue::from(2), EnumValue::integer(2));
    assert_ne!(EnumValue::from(2), EnumValue::from("2"));
}

#[test]
fn test_value_display() {
    assert_eq!(EnumValue::from("george-jones").to_string(), "george-jones");
    assert_eq!(EnumValue::from(2).to_string(), "2");
    assert_eq!(EnumValue::from(-17_i64).to_string(), "-17");
}

#[test]
fn test_value_accessors() {
    let text = EnumValue::from_static("saved");
    assert_eq!(text.as_str(), Some("saved"));
    assert_eq!(text.as_integer(), None);
    assert!(!text.is_integer());

    let number = EnumValue::from(7_u32);
    assert_eq!(number.as_str(), None);
    assert_eq!(number.as_integer(), Some(7));
    assert!(number.is_integer());
}

#[test]
fn test_value_serializes_as_bare_scalar() {
    let text = serde_json::to_string(&EnumValue::from("new")).unwrap();
    let number = serde_json::to_string(&EnumValue::from(2)).unwrap();
    assert_eq!(text, "\"new\"");
    assert_eq!(number, "2");
}

#[test]
fn test_domain_of_declared_values() {
    assert_eq!(ValueDomain::of(&[]), ValueDomain::Empty);

    let strings = [EnumValue::from("a"), EnumValue::from("b")];
    assert_eq!(ValueDomain::of(&strings), ValueDomain::String);

    let integers = [EnumValue::from(1), EnumValue::from(2)];
    assert_eq!(ValueDomain::of(&integers), ValueDomain::Integer);

    let mixed = [EnumValue::from("new"), EnumValue::from(2), EnumValue::from("saved")];
    assert_eq!(ValueDomain::of(&mixed), ValueDomain::Mixed);
}

#[test]
fn test_domain_admits() {
    assert!(ValueDomain::String.admits(&EnumValue::from("x")));
    assert!(!ValueDomain::String.admits(&EnumValue::from(1)));
    assert!(ValueDomain::Integer.admits(&EnumValue::from(1)));
    assert!(!ValueDomain::Integer.admits(&EnumValue::from("1")));
    assert!(ValueDomain::Mixed.admits(&EnumValue::from("x")));
    assert!(ValueDomain::Mixed.admits(&EnumValue::from(1)));
    assert!(!ValueDomain::Empty.admits(&EnumValue::from("x")));
}
