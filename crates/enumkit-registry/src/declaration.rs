//! How concrete enum types declare themselves.
//!
//! A concrete enum type is a marker type implementing [`EnumType`]: it lists
//! its named constants in declaration order and optionally names a default.
//! Display labels come from the [`Labeled`] capability, which every enum type
//! implements either with the default stringification or with its own rule.
//!
//! Most types are written with [`declare_enum!`](crate::declare_enum) rather
//! than by implementing these traits by hand.

use enumkit_common::EnumValue;

/// One named, fixed value declared by an enum type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constant {
    pub name: &'static str,
    pub value: EnumValue,
}

impl Constant {
    pub const fn new(name: &'static str, value: EnumValue) -> Self {
        Self { name, value }
    }
}

/// Display label capability.
///
/// The label must be a pure function of the value: it is computed once per
/// declared value and cached by the registry.
pub trait Labeled {
    fn label(value: &EnumValue) -> String {
        value.to_string()
    }
}

/// A closed, named set of declared scalar values.
///
/// `constants` is evaluated at most once per registry; its order is the
/// declaration order every query reports.
pub trait EnumType: Labeled + Send + Sync + 'static {
    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Declared constants, in declaration order.
    fn constants() -> Vec<Constant>;

    /// Value substituted when an instance is built without one.
    ///
    /// Not required to be declared; it is validated like any other value when
    /// used.
    fn default_value() -> Option<EnumValue> {
        None
    }
}
