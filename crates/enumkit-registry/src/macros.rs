//! The `declare_enum!` declaration macro.

/// Declare a concrete enum type.
///
/// Generates a marker struct, one typed associated constant per declared
/// value (`&'static str` or `i64`), and the [`EnumType`](crate::EnumType) and
/// [`Labeled`](crate::Labeled) impls.
///
/// Optional trailers, in this order:
/// - `default = CONST;` names the value used when none is given.
/// - `label = custom;` skips the generated `Labeled` impl so the type can
///   provide its own.
///
/// A type may extend another with `struct Child: Parent { .. }`. The
/// parent's constants come first; its default and labels are inherited
/// unless overridden. A child's `default = CONST;` may name a constant
/// declared by any ancestor. On a child, an unknown name leaves the type
/// without a default.
///
/// ```
/// use enumkit_registry::{Enum, EnumValue, declare_enum};
///
/// declare_enum! {
///     pub struct EntityStatus {
///         const NEW_ENTITY: &'static str = "new";
///         const MODIFIED_ENTITY: i64 = 2;
///         const SAVED_ENTITY: &'static str = "saved";
///     }
///     default = NEW_ENTITY;
/// }
///
/// let status = Enum::<EntityStatus>::new(EntityStatus::MODIFIED_ENTITY).unwrap();
/// assert_eq!(status.value(), &EnumValue::from(2));
/// assert_eq!(status.label(), "2");
/// ```
#[macro_export]
macro_rules! declare_enum {
    (@inherited) => {
        ::std::vec::Vec::new()
    };
    (@inherited $parent:path) => {
        <$parent as $crate::EnumType>::constants()
    };

    (@default $name:ident [$default:ident] []) => {
        ::std::option::Option::Some($crate::EnumValue::from($name::$default))
    };
    // The default may name an inherited constant; the latest declaration wins.
    (@default $name:ident [$default:ident] [$parent:path]) => {
        <$name as $crate::EnumType>::constants()
            .into_iter()
            .rev()
            .find(|constant| constant.name == stringify!($default))
            .map(|constant| constant.value)
    };
    (@default $name:ident [] []) => {
        ::std::option::Option::None
    };
    (@default $name:ident [] [$parent:path]) => {
        <$parent as $crate::EnumType>::default_value()
    };

    (@labeled $name:ident [$($parent:path)?] custom) => {};
    (@labeled $name:ident []) => {
        impl $crate::Labeled for $name {}
    };
    (@labeled $name:ident [$parent:path]) => {
        impl $crate::Labeled for $name {
            fn label(value: &$crate::EnumValue) -> ::std::string::String {
                <$parent as $crate::Labeled>::label(value)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(: $parent:path)? {
            $(
                $(#[$const_meta:meta])*
                const $const_name:ident : $const_ty:ty = $const_value:expr;
            )*
        }
        $(default = $default:ident;)?
        $(label = $label:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $const_name: $const_ty = $const_value;
            )*
        }

        impl $crate::EnumType for $name {
            const NAME: &'static str = stringify!($name);

            fn constants() -> ::std::vec::Vec<$crate::Constant> {
                #[allow(unused_mut)]
                let mut constants: ::std::vec::Vec<$crate::Constant> =
                    $crate::declare_enum!(@inherited $($parent)?);
                $(
                    constants.push($crate::Constant::new(
                        stringify!($const_name),
                        $crate::EnumValue::from($name::$const_name),
                    ));
                )*
                constants
            }

            fn default_value() -> ::std::option::Option<$crate::EnumValue> {
                $crate::declare_enum!(@default $name [$($default)?] [$($parent)?])
            }
        }

        $crate::declare_enum!(@labeled $name [$($parent)?] $($label)?);
    };
}
