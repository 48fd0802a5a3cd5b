//! enumkit: declaration-backed enum types.
//!
//! Concrete enum types declare a closed, ordered set of named string or
//! integer constants. enumkit resolves each declaration once, caches its
//! values, labels and instances per type, and validates every value that
//! enters an [`Enum<T>`].
//!
//! ```
//! use enumkit::{Enum, EnumValue, declare_enum};
//!
//! declare_enum! {
//!     pub struct EmployeeName {
//!         const JOHN_SMITH: &'static str = "john-smith";
//!         const GEORGE_JONES: &'static str = "george-jones";
//!     }
//! }
//!
//! let name = Enum::<EmployeeName>::new(EmployeeName::GEORGE_JONES).unwrap();
//! assert_eq!(name.is(EmployeeName::JOHN_SMITH), Ok(false));
//! assert!(name.is("invalid").is_err());
//! assert_eq!(Enum::<EmployeeName>::values().len(), 2);
//! ```
//!
//! The crates:
//! - `enumkit-common`: `EnumValue`, `ValueDomain`, `InvalidValue`
//! - `enumkit-registry`: declarations, the per-type registry, instances

pub use enumkit_common::{EnumValue, InvalidValue, ValueDomain};
pub use enumkit_registry::{
    Candidate, Constant, Enum, EnumDefinition, EnumRegistry, EnumType, Labeled, NumericEnum,
    declare_enum,
};

// Log subscriber setup (ENUMKIT_LOG / ENUMKIT_LOG_FORMAT)
pub mod tracing_config;
