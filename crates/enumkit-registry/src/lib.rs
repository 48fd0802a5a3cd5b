//! Declaration-backed enum types.
//!
//! A concrete enum type declares a closed, ordered set of named scalar
//! constants (usually through [`declare_enum!`]). This crate resolves that
//! declaration once per type, caches its values, labels and instances, and
//! hands out validated [`Enum<T>`] values:
//!
//! - Declarations (`EnumType`, `Labeled`, `Constant`)
//! - Resolved metadata (`EnumDefinition`)
//! - The per-type cache (`EnumRegistry`)
//! - Validated instances and comparison operands (`Enum`, `Candidate`)
//! - The integer-only view (`NumericEnum`)

pub use enumkit_common::{EnumValue, InvalidValue, ValueDomain};

pub mod declaration;
pub use declaration::{Constant, EnumType, Labeled};

pub mod definition;
pub use definition::EnumDefinition;

pub mod registry;
pub use registry::EnumRegistry;

pub mod instance;
pub use instance::{Candidate, Enum};

pub mod numeric;
pub use numeric::NumericEnum;

mod macros;

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;
