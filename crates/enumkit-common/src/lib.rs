//! Common types shared by the enumkit crates.
//!
//! This crate provides the foundational pieces every enum type is built on:
//! - Declared scalar values (`EnumValue`) and the domain they span (`ValueDomain`)
//! - The single validation error kind (`InvalidValue`)

// Tagged scalar values - the legal contents of an enum type
pub mod value;
pub use value::{EnumValue, ValueDomain};

// Validation failures
pub mod error;
pub use error::InvalidValue;
