//! # `LinkML` Core
//!
//! Core types for working with `LinkML` schemas in Rust.
//!
//! This crate provides the schema data model consumed by the Excel generator
//! (classes, slots, enumerations and their permissible values) together with
//! the shared error type.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core error types for `LinkML` operations
pub mod error;

/// Type definitions for `LinkML` schemas
pub mod types;

pub use error::{LinkMLError, Result};
pub use serde_json::Value;
pub use types::{
    ClassDefinition, EnumDefinition, PermissibleValue, PermissibleValueText, SchemaDefinition,
    SlotDefinition,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{LinkMLError, Result};
    pub use crate::types::*;
}
