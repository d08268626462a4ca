//! Prelude module for the Excel generator
//!
//! This module re-exports commonly used types and functions for convenient import.

// Re-export core types
pub use linkml_core::prelude::*;

// Re-export parser utilities
pub use crate::parser::{JsonParser, Parser, SchemaParser, YamlParser};

// Re-export generation types
pub use crate::config::ExcelConfig;
pub use crate::generator::{
    ExcelFeatures, ExcelGenerator, GenerationSummary, Generator, GeneratorError, GeneratorResult,
    SchemaVisitor, SchemaWalker,
};
pub use crate::schema_view::SchemaView;
