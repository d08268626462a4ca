//! Workbook generation for `LinkML` schemas
//!
//! [`traversal`] walks a schema and calls a [`traversal::SchemaVisitor`]
//! back; [`excel::ExcelGenerator`] is the visitor that writes the workbook.

pub mod excel;
pub mod traits;
pub mod traversal;

pub use excel::{ExcelFeatures, ExcelGenerator};
pub use traits::{GenerationSummary, Generator, GeneratorError, GeneratorResult};
pub use traversal::{SchemaVisitor, SchemaWalker};
