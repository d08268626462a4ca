//! # LinkML Excel generator
//!
//! Turns a LinkML schema into a data-entry workbook: one worksheet per
//! class, headed by the class's slot names, with dropdown validation on
//! every column whose range is an enum.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linkml_excelgen::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let path = Path::new("person_schema.yaml");
//!     let schema = Parser::new().parse_file(path)?;
//!
//!     // Writes person_schema_excelgen_0.0.1.xlsx
//!     let summary = ExcelGenerator::new(path, None).serialize(&schema)?;
//!     println!("{} sheets", summary.sheets);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! [`generator::SchemaWalker`] visits every enum, then every class, then
//! every slot of every class. [`generator::ExcelGenerator`] records enum
//! values, adds a worksheet per class and attaches list validations to
//! enum-ranged columns, holding the workbook in memory until the walk
//! completes.
//!
//! ## Command line
//!
//! The `gen-excel` binary wraps the same flow; see [`cli`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // subjective determination
#![allow(clippy::return_self_not_must_use)] // builder patterns
#![allow(clippy::doc_markdown)] // LinkML, YAML, etc. are proper nouns

/// Command-line interface
pub mod cli;

/// Configuration loading
pub mod config;

/// Workbook generation
pub mod generator;

/// Schema parsing
pub mod parser;

/// Prelude for convenient imports
pub mod prelude;

/// Class and slot introspection
pub mod schema_view;

pub use config::ExcelConfig;
pub use generator::{ExcelGenerator, GenerationSummary, GeneratorError, GeneratorResult};
pub use parser::Parser;
