//! Excel generator for `LinkML` schemas.
//!
//! Emits one data-entry worksheet per class, headed by the class's slot
//! names, with list validation on every column whose range is an enum.
//! The submodules split the work: naming and output paths, the enum
//! registry, the in-memory workbook, and the visitor callbacks that tie
//! them to the schema walk.

mod cast;
mod features;
mod generator;
mod naming;
mod path;
mod registry;
mod visitor;
mod workbook;

pub use features::ExcelFeatures;
pub use generator::ExcelGenerator;
pub use naming::{camelcase, sanitize_sheet_name, sheet_name_for_class};
pub use path::workbook_path;
pub use registry::{EnumRegistry, permissible_value_code};
pub use workbook::{
    ListSource, ListValidation, LOOKUP_SHEET, SheetLayout, WorkbookLayout,
};

pub(crate) use cast::MAX_EXCEL_ROW;
