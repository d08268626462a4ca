//! Command-line interface for `gen-excel`.

mod app;
mod types;

pub use app::GenExcelApp;
pub use types::{GenExcelCli, OutputFormat};

/// Main entry point for the CLI
///
/// # Errors
/// Returns error if CLI execution fails.
pub fn run() -> linkml_core::error::Result<()> {
    GenExcelApp::from_args().run().map(|_| ())
}
