//! `gen-excel` command-line tool
//!
//! Generates an Excel workbook with one data-entry sheet per class from a
//! `LinkML` schema.

use linkml_excelgen::cli;

fn main() {
    // The error has already been reported by the app.
    if cli::run().is_err() {
        std::process::exit(1);
    }
}
