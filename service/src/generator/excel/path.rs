//! Output path derivation.

use std::path::{Path, PathBuf};

/// Base name used when the schema source has no usable file name.
const FALLBACK_PREFIX: &str = "schema";

/// Compute where the workbook is written.
///
/// An explicit `output` wins. Otherwise the source's file name loses one
/// extension, then one more if what remains still ends in `.yaml`/`.yml`
/// (`model.yaml.yaml` -> `model`), and
/// `_<generator_name>_<generator_version>.xlsx` is appended. The result is
/// relative to the working directory.
#[must_use]
pub fn workbook_path(
    schema_source: &Path,
    output: Option<&Path>,
    generator_name: &str,
    generator_version: &str,
) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }

    let prefix = schema_source
        .file_name()
        .map(Path::new)
        .and_then(Path::file_stem)
        .map(|stem| {
            let stem = Path::new(stem);
            match stem.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => stem.file_stem().unwrap_or(stem.as_os_str()),
                _ => stem.as_os_str(),
            }
        })
        .and_then(|prefix| prefix.to_str())
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(FALLBACK_PREFIX);

    PathBuf::from(format!("{prefix}_{generator_name}_{generator_version}.xlsx"))
}
