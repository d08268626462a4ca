use super::super::traits::{Generator, GenerationSummary, GeneratorError, GeneratorResult};
use super::super::traversal::SchemaWalker;
use super::features::ExcelFeatures;
use super::path::workbook_path;
use super::registry::EnumRegistry;
use super::workbook::{SheetOptions, WorkbookBuilder, WorkbookLayout};
use crate::config::ExcelConfig;
use linkml_core::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Excel workbook generator.
///
/// Holds one in-memory workbook for the whole run. Sheets are created as
/// classes are visited and dropdowns as class slots are visited; the file
/// is written by [`ExcelGenerator::finish`], and additionally after every
/// change when checkpointing is enabled.
pub struct ExcelGenerator {
    config: ExcelConfig,
    output_path: PathBuf,
    pub(super) workbook: WorkbookBuilder,
    pub(super) registry: EnumRegistry,
}

impl ExcelGenerator {
    /// Create a generator with the default configuration.
    ///
    /// `schema_source` is the schema file the output name is derived from;
    /// `output` overrides it verbatim.
    #[must_use]
    pub fn new(schema_source: &Path, output: Option<&Path>) -> Self {
        Self::build(ExcelConfig::default(), schema_source, output)
    }

    /// Create a generator with a custom configuration.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Configuration`] if `config` is invalid.
    pub fn with_config(
        config: ExcelConfig,
        schema_source: &Path,
        output: Option<&Path>,
    ) -> GeneratorResult<Self> {
        config
            .validate()
            .map_err(|e| GeneratorError::Configuration(e.to_string()))?;
        Ok(Self::build(config, schema_source, output))
    }

    fn build(config: ExcelConfig, schema_source: &Path, output: Option<&Path>) -> Self {
        let output_path = workbook_path(
            schema_source,
            output,
            &config.generator_name,
            &config.generator_version,
        );
        let workbook = WorkbookBuilder::new(SheetOptions {
            features: config.features,
            column_width: config.column_width,
            validation_last_row: config.validation_last_row,
        });
        Self {
            config,
            output_path,
            workbook,
            registry: EnumRegistry::new(),
        }
    }

    /// Where the workbook will be written
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ExcelConfig {
        &self.config
    }

    /// Enums seen so far
    #[must_use]
    pub fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    /// Sheets and dropdowns written so far
    #[must_use]
    pub fn layout(&self) -> &WorkbookLayout {
        self.workbook.layout()
    }

    /// Check if dropdown validation is enabled.
    #[must_use]
    pub fn add_validation(&self) -> bool {
        self.config.features.contains(ExcelFeatures::ADD_VALIDATION)
    }

    /// Walk `schema` and write the workbook.
    ///
    /// # Errors
    /// Fails if the schema has no name, on an unrecognized permissible
    /// value, on a sheet name clash, or when the file cannot be written.
    pub fn serialize(mut self, schema: &SchemaDefinition) -> GeneratorResult<GenerationSummary> {
        self.validate_schema(schema)?;
        debug!("Running {} generator", self.name());
        SchemaWalker::new()
            .skip_abstract_classes(self.config.skip_abstract)
            .walk(schema, &mut self)?;
        self.finish()
    }

    /// Save the workbook to the output path.
    ///
    /// # Errors
    /// Propagates writer and filesystem failures.
    pub fn finish(mut self) -> GeneratorResult<GenerationSummary> {
        self.workbook.save(&self.output_path)?;
        let layout = self.workbook.layout();
        let summary = GenerationSummary {
            output: self.output_path.clone(),
            sheets: layout.sheet_count(),
            validations: layout.validation_count(),
        };
        info!(
            "Wrote {} ({} sheets, {} dropdowns)",
            summary.output.display(),
            summary.sheets,
            summary.validations
        );
        Ok(summary)
    }

    /// Save now if checkpointing is enabled.
    pub(super) fn checkpoint(&mut self) -> GeneratorResult<()> {
        if self.config.checkpoint {
            self.workbook.save(&self.output_path)?;
        }
        Ok(())
    }
}

impl Generator for ExcelGenerator {
    fn name(&self) -> &'static str {
        "excel"
    }

    fn get_file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn validate_schema(&self, schema: &SchemaDefinition) -> Result<()> {
        if schema.name.is_empty() {
            return Err(LinkMLError::schema_validation("Schema must have a name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_path_defaults() {
        let generator = ExcelGenerator::new(Path::new("schemas/person.yaml"), None);
        assert_eq!(
            generator.output_path(),
            Path::new("person_excelgen_0.0.1.xlsx")
        );
        assert_eq!(generator.get_file_extension(), "xlsx");
    }

    #[test]
    fn test_output_override_is_verbatim() {
        let generator =
            ExcelGenerator::new(Path::new("person.yaml"), Some(Path::new("out/people.xlsx")));
        assert_eq!(generator.output_path(), Path::new("out/people.xlsx"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExcelConfig {
            generator_name: String::new(),
            ..ExcelConfig::default()
        };
        let result = ExcelGenerator::with_config(config, Path::new("person.yaml"), None);
        assert!(matches!(result, Err(GeneratorError::Configuration(_))));
    }

    #[test]
    fn test_validate_schema_only_requires_a_name() {
        let generator = ExcelGenerator::new(Path::new("s.yaml"), None);
        assert!(generator.validate_schema(&SchemaDefinition::default()).is_err());

        let mut schema = SchemaDefinition::new("s");
        assert!(generator.validate_schema(&schema).is_ok());

        let mut base = ClassDefinition::new("Base");
        base.abstract_ = Some(true);
        schema.classes.insert("Base".to_string(), base);
        assert!(generator.validate_schema(&schema).is_ok());
    }
}
