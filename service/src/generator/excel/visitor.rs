use super::super::traits::GeneratorResult;
use super::super::traversal::SchemaVisitor;
use super::generator::ExcelGenerator;
use super::naming::sheet_name_for_class;
use linkml_core::prelude::*;
use tracing::{debug, info, warn};

impl SchemaVisitor for ExcelGenerator {
    fn visit_schema(&mut self, schema: &SchemaDefinition) -> GeneratorResult<()> {
        info!(
            "Generating workbook for schema '{}' into {}",
            schema.name,
            self.output_path().display()
        );
        Ok(())
    }

    fn visit_enum(&mut self, enum_def: &EnumDefinition) -> GeneratorResult<()> {
        let codes = self.registry.register(enum_def)?;
        if codes.is_empty() {
            warn!("Enum '{}' has no permissible values", enum_def.name);
        } else {
            debug!("Registered enum '{}' with {} values", enum_def.name, codes.len());
        }
        Ok(())
    }

    fn visit_class(
        &mut self,
        class: &ClassDefinition,
        slot_names: &[String],
    ) -> GeneratorResult<bool> {
        let sheet_name = sheet_name_for_class(&class.name);
        self.workbook
            .add_class_sheet(&class.name, &sheet_name, slot_names)?;
        info!("Added sheet '{sheet_name}' for class '{}'", class.name);
        self.checkpoint()?;
        Ok(true)
    }

    fn visit_class_slot(
        &mut self,
        class: &ClassDefinition,
        aliased_slot_name: &str,
        slot: &SlotDefinition,
    ) -> GeneratorResult<()> {
        if !self.add_validation() {
            return Ok(());
        }
        let Some(range) = slot.range.as_deref() else {
            return Ok(());
        };
        let Some(values) = self.registry.get(range) else {
            debug!(
                "Slot '{}.{aliased_slot_name}' has non-enum range '{range}'",
                class.name
            );
            return Ok(());
        };
        let Some(sheet) = self.workbook.layout().sheet_for_class(&class.name) else {
            debug!("Class '{}' has no sheet", class.name);
            return Ok(());
        };

        let header = if sheet.column_of(&slot.name).is_some() {
            slot.name.clone()
        } else {
            aliased_slot_name.to_string()
        };
        let values = values.to_vec();

        if self
            .workbook
            .add_enum_dropdown(&class.name, &header, range, &values)?
        {
            self.checkpoint()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::excel::ListSource;
    use crate::generator::traits::GeneratorError;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn generator() -> ExcelGenerator {
        ExcelGenerator::new(Path::new("people.yaml"), None)
    }

    fn status_enum() -> EnumDefinition {
        let mut enum_def = EnumDefinition::new("StatusEnum");
        enum_def.permissible_values = vec![
            PermissibleValue::simple("active"),
            PermissibleValue::complex("inactive"),
        ];
        enum_def
    }

    fn slot(name: &str, range: &str) -> SlotDefinition {
        let mut slot = SlotDefinition::new(name);
        slot.range = Some(range.to_string());
        slot
    }

    #[test]
    fn test_enum_slot_gets_dropdown() -> GeneratorResult<()> {
        let mut generator = generator();
        let person = ClassDefinition::new("Person");
        generator.visit_enum(&status_enum())?;
        assert!(generator.visit_class(&person, &["name".to_string(), "status".to_string()])?);
        generator.visit_class_slot(&person, "status", &slot("status", "StatusEnum"))?;

        let sheet = generator
            .layout()
            .sheet("Person")
            .expect("Person sheet should exist");
        assert_eq!(sheet.validations.len(), 1);
        let validation = &sheet.validations[0];
        assert_eq!(validation.column, 1);
        assert_eq!(validation.values, vec!["active", "inactive"]);
        assert_eq!(validation.source, ListSource::Inline);
        Ok(())
    }

    #[test]
    fn test_non_enum_range_adds_nothing() -> GeneratorResult<()> {
        let mut generator = generator();
        let person = ClassDefinition::new("Person");
        generator.visit_class(&person, &["name".to_string()])?;
        generator.visit_class_slot(&person, "name", &slot("name", "string"))?;
        assert_eq!(generator.layout().validation_count(), 0);
        Ok(())
    }

    #[test]
    fn test_class_without_sheet_adds_nothing() -> GeneratorResult<()> {
        let mut generator = generator();
        generator.visit_enum(&status_enum())?;
        let ghost = ClassDefinition::new("Ghost");
        generator.visit_class_slot(&ghost, "status", &slot("status", "StatusEnum"))?;
        assert_eq!(generator.layout().sheet_count(), 0);
        assert_eq!(generator.layout().validation_count(), 0);
        Ok(())
    }

    #[test]
    fn test_sheet_name_is_camel_cased() -> GeneratorResult<()> {
        let mut generator = generator();
        generator.visit_class(&ClassDefinition::new("named thing"), &[])?;
        assert_eq!(generator.layout().sheet_names(), vec!["NamedThing"]);
        Ok(())
    }

    #[test]
    fn test_unrecognized_value_fails_visit_enum() {
        let mut generator = generator();
        let mut enum_def = EnumDefinition::new("SizeEnum");
        enum_def.permissible_values = vec![PermissibleValue::Unrecognized(serde_json::json!(42))];
        let err = generator
            .visit_enum(&enum_def)
            .expect_err("unrecognized value should fail");
        assert!(matches!(
            err,
            GeneratorError::InvalidPermissibleValue { ref enum_name, ref value }
                if enum_name == "SizeEnum" && value == "42"
        ));
    }
}
