//! Property-based tests for workbook output path derivation

use linkml_excelgen::generator::excel::workbook_path;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

/// A file stem without dots or separators
fn arb_stem() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}"
}

fn arb_version() -> impl Strategy<Value = String> {
    (0u8..20, 0u8..20, 0u8..20).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

proptest! {
    #[test]
    fn derived_name_has_generator_suffix(
        stem in arb_stem(),
        name in "[a-z]{1,12}",
        version in arb_version(),
        ext in prop_oneof![Just("yaml"), Just("yml"), Just("json")],
    ) {
        let source = PathBuf::from("schemas").join(format!("{stem}.{ext}"));
        let derived = workbook_path(&source, None, &name, &version);
        prop_assert_eq!(derived, PathBuf::from(format!("{stem}_{name}_{version}.xlsx")));
    }

    #[test]
    fn one_redundant_yaml_layer_is_stripped(stem in arb_stem(), version in arb_version()) {
        let source = format!("{stem}.yaml.yaml");
        let derived = workbook_path(Path::new(&source), None, "excelgen", &version);
        prop_assert_eq!(derived, PathBuf::from(format!("{stem}_excelgen_{version}.xlsx")));

        // Only one layer goes.
        let source = format!("{stem}.yaml.yaml.yaml");
        let derived = workbook_path(Path::new(&source), None, "excelgen", &version);
        prop_assert_eq!(
            derived,
            PathBuf::from(format!("{stem}.yaml_excelgen_{version}.xlsx"))
        );
    }

    #[test]
    fn explicit_output_is_verbatim(stem in arb_stem(), out in "[a-z]{1,12}\\.(xlsx|xls|bin)") {
        let source = format!("{stem}.yaml");
        let derived = workbook_path(Path::new(&source), Some(Path::new(&out)), "excelgen", "0.0.1");
        prop_assert_eq!(derived, PathBuf::from(out));
    }
}
