//! End-to-end CLI tests for `gen-excel`
//!
//! Argument parsing is checked through clap directly; full runs execute the
//! built binary via `std::process::Command`.

use clap::Parser;
use linkml_excelgen::cli::{GenExcelApp, GenExcelCli, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const SCHEMA: &str = r"
id: https://example.org/people
name: people
classes:
  Person:
    slots: [name, status]
slots:
  name:
  status:
    range: StatusEnum
enums:
  StatusEnum:
    permissible_values: [active, inactive]
";

fn write_schema(dir: &TempDir, name: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, SCHEMA)?;
    Ok(path)
}

fn gen_excel(args: &[&str], cwd: &Path) -> anyhow::Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_gen-excel"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn test_parse_defaults() -> anyhow::Result<()> {
    let cli = GenExcelCli::try_parse_from(["gen-excel", "schema.yaml"])?;
    assert_eq!(cli.schema, PathBuf::from("schema.yaml"));
    assert_eq!(cli.format, OutputFormat::Xlsx);
    assert_eq!(cli.output, None);
    assert!(!cli.skip_abstract);
    assert!(!cli.verbose && !cli.quiet);
    Ok(())
}

#[test]
fn test_parse_all_flags() -> anyhow::Result<()> {
    let cli = GenExcelCli::try_parse_from([
        "gen-excel",
        "-o",
        "out.xlsx",
        "-f",
        "xlsx",
        "-c",
        "excel.yaml",
        "--skip-abstract",
        "--checkpoint",
        "-q",
        "schema.yaml",
    ])?;
    assert_eq!(cli.output, Some(PathBuf::from("out.xlsx")));
    assert_eq!(cli.config, Some(PathBuf::from("excel.yaml")));
    assert!(cli.skip_abstract && cli.checkpoint && cli.quiet);
    Ok(())
}

#[test]
fn test_unknown_format_is_rejected() {
    let result = GenExcelCli::try_parse_from(["gen-excel", "-f", "csv", "schema.yaml"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let result = GenExcelCli::try_parse_from(["gen-excel", "-v", "-q", "schema.yaml"]);
    assert!(result.is_err());
}

#[test]
fn test_config_file_and_flag_overrides() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("excel.yaml");
    fs::write(
        &config_path,
        "generator_name: ${EXCELGEN_TEST_UNSET_NAME:-sheets}\ngenerator_version: 2.0.0\n",
    )?;
    let config_arg = config_path.display().to_string();

    let cli = GenExcelCli::try_parse_from([
        "gen-excel",
        "-c",
        config_arg.as_str(),
        "--skip-abstract",
        "schema.yaml",
    ])?;
    let config = GenExcelApp::new(cli).effective_config()?;
    assert_eq!(config.generator_name, "sheets");
    assert_eq!(config.generator_version, "2.0.0");
    assert!(config.skip_abstract);
    assert!(!config.checkpoint);
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("excel.yaml");
    fs::write(&config_path, "column_width: -3\n")?;
    let config_arg = config_path.display().to_string();

    let cli = GenExcelCli::try_parse_from(["gen-excel", "-c", config_arg.as_str(), "s.yaml"])?;
    assert!(GenExcelApp::new(cli).effective_config().is_err());
    Ok(())
}

#[test]
fn test_binary_derives_output_name() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let schema_path = write_schema(&dir, "people.schema.yaml")?;
    let schema_arg = schema_path.display().to_string();

    let output = gen_excel(&[schema_arg.as_str()], dir.path())?;
    assert!(
        output.status.success(),
        "gen-excel failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let expected = "people.schema_excelgen_0.0.1.xlsx";
    assert!(dir.path().join(expected).exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains(expected));
    Ok(())
}

#[test]
fn test_binary_honors_output_and_quiet() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let schema_path = write_schema(&dir, "people.yaml")?;
    let out_path = dir.path().join("custom.xlsx");
    let schema_arg = schema_path.display().to_string();
    let out_arg = out_path.display().to_string();

    let output = gen_excel(&["-q", "-o", out_arg.as_str(), schema_arg.as_str()], dir.path())?;
    assert!(output.status.success());
    assert!(out_path.exists());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_binary_fails_on_missing_schema() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = gen_excel(&["does-not-exist.yaml"], dir.path())?;
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("does-not-exist.yaml").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("Error:").count(), 1, "{stderr}");
    Ok(())
}

#[test]
fn test_binary_reports_failure_even_when_quiet() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = gen_excel(&["-q", "does-not-exist.yaml"], dir.path())?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("does-not-exist.yaml").count(), 1, "{stderr}");
    Ok(())
}

#[test]
fn test_binary_warns_on_foreign_output_extension() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let schema_path = write_schema(&dir, "people.yaml")?;
    let out_path = dir.path().join("people.xls");
    let schema_arg = schema_path.display().to_string();
    let out_arg = out_path.display().to_string();

    let output = gen_excel(&["-o", out_arg.as_str(), schema_arg.as_str()], dir.path())?;
    assert!(output.status.success());
    assert!(out_path.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not end in .xlsx"));
    Ok(())
}
