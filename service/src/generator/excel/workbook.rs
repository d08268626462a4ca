use super::super::traits::{GeneratorError, GeneratorResult};
use super::cast;
use super::features::ExcelFeatures;
use indexmap::IndexMap;
use rust_xlsxwriter::{Color, DataValidation, Format, FormatAlign, FormatBorder, Formula, Workbook};
use std::path::Path;
use tracing::debug;

/// Hidden worksheet holding enum values too long for an inline list.
pub const LOOKUP_SHEET: &str = "_enums";

/// Excel's limit on the text of an inline list validation.
const MAX_INLINE_LIST_LEN: usize = 255;

/// Where a dropdown takes its allowed values from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// Comma separated values stored in the validation itself
    Inline,
    /// A range on the hidden lookup sheet, e.g. `'_enums'!$A$2:$A$40`
    Lookup(String),
}

/// A dropdown validation attached to one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValidation {
    /// Header of the validated column
    pub header: String,
    /// Zero-based column index
    pub column: u16,
    /// First validated row (zero-based)
    pub first_row: u32,
    /// Last validated row (zero-based)
    pub last_row: u32,
    /// Enum providing the values
    pub enum_name: String,
    /// Allowed values in order
    pub values: Vec<String>,
    /// Where the values live in the workbook
    pub source: ListSource,
}

/// What has been written to one class worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Worksheet name
    pub name: String,
    /// Class the worksheet was created for
    pub class_name: String,
    /// Header row
    pub headers: Vec<String>,
    /// Dropdowns on this worksheet
    pub validations: Vec<ListValidation>,
}

impl SheetLayout {
    /// Zero-based column of `header`
    #[must_use]
    pub fn column_of(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

/// Record of the class worksheets, keyed by class name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookLayout {
    sheets: IndexMap<String, SheetLayout>,
}

impl WorkbookLayout {
    /// Worksheet created for `class_name`
    #[must_use]
    pub fn sheet_for_class(&self, class_name: &str) -> Option<&SheetLayout> {
        self.sheets.get(class_name)
    }

    /// Worksheet with the given name
    #[must_use]
    pub fn sheet(&self, sheet_name: &str) -> Option<&SheetLayout> {
        self.sheets.values().find(|sheet| sheet.name == sheet_name)
    }

    /// Class worksheets in creation order
    pub fn sheets(&self) -> impl Iterator<Item = &SheetLayout> {
        self.sheets.values()
    }

    /// Class worksheet names in creation order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.values().map(|sheet| sheet.name.as_str()).collect()
    }

    /// Number of class worksheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Number of dropdowns across all worksheets
    #[must_use]
    pub fn validation_count(&self) -> usize {
        self.sheets.values().map(|sheet| sheet.validations.len()).sum()
    }

    fn name_taken(&self, sheet_name: &str) -> bool {
        // Excel compares sheet names case-insensitively.
        let wanted = sheet_name.to_lowercase();
        self.sheets
            .values()
            .any(|sheet| sheet.name.to_lowercase() == wanted)
    }
}

/// Worksheet options applied to every class sheet
#[derive(Debug, Clone)]
pub struct SheetOptions {
    /// Enabled features
    pub features: ExcelFeatures,
    /// Width of header columns
    pub column_width: f64,
    /// Last zero-based row covered by dropdowns
    pub validation_last_row: u32,
}

/// In-memory workbook plus a record of what went into it
pub struct WorkbookBuilder {
    workbook: Workbook,
    layout: WorkbookLayout,
    options: SheetOptions,
    header_format: Format,
    /// Enum name to its lookup range, for enums already on the lookup sheet
    lookup_ranges: IndexMap<String, String>,
}

impl WorkbookBuilder {
    /// Create an empty workbook
    #[must_use]
    pub fn new(options: SheetOptions) -> Self {
        let header_format = if options.features.contains(ExcelFeatures::FORMAT_HEADERS) {
            Format::new()
                .set_bold()
                .set_background_color(Color::Gray)
                .set_font_color(Color::White)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
        } else {
            Format::new()
        };

        Self {
            workbook: Workbook::new(),
            layout: WorkbookLayout::default(),
            options,
            header_format,
            lookup_ranges: IndexMap::new(),
        }
    }

    /// What has been written so far
    #[must_use]
    pub fn layout(&self) -> &WorkbookLayout {
        &self.layout
    }

    /// Add a worksheet for `class_name` with `headers` in row 1.
    ///
    /// # Errors
    /// Fails if the name is empty or already used, or the writer rejects it.
    pub fn add_class_sheet(
        &mut self,
        class_name: &str,
        sheet_name: &str,
        headers: &[String],
    ) -> GeneratorResult<()> {
        if sheet_name.is_empty() {
            return Err(GeneratorError::Generation(format!(
                "Class '{class_name}' does not yield a usable worksheet name"
            )));
        }
        if self.layout.name_taken(sheet_name) || self.layout.sheets.contains_key(class_name) {
            return Err(GeneratorError::DuplicateSheet {
                sheet: sheet_name.to_string(),
                class_name: class_name.to_string(),
            });
        }

        let features = self.options.features;
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(sheet_name)?;

        for (index, header) in headers.iter().enumerate() {
            let col = cast::usize_to_u16_column(index)?;
            worksheet.write_string_with_format(0, col, header, &self.header_format)?;
            worksheet.set_column_width(col, self.options.column_width)?;
        }

        if features.contains(ExcelFeatures::FREEZE_HEADERS) {
            worksheet.set_freeze_panes(1, 0)?;
        }

        if features.contains(ExcelFeatures::ADD_FILTERS) && !headers.is_empty() {
            let last_col = cast::usize_to_u16_column(headers.len() - 1)?;
            worksheet.autofilter(0, 0, 0, last_col)?;
        }

        self.layout.sheets.insert(
            class_name.to_string(),
            SheetLayout {
                name: sheet_name.to_string(),
                class_name: class_name.to_string(),
                headers: headers.to_vec(),
                validations: Vec::new(),
            },
        );
        debug!("Created worksheet '{sheet_name}' with {} columns", headers.len());
        Ok(())
    }

    /// Attach a dropdown of `values` under `header` on the class's worksheet.
    ///
    /// Returns `Ok(false)` without touching the workbook when the class has
    /// no worksheet, the header is missing, or there are no values.
    ///
    /// # Errors
    /// Propagates writer failures.
    pub fn add_enum_dropdown(
        &mut self,
        class_name: &str,
        header: &str,
        enum_name: &str,
        values: &[String],
    ) -> GeneratorResult<bool> {
        let Some(sheet) = self.layout.sheets.get(class_name) else {
            return Ok(false);
        };
        let Some(column) = sheet.column_of(header) else {
            debug!("Worksheet '{}' has no column '{header}'", sheet.name);
            return Ok(false);
        };
        if values.is_empty() {
            debug!("Enum '{enum_name}' has no values, no dropdown for '{header}'");
            return Ok(false);
        }

        let sheet_name = sheet.name.clone();
        let column = cast::usize_to_u16_column(column)?;
        let first_row = 1;
        let last_row = self.options.validation_last_row;

        let source = if fits_inline(values) {
            ListSource::Inline
        } else {
            ListSource::Lookup(self.lookup_range(enum_name, values)?)
        };

        let validation = match &source {
            ListSource::Inline => {
                let items: Vec<&str> = values.iter().map(String::as_str).collect();
                DataValidation::new().allow_list_strings(&items)?
            }
            ListSource::Lookup(range) => {
                DataValidation::new().allow_list_formula(Formula::new(format!("={range}")))
            }
        }
        .set_error_title("Invalid value")?
        .set_error_message(&format!("Choose a value from {enum_name}"))?;

        self.workbook
            .worksheet_from_name(&sheet_name)?
            .add_data_validation(first_row, column, last_row, column, &validation)?;

        if let Some(sheet) = self.layout.sheets.get_mut(class_name) {
            sheet.validations.push(ListValidation {
                header: header.to_string(),
                column,
                first_row,
                last_row,
                enum_name: enum_name.to_string(),
                values: values.to_vec(),
                source,
            });
        }
        debug!("Added '{enum_name}' dropdown to '{sheet_name}'!{header}");
        Ok(true)
    }

    /// Write `values` to the lookup sheet once per enum and return the range.
    fn lookup_range(&mut self, enum_name: &str, values: &[String]) -> GeneratorResult<String> {
        if let Some(range) = self.lookup_ranges.get(enum_name) {
            return Ok(range.clone());
        }

        let column = cast::usize_to_u16_column(self.lookup_ranges.len())?;
        let last_row = cast::usize_to_u32_row(values.len())?;

        if self.lookup_ranges.is_empty() {
            let worksheet = self.workbook.add_worksheet();
            worksheet.set_name(LOOKUP_SHEET)?;
            worksheet.set_hidden(true);
        }
        let worksheet = self.workbook.worksheet_from_name(LOOKUP_SHEET)?;
        worksheet.write_string(0, column, enum_name)?;
        for (offset, value) in values.iter().enumerate() {
            let row = cast::usize_to_u32_row(offset + 1)?;
            worksheet.write_string(row, column, value)?;
        }

        let letter = cast::column_letter(column);
        let range = format!("'{LOOKUP_SHEET}'!${letter}$2:${letter}${}", last_row + 1);
        self.lookup_ranges.insert(enum_name.to_string(), range.clone());
        Ok(range)
    }

    /// Write the workbook to `path`.
    ///
    /// # Errors
    /// Propagates writer and filesystem failures.
    pub fn save(&mut self, path: &Path) -> GeneratorResult<()> {
        self.workbook.save(path)?;
        debug!("Saved workbook to {}", path.display());
        Ok(())
    }
}

/// Whether `values` can live in the validation itself.
fn fits_inline(values: &[String]) -> bool {
    let joined_len: usize =
        values.iter().map(|v| v.chars().count()).sum::<usize>() + values.len().saturating_sub(1);
    joined_len <= MAX_INLINE_LIST_LEN && !values.iter().any(|v| v.contains(',') || v.contains('"'))
}
