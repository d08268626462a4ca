use super::super::traits::GeneratorError;

/// Maximum number of columns in an Excel worksheet (2^14).
pub(super) const MAX_EXCEL_COLUMNS: usize = 16_384;

/// Last zero-based row index of an Excel worksheet.
pub(crate) const MAX_EXCEL_ROW: u32 = 1_048_575;

/// Safely cast usize to u16 for Excel column indices.
pub(super) fn usize_to_u16_column(value: usize) -> Result<u16, GeneratorError> {
    if value >= MAX_EXCEL_COLUMNS {
        return Err(GeneratorError::Generation(format!(
            "Too many columns for Excel: {value} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| GeneratorError::Generation(format!("Column index {value} cannot fit in u16")))
}

/// Safely cast usize to u32 for Excel row indices.
pub(super) fn usize_to_u32_row(value: usize) -> Result<u32, GeneratorError> {
    u32::try_from(value)
        .ok()
        .filter(|row| *row <= MAX_EXCEL_ROW)
        .ok_or_else(|| {
            GeneratorError::Generation(format!(
                "Too many rows for Excel: {value} (max: {MAX_EXCEL_ROW})"
            ))
        })
}

/// Excel column letters for a zero-based column index (`0` -> `A`).
pub(super) fn column_letter(column: u16) -> String {
    let mut col = u32::from(column) + 1;
    let mut letters = Vec::new();

    while col > 0 {
        let remainder = (col - 1) % 26;
        // remainder < 26 so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + remainder as u8));
        col = (col - 1) / 26;
    }

    letters.iter().rev().collect()
}
