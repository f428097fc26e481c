use crate::domain::listing::{ListingRecord, COLUMNS};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

pub const EXPORT_FILENAME: &str = "zillow_grouped_listings.xlsx";

/// Excel's per-cell character limit.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Every record as one row of strings under a header row, Thumbnail left out.
/// Sentinels ("N/A", "Error") are written as-is.
pub fn listings_workbook(records: &[ListingRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in record.cells().iter().enumerate() {
            worksheet.write_string(r, col as u16, fit_cell(value)).map_err(|e| {
                ServerError::XlsxError(format!(
                    "Failed to write {} for {}: {}",
                    COLUMNS[col], record.url, e
                ))
            })?;
        }
    }

    worksheet
        .set_column_width(0, 60.0)
        .map_err(|e| ServerError::XlsxError(format!("Failed to size URL column: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

/// Cut a value to the cell limit on a char boundary.
fn fit_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

pub fn export_listings_xlsx(records: &[ListingRecord]) -> ResultResp {
    let buffer = listings_workbook(records)?;
    xlsx_response(buffer, EXPORT_FILENAME)
}
