//! Excel export of service records

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use garage_domain::{RecordSink, RecordTable};
use garage_types::ExportError;

/// Writes records as a single-sheet workbook
pub struct XlsxRecordSink {
    path: PathBuf,
}

impl XlsxRecordSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_records_sheet(
        &self,
        sheet: &mut Worksheet,
        table: &RecordTable,
    ) -> Result<(), ExportError> {
        let fail = |e: rust_xlsxwriter::XlsxError| ExportError::io_failure(&self.path, e);

        sheet.set_name("Service Records").map_err(fail)?;

        let header_format = Format::new().set_bold();
        for (col, header) in table.headers().iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(fail)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let excel_row = (row_idx + 1) as u32;
            for (col, cell) in row.cells().iter().enumerate() {
                sheet
                    .write_string(excel_row, col as u16, *cell)
                    .map_err(fail)?;
            }
        }

        // Approximate auto-fit
        for (col, width) in [8, 28, 14, 20, 20, 12, 16].into_iter().enumerate() {
            sheet.set_column_width(col as u16, width).map_err(fail)?;
        }

        Ok(())
    }
}

impl RecordSink for XlsxRecordSink {
    fn write_table(&self, table: &RecordTable) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        self.write_records_sheet(sheet, table)?;

        workbook
            .save(&self.path)
            .map_err(|e| ExportError::io_failure(&self.path, e))?;

        log::info!("Wrote {} rows to {}", table.len(), self.path.display());
        Ok(())
    }
}
