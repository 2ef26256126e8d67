use rust_xlsxwriter::{ColNum, RowNum, Workbook};

use crate::{AssemblyFailure, table::TableSet};

/// Complete, in-memory `.xlsx` file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpreadsheetDocument(Vec<u8>);

impl SpreadsheetDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Name of the sheet holding the table at 1-based `index` in extraction order.
pub fn sheet_name(page_number: u32, index: usize) -> String {
    format!("Table_P{page_number}_{index}")
}

/// Writes each table to its own sheet, in order, with every cell written as text.
pub fn assemble(tables: &TableSet) -> Result<SpreadsheetDocument, AssemblyFailure> {
    let mut workbook = Workbook::new();

    for (i, table) in tables.iter().enumerate() {
        let sheet_name = sheet_name(table.page_number, i + 1);
        let worksheet = workbook
            .add_worksheet()
            .set_name(&sheet_name)
            .map_err(|source| AssemblyFailure::Sheet {
                sheet_name: sheet_name.clone(),
                source,
            })?;

        for (row_index, row) in table.rows.iter().enumerate() {
            let row_num =
                RowNum::try_from(row_index).map_err(|_| AssemblyFailure::TooLarge {
                    sheet_name: sheet_name.clone(),
                    dimension: "row",
                    index: row_index,
                })?;
            for (col_index, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let col_num =
                    ColNum::try_from(col_index).map_err(|_| AssemblyFailure::TooLarge {
                        sheet_name: sheet_name.clone(),
                        dimension: "column",
                        index: col_index,
                    })?;
                worksheet
                    .write_string(row_num, col_num, cell.as_str())
                    .map_err(|source| AssemblyFailure::Sheet {
                        sheet_name: sheet_name.clone(),
                        source,
                    })?;
            }
        }
    }

    let buffer = workbook.save_to_buffer().map_err(AssemblyFailure::Encode)?;
    log::debug!(
        "Assembled {} sheet(s) into {} bytes of spreadsheet.",
        tables.len(),
        buffer.len()
    );
    Ok(SpreadsheetDocument(buffer))
}
