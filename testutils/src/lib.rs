//! Utilities used in tests in multiple crates within the workspace.

use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result, anyhow};
use calamine::{Reader, Xlsx};
use extraction::{ExtractedTable, Strategy, TableExtractor};

/// Single call recorded by [FakeTableExtractor].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub pdf_path: PathBuf,
    pub strategy: Strategy,
    pub page_selector: String,
    /// Contents of `pdf_path` at the time of the call, if it could be read.
    pub pdf_data: Option<Vec<u8>>,
}

/// Scripted [TableExtractor] that returns the same response to every call.
pub struct FakeTableExtractor {
    calls: Mutex<Vec<Call>>,
    response: std::result::Result<Vec<ExtractedTable>, String>,
}

impl FakeTableExtractor {
    pub fn returning(tables: Vec<ExtractedTable>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(tables),
        }
    }

    pub fn failing<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Err(message.into()),
        }
    }

    pub fn calls_snapshot(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl TableExtractor for FakeTableExtractor {
    fn extract_tables(
        &self,
        pdf_path: &Path,
        strategy: Strategy,
        page_selector: &str,
    ) -> Result<Vec<ExtractedTable>> {
        self.calls.lock().unwrap().push(Call {
            pdf_path: pdf_path.to_owned(),
            strategy,
            page_selector: page_selector.to_owned(),
            pdf_data: std::fs::read(pdf_path).ok(),
        });

        match &self.response {
            Ok(tables) => Ok(tables.clone()),
            Err(message) => Err(anyhow!(message.clone())).context("fake extraction"),
        }
    }
}

/// Sheet read back from an `.xlsx` document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadSheet {
    pub name: String,
    /// Cell text from A1 to the last used cell. Blank cells read as empty strings.
    pub rows: Vec<Vec<String>>,
}

/// Decodes an `.xlsx` document into its sheets, in workbook order.
pub fn read_xlsx(data: &[u8]) -> Result<Vec<ReadSheet>> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(data.to_vec())).context("opening spreadsheet data")?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("reading sheet {name:?}"))?;
        let rows = match range.end() {
            None => Vec::new(),
            Some((last_row, last_col)) => (0..=last_row)
                .map(|row| {
                    (0..=last_col)
                        .map(|col| {
                            range
                                .get_value((row, col))
                                .map(|value| value.to_string())
                                .unwrap_or_default()
                        })
                        .collect()
                })
                .collect(),
        };
        sheets.push(ReadSheet { name, rows });
    }
    Ok(sheets)
}

/// Returns the names of the entries directly within `dir`.
pub fn dir_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {dir:?}"))? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
