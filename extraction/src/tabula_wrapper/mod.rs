mod client;
pub mod pages;

use std::path::Path;

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::{Strategy, table::ExtractedTable};

pub use client::TabulaClient;

/// Required trait for detecting the tables within a PDF file.
pub trait TableExtractor {
    /// Extracts all tables from the pages of `pdf_path` described by `page_selector`, in the
    /// order that the detector finds them.
    fn extract_tables(
        &self,
        pdf_path: &Path,
        strategy: Strategy,
        page_selector: &str,
    ) -> Result<Vec<ExtractedTable>>;
}

/// A sequence of extracted tables from a PDF file, as output by Tabula.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct JsonTableSet(pub Vec<JsonTable>);

/// A single extracted table from a PDF file.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonTable {
    pub extraction_method: String,
    pub page_number: i32,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub right: f32,
    pub bottom: f32,
    pub data: Vec<JsonRow>,
}

/// A single extracted table row from a PDF file.
#[derive(Deserialize, Debug)]
pub struct JsonRow(pub Vec<JsonCell>);

/// A single extracted table cell from a PDF file.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonCell {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
}

impl TryFrom<JsonTable> for ExtractedTable {
    type Error = anyhow::Error;

    fn try_from(value: JsonTable) -> Result<Self> {
        let page_number = u32::try_from(value.page_number)
            .ok()
            .filter(|&page| page >= 1)
            .ok_or_else(|| anyhow!("invalid page number {} in extracted table", value.page_number))?;
        Ok(ExtractedTable::new(
            page_number,
            value
                .data
                .into_iter()
                .map(|row| row.0.into_iter().map(|cell| cell.text)),
        ))
    }
}

impl JsonTableSet {
    pub fn into_tables(self) -> Result<Vec<ExtractedTable>> {
        self.0.into_iter().map(ExtractedTable::try_from).collect()
    }
}
