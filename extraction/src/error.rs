use thiserror::Error;

/// The table extractor could not produce a result for the PDF.
///
/// Displays the full chain of context of the underlying error.
#[derive(Debug, Error)]
#[error("{0:#}")]
pub struct ExtractionFailure(pub anyhow::Error);

impl ExtractionFailure {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self(err.into())
    }
}

/// Extracted tables could not be written into a spreadsheet.
#[derive(Debug, Error)]
pub enum AssemblyFailure {
    #[error("writing sheet {sheet_name:?}: {source}")]
    Sheet {
        sheet_name: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("table on sheet {sheet_name:?} exceeds spreadsheet {dimension} limit at index {index}")]
    TooLarge {
        sheet_name: String,
        dimension: &'static str,
        index: usize,
    },
    #[error("encoding spreadsheet: {0}")]
    Encode(#[source] rust_xlsxwriter::XlsxError),
}

/// Failure of a single run through [crate::pipeline::run].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extracting tables: {0}")]
    Extraction(#[from] ExtractionFailure),
    #[error("assembling spreadsheet: {0}")]
    Assembly(#[from] AssemblyFailure),
}
