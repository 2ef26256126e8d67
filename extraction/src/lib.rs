//! Extraction of tables from PDF files into spreadsheet documents.
//!
//! Table detection itself is delegated to an implementation of [TableExtractor], normally
//! [tabula_wrapper::TabulaClient].

pub mod adapter;
pub mod assemble;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod request;
pub mod status;
pub mod table;
pub mod tabula_wrapper;

pub use adapter::{ExtractOutcome, ExtractionAdapter};
pub use assemble::{SpreadsheetDocument, assemble};
pub use error::{AssemblyFailure, ExtractionFailure, PipelineError};
pub use request::{ExtractionRequest, Strategy};
pub use table::{ExtractedTable, Row, TableSet};
pub use tabula_wrapper::TableExtractor;
