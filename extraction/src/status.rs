use std::fmt::Display;

use crate::{AssemblyFailure, ExtractionFailure, Strategy};

/// Severity of a [StatusMessage].
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing message describing the progress or result of an extraction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
    pub level: Level,
    pub text: String,
}

impl StatusMessage {
    pub fn new<S>(level: Level, text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn starting(strategy: Strategy, page_selector: &str) -> Self {
        Self::new(
            Level::Info,
            format!(
                "Using {} extraction on pages: {}",
                strategy.to_string().to_uppercase(),
                page_selector
            ),
        )
    }

    pub fn extracted(table_count: usize) -> Self {
        Self::new(
            Level::Success,
            format!("Successfully extracted {table_count} tables from the PDF."),
        )
    }

    pub fn no_tables() -> Self {
        Self::new(
            Level::Warning,
            "No tables were extracted. Try switching the extraction strategy (lattice/stream).",
        )
    }

    pub fn extraction_failed(failure: &ExtractionFailure) -> Vec<Self> {
        vec![
            Self::new(Level::Error, format!("Error reading PDF with Tabula: {failure}")),
            Self::new(
                Level::Warning,
                "Ensure that a Java runtime is installed and that the Tabula JAR is accessible.",
            ),
        ]
    }

    pub fn assembly_failed(failure: &AssemblyFailure) -> Self {
        Self::new(Level::Error, format!("Error writing spreadsheet: {failure}"))
    }

    /// Closes any run that produced nothing to save.
    pub fn nothing_to_save() -> Self {
        Self::new(Level::Error, "Extraction failed or no tables were found.")
    }
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.level, self.text)
    }
}
