use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::{
    ExtractionFailure, ExtractionRequest,
    table::TableSet,
    tabula_wrapper::TableExtractor,
};

/// Prefix of the transient PDF files staged for the extractor.
pub const STAGED_FILE_PREFIX: &str = "pdf2xlsx-";

/// Result of a successful call to [ExtractionAdapter::extract].
#[derive(Debug)]
pub enum ExtractOutcome {
    Tables(TableSet),
    /// The extractor ran, but found no tables.
    Empty,
}

/// Stages in-memory PDF data on disk where a [TableExtractor] can read it.
pub struct ExtractionAdapter<'a> {
    extractor: &'a dyn TableExtractor,
    temp_dir: Option<PathBuf>,
}

impl<'a> ExtractionAdapter<'a> {
    pub fn new(extractor: &'a dyn TableExtractor) -> Self {
        Self {
            extractor,
            temp_dir: None,
        }
    }

    /// Stages PDFs in `temp_dir` rather than the system temporary directory.
    pub fn with_temp_dir<P>(mut self, temp_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.temp_dir = Some(temp_dir.into());
        self
    }

    /// Runs the extractor over the request's PDF data.
    ///
    /// Exactly one transient file is created per call, and it is removed before returning.
    pub fn extract(&self, request: &ExtractionRequest) -> Result<ExtractOutcome, ExtractionFailure> {
        let staged = self.stage(request.source_bytes())?;
        log::debug!("Staged PDF for extraction at {:?}.", staged.path());

        let result = self.extractor.extract_tables(
            staged.path(),
            request.strategy(),
            request.page_selector(),
        );

        // Dropping `staged` on an early return also removes the file, but silently.
        let staged_path = staged.path().to_owned();
        if let Err(err) = staged.close() {
            log::warn!("Failed to remove staged PDF {staged_path:?}: {err}");
        }

        let tables = result.map_err(ExtractionFailure)?;
        log::info!("Extracted {} table(s).", tables.len());

        Ok(match TableSet::new(tables) {
            Some(table_set) => ExtractOutcome::Tables(table_set),
            None => ExtractOutcome::Empty,
        })
    }

    fn stage(&self, source_bytes: &[u8]) -> Result<NamedTempFile, ExtractionFailure> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGED_FILE_PREFIX).suffix(".pdf");
        let staged = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("creating temporary file for PDF")
        .map_err(ExtractionFailure)?;

        write_all_and_flush(staged.as_file(), source_bytes)
            .with_context(|| format!("writing PDF data to {:?}", staged.path()))
            .map_err(ExtractionFailure)?;

        Ok(staged)
    }
}

fn write_all_and_flush(mut file: &std::fs::File, data: &[u8]) -> std::io::Result<()> {
    file.write_all(data)?;
    file.flush()
}

/// Returns true if `path` looks like a file staged by [ExtractionAdapter].
pub fn is_staged_file(path: &Path) -> bool {
    path.file_name()
        .and_then(std::ffi::OsStr::to_str)
        .is_some_and(|name| name.starts_with(STAGED_FILE_PREFIX) && name.ends_with(".pdf"))
}
