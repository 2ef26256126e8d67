use std::path::Path;

use anyhow::{Context, Result};

use super::{JsonTableSet, TableExtractor, pages};
use crate::{Strategy, table::ExtractedTable};

/// Client wrapper around Tabula.
///
/// Attaches the calling thread to the JVM for each extraction, so should be used from a single
/// long-lived thread.
pub struct TabulaClient {
    vm: tabula::TabulaVM,
}

impl TabulaClient {
    /// Starts a JVM with the Tabula JAR at `libpath` on its classpath.
    pub fn new(libpath: &str) -> Result<Self> {
        let vm = tabula::TabulaVM::new(libpath, false)
            .with_context(|| format!("starting Tabula from {libpath:?}"))?;
        Ok(TabulaClient { vm })
    }
}

impl TableExtractor for TabulaClient {
    fn extract_tables(
        &self,
        pdf_path: &Path,
        strategy: Strategy,
        page_selector: &str,
    ) -> Result<Vec<ExtractedTable>> {
        let selection = pages::parse_page_selector(page_selector, || count_pages(pdf_path))
            .context("parsing page selector")?;

        let env = self.vm.attach().context("attaching to TabulaVM")?;

        let tabula = env
            .configure_tabula(
                None,
                selection.as_tabula_pages(),
                tabula::OutputFormat::Json,
                false,
                strategy.to_tabula_extraction_method(),
                false,
                None,
            )
            .context("configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()
            .context("creating temporary file for extracting PDF table data")?;
        tabula
            .parse_document_into(pdf_path, extracted_file.path())
            .context("extracting PDF table data")?;

        let table_set: JsonTableSet = serde_json::from_reader(extracted_file.reopen()?)
            .context("parsing extracted PDF table data")?;
        log::debug!(
            "Tabula found {} table(s) in {:?} using {strategy}.",
            table_set.0.len(),
            pdf_path,
        );

        table_set.into_tables()
    }
}

/// Counts the pages of the PDF at `pdf_path`, to resolve and bound page ranges.
fn count_pages(pdf_path: &Path) -> Result<i32> {
    let document = lopdf::Document::load(pdf_path)
        .with_context(|| format!("reading page count of {pdf_path:?}"))?;
    let page_count = document.get_pages().len();
    log::debug!("{pdf_path:?} has {page_count} page(s).");
    i32::try_from(page_count).with_context(|| format!("too many pages in {pdf_path:?}"))
}
