use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use extraction::{
    ExtractionAdapter, ExtractionRequest, PipelineError, Strategy, naming,
    pipeline::{self, Outcome},
    request::ALL_PAGES,
};

use crate::cli::TabulaArgs;

/// Extracts the tables in a PDF file into an XLSX spreadsheet, one sheet per table.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Path to write the XLSX file to.
    ///
    /// Defaults to a file next to the input PDF, named after it and the strategy.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Table detection strategy: "lattice" for tables with ruling lines, "stream" for tables
    /// with columns separated by whitespace.
    #[arg(long, default_value_t = Strategy::Stream)]
    strategy: Strategy,

    /// Pages to scan, e.g. "1,2,5", "1,3-5" or "all".
    #[arg(long, default_value = ALL_PAGES)]
    pages: String,

    /// Directory to stage the PDF in while Tabula reads it. Defaults to the system temporary
    /// directory.
    #[arg(long)]
    temp_dir: Option<PathBuf>,

    /// Options relating to running Tabula.
    #[command(flatten)]
    tabula: TabulaArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let output = resolve_output_path(&cmd.input_pdf, cmd.output.as_deref(), cmd.strategy)?;

    let source_bytes = std::fs::read(&cmd.input_pdf)
        .with_context(|| format!("reading input PDF {:?}", cmd.input_pdf))?;
    let request = ExtractionRequest::new(source_bytes, cmd.strategy, cmd.pages.as_str());

    let tabula_client = cmd.tabula.build()?;
    let mut adapter = ExtractionAdapter::new(&tabula_client);
    if let Some(temp_dir) = &cmd.temp_dir {
        adapter = adapter.with_temp_dir(temp_dir);
    }

    let report = pipeline::run(&adapter, &request);
    for message in &report.messages {
        eprintln!("{message}");
    }

    save_outcome(report.result, &output)
}

/// Writes the spreadsheet, if any, to `output`.
///
/// Pipeline failures have already been reported through the status messages, so the returned
/// error only records that nothing was written.
fn save_outcome(result: Result<Outcome, PipelineError>, output: &Path) -> Result<()> {
    match result {
        Ok(Outcome::Spreadsheet {
            document,
            table_count,
        }) => {
            utils::outfile::write_atomic(output, document.as_bytes())
                .context("saving spreadsheet")?;
            eprintln!("Wrote {table_count} sheet(s) to {output:?}.");
            Ok(())
        }
        Ok(Outcome::NoTables) => Ok(()),
        Err(err) => {
            log::debug!("Pipeline failed: {err:?}");
            bail!("no spreadsheet written to {output:?}")
        }
    }
}

/// Returns `output` if given, otherwise the path beside `input_pdf` named by
/// [naming::output_filename].
fn resolve_output_path(
    input_pdf: &Path,
    output: Option<&Path>,
    strategy: Strategy,
) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_owned());
    }
    let input_name = input_pdf
        .file_name()
        .and_then(std::ffi::OsStr::to_str)
        .ok_or_else(|| {
            anyhow!("cannot derive output filename from {input_pdf:?}; specify --output")
        })?;
    Ok(input_pdf.with_file_name(naming::output_filename(input_name, strategy)))
}

#[cfg(test)]
mod tests {
    use extraction::{ExtractedTable, ExtractionFailure, TableSet};
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn defaults_output_beside_input() {
        let path = resolve_output_path(Path::new("/data/in/report.pdf"), None, Strategy::Lattice)
            .unwrap();
        assert_that!(
            path,
            eq(&PathBuf::from("/data/in/report_lattice_extracted.xlsx"))
        );
    }

    #[gtest]
    fn defaults_output_in_working_directory_for_bare_name() {
        let path = resolve_output_path(Path::new("report.pdf"), None, Strategy::Stream).unwrap();
        assert_that!(path, eq(&PathBuf::from("report_stream_extracted.xlsx")));
    }

    #[gtest]
    fn uses_explicit_output() {
        let path = resolve_output_path(
            Path::new("report.pdf"),
            Some(Path::new("/tmp/out.xlsx")),
            Strategy::Stream,
        )
        .unwrap();
        assert_that!(path, eq(&PathBuf::from("/tmp/out.xlsx")));
    }

    #[gtest]
    fn failure_is_not_repeated_in_returned_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out.xlsx");
        let failure = ExtractionFailure::new(anyhow!("unreadable PDF"));

        let err = save_outcome(Err(failure.into()), &output).unwrap_err();

        expect_that!(format!("{err:#}"), not(contains_substring("unreadable PDF")));
        expect_that!(err.to_string(), contains_substring("no spreadsheet written"));
        expect_that!(output.exists(), eq(false));
        Ok(())
    }

    #[gtest]
    fn writes_nothing_for_no_tables() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out.xlsx");

        save_outcome(Ok(Outcome::NoTables), &output)?;

        expect_that!(output.exists(), eq(false));
        Ok(())
    }

    #[gtest]
    fn writes_spreadsheet() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let output = dir.path().join("out.xlsx");
        let tables = TableSet::new(vec![ExtractedTable::new(1, [["a"]])])
            .ok_or_else(|| anyhow!("no tables"))?;
        let document = extraction::assemble(&tables)?;
        let expected = document.as_bytes().to_vec();

        save_outcome(
            Ok(Outcome::Spreadsheet {
                document,
                table_count: 1,
            }),
            &output,
        )?;

        expect_that!(std::fs::read(&output)?, eq(&expected));
        Ok(())
    }

    #[gtest]
    fn rejects_input_without_file_name() {
        let result = resolve_output_path(Path::new("/"), None, Strategy::Stream);
        assert_that!(result.is_err(), eq(true));
    }
}
