use anyhow::Result;
use extraction::{
    ExtractedTable, ExtractionAdapter, ExtractionRequest, PipelineError, Strategy, TableSet,
    assemble,
    pipeline::{self, Outcome},
    status::Level,
};
use googletest::prelude::*;
use tempfile::tempdir;
use testutils::{FakeTableExtractor, ReadSheet, dir_entries, read_xlsx};

const PDF_DATA: &[u8] = b"%PDF-1.7 fake document";

/// Two tables on page 1 and one on page 3, as returned for a 3-page PDF.
fn three_page_tables() -> Vec<ExtractedTable> {
    vec![
        ExtractedTable::new(1, [["Name", "Qty"], ["Bolt", "10"]]),
        ExtractedTable::new(1, [["Total", "10"]]),
        ExtractedTable::new(3, [["Notes"], ["None"]]),
    ]
}

fn sheet<const N: usize>(name: &str, rows: &[[&str; N]]) -> ReadSheet {
    ReadSheet {
        name: name.to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    }
}

#[gtest]
fn writes_one_sheet_per_table_in_extraction_order() -> Result<()> {
    let temp_dir = tempdir()?;
    let extractor = FakeTableExtractor::returning(three_page_tables());
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());

    let report = pipeline::run(
        &adapter,
        &ExtractionRequest::new(PDF_DATA.to_vec(), Strategy::Stream, "all"),
    );

    let document = report.document().expect("spreadsheet should be produced");
    let sheets = read_xlsx(document.as_bytes())?;
    assert_that!(
        sheets,
        eq(&vec![
            sheet("Table_P1_1", &[["Name", "Qty"], ["Bolt", "10"]]),
            sheet("Table_P1_2", &[["Total", "10"]]),
            sheet("Table_P3_3", &[["Notes"], ["None"]]),
        ])
    );
    expect_that!(
        matches!(report.result, Ok(Outcome::Spreadsheet { table_count: 3, .. })),
        eq(true)
    );
    expect_that!(dir_entries(temp_dir.path())?, is_empty());
    Ok(())
}

#[gtest]
fn reports_status_messages_for_success() -> Result<()> {
    let temp_dir = tempdir()?;
    let extractor = FakeTableExtractor::returning(three_page_tables());
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());

    let report = pipeline::run(
        &adapter,
        &ExtractionRequest::new(PDF_DATA.to_vec(), Strategy::Lattice, "1-3"),
    );

    let levels: Vec<Level> = report.messages.iter().map(|m| m.level).collect();
    expect_that!(levels, eq(&vec![Level::Info, Level::Success]));
    expect_that!(
        report.messages[0].text.as_str(),
        eq("Using LATTICE extraction on pages: 1-3")
    );
    expect_that!(
        report.messages[1].text.as_str(),
        eq("Successfully extracted 3 tables from the PDF.")
    );
    Ok(())
}

#[gtest]
fn produces_no_spreadsheet_when_no_tables_found() -> Result<()> {
    let temp_dir = tempdir()?;
    let extractor = FakeTableExtractor::returning(Vec::new());
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());

    let report = pipeline::run(&adapter, &ExtractionRequest::with_defaults(PDF_DATA.to_vec()));

    expect_that!(matches!(report.result, Ok(Outcome::NoTables)), eq(true));
    expect_that!(report.document().is_none(), eq(true));
    let levels: Vec<Level> = report.messages.iter().map(|m| m.level).collect();
    expect_that!(levels, eq(&vec![Level::Info, Level::Warning, Level::Error]));
    expect_that!(
        report.messages[2].text.as_str(),
        eq("Extraction failed or no tables were found.")
    );
    expect_that!(dir_entries(temp_dir.path())?, is_empty());
    Ok(())
}

#[gtest]
fn produces_no_spreadsheet_when_extraction_fails() -> Result<()> {
    let temp_dir = tempdir()?;
    let extractor = FakeTableExtractor::failing("unreadable PDF");
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());

    let report = pipeline::run(&adapter, &ExtractionRequest::with_defaults(b"junk".to_vec()));

    expect_that!(
        matches!(report.result, Err(PipelineError::Extraction(_))),
        eq(true)
    );
    expect_that!(report.document().is_none(), eq(true));
    let errors: Vec<&str> = report
        .messages
        .iter()
        .filter(|m| m.level == Level::Error)
        .map(|m| m.text.as_str())
        .collect();
    assert_that!(errors.len(), eq(2));
    expect_that!(errors[0], contains_substring("unreadable PDF"));
    expect_that!(errors[1], eq("Extraction failed or no tables were found."));
    expect_that!(dir_entries(temp_dir.path())?, is_empty());
    Ok(())
}

#[gtest]
fn identical_requests_produce_identical_sheets() -> Result<()> {
    let temp_dir = tempdir()?;
    let extractor = FakeTableExtractor::returning(three_page_tables());
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());
    let request = ExtractionRequest::with_defaults(PDF_DATA.to_vec());

    let first = pipeline::run(&adapter, &request);
    let second = pipeline::run(&adapter, &request);

    let first_sheets = read_xlsx(first.document().expect("first document").as_bytes())?;
    let second_sheets = read_xlsx(second.document().expect("second document").as_bytes())?;
    assert_that!(first_sheets, eq(&second_sheets));
    Ok(())
}

#[gtest]
fn keeps_cell_text_verbatim() -> Result<()> {
    let table_set = TableSet::new(vec![ExtractedTable::new(
        2,
        [
            ["007", "1.50", "=SUM(A1:A2)"],
            ["TRUE", "", "  padded  "],
            ["1e3", "-0", "multi\nline"],
        ],
    )])
    .expect("non-empty");

    let document = assemble(&table_set)?;

    let sheets = read_xlsx(document.as_bytes())?;
    assert_that!(
        sheets,
        eq(&vec![sheet(
            "Table_P2_1",
            &[
                ["007", "1.50", "=SUM(A1:A2)"],
                ["TRUE", "", "  padded  "],
                ["1e3", "-0", "multi\nline"],
            ],
        )])
    );
    Ok(())
}

#[gtest]
fn sheet_names_are_unique_when_pages_repeat() -> Result<()> {
    let table_set = TableSet::new(
        (0..5)
            .map(|_| ExtractedTable::new(4, [["x"]]))
            .collect(),
    )
    .expect("non-empty");

    let document = assemble(&table_set)?;

    let names: Vec<String> = read_xlsx(document.as_bytes())?
        .into_iter()
        .map(|sheet| sheet.name)
        .collect();
    assert_that!(
        names,
        eq(&vec![
            "Table_P4_1".to_string(),
            "Table_P4_2".to_string(),
            "Table_P4_3".to_string(),
            "Table_P4_4".to_string(),
            "Table_P4_5".to_string(),
        ])
    );
    Ok(())
}

#[gtest]
fn reports_oversized_cell_as_assembly_failure() -> Result<()> {
    let temp_dir = tempdir()?;
    // Excel cells hold at most 32767 characters.
    let huge_cell = "x".repeat(40_000);
    let extractor =
        FakeTableExtractor::returning(vec![ExtractedTable::new(1, [[huge_cell.as_str()]])]);
    let adapter = ExtractionAdapter::new(&extractor).with_temp_dir(temp_dir.path());

    let report = pipeline::run(&adapter, &ExtractionRequest::with_defaults(PDF_DATA.to_vec()));

    expect_that!(
        matches!(report.result, Err(PipelineError::Assembly(_))),
        eq(true)
    );
    expect_that!(
        report
            .messages
            .iter()
            .any(|m| m.level == Level::Error && m.text.starts_with("Error writing spreadsheet: ")),
        eq(true)
    );
    expect_that!(
        report.messages.last().map(|m| m.text.as_str()),
        some(eq("Extraction failed or no tables were found."))
    );
    Ok(())
}
