use crate::{
    ExtractOutcome, ExtractionAdapter, ExtractionRequest, PipelineError, SpreadsheetDocument,
    assemble, status::StatusMessage,
};

/// Successful result of [run].
#[derive(Debug)]
pub enum Outcome {
    Spreadsheet {
        document: SpreadsheetDocument,
        table_count: usize,
    },
    /// Nothing to save.
    NoTables,
}

/// Everything produced by a single run of the pipeline.
#[derive(Debug)]
pub struct Report {
    /// Messages for display in the order they were produced.
    pub messages: Vec<StatusMessage>,
    pub result: Result<Outcome, PipelineError>,
}

impl Report {
    /// The assembled spreadsheet, if one was produced.
    pub fn document(&self) -> Option<&SpreadsheetDocument> {
        match &self.result {
            Ok(Outcome::Spreadsheet { document, .. }) => Some(document),
            _ => None,
        }
    }
}

/// Extracts the tables in the request's PDF and assembles them into a spreadsheet.
pub fn run(adapter: &ExtractionAdapter<'_>, request: &ExtractionRequest) -> Report {
    let mut messages = vec![StatusMessage::starting(
        request.strategy(),
        request.page_selector(),
    )];

    let result = extract_and_assemble(adapter, request, &mut messages);
    if !matches!(result, Ok(Outcome::Spreadsheet { .. })) {
        messages.push(StatusMessage::nothing_to_save());
    }

    Report { messages, result }
}

fn extract_and_assemble(
    adapter: &ExtractionAdapter<'_>,
    request: &ExtractionRequest,
    messages: &mut Vec<StatusMessage>,
) -> Result<Outcome, PipelineError> {
    let table_set = match adapter.extract(request) {
        Ok(ExtractOutcome::Tables(table_set)) => table_set,
        Ok(ExtractOutcome::Empty) => {
            messages.push(StatusMessage::no_tables());
            return Ok(Outcome::NoTables);
        }
        Err(failure) => {
            messages.extend(StatusMessage::extraction_failed(&failure));
            return Err(failure.into());
        }
    };

    let table_count = table_set.len();
    messages.push(StatusMessage::extracted(table_count));

    match assemble(&table_set) {
        Ok(document) => Ok(Outcome::Spreadsheet {
            document,
            table_count,
        }),
        Err(failure) => {
            messages.push(StatusMessage::assembly_failed(&failure));
            Err(failure.into())
        }
    }
}
