/// Page selector that scans every page of the PDF.
pub const ALL_PAGES: &str = "all";

/// Table detection heuristic for the extractor to use.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::VariantArray,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Strategy {
    /// Relies on whitespace gaps between columns.
    #[default]
    Stream,
    /// Relies on ruling lines drawn between cells.
    Lattice,
}

impl Strategy {
    pub fn to_tabula_extraction_method(self) -> tabula::ExtractionMethod {
        match self {
            Strategy::Stream => tabula::ExtractionMethod::Basic,
            Strategy::Lattice => tabula::ExtractionMethod::Spreadsheet,
        }
    }
}

/// A single user-triggered request to extract tables from a PDF.
///
/// The page selector is kept verbatim; its syntax belongs to the [crate::TableExtractor] that
/// eventually interprets it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractionRequest {
    source_bytes: Vec<u8>,
    strategy: Strategy,
    page_selector: String,
}

impl ExtractionRequest {
    pub fn new<S>(source_bytes: Vec<u8>, strategy: Strategy, page_selector: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            source_bytes,
            strategy,
            page_selector: page_selector.into(),
        }
    }

    /// Creates a request for all pages using the default [Strategy].
    pub fn with_defaults(source_bytes: Vec<u8>) -> Self {
        Self::new(source_bytes, Strategy::default(), ALL_PAGES)
    }

    pub fn source_bytes(&self) -> &[u8] {
        &self.source_bytes
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn page_selector(&self) -> &str {
        &self.page_selector
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use googletest::prelude::*;
    use test_casing::test_casing;

    use super::*;

    const PARSE_CASES: [(&str, Strategy); 4] = [
        ("stream", Strategy::Stream),
        ("lattice", Strategy::Lattice),
        ("Lattice", Strategy::Lattice),
        ("STREAM", Strategy::Stream),
    ];

    #[test_casing(4, PARSE_CASES)]
    fn strategy_parses(input: &str, expected: Strategy) {
        assert_that!(Strategy::from_str(input).ok(), some(eq(expected)));
    }

    #[gtest]
    fn strategy_rejects_unknown() {
        assert_that!(Strategy::from_str("guess").is_err(), eq(true));
    }

    #[gtest]
    fn strategy_displays_lowercase() {
        expect_that!(Strategy::Stream.to_string(), eq("stream"));
        expect_that!(Strategy::Lattice.to_string(), eq("lattice"));
    }

    #[gtest]
    fn request_defaults_to_stream_on_all_pages() {
        let request = ExtractionRequest::with_defaults(b"%PDF".to_vec());
        expect_that!(request.strategy(), eq(Strategy::Stream));
        expect_that!(request.page_selector(), eq("all"));
        expect_that!(request.source_bytes().len(), eq(4));
    }
}
