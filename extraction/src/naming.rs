use crate::Strategy;

/// MIME type of the assembled spreadsheet.
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const PDF_SUFFIX: &str = ".pdf";

/// Suggests a filename for the spreadsheet extracted from the PDF named `input_name`.
///
/// A trailing `.pdf` (in any case) is replaced, otherwise the suffix is appended.
pub fn output_filename(input_name: &str, strategy: Strategy) -> String {
    let stem = input_name
        .len()
        .checked_sub(PDF_SUFFIX.len())
        .filter(|&split| input_name.is_char_boundary(split))
        .map(|split| input_name.split_at(split))
        .filter(|(_, suffix)| suffix.eq_ignore_ascii_case(PDF_SUFFIX))
        .map_or(input_name, |(stem, _)| stem);
    format!("{stem}_{strategy}_extracted.xlsx")
}
