use std::collections::HashSet;

use anyhow::{Result, anyhow, bail};

use crate::request::ALL_PAGES;

/// Open end of a range, standing for the last page of the document.
const LAST_PAGE: &str = "end";

/// Pages to pass to Tabula, as parsed from a page selector string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageSelection {
    All,
    /// 1-based page numbers, in order of first appearance without duplicates.
    Pages(Vec<i32>),
}

impl PageSelection {
    /// Page numbers in the form accepted by [tabula::TabulaEnv::configure_tabula].
    pub fn as_tabula_pages(&self) -> Option<&[i32]> {
        match self {
            PageSelection::All => None,
            PageSelection::Pages(pages) => Some(pages),
        }
    }
}

/// Parses a page selector like `"all"`, `"1,3-5"` or `"1,4-end"`.
///
/// `page_count` is only called for selectors other than `"all"`. Every selected page must lie
/// within the document.
pub fn parse_page_selector<F>(input: &str, page_count: F) -> Result<PageSelection>
where
    F: FnOnce() -> Result<i32>,
{
    let input = input.trim();
    if input.eq_ignore_ascii_case(ALL_PAGES) {
        return Ok(PageSelection::All);
    }

    let page_count = page_count()?;
    let mut collected = PageCollector::default();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start_str, end_str)) = part.split_once('-') {
            let start = parse_page_number(start_str, page_count)?;
            let end = if end_str.trim().eq_ignore_ascii_case(LAST_PAGE) {
                page_count
            } else {
                parse_page_number(end_str, page_count)?
            };
            if end < start {
                bail!("page range {part:?} ends before it starts");
            }
            (start..=end).for_each(|page| collected.push(page));
        } else {
            collected.push(parse_page_number(part, page_count)?);
        }
    }

    if collected.pages.is_empty() {
        bail!("page selector {input:?} selects no pages; use {ALL_PAGES:?} or e.g. \"1,3-5\"");
    }

    Ok(PageSelection::Pages(collected.pages))
}

#[derive(Default)]
struct PageCollector {
    pages: Vec<i32>,
    seen: HashSet<i32>,
}

impl PageCollector {
    fn push(&mut self, page: i32) {
        if self.seen.insert(page) {
            self.pages.push(page);
        }
    }
}

fn parse_page_number(s: &str, page_count: i32) -> Result<i32> {
    let s = s.trim();
    let page: i32 = s
        .parse()
        .map_err(|_| anyhow!("invalid page number: {s:?}"))?;
    if page < 1 {
        bail!("page {page} is invalid (pages start at 1)");
    }
    if page > page_count {
        bail!("page {page} exceeds document page count ({page_count})");
    }
    Ok(page)
}
