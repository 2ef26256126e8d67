use std::ops::Deref;

/// A single table detected in a PDF.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractedTable {
    /// 1-based number of the page that the table was found on.
    pub page_number: u32,
    pub rows: Vec<Row>,
}

impl ExtractedTable {
    pub fn new<C, R>(page_number: u32, rows: C) -> Self
    where
        C: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self {
            page_number,
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

/// Non-empty sequence of [ExtractedTable], in the order that the extractor returned them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableSet(Vec<ExtractedTable>);

impl TableSet {
    /// Returns `None` if `tables` is empty.
    pub fn new(tables: Vec<ExtractedTable>) -> Option<Self> {
        if tables.is_empty() {
            None
        } else {
            Some(Self(tables))
        }
    }

    pub fn into_inner(self) -> Vec<ExtractedTable> {
        self.0
    }
}

impl Deref for TableSet {
    type Target = [ExtractedTable];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn table_set_rejects_empty() {
        assert_that!(TableSet::new(Vec::new()).is_none(), eq(true));
    }

    #[gtest]
    fn table_set_keeps_order() {
        let tables = vec![
            ExtractedTable::new(3, [["a"]]),
            ExtractedTable::new(1, [["b"]]),
        ];
        let set = TableSet::new(tables.clone()).expect("non-empty");
        assert_that!(set.len(), eq(2));
        assert_that!(set.into_inner(), eq(&tables));
    }
}
