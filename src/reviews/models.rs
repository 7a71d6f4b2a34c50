// Review records: the rows that survive loading.
//
// Records keep the ordinal of their source row so that anything reported
// downstream ("review 150") refers to the same row a spreadsheet would show,
// even after null rows have been filtered out.

use serde::Serialize;

/// One surviving row of the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    /// 0-based ordinal of the data row in the file (header excluded)
    pub index: usize,
    /// The raw review text, exactly as it appeared in the file
    pub text: String,
}

/// The filtered review table, in file order.
#[derive(Debug, Clone, Default)]
pub struct ReviewTable {
    records: Vec<ReviewRecord>,
    /// Total data rows read, including the ones dropped for missing text
    rows_read: usize,
}

impl ReviewTable {
    pub fn new(records: Vec<ReviewRecord>, rows_read: usize) -> Self {
        Self { records, rows_read }
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Number of rows dropped because the text field was null.
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.records.len()
    }

    /// Look up a record by its original row index (not its position).
    ///
    /// Records are sorted by index, so this is a binary search.
    pub fn get(&self, index: usize) -> Option<&ReviewRecord> {
        self.records
            .binary_search_by_key(&index, |r| r.index)
            .ok()
            .map(|pos| &self.records[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReviewTable {
        ReviewTable::new(
            vec![
                ReviewRecord {
                    index: 0,
                    text: "first".to_string(),
                },
                ReviewRecord {
                    index: 2,
                    text: "third".to_string(),
                },
            ],
            3,
        )
    }

    #[test]
    fn test_get_uses_original_index() {
        let t = table();
        assert_eq!(t.get(2).map(|r| r.text.as_str()), Some("third"));
        assert!(t.get(1).is_none(), "Dropped row must not be addressable");
    }

    #[test]
    fn test_rows_dropped() {
        let t = table();
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows_dropped(), 1);
    }
}
