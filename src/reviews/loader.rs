// CSV review loader.
//
// Reads every data row, keeps the ones whose text column holds a value, and
// remembers each row's original ordinal. A text field counts as missing when
// the row is too short to contain it or when it holds one of the usual
// dataframe missing-value markers ("", "NaN", "NULL", ...). Blank lines
// are not rows at all and don't consume an index.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::models::{ReviewRecord, ReviewTable};
use crate::error::LoadError;

/// Default name of the review text column in the Amazon product review export.
pub const DEFAULT_TEXT_COLUMN: &str = "reviews.text";

/// Field values treated as null, compared after trimming.
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw CSV field should be treated as a missing value.
pub fn is_null_marker(field: &str) -> bool {
    let trimmed = field.trim();
    NULL_MARKERS.contains(&trimmed)
}

/// Load reviews from a CSV file on disk.
pub fn load_reviews(path: &Path, text_column: &str) -> Result<ReviewTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let table = load_reviews_from_reader(file, text_column)?;

    info!(
        path = %path.display(),
        rows_read = table.rows_read(),
        kept = table.len(),
        dropped = table.rows_dropped(),
        "Loaded review dataset"
    );

    Ok(table)
}

/// Load reviews from any CSV source with a header row.
pub fn load_reviews_from_reader<R: Read>(
    reader: R,
    text_column: &str,
) -> Result<ReviewTable, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let column_idx = headers
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: text_column.to_string(),
            available: headers.clone(),
        })?;

    let mut records = Vec::new();
    let mut rows_read = 0;

    for (index, result) in csv_reader.records().enumerate() {
        let row = result?;
        rows_read += 1;

        match row.get(column_idx) {
            Some(text) if !is_null_marker(text) => records.push(ReviewRecord {
                index,
                text: text.to_string(),
            }),
            _ => debug!(row = index, "Dropping row with missing review text"),
        }
    }

    Ok(ReviewTable::new(records, rows_read))
}
