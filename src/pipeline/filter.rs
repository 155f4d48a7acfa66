//! Filter stage
//!
//! Reduces the dataset to the rows that pass the committed global filter.
//! A row survives when at least one filterable column's cell matches the
//! query. The stage is stable: surviving rows keep their input order, and
//! an empty query is the identity.

use crate::columns::ColumnSet;
use crate::matcher::FuzzyMatcher;
use crate::Record;

/// Row indices passing the committed query, in dataset order
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn filter_rows(records: &[Record], columns: &ColumnSet, query: &str) -> Vec<u32> {
    if query.is_empty() {
        return (0..records.len() as u32).collect();
    }

    let mut matcher = FuzzyMatcher::new(query);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| row_passes(record, columns, &mut matcher))
        .map(|(idx, _)| idx as u32)
        .collect()
}

/// Whether any filterable cell of the row matches
///
/// Missing cells have no match text and never count; rank values are used
/// only for the pass verdict and are not persisted beyond this call.
fn row_passes(record: &Record, columns: &ColumnSet, matcher: &mut FuzzyMatcher) -> bool {
    columns.filterable().any(|column| {
        record
            .get(&column.key)
            .match_text()
            .is_some_and(|text| matcher.score(&text).passed)
    })
}
