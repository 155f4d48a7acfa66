//! Tablr - a table view-model engine for interactive frontends
//!
//! This library turns an in-memory collection of flat records into the
//! filtered, sorted, paginated window of rows a UI needs to draw, plus the
//! bookkeeping (row counts, page bounds, sort indicators) that drives
//! navigation controls. It contains no rendering opinions of its own;
//! frontends consume a read-only snapshot and feed user intents back in.
//!
//! # Architecture
//!
//! - `dataset`: build `Vec<Record>` from JSON or CSV input
//! - `columns`: column declarations and display hooks
//! - `matcher`: fuzzy scoring of a cell against the committed query
//! - `debounce`: coalesces rapid query edits into one committed value
//! - `pipeline`: the pure filter → sort → paginate stages
//! - `view`: the stateful `TableView` coordinator and its snapshot
//! - `config`: optional on-disk configuration
//! - `tui` (feature `tui`): a ratatui adapter for terminal frontends
//!
//! The pipeline stages are pure functions over row indices; `TableView` is
//! the only stateful component and recomputes derived state synchronously on
//! every intent.

use std::fmt;
use thiserror::Error;

pub mod columns;
pub mod config;
pub mod dataset;
pub mod debounce;
pub mod matcher;
pub mod pipeline;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub mod testing;

pub use columns::{ColumnSet, ColumnSpec, DisplayToken};
pub use debounce::Debouncer;
pub use matcher::FuzzyMatcher;
pub use pipeline::paginate::{PAGE_SIZES, PageWindow, PaginationState};
pub use pipeline::sort::{SortCriterion, SortDirection, SortState};
pub use view::{TableSnapshot, TableView, TableViewBuilder};

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum TablrError {
    /// Dataset ingestion error
    #[error("Dataset error: {0}")]
    DatasetError(#[from] dataset::DatasetError),
    /// View construction error
    #[error("View error: {0}")]
    ViewError(#[from] view::ViewError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A single cell scalar
///
/// Cells hold text, a number, or nothing. Absent columns behave exactly like
/// `Missing`: they never match a filter query, they sort after present
/// values, and they render as empty text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Textual value
    Text(String),
    /// Numeric value
    Number(f64),
    /// No value (JSON null, empty CSV field, or absent key)
    Missing,
}

impl CellValue {
    /// Text to match the filter query against
    ///
    /// Missing cells return `None` and are excluded from filter matches.
    #[must_use]
    pub fn match_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Missing => None,
        }
    }

    /// Numeric interpretation of the cell, if it has one
    ///
    /// Numbers return themselves; text returns its value when the whole
    /// string parses as a number. The sort stage uses this to decide between
    /// numeric and lexicographic comparison.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Missing => None,
        }
    }

    /// Check whether the cell holds no value
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Missing => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// Format a number the way JSON sources wrote it: integral values print
/// without a trailing fraction
fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Shared missing cell returned for absent column keys
static MISSING_CELL: CellValue = CellValue::Missing;

/// Data struct containing one row: an ordered mapping from column key to cell
///
/// Records are immutable from the engine's perspective; a dataset is replaced
/// as a whole, never patched row by row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    cells: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a record from key/value pairs, keeping their order
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, CellValue)>) -> Self {
        Self {
            cells: pairs.into_iter().collect(),
        }
    }

    /// Append a cell, keeping insertion order
    pub fn push(&mut self, key: impl Into<String>, value: CellValue) {
        self.cells.push((key.into(), value));
    }

    /// Look up a cell by column key
    ///
    /// Absent keys yield `CellValue::Missing`, so callers never need to
    /// distinguish "no column" from "no value".
    #[must_use]
    pub fn get(&self, key: &str) -> &CellValue {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map_or(&MISSING_CELL, |(_, v)| v)
    }

    /// Iterate cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Column keys present on this record
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the record has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}
