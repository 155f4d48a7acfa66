//! Sort stage and the sort-toggle state machine
//!
//! Reorders filtered rows according to an ordered list of criteria. The
//! sort is stable, so ties (and an empty criteria list) preserve the
//! filtered order. Cell comparison is numeric when both sides carry a
//! numeric interpretation, lexicographic otherwise; missing cells order
//! after present ones in both directions.

use crate::{CellValue, Record};
use std::cmp::Ordering;

/// Direction of one sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// Apply the direction to an ascending comparison result
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// One ordering key: a column and a direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriterion {
    /// Column key the criterion orders by
    pub column: String,
    /// Direction of the ordering
    pub direction: SortDirection,
}

impl SortCriterion {
    /// Ascending criterion on a column
    #[must_use]
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending criterion on a column
    #[must_use]
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Ordered sort criteria; first entry has highest precedence
///
/// Empty state means natural (filtered) order. The toggle intent keeps at
/// most one active criterion; longer lists are reachable through
/// `TableView::set_sort` for callers that order by several columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    criteria: Vec<SortCriterion>,
}

impl SortState {
    /// Create an empty sort state (natural order)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }

    /// Create a state from an explicit criteria list
    #[must_use]
    pub fn from_criteria(criteria: Vec<SortCriterion>) -> Self {
        Self { criteria }
    }

    /// Criteria in precedence order
    #[must_use]
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    /// Check whether the state orders anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Direction the given column is currently sorted by, if any
    ///
    /// This is what header renderers use to pick a sort indicator.
    #[must_use]
    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        self.criteria
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.direction)
    }

    /// Cycle the sort on a column: none → ascending → descending → none
    ///
    /// Toggling a column other than the active one replaces the whole state
    /// with that column at ascending.
    pub fn toggle(&mut self, column: &str) {
        match self.criteria.first() {
            Some(active) if active.column == column => match active.direction {
                SortDirection::Ascending => {
                    self.criteria = vec![SortCriterion::descending(column)];
                }
                SortDirection::Descending => self.criteria.clear(),
            },
            _ => self.criteria = vec![SortCriterion::ascending(column)],
        }
    }

    /// Drop all criteria, returning to natural order
    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Drop criteria whose column fails the given predicate
    pub fn retain_columns(&mut self, keep: impl Fn(&str) -> bool) {
        self.criteria.retain(|c| keep(&c.column));
    }
}

impl From<Vec<SortCriterion>> for SortState {
    fn from(criteria: Vec<SortCriterion>) -> Self {
        Self::from_criteria(criteria)
    }
}

/// Sort row indices by the given criteria
///
/// Stable: rows equal under every criterion keep their input order, and an
/// empty state returns the rows unchanged.
#[must_use]
pub fn sort_rows(records: &[Record], mut rows: Vec<u32>, sort: &SortState) -> Vec<u32> {
    if sort.is_empty() {
        return rows;
    }

    rows.sort_by(|&a, &b| {
        let left = &records[a as usize];
        let right = &records[b as usize];

        for criterion in sort.criteria() {
            let ordering = compare_cells(
                left.get(&criterion.column),
                right.get(&criterion.column),
                criterion.direction,
            );
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    rows
}

/// Compare two cells under one criterion
///
/// Presence wins before anything else: a missing cell orders after a
/// present one regardless of direction. Present cells compare numerically
/// when both have a numeric interpretation, lexicographically otherwise,
/// with the direction applied to that comparison only.
fn compare_cells(left: &CellValue, right: &CellValue, direction: SortDirection) -> Ordering {
    match (left.is_missing(), right.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => left.to_string().cmp(&right.to_string()),
            };
            direction.apply(ordering)
        }
    }
}
