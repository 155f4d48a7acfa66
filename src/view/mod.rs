//! The table view coordinator
//!
//! `TableView` owns the dataset, the column declarations and the three
//! pieces of view state (filter, sort, pagination), and keeps the derived
//! row window current by rerunning the pipeline synchronously at the end of
//! every mutating intent. Frontends read a `TableSnapshot` and never touch
//! engine state directly; all mutation flows through the intent methods.
//!
//! The engine has no threads. The debounced filter is the one suspension
//! point, and it is cooperative: the host loop calls `tick` with the
//! current time and can size its poll timeout with `next_deadline`.

mod error;

pub use error::{Result, ViewError};

use crate::columns::ColumnSet;
use crate::config::ViewConfig;
use crate::dataset::infer_columns;
use crate::debounce::Debouncer;
use crate::pipeline::paginate::{self, PageWindow, PaginationState, is_allowed_page_size};
use crate::pipeline::sort::{SortDirection, SortState};
use crate::pipeline::{filter_rows, sort_rows};
use crate::Record;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Read-only snapshot published to the rendering layer
///
/// Everything a frontend needs to draw the table and its controls for one
/// frame: the visible rows plus row counts, page bounds, sort indicators
/// and control-enablement flags.
#[derive(Debug)]
pub struct TableSnapshot<'a> {
    /// Rows visible on the current page, in display order
    pub rows: Vec<&'a Record>,
    /// Rows that passed the committed filter
    pub total_filtered_rows: usize,
    /// 1-based position of the first visible row; 0 when nothing matched
    pub first_index: usize,
    /// 1-based position of the last visible row; 0 when nothing matched
    pub last_index: usize,
    /// Number of pages (at least 1)
    pub page_count: usize,
    /// Current 0-based page index
    pub page_index: usize,
    /// Current page size
    pub page_size: usize,
    /// Active sort criteria, highest precedence first
    pub active_sort: &'a SortState,
    /// Whether a previous page exists
    pub can_go_previous: bool,
    /// Whether a next page exists
    pub can_go_next: bool,
}

/// Stateful coordinator for one table
///
/// Construct with `TableView::new` for defaults or `TableView::builder`
/// when configuring the debounce delay or default page size.
#[derive(Debug)]
pub struct TableView {
    records: Vec<Record>,
    columns: ColumnSet,
    committed_query: String,
    debouncer: Debouncer,
    sort: SortState,
    pagination: PaginationState,
    // Derived: filtered and sorted row indices, then the page window over them
    visible: Vec<u32>,
    window: PageWindow,
}

impl TableView {
    /// Create a view over a dataset with default configuration
    #[must_use]
    pub fn new(records: Vec<Record>, columns: ColumnSet) -> Self {
        let mut view = Self {
            records,
            columns,
            committed_query: String::new(),
            debouncer: Debouncer::default(),
            sort: SortState::new(),
            pagination: PaginationState::default(),
            visible: Vec::new(),
            window: PageWindow {
                start: 0,
                end: 0,
                total_rows: 0,
                page_count: 1,
                page_index: 0,
                page_size: paginate::DEFAULT_PAGE_SIZE,
            },
        };
        view.recompute();
        view
    }

    /// Create a builder for configuring a view
    #[must_use]
    pub fn builder() -> TableViewBuilder {
        TableViewBuilder::new()
    }

    // Intents

    /// Feed a raw filter edit into the debounce controller
    ///
    /// Nothing recomputes yet; the value commits through `tick` once the
    /// quiet period elapses.
    pub fn set_pending_filter(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.submit(text, now);
    }

    /// Poll the debounce controller at time `now`
    ///
    /// When a pending value's quiet period has elapsed, commits it as the
    /// global filter, resets to the first page (the result set changed) and
    /// recomputes. Returns whether a commit changed the committed query.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };
        if query == self.committed_query {
            return false;
        }

        log::debug!("filter committed: {query:?}");
        self.committed_query = query;
        self.pagination.go_first();
        self.recompute();
        true
    }

    /// Deadline of the pending filter commit, if one is waiting
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Cycle the sort on a column: none → ascending → descending → none
    ///
    /// Toggling a different column replaces the active criterion. Columns
    /// not declared sortable are ignored.
    pub fn toggle_sort(&mut self, column: &str) {
        if !self.columns.is_sortable(column) {
            log::debug!("ignoring sort toggle on non-sortable column {column:?}");
            return;
        }
        self.sort.toggle(column);
        self.recompute();
    }

    /// Replace the whole sort state
    ///
    /// Criteria on non-sortable columns are dropped. This is the surface
    /// for callers that order by several columns at once; precedence
    /// follows list order.
    pub fn set_sort(&mut self, sort: impl Into<SortState>) {
        let mut sort = sort.into();
        sort.retain_columns(|column| self.columns.is_sortable(column));
        self.sort = sort;
        self.recompute();
    }

    /// Jump to a page; out-of-range indices clamp to the last page
    pub fn set_page_index(&mut self, index: usize) {
        self.pagination.set_page_index(index, self.window.page_count);
        self.recompute();
    }

    /// Change the page size
    ///
    /// Values outside `PAGE_SIZES` are rejected and leave everything
    /// unchanged; accepted values reset to the first page. Returns whether
    /// the change was accepted.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        let accepted = self.pagination.set_page_size(size);
        if accepted {
            self.recompute();
        }
        accepted
    }

    /// Jump to the first page
    pub fn go_first(&mut self) {
        self.pagination.go_first();
        self.recompute();
    }

    /// Step one page back; no-op on the first page
    pub fn go_previous(&mut self) {
        self.pagination.go_previous();
        self.recompute();
    }

    /// Step one page forward; no-op on the last page
    pub fn go_next(&mut self) {
        self.pagination.go_next(self.window.page_count);
        self.recompute();
    }

    /// Jump to the last page
    pub fn go_last(&mut self) {
        self.pagination.go_last(self.window.page_count);
        self.recompute();
    }

    /// Swap in a new dataset
    ///
    /// Filter and sort state are inputs, not derived state, so they
    /// survive; the page index resets to 0.
    pub fn replace_dataset(&mut self, records: Vec<Record>) {
        log::debug!("dataset replaced: {} rows", records.len());
        self.records = records;
        self.pagination.go_first();
        self.recompute();
    }

    // Reads

    /// Publish the current snapshot
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        let rows = self.visible[self.window.start..self.window.end]
            .iter()
            .map(|&idx| &self.records[idx as usize])
            .collect();

        TableSnapshot {
            rows,
            total_filtered_rows: self.window.total_rows,
            first_index: self.window.first_index(),
            last_index: self.window.last_index(),
            page_count: self.window.page_count,
            page_index: self.window.page_index,
            page_size: self.window.page_size,
            active_sort: &self.sort,
            can_go_previous: self.window.can_go_previous(),
            can_go_next: self.window.can_go_next(),
        }
    }

    /// Column declarations, in display order
    #[must_use]
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// The committed filter query (empty = no filtering)
    #[must_use]
    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    /// The filter edit waiting for its quiet period, if any
    #[must_use]
    pub fn pending_query(&self) -> Option<&str> {
        self.debouncer.pending_value()
    }

    /// Sort indicator for a column header
    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort.direction_of(column)
    }

    /// Page indices available for direct navigation
    #[must_use]
    pub const fn page_options(&self) -> Range<usize> {
        0..self.window.page_count
    }

    /// Number of rows in the underlying dataset, before filtering
    #[must_use]
    pub fn dataset_len(&self) -> usize {
        self.records.len()
    }

    /// Rerun filter → sort → paginate over the current inputs
    fn recompute(&mut self) {
        let filtered = filter_rows(&self.records, &self.columns, &self.committed_query);
        self.visible = sort_rows(&self.records, filtered, &self.sort);
        self.window = paginate::paginate(self.visible.len(), &mut self.pagination);
        log::trace!(
            "recomputed: {} filtered rows, page {}/{}",
            self.window.total_rows,
            self.window.page_index + 1,
            self.window.page_count
        );
    }
}

/// Builder for `TableView`
///
/// ```
/// use tablr::{ColumnSet, TableView};
///
/// # fn main() -> Result<(), tablr::TablrError> {
/// let view = TableView::builder()
///     .records(Vec::new())
///     .columns(ColumnSet::from_keys(["ACCENUMB", "ORIGCTY"]))
///     .page_size(25)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TableViewBuilder {
    records: Vec<Record>,
    columns: Option<ColumnSet>,
    debounce_delay: Option<Duration>,
    page_size: Option<usize>,
}

impl TableViewBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial dataset
    #[must_use]
    pub fn records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Set the column declarations
    ///
    /// When omitted, columns are inferred from the dataset's keys with
    /// every column sortable and filterable.
    #[must_use]
    pub fn columns(mut self, columns: ColumnSet) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the debounce quiet period
    #[must_use]
    pub const fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = Some(delay);
        self
    }

    /// Set the default page size (must be one of `PAGE_SIZES`)
    #[must_use]
    pub const fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Apply a loaded configuration (debounce delay and default page size)
    #[must_use]
    pub fn config(mut self, config: &ViewConfig) -> Self {
        self.debounce_delay = Some(Duration::from_millis(config.debounce_ms));
        self.page_size = Some(config.default_page_size);
        self
    }

    /// Build the view
    ///
    /// # Errors
    /// Returns `ViewError::InvalidPageSize` if the configured default page
    /// size is not one of the accepted values.
    pub fn build(self) -> Result<TableView> {
        let page_size = self.page_size.unwrap_or(paginate::DEFAULT_PAGE_SIZE);
        if !is_allowed_page_size(page_size) {
            return Err(ViewError::InvalidPageSize(page_size));
        }

        let columns = self
            .columns
            .unwrap_or_else(|| ColumnSet::from_keys(infer_columns(&self.records)));

        let mut view = TableView {
            records: self.records,
            columns,
            committed_query: String::new(),
            debouncer: self
                .debounce_delay
                .map_or_else(Debouncer::default, Debouncer::new),
            sort: SortState::new(),
            pagination: PaginationState::new(page_size),
            visible: Vec::new(),
            window: PageWindow {
                start: 0,
                end: 0,
                total_rows: 0,
                page_count: 1,
                page_index: 0,
                page_size,
            },
        };
        view.recompute();
        Ok(view)
    }
}
