//! The derived-row pipeline
//!
//! Three pure stages turn the full dataset into the visible window:
//! filter → sort → paginate. Each stage is a function of its inputs and
//! operates on row indices into the dataset, so no stage ever copies or
//! mutates upstream rows. `TableView` owns the only state and decides when
//! to rerun the pipeline.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::filter_rows;
pub use paginate::{PAGE_SIZES, PageWindow, PaginationState, paginate};
pub use sort::{SortCriterion, SortDirection, SortState, sort_rows};
