//! Integration tests for the tablr view-model engine
//!
//! These tests verify end-to-end behavior through the public API only:
//! dataset ingestion, the full intent surface of `TableView`, and the
//! invariants the published snapshot promises to frontends.

use std::time::{Duration, Instant};
use tablr::{dataset, CellValue, ColumnSet, ColumnSpec, Record, SortDirection, TableView};

/// Build the 25-row accession dataset: 5 rows from Peru, 12 from Bolivia,
/// 3 from Chile, 3 from Mexico, 2 from Brazil
fn accession_records() -> Vec<Record> {
    let countries: [(&str, usize, f64); 5] = [
        ("Peru", 5, -12.0),
        ("Bolivia", 12, -16.0),
        ("Chile", 3, -33.0),
        ("Mexico", 3, 19.0),
        ("Brazil", 2, -15.0),
    ];

    let mut records = Vec::new();
    let mut serial = 1200;
    for (country, count, base_latitude) in countries {
        for i in 0..count {
            serial += 1;
            let mut record = Record::new();
            record.push("ACCENUMB", CellValue::from(format!("PI {serial}")));
            record.push(
                "DECLATITUDE",
                CellValue::Number(base_latitude - i as f64 * 0.5),
            );
            record.push("ORIGCTY", CellValue::from(country));
            record.push("GRIN", CellValue::from(format!("GRIN-{serial}")));
            records.push(record);
        }
    }
    records
}

fn accession_columns() -> ColumnSet {
    ColumnSet::new(vec![
        ColumnSpec::new("ACCENUMB"),
        ColumnSpec::new("DECLATITUDE"),
        ColumnSpec::new("ORIGCTY"),
        ColumnSpec::new("GRIN").not_sortable(),
    ])
}

fn accession_view() -> TableView {
    TableView::new(accession_records(), accession_columns())
}

/// Commit a filter query through the debounce controller
fn commit_filter(view: &mut TableView, query: &str) {
    let now = Instant::now();
    view.set_pending_filter(query, now);
    assert!(view.tick(now + Duration::from_millis(500)));
}

#[test]
fn test_unfiltered_pagination_scenario() {
    // 25 records, page size 10, no filter or sort
    let mut view = accession_view();

    let snapshot = view.snapshot();
    assert_eq!(snapshot.page_count, 3);
    assert_eq!(snapshot.first_index, 1);
    assert_eq!(snapshot.last_index, 10);

    view.set_page_index(2);
    let snapshot = view.snapshot();
    assert_eq!(snapshot.first_index, 21);
    assert_eq!(snapshot.last_index, 25);
    assert!(snapshot.can_go_previous);
    assert!(!snapshot.can_go_next);
}

#[test]
fn test_filtered_pagination_scenario() {
    // Filtering 25 records down to the 12 Bolivian rows
    let mut view = accession_view();
    commit_filter(&mut view, "bolivia");

    let snapshot = view.snapshot();
    assert_eq!(snapshot.total_filtered_rows, 12);
    assert_eq!(snapshot.page_count, 2);
    assert_eq!(snapshot.first_index, 1);
    assert_eq!(snapshot.last_index, 10);

    view.go_next();
    let snapshot = view.snapshot();
    assert_eq!(snapshot.first_index, 11);
    assert_eq!(snapshot.last_index, 12);
    assert_eq!(snapshot.rows.len(), 2);
}

#[test]
fn test_page_size_change_clamps_to_first_page() {
    // On page 2 of 3, switching to 50 rows per page leaves one page
    let mut view = accession_view();
    view.set_page_index(2);

    assert!(view.set_page_size(50));
    let snapshot = view.snapshot();
    assert_eq!(snapshot.page_count, 1);
    assert_eq!(snapshot.page_index, 0);
    assert_eq!(snapshot.rows.len(), 25);
}

#[test]
fn test_sort_toggle_switches_direction_without_refiltering() {
    let mut view = accession_view();
    commit_filter(&mut view, "peru");
    let before = view.snapshot().total_filtered_rows;

    view.toggle_sort("DECLATITUDE");
    assert_eq!(
        view.sort_direction("DECLATITUDE"),
        Some(SortDirection::Ascending)
    );

    view.toggle_sort("DECLATITUDE");
    assert_eq!(
        view.sort_direction("DECLATITUDE"),
        Some(SortDirection::Descending)
    );
    assert_eq!(view.snapshot().total_filtered_rows, before);

    let latitudes: Vec<f64> = view
        .snapshot()
        .rows
        .iter()
        .filter_map(|r| r.get("DECLATITUDE").as_number())
        .collect();
    let mut expected = latitudes.clone();
    expected.sort_by(f64::total_cmp);
    expected.reverse();
    assert_eq!(latitudes, expected);
}

#[test]
fn test_debounce_commits_last_value_once() {
    let mut view = accession_view();
    let t0 = Instant::now();
    let ms = Duration::from_millis(1);

    view.set_pending_filter("123", t0);
    view.set_pending_filter("1234", t0 + 100 * ms);

    // 500ms after the first edit: still within the second edit's quiet period
    assert!(!view.tick(t0 + 500 * ms));
    assert_eq!(view.committed_query(), "");

    // 600ms after the last edit: exactly one commit, with the last value
    assert!(view.tick(t0 + 700 * ms));
    assert_eq!(view.committed_query(), "1234");
    assert!(!view.tick(t0 + 900 * ms));
}

#[test]
fn test_pages_partition_the_filtered_set() {
    let mut view = accession_view();
    view.toggle_sort("ORIGCTY");

    let mut seen: Vec<String> = Vec::new();
    loop {
        let snapshot = view.snapshot();
        seen.extend(
            snapshot
                .rows
                .iter()
                .map(|r| r.get("ACCENUMB").to_string()),
        );
        if !snapshot.can_go_next {
            break;
        }
        view.go_next();
    }

    // Every record appears exactly once across all pages
    assert_eq!(seen.len(), 25);
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 25);
}

#[test]
fn test_page_bound_invariant_across_intents() {
    let mut view = accession_view();

    let assert_invariant = |view: &TableView| {
        let snapshot = view.snapshot();
        assert!(snapshot.page_index < snapshot.page_count);
        let expected_pages = if snapshot.total_filtered_rows == 0 {
            1
        } else {
            snapshot.total_filtered_rows.div_ceil(snapshot.page_size)
        };
        assert_eq!(snapshot.page_count, expected_pages);
    };

    assert_invariant(&view);

    view.set_page_index(999);
    assert_invariant(&view);

    view.go_last();
    commit_filter(&mut view, "brazil");
    assert_invariant(&view);
    assert_eq!(view.snapshot().page_index, 0);

    commit_filter(&mut view, "no such row anywhere");
    assert_invariant(&view);
    assert_eq!(view.snapshot().page_count, 1);
    assert!(view.snapshot().rows.is_empty());

    view.set_page_size(25);
    assert_invariant(&view);
}

#[test]
fn test_json_ingestion_feeds_the_view() {
    let records = dataset::from_json_str(
        r#"[
            {"name": "alpha", "score": 3},
            {"name": "beta", "score": 1},
            {"name": "gamma"}
        ]"#,
    )
    .unwrap();

    let mut view = TableView::builder().records(records).build().unwrap();
    view.toggle_sort("score");

    let names: Vec<String> = view
        .snapshot()
        .rows
        .iter()
        .map(|r| r.get("name").to_string())
        .collect();
    // Ascending by score, missing score sorts last
    assert_eq!(names, vec!["beta", "alpha", "gamma"]);
}

#[test]
fn test_replace_dataset_resets_paging() {
    let mut view = accession_view();
    view.set_page_index(2);

    view.replace_dataset(accession_records().into_iter().take(4).collect());
    let snapshot = view.snapshot();
    assert_eq!(snapshot.page_index, 0);
    assert_eq!(snapshot.total_filtered_rows, 4);
    assert_eq!(snapshot.page_count, 1);
}

#[test]
fn test_filter_identity_and_idempotence() {
    let mut view = accession_view();

    // Identity: empty query shows everything in dataset order
    let unfiltered: Vec<String> = view
        .snapshot()
        .rows
        .iter()
        .map(|r| r.get("ACCENUMB").to_string())
        .collect();
    assert_eq!(unfiltered.len(), 10);

    // Committing the same query twice changes nothing further
    commit_filter(&mut view, "chile");
    let first_pass = view.snapshot().total_filtered_rows;
    let now = Instant::now();
    view.set_pending_filter("chile", now);
    // Re-committing an identical query reports no change
    assert!(!view.tick(now + Duration::from_millis(500)));
    assert_eq!(view.snapshot().total_filtered_rows, first_pass);
    assert_eq!(first_pass, 3);
}
