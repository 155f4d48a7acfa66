//! Example: driving the view-model without a UI toolkit
//!
//! This example demonstrates how any frontend consumes the engine: feed
//! intents in, read the snapshot back out. Here the "frontend" is plain
//! stdout printing.
//!
//! Run with:
//! ```bash
//! cargo run --example custom_frontend
//! ```

use std::time::Instant;
use tablr::{dataset, ColumnSet, ColumnSpec, DisplayToken, TableView, TablrError};

const ROWS: &str = r#"[
    {"ACCENUMB": "PI 1201", "DECLATITUDE": -12.05, "ORIGCTY": "Peru", "GRIN": "GRIN-1201"},
    {"ACCENUMB": "PI 1202", "DECLATITUDE": -13.52, "ORIGCTY": "Peru", "GRIN": "GRIN-1202"},
    {"ACCENUMB": "PI 1301", "DECLATITUDE": -16.49, "ORIGCTY": "Bolivia", "GRIN": "GRIN-1301"},
    {"ACCENUMB": "PI 1302", "DECLATITUDE": null, "ORIGCTY": "Bolivia", "GRIN": "GRIN-1302"},
    {"ACCENUMB": "PI 1401", "DECLATITUDE": -33.45, "ORIGCTY": "Chile", "GRIN": "GRIN-1401"},
    {"ACCENUMB": "PI 1501", "DECLATITUDE": 19.43, "ORIGCTY": "Mexico", "GRIN": "GRIN-1501"}
]"#;

fn print_page(view: &TableView) {
    let snapshot = view.snapshot();
    let columns = view.columns();

    // Header with sort indicators
    let header: Vec<String> = columns
        .specs()
        .iter()
        .map(|column| {
            let indicator = match snapshot.active_sort.direction_of(&column.key) {
                Some(tablr::SortDirection::Ascending) => " ^",
                Some(tablr::SortDirection::Descending) => " v",
                None => "",
            };
            format!("{}{indicator}", column.label)
        })
        .collect();
    println!("{}", header.join(" | "));

    for record in &snapshot.rows {
        let cells: Vec<String> = columns
            .specs()
            .iter()
            .map(|column| column.render(record.get(&column.key)).text)
            .collect();
        println!("{}", cells.join(" | "));
    }

    if snapshot.total_filtered_rows == 0 {
        println!("(no matching rows)");
    } else {
        println!(
            "Showing {} to {} of {} rows (page {}/{})",
            snapshot.first_index,
            snapshot.last_index,
            snapshot.total_filtered_rows,
            snapshot.page_index + 1,
            snapshot.page_count,
        );
    }
    println!();
}

fn main() -> Result<(), TablrError> {
    let records = dataset::from_json_str(ROWS)?;

    let columns = ColumnSet::new(vec![
        ColumnSpec::new("ACCENUMB"),
        ColumnSpec::new("DECLATITUDE").with_label("LATITUDE"),
        ColumnSpec::new("ORIGCTY").with_label("COUNTRY"),
        ColumnSpec::new("GRIN")
            .not_sortable()
            .with_render(|value| DisplayToken::styled(format!("[{value}]"), "link")),
    ]);

    let mut view = TableView::builder()
        .records(records)
        .columns(columns)
        .page_size(10)
        .build()?;

    println!("--- natural order ---");
    print_page(&view);

    println!("--- sorted by latitude, descending ---");
    view.toggle_sort("DECLATITUDE");
    view.toggle_sort("DECLATITUDE");
    print_page(&view);

    println!("--- filtered to \"bolivia\" ---");
    let now = Instant::now();
    view.set_pending_filter("bolivia", now);
    view.tick(now + std::time::Duration::from_millis(500));
    print_page(&view);

    Ok(())
}
