//! Example: interactive table browser
//!
//! Loads a JSON or CSV dataset and opens the ratatui frontend over it.
//! Type to filter, use the arrow keys to page, Ctrl+S to sort the
//! selected column.
//!
//! Run with:
//! ```bash
//! cargo run --features tui --example table_demo -- accessions.json
//! ```

use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use tablr::config::ViewConfig;
use tablr::tui::TableApp;
use tablr::{dataset, TableView, TablrError};

/// Browse a tabular dataset in the terminal
#[derive(Debug, Parser)]
#[command(name = "table_demo")]
struct Args {
    /// Dataset to load (.json array of objects, or .csv with a header row)
    dataset: PathBuf,

    /// Page size to start with (10, 20, 25 or 50)
    #[arg(long)]
    page_size: Option<usize>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        simplelog::WriteLogger::init(
            simplelog::LevelFilter::Debug,
            simplelog::Config::default(),
            File::create(log_file)?,
        )?;
    }

    let records = if args.dataset.extension().is_some_and(|ext| ext == "csv") {
        dataset::from_csv_file(&args.dataset)?
    } else {
        dataset::from_json_file(&args.dataset)?
    };

    let config = ViewConfig::load().unwrap_or_default();
    let mut builder = TableView::builder().records(records).config(&config);
    if let Some(page_size) = args.page_size {
        builder = builder.page_size(page_size);
    }
    let view = builder.build().map_err(TablrError::from)?;

    let view = TableApp::new(view).run()?;
    println!(
        "{} of {} rows matched {:?}",
        view.snapshot().total_filtered_rows,
        view.dataset_len(),
        view.committed_query(),
    );

    Ok(())
}
