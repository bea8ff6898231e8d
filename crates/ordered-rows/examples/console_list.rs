//! ordered-rows Console Example
//!
//! Drives a store through its view model and renders each row update to the
//! console, the way a table view would apply them.
//!
//! Run with: cargo run -p ordered-rows --example console_list [config.toml]
//!
//! Set `RUST_LOG=ordered_rows=debug` to see store events.

use std::sync::Arc;

use ordered_rows::config::StoreConfig;
use ordered_rows::model::{RowUpdate, SortedListStore, SortedListViewModel};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::from_toml_file(path)?,
        None => StoreConfig::default().with_initial_values(vec![1, 2, 3]),
    };

    let store = Arc::new(SortedListStore::from_config(&config)?);
    let view_model = SortedListViewModel::new(store);

    // The "view": a cache of rendered rows kept in sync one row at a time.
    let rows = Arc::new(Mutex::new(view_model.all_rows()));
    let cache = rows.clone();
    view_model.signals().updated.connect(move |(update, snapshot)| {
        let mut rows = cache.lock();
        update.apply_to_rows(&mut *rows, snapshot, |value| format!("Row {value}"));
        match update {
            RowUpdate::InsertRow(row) => println!("+ row {row:>2}: {}", rows[*row]),
            RowUpdate::DeleteRow(row) => println!("- row {row:>2}"),
            RowUpdate::Reload => println!("~ reloaded {} rows", rows.len()),
        }
    });

    view_model.reload();
    for _ in 0..5 {
        view_model.add_random_row();
    }
    view_model.add_row(2);
    view_model.delete_row(0)?;

    // A stale row index is reported, not applied.
    let stale = view_model.row_count();
    if let Err(err) = view_model.delete_row(stale) {
        println!("! {err}");
    }

    println!();
    for (row, text) in rows.lock().iter().enumerate() {
        println!("{row:>3} | {text}");
    }

    Ok(())
}
