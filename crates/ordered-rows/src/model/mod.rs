//! Model/View-model architecture for ordered-rows.
//!
//! This module separates the data (a sorted list of integers) from how it
//! is presented:
//!
//! - The store owns the data and announces each mutation as an `Edit`
//! - The view model turns edits into row updates for a view
//! - Views apply one targeted row update per change instead of re-rendering
//!
//! # Core Types
//!
//! - `upper_bound`: Binary search for the sorted insertion position
//! - `Edit`: Description of a single mutation
//! - `ListSnapshot`: Observer payload (values plus edit)
//! - `SortedListStore`: Owns the sorted sequence and notifies observers
//! - `RowUpdate`: Row-level instruction derived from an edit
//! - `SortedListViewModel`: Presents a store as rows of text
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐  ListSnapshot  ┌─────────────────┐   RowSignals   ┌────────┐
//! │ SortedListStore │───────────────>│ SortedListView- │───────────────>│  View  │
//! │                 │                │ Model           │                │        │
//! └─────────────────┘                └─────────────────┘                └────────┘
//!          ^                                  │                              │
//!          └──────── add_value / remove_value ┴──────── add_row / delete_row ┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ordered_rows::model::{RowUpdate, SortedListStore, SortedListViewModel};
//!
//! let store = Arc::new(SortedListStore::new(vec![1, 2, 3]));
//! let view_model = SortedListViewModel::new(store.clone());
//!
//! view_model.signals().updated.connect(|(update, snapshot)| {
//!     match update {
//!         RowUpdate::InsertRow(row) => println!("insert row {row}"),
//!         RowUpdate::DeleteRow(row) => println!("delete row {row}"),
//!         RowUpdate::Reload => println!("reload {} rows", snapshot.len()),
//!     }
//! });
//!
//! store.add_value(2);
//! assert_eq!(view_model.all_rows(), vec!["1", "2", "2", "3"]);
//! ```

mod edit;
mod insert_index;
mod store;
mod view_model;

pub use edit::{Edit, ListSnapshot};
pub use insert_index::{is_sorted_non_decreasing, upper_bound, upper_bound_by};
pub use store::SortedListStore;
pub use view_model::{RowSignals, RowUpdate, SortedListViewModel};
