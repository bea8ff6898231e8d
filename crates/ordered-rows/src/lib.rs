//! ordered-rows - a sorted integer list with change notification.
//!
//! This is the main crate. It re-exports the core signal system and adds
//! the list model, its view model and configuration.
//!
//! # Example
//!
//! ```
//! use ordered_rows::model::{Edit, SortedListStore};
//!
//! fn main() -> ordered_rows::Result<()> {
//!     let store = SortedListStore::with_observer(vec![1, 2, 3], |snapshot| {
//!         println!("{:?} ({})", snapshot.values(), snapshot.edit());
//!     });
//!
//!     store.add_value(2);
//!     store.remove_value(0)?;
//!     assert_eq!(store.values(), vec![2, 2, 3]);
//!     assert_eq!(store.last_edit(), Edit::Delete { position: 0 });
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod model;
pub mod prelude;

pub use error::{Error, Result};
pub use ordered_rows_core::*;
