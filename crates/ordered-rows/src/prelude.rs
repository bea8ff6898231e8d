//! Prelude module for ordered-rows.
//!
//! ```ignore
//! use ordered_rows::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - The list model and view model
//! - Configuration and errors

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use ordered_rows_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Model / View Model
// ============================================================================

pub use crate::model::{
    upper_bound, Edit, ListSnapshot, RowSignals, RowUpdate, SortedListStore, SortedListViewModel,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::StoreConfig;
pub use crate::error::{Error, Result};
