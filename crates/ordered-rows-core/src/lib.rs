//! Core systems for ordered-rows.
//!
//! This crate provides the notification substrate the list models are built
//! on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: `tracing` targets and helpers shared by every crate
//!
//! # Signal/Slot Example
//!
//! ```
//! use ordered_rows_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i64>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
