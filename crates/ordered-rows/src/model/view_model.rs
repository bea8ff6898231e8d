//! View-model layer between a [`SortedListStore`] and a row-based view.
//!
//! A view does not interpret store edits itself. It connects to
//! [`RowSignals`] and receives row-level instructions instead: insert one
//! row, delete one row, or reload everything.

use std::sync::Arc;

use ordered_rows_core::logging::targets;
use ordered_rows_core::{ConnectionId, Signal};

use super::edit::{Edit, ListSnapshot};
use super::store::SortedListStore;
use crate::error::Result;

/// A row-level update instruction derived from an [`Edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowUpdate {
    /// Insert a single row at the given position.
    InsertRow(usize),
    /// Delete the single row at the given position.
    DeleteRow(usize),
    /// Discard all rows and render from scratch.
    Reload,
}

impl RowUpdate {
    /// Maps a store edit to the matching row update.
    pub fn from_edit(edit: &Edit) -> Self {
        match *edit {
            Edit::Initial => RowUpdate::Reload,
            Edit::Insert { position, .. } => RowUpdate::InsertRow(position),
            Edit::Delete { position } => RowUpdate::DeleteRow(position),
        }
    }

    /// Applies this update to a cached row list so it matches `snapshot`.
    ///
    /// Only the affected row is touched for inserts and deletes; `render`
    /// is called once for an insert and once per row for a reload.
    pub fn apply_to_rows<T, F>(&self, rows: &mut Vec<T>, snapshot: &ListSnapshot, render: F)
    where
        F: Fn(i64) -> T,
    {
        match *self {
            RowUpdate::InsertRow(row) => rows.insert(row, render(snapshot.values()[row])),
            RowUpdate::DeleteRow(row) => {
                rows.remove(row);
            }
            RowUpdate::Reload => {
                rows.clear();
                rows.extend(snapshot.values().iter().copied().map(render));
            }
        }
    }
}

impl From<Edit> for RowUpdate {
    fn from(edit: Edit) -> Self {
        Self::from_edit(&edit)
    }
}

/// Signals a view connects to in order to stay in sync.
pub struct RowSignals {
    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted after the whole list has been replaced.
    pub model_reset: Signal<()>,

    /// Emitted after every change, with the update and the new state.
    pub updated: Signal<(RowUpdate, ListSnapshot)>,
}

impl Default for RowSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSignals {
    /// Creates a new set of row signals.
    pub fn new() -> Self {
        Self {
            rows_inserted: Signal::new(),
            rows_removed: Signal::new(),
            model_reset: Signal::new(),
            updated: Signal::new(),
        }
    }

    /// Emits the row signal matching `snapshot`'s edit, then `updated`.
    pub fn dispatch(&self, snapshot: &ListSnapshot) {
        let update = RowUpdate::from_edit(&snapshot.edit());
        tracing::trace!(target: targets::VIEW_MODEL, ?update, "dispatching row update");
        match update {
            RowUpdate::InsertRow(row) => self.rows_inserted.emit((row, row)),
            RowUpdate::DeleteRow(row) => self.rows_removed.emit((row, row)),
            RowUpdate::Reload => self.model_reset.emit(()),
        }
        self.updated.emit((update, snapshot.clone()));
    }
}

/// Presents a [`SortedListStore`] as rows of text.
///
/// The view model forwards every store change to its [`RowSignals`] for as
/// long as it is alive. Dropping it disconnects it from the store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ordered_rows::model::{SortedListStore, SortedListViewModel};
///
/// let store = Arc::new(SortedListStore::new(vec![10, 30]));
/// let view_model = SortedListViewModel::new(store);
///
/// view_model.signals().rows_inserted.connect(|(first, _)| {
///     println!("insert row {first}");
/// });
///
/// view_model.add_row(20);
/// assert_eq!(view_model.row_text(1).as_deref(), Some("20"));
/// ```
pub struct SortedListViewModel {
    store: Arc<SortedListStore>,
    signals: Arc<RowSignals>,
    connection: ConnectionId,
}

impl SortedListViewModel {
    /// Creates a view model and subscribes it to `store`.
    pub fn new(store: Arc<SortedListStore>) -> Self {
        let signals = Arc::new(RowSignals::new());
        let forward = Arc::clone(&signals);
        let connection = store.connect(move |snapshot| forward.dispatch(snapshot));
        Self {
            store,
            signals,
            connection,
        }
    }

    /// The signals views connect to.
    pub fn signals(&self) -> &RowSignals {
        &self.signals
    }

    /// The store this view model presents.
    pub fn store(&self) -> &Arc<SortedListStore> {
        &self.store
    }

    /// Number of rows to display.
    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// Display text for `row`, or `None` if there is no such row.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.store.value_at(row).map(|value| value.to_string())
    }

    /// Display text for every row, in order.
    pub fn all_rows(&self) -> Vec<String> {
        self.store.values().iter().map(i64::to_string).collect()
    }

    /// Adds `value` and returns the row it was shown at.
    pub fn add_row(&self, value: i64) -> usize {
        self.store.add_value(value)
    }

    /// Adds a random value and returns the row it was shown at.
    pub fn add_random_row(&self) -> usize {
        self.store.add_random_value()
    }

    /// Deletes the displayed `row`, returning the value it held.
    pub fn delete_row(&self, row: usize) -> Result<i64> {
        self.store.remove_value(row)
    }

    /// Asks the store to re-announce its current state as a full reload.
    pub fn reload(&self) {
        self.store.renotify();
    }
}

impl Drop for SortedListViewModel {
    fn drop(&mut self) {
        self.store.disconnect(self.connection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_from_edit() {
        assert_eq!(RowUpdate::from_edit(&Edit::Initial), RowUpdate::Reload);
        assert_eq!(
            RowUpdate::from(Edit::Insert { value: 9, position: 4 }),
            RowUpdate::InsertRow(4)
        );
        assert_eq!(
            RowUpdate::from(Edit::Delete { position: 2 }),
            RowUpdate::DeleteRow(2)
        );
    }

    #[test]
    fn test_dispatch_routes_by_edit() {
        let signals = RowSignals::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let l = log.clone();
        signals
            .rows_inserted
            .connect(move |(first, last)| l.lock().push(("inserted", *first, *last)));
        let l = log.clone();
        signals
            .rows_removed
            .connect(move |(first, last)| l.lock().push(("removed", *first, *last)));
        let l = log.clone();
        signals.model_reset.connect(move |_| l.lock().push(("reset", 0, 0)));

        signals.dispatch(&ListSnapshot::new(&[1, 2], Edit::Insert { value: 2, position: 1 }));
        signals.dispatch(&ListSnapshot::new(&[2], Edit::Delete { position: 0 }));
        signals.dispatch(&ListSnapshot::new(&[], Edit::Initial));

        assert_eq!(
            *log.lock(),
            vec![("inserted", 1, 1), ("removed", 0, 0), ("reset", 0, 0)]
        );
    }

    #[test]
    fn test_row_text() {
        let store = Arc::new(SortedListStore::new(vec![-1, 5]));
        let view_model = SortedListViewModel::new(store);

        assert_eq!(view_model.row_count(), 2);
        assert_eq!(view_model.row_text(0).as_deref(), Some("-1"));
        assert_eq!(view_model.row_text(2), None);
        assert_eq!(view_model.all_rows(), vec!["-1", "5"]);
    }

    #[test]
    fn test_delete_row_out_of_range() {
        let store = Arc::new(SortedListStore::new(vec![1]));
        let view_model = SortedListViewModel::new(store);
        assert!(view_model.delete_row(1).unwrap_err().is_out_of_range());
        assert_eq!(view_model.row_count(), 1);
    }

    #[test]
    fn test_reload_emits_reset() {
        let store = Arc::new(SortedListStore::new(vec![1, 2]));
        let view_model = SortedListViewModel::new(store);
        let resets = Arc::new(Mutex::new(0));
        let r = resets.clone();
        view_model.signals().model_reset.connect(move |_| *r.lock() += 1);

        view_model.reload();
        assert_eq!(*resets.lock(), 1);
        assert_eq!(view_model.all_rows(), vec!["1", "2"]);
    }

    #[test]
    fn test_drop_disconnects() {
        let store = Arc::new(SortedListStore::new(vec![]));
        let view_model = SortedListViewModel::new(store.clone());
        assert_eq!(store.changed().connection_count(), 1);

        drop(view_model);
        assert_eq!(store.changed().connection_count(), 0);
    }

    #[test]
    fn test_apply_to_rows_tracks_store() {
        let store = Arc::new(SortedListStore::new(vec![5, 10]));
        let view_model = SortedListViewModel::new(store.clone());
        let rows = Arc::new(Mutex::new(view_model.all_rows()));

        let cache = rows.clone();
        view_model.signals().updated.connect(move |(update, snapshot)| {
            let mut rows = cache.lock();
            update.apply_to_rows(&mut *rows, snapshot, |v| v.to_string());
        });

        view_model.add_row(7);
        view_model.add_row(1);
        view_model.delete_row(3).unwrap();
        view_model.add_row(7);

        assert_eq!(*rows.lock(), view_model.all_rows());
        assert_eq!(*rows.lock(), vec!["1", "5", "7", "7"]);
    }
}
