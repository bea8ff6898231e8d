//! The sorted list store.
//!
//! [`SortedListStore`] owns a sequence of integers kept in non-decreasing
//! order. Every mutation is applied, described as an [`Edit`], and then
//! announced on the store's `changed` signal before the call returns.

use std::ops::RangeInclusive;

use ordered_rows_core::logging::targets;
use ordered_rows_core::{ConnectionId, PerfSpan, Signal};
use parking_lot::{ReentrantMutex, RwLock};
use rand::Rng;

use super::edit::{Edit, ListSnapshot};
use super::insert_index::{is_sorted_non_decreasing, upper_bound};
use crate::config::StoreConfig;
use crate::error::{Error, Result};

struct StoreState {
    values: Vec<i64>,
    last_edit: Edit,
}

/// A list of integers that stays sorted and reports each change.
///
/// # Notification
///
/// Each successful operation emits exactly one [`ListSnapshot`] on
/// [`changed`](Self::changed), synchronously, after the state lock has been
/// released. Observers may therefore read the store from inside their slot.
/// A failed operation changes nothing and emits nothing.
///
/// # Example
///
/// ```
/// use ordered_rows::model::{Edit, SortedListStore};
///
/// let store = SortedListStore::new(vec![1, 2, 3]);
/// store.connect(|snapshot| println!("{:?} after {}", snapshot.values(), snapshot.edit()));
///
/// assert_eq!(store.add_value(0), 0);
/// assert_eq!(store.values(), vec![0, 1, 2, 3]);
/// assert_eq!(store.last_edit(), Edit::Insert { value: 0, position: 0 });
/// ```
///
/// # Concurrency
///
/// The store can be shared through `Arc`. Mutation and notification form
/// one serialized step, so observers receive snapshots in the order the
/// mutations were applied, whichever threads made them. Callers that issue
/// positions computed from an earlier snapshot from several threads must
/// still serialize those calls themselves.
pub struct SortedListStore {
    state: RwLock<StoreState>,
    /// Held from mutation until `emit` returns. Reentrant so an observer may
    /// mutate the store from inside its slot.
    notify: ReentrantMutex<()>,
    random_range: RangeInclusive<i64>,
    changed: Signal<ListSnapshot>,
}

impl SortedListStore {
    /// Creates a store holding `values`, with no observers.
    ///
    /// `values` must already be sorted; the store does not sort them.
    pub fn new(values: Vec<i64>) -> Self {
        warn_if_unsorted(&values);
        Self {
            state: RwLock::new(StoreState {
                values,
                last_edit: Edit::Initial,
            }),
            notify: ReentrantMutex::new(()),
            random_range: StoreConfig::default().random_range(),
            changed: Signal::new(),
        }
    }

    /// Creates a store, registers `observer` and delivers the first
    /// snapshot (with [`Edit::Initial`]) to it.
    pub fn with_observer<F>(values: Vec<i64>, observer: F) -> Self
    where
        F: Fn(&ListSnapshot) + Send + Sync + 'static,
    {
        let store = Self::new(Vec::new());
        store.connect(observer);
        store.initialize(values);
        store
    }

    /// Creates a store from a validated configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        config.validate()?;
        let store = Self::new(config.initial_values.clone());
        Ok(store.with_random_range_unchecked(config.random_range()))
    }

    /// Sets the range `add_random_value` draws from.
    pub fn with_random_range(self, range: RangeInclusive<i64>) -> Result<Self> {
        if range.is_empty() {
            return Err(Error::InvalidRange {
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(self.with_random_range_unchecked(range))
    }

    fn with_random_range_unchecked(mut self, range: RangeInclusive<i64>) -> Self {
        self.random_range = range;
        self
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// The signal emitted after every change.
    pub fn changed(&self) -> &Signal<ListSnapshot> {
        &self.changed
    }

    /// Registers an observer for subsequent changes.
    pub fn connect<F>(&self, observer: F) -> ConnectionId
    where
        F: Fn(&ListSnapshot) + Send + Sync + 'static,
    {
        self.changed.connect(observer)
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.changed.disconnect(id)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Replaces the sequence and notifies observers with [`Edit::Initial`].
    ///
    /// `values` must already be sorted; an unsorted sequence is logged and
    /// kept as-is, and later inserts will not restore order.
    pub fn initialize(&self, values: Vec<i64>) {
        warn_if_unsorted(&values);
        let _span = PerfSpan::new("store.initialize");
        let _notify = self.notify.lock();
        let snapshot = {
            let mut state = self.state.write();
            state.values = values;
            state.last_edit = Edit::Initial;
            ListSnapshot::new(&state.values, Edit::Initial)
        };
        tracing::debug!(target: targets::STORE, len = snapshot.len(), "store initialized");
        self.changed.emit(snapshot);
    }

    /// Re-announces the current sequence as [`Edit::Initial`].
    ///
    /// The values are left as they are; observers are told to render the
    /// whole list again.
    pub fn renotify(&self) {
        let _notify = self.notify.lock();
        let snapshot = {
            let mut state = self.state.write();
            state.last_edit = Edit::Initial;
            ListSnapshot::new(&state.values, Edit::Initial)
        };
        tracing::debug!(target: targets::STORE, len = snapshot.len(), "store renotified");
        self.changed.emit(snapshot);
    }

    /// Inserts `value` at its sorted position and returns that position.
    ///
    /// Equal values already present stay in front of the new one.
    pub fn add_value(&self, value: i64) -> usize {
        let _notify = self.notify.lock();
        let (position, snapshot) = {
            let mut state = self.state.write();
            let position = upper_bound(&state.values, &value);
            state.values.insert(position, value);
            let edit = Edit::Insert { value, position };
            state.last_edit = edit;
            (position, ListSnapshot::new(&state.values, edit))
        };
        tracing::debug!(target: targets::STORE, value, position, "value inserted");
        self.changed.emit(snapshot);
        position
    }

    /// Inserts a value drawn from the configured range using the thread RNG.
    pub fn add_random_value(&self) -> usize {
        self.add_random_value_with(&mut rand::thread_rng())
    }

    /// Inserts a value drawn from the configured range using `rng`.
    pub fn add_random_value_with<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let value = rng.gen_range(self.random_range.clone());
        self.add_value(value)
    }

    /// Inserts `value` if given, otherwise a random value.
    pub fn add_random_or_given(&self, value: Option<i64>) -> usize {
        match value {
            Some(value) => self.add_value(value),
            None => self.add_random_value(),
        }
    }

    /// Removes and returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position >= len()`. The sequence is
    /// left untouched and observers are not notified.
    pub fn remove_value(&self, position: usize) -> Result<i64> {
        let _notify = self.notify.lock();
        let (removed, snapshot) = {
            let mut state = self.state.write();
            let len = state.values.len();
            if position >= len {
                drop(state);
                tracing::warn!(target: targets::STORE, position, len, "remove out of range");
                return Err(Error::out_of_range(position as i128, len));
            }
            let removed = state.values.remove(position);
            let edit = Edit::Delete { position };
            state.last_edit = edit;
            (removed, ListSnapshot::new(&state.values, edit))
        };
        tracing::debug!(target: targets::STORE, position, removed, "value removed");
        self.changed.emit(snapshot);
        Ok(removed)
    }

    /// Like [`remove_value`](Self::remove_value), for signed row indices.
    ///
    /// Negative positions fail with [`Error::OutOfRange`].
    pub fn remove_value_signed(&self, position: i64) -> Result<i64> {
        match usize::try_from(position) {
            Ok(position) => self.remove_value(position),
            Err(_) => {
                let len = self.len();
                tracing::warn!(target: targets::STORE, position, len, "remove out of range");
                Err(Error::out_of_range(i128::from(position), len))
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Number of values.
    pub fn len(&self) -> usize {
        self.state.read().values.len()
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.state.read().values.is_empty()
    }

    /// A copy of the current sequence.
    pub fn values(&self) -> Vec<i64> {
        self.state.read().values.clone()
    }

    /// The value at `position`, if any.
    pub fn value_at(&self, position: usize) -> Option<i64> {
        self.state.read().values.get(position).copied()
    }

    /// The edit applied by the most recent successful operation.
    pub fn last_edit(&self) -> Edit {
        self.state.read().last_edit
    }

    /// The current sequence and last edit, as observers see them.
    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.state.read();
        ListSnapshot::new(&state.values, state.last_edit)
    }

    /// The inclusive range random values are drawn from.
    pub fn random_range(&self) -> RangeInclusive<i64> {
        self.random_range.clone()
    }
}

impl Default for SortedListStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl std::fmt::Debug for SortedListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SortedListStore")
            .field("values", &state.values)
            .field("last_edit", &state.last_edit)
            .field("observers", &self.changed.connection_count())
            .finish()
    }
}

fn warn_if_unsorted(values: &[i64]) {
    if !is_sorted_non_decreasing(values) {
        tracing::warn!(
            target: targets::STORE,
            len = values.len(),
            "initial values are not sorted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn recorded(store: &SortedListStore) -> Arc<Mutex<Vec<ListSnapshot>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recv = events.clone();
        store.connect(move |snapshot| recv.lock().push(snapshot.clone()));
        events
    }

    #[test]
    fn test_insert_at_front() {
        let store = SortedListStore::new(vec![1, 2, 3]);
        let events = recorded(&store);

        assert_eq!(store.add_value(0), 0);

        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].values(), &[0, 1, 2, 3]);
        assert_eq!(events[0].edit(), Edit::Insert { value: 0, position: 0 });
    }

    #[test]
    fn test_insert_at_end() {
        let store = SortedListStore::new(vec![1, 2, 3]);
        let events = recorded(&store);

        assert_eq!(store.add_value(5), 3);

        assert_eq!(store.values(), vec![1, 2, 3, 5]);
        assert_eq!(events.lock()[0].edit(), Edit::Insert { value: 5, position: 3 });
    }

    #[test]
    fn test_insert_duplicate() {
        let store = SortedListStore::new(vec![1, 2, 2, 3]);

        assert_eq!(store.add_value(2), 3);
        assert_eq!(store.values(), vec![1, 2, 2, 2, 3]);
        assert_eq!(store.last_edit(), Edit::Insert { value: 2, position: 3 });
    }

    #[test]
    fn test_insert_into_empty() {
        let store = SortedListStore::default();
        assert_eq!(store.add_value(-4), 0);
        assert_eq!(store.values(), vec![-4]);
    }

    #[test]
    fn test_remove() {
        let store = SortedListStore::new(vec![1, 2, 3]);
        let events = recorded(&store);

        assert_eq!(store.remove_value(1).unwrap(), 2);

        let events = events.lock();
        assert_eq!(events[0].values(), &[1, 3]);
        assert_eq!(events[0].edit(), Edit::Delete { position: 1 });
    }

    #[test]
    fn test_remove_out_of_range() {
        let store = SortedListStore::new(vec![1, 2, 3]);
        let events = recorded(&store);

        let err = store.remove_value(3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: 3, len: 3 }));

        let err = store.remove_value_signed(-1).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { position: -1, len: 3 }));

        assert_eq!(store.values(), vec![1, 2, 3]);
        assert_eq!(store.last_edit(), Edit::Initial);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn test_remove_reports_huge_position() {
        let store = SortedListStore::new(vec![1]);
        let err = store.remove_value(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange { position, len: 1 } if position == usize::MAX as i128
        ));
    }

    #[test]
    fn test_renotify_keeps_values() {
        let store = SortedListStore::new(vec![1, 3]);
        store.add_value(2);
        let events = recorded(&store);

        store.renotify();

        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].values(), &[1, 2, 3]);
        assert!(events[0].edit().is_initial());
        assert_eq!(store.last_edit(), Edit::Initial);
    }

    #[test]
    fn test_observer_may_mutate_from_slot() {
        let store = Arc::new(SortedListStore::new(vec![]));
        let weak = Arc::downgrade(&store);
        store.connect(move |snapshot| {
            if snapshot.len() == 1 {
                if let Some(store) = weak.upgrade() {
                    store.add_value(100);
                }
            }
        });

        store.add_value(1);
        assert_eq!(store.values(), vec![1, 100]);
    }

    #[test]
    fn test_remove_from_empty() {
        let store = SortedListStore::default();
        assert!(store.remove_value(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_remove_signed_in_range() {
        let store = SortedListStore::new(vec![4, 8]);
        assert_eq!(store.remove_value_signed(1).unwrap(), 8);
        assert_eq!(store.values(), vec![4]);
    }

    #[test]
    fn test_with_observer_sees_initial_render() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recv = events.clone();
        let store = SortedListStore::with_observer(vec![1, 2, 3], move |snapshot| {
            recv.lock().push(snapshot.clone());
        });

        {
            let events = events.lock();
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].values(), &[1, 2, 3]);
            assert!(events[0].edit().is_initial());
        }

        store.add_value(2);
        assert_eq!(events.lock().len(), 2);
    }

    #[test]
    fn test_initialize_resets_edit() {
        let store = SortedListStore::new(vec![1]);
        store.add_value(7);
        let events = recorded(&store);

        store.initialize(vec![10, 20]);

        assert_eq!(store.values(), vec![10, 20]);
        assert_eq!(store.last_edit(), Edit::Initial);
        assert_eq!(events.lock().len(), 1);
    }

    #[test]
    fn test_initialize_does_not_sort() {
        let store = SortedListStore::default();
        store.initialize(vec![3, 1, 2]);
        assert_eq!(store.values(), vec![3, 1, 2]);
    }

    #[test]
    fn test_observer_can_read_store() {
        let store = Arc::new(SortedListStore::new(vec![1, 2]));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = Arc::downgrade(&store);
        let recv = seen.clone();
        store.connect(move |_| {
            if let Some(store) = reader.upgrade() {
                recv.lock().push(store.len());
            }
        });

        store.add_value(3);
        store.remove_value(0).unwrap();
        assert_eq!(*seen.lock(), vec![3, 2]);
    }

    #[test]
    fn test_disconnect() {
        let store = SortedListStore::new(vec![]);
        let events = Arc::new(Mutex::new(0));
        let recv = events.clone();
        let id = store.connect(move |_| *recv.lock() += 1);

        store.add_value(1);
        assert!(store.disconnect(id));
        store.add_value(2);
        assert_eq!(*events.lock(), 1);
    }

    #[test]
    fn test_random_values_stay_in_range_and_sorted() {
        let store = SortedListStore::new(vec![])
            .with_random_range(-5..=5)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let position = store.add_random_value_with(&mut rng);
            let value = store.value_at(position).unwrap();
            assert!((-5..=5).contains(&value));
        }

        let values = store.values();
        assert_eq!(values.len(), 200);
        assert!(is_sorted_non_decreasing(&values));
    }

    #[test]
    fn test_add_random_or_given() {
        let store = SortedListStore::new(vec![10])
            .with_random_range(0..=3)
            .unwrap();
        assert_eq!(store.add_random_or_given(Some(20)), 1);
        assert_eq!(store.add_random_or_given(None), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_random_range_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = SortedListStore::default().with_random_range(3..=1);
        assert!(matches!(result, Err(Error::InvalidRange { min: 3, max: 1 })));
    }

    #[test]
    fn test_from_config() {
        let config = StoreConfig::default()
            .with_initial_values(vec![2, 4])
            .with_random_range(9..=9);
        let store = SortedListStore::from_config(&config).unwrap();

        assert_eq!(store.values(), vec![2, 4]);
        assert_eq!(store.add_random_value(), 2);
        assert_eq!(store.values(), vec![2, 4, 9]);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let store = SortedListStore::new(vec![1, 3]);
        store.add_value(2);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.values(), &[1, 2, 3]);
        assert_eq!(snapshot.edit(), Edit::Insert { value: 2, position: 1 });
    }
}
