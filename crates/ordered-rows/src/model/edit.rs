//! Mutation descriptors delivered with every store notification.

use std::fmt;
use std::sync::Arc;

/// The most recent change applied to a [`SortedListStore`](super::SortedListStore).
///
/// Positions are expressed against the sequence as it was *before* the
/// mutation: an `Insert` position is in `0..=len`, a `Delete` position is in
/// `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edit {
    /// No structural change; observers should render the whole list.
    #[default]
    Initial,
    /// `value` was placed at `position`.
    Insert {
        /// The inserted value.
        value: i64,
        /// Where it was inserted.
        position: usize,
    },
    /// The element previously at `position` was removed.
    Delete {
        /// Position of the removed element.
        position: usize,
    },
}

impl Edit {
    /// Returns the affected position, if the edit is structural.
    pub fn position(&self) -> Option<usize> {
        match *self {
            Edit::Initial => None,
            Edit::Insert { position, .. } | Edit::Delete { position } => Some(position),
        }
    }

    /// Returns `true` for [`Edit::Initial`].
    pub fn is_initial(&self) -> bool {
        matches!(self, Edit::Initial)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Initial => write!(f, "initial"),
            Edit::Insert { value, position } => write!(f, "insert {value} at {position}"),
            Edit::Delete { position } => write!(f, "delete at {position}"),
        }
    }
}

/// The payload handed to store observers.
///
/// Holds a read-only copy of the sequence after the mutation together with
/// the edit that produced it. Cloning is cheap; the values are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    values: Arc<[i64]>,
    edit: Edit,
}

impl ListSnapshot {
    pub(crate) fn new(values: &[i64], edit: Edit) -> Self {
        Self {
            values: Arc::from(values),
            edit,
        }
    }

    /// The sequence after the edit was applied.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// The edit that produced this snapshot.
    pub fn edit(&self) -> Edit {
        self.edit
    }

    /// Number of values in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the snapshot holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
