//! Insertion-position search for sorted sequences.
//!
//! [`upper_bound`] finds where a value belongs in a slice that is already
//! sorted in non-decreasing order, placing it after any elements equal to
//! it. Inserting at that index keeps the slice sorted.

use std::cmp::Ordering;

/// Returns the index at which `key` should be inserted into `sorted`.
///
/// The result is the smallest `i` such that every element of `sorted[..i]`
/// is `<= key` and every element of `sorted[i..]` is `> key`. Equal elements
/// therefore stay in front of the new value.
///
/// `sorted` must already be in non-decreasing order. This is not checked;
/// an unsorted slice yields an unspecified (but in-bounds) index.
///
/// # Example
///
/// ```
/// use ordered_rows::model::upper_bound;
///
/// assert_eq!(upper_bound(&[1, 2, 2, 3], &2), 3);
/// assert_eq!(upper_bound(&[1, 2, 3], &0), 0);
/// assert_eq!(upper_bound::<i64>(&[], &5), 0);
/// ```
pub fn upper_bound<T: Ord>(sorted: &[T], key: &T) -> usize {
    upper_bound_by(sorted, |element| element.cmp(key))
}

/// Like [`upper_bound`], with a comparator that orders an element against
/// the key being placed.
///
/// `compare` returns `Less` or `Equal` for elements that belong before the
/// key and `Greater` for elements that belong after it.
pub fn upper_bound_by<T, F>(sorted: &[T], mut compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if compare(&sorted[mid]) == Ordering::Greater {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

/// Returns `true` if `values` is in non-decreasing order.
pub fn is_sorted_non_decreasing<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
