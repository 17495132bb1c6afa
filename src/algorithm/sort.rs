//! Top-down merge sort over [`FixedList`].

use super::merge::Merged;
use crate::persistent::FixedList;

/// Sorts `items` in place, using `scratch` (same length) as merge buffer.
///
/// A span of length `n` splits into a left half of `n / 2` elements and a
/// right half of `n - n / 2`.
fn sort_span<T, F>(items: &mut [T], scratch: &mut [T], not_greater: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let length = items.len();
    if length <= 1 {
        return;
    }
    let middle = length / 2;
    {
        let (left, right) = items.split_at_mut(middle);
        let (left_scratch, right_scratch) = scratch.split_at_mut(middle);
        sort_span(left, left_scratch, not_greater);
        sort_span(right, right_scratch, not_greater);
    }
    let (left, right) = items.split_at(middle);
    let mut merged = Merged::new(left, right, &mut *not_greater);
    for slot in scratch.iter_mut() {
        *slot = merged.take_next();
    }
    items.copy_from_slice(scratch);
}

/// Returns a sorted copy of `list`, ordered by `not_greater`.
///
/// `not_greater(a, b)` must answer "does `a` not exceed `b`", i.e. behave like
/// `<=` for some total preorder. Lists of zero or one element come back
/// unchanged; longer lists are split at `N / 2`, each half is sorted, and the
/// halves are merged with [`merge_by`](super::merge_by)'s tie-break.
///
/// # Stability
///
/// The sort is stable: when `not_greater` holds both ways, the element that
/// came first in `list` comes first in the result.
///
/// An inconsistent predicate does not fault; it yields a deterministic
/// permutation that may not be sorted.
///
/// # Examples
///
/// ```rust
/// use fixlist::algorithm::sort_by;
/// use fixlist::persistent::FixedList;
///
/// let words = FixedList::from(["pear", "fig", "apple", "kiwi"]);
/// let by_length = sort_by(&words, |left, right| left.len() <= right.len());
/// assert_eq!(by_length.as_array(), &["fig", "pear", "kiwi", "apple"]);
/// ```
#[must_use]
pub fn sort_by<T, F, const N: usize>(list: &FixedList<T, N>, mut not_greater: F) -> FixedList<T, N>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(size = N, "sorting fixed list");
    let mut items = *list.as_array();
    let mut scratch = items;
    sort_span(&mut items, &mut scratch, &mut not_greater);
    FixedList::from_items(items)
}

/// Returns a copy of `list` sorted in ascending order, using `<=`.
///
/// # Examples
///
/// ```rust
/// use fixlist::algorithm::sort;
/// use fixlist::persistent::FixedList;
///
/// let list = FixedList::from([1, 5, 6, 3, 4, 2, 8, 0, 9, 7]);
/// assert_eq!(sort(&list), FixedList::from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
/// ```
#[inline]
#[must_use]
pub fn sort<T, const N: usize>(list: &FixedList<T, N>) -> FixedList<T, N>
where
    T: Copy + PartialOrd,
{
    sort_by(list, |left, right| left <= right)
}
