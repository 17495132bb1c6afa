//! Merging two sorted lists.

use crate::persistent::FixedList;

/// Two sorted runs being merged front to front.
///
/// The caller pulls exactly `left.len() + right.len()` elements out with
/// [`Merged::take_next`].
pub(crate) struct Merged<'a, T, F> {
    left: &'a [T],
    right: &'a [T],
    not_greater: F,
}

impl<'a, T, F> Merged<'a, T, F>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    pub(crate) fn new(left: &'a [T], right: &'a [T], not_greater: F) -> Self {
        Self {
            left,
            right,
            not_greater,
        }
    }

    /// Emits the smaller head. Ties go to `left`.
    pub(crate) fn take_next(&mut self) -> T {
        let take_left = match (self.left.first(), self.right.first()) {
            (Some(left), Some(right)) => (self.not_greater)(left, right),
            (Some(_), None) => true,
            (None, _) => false,
        };
        if take_left {
            let (&element, rest) = split_head(self.left);
            self.left = rest;
            element
        } else {
            let (&element, rest) = split_head(self.right);
            self.right = rest;
            element
        }
    }
}

// Callers only split a run they just saw a head for.
fn split_head<T>(run: &[T]) -> (&T, &[T]) {
    let (head, rest) = run.split_at(1);
    (&head[0], rest)
}

/// Merges two sorted lists into one sorted list of length `R = N + M`.
///
/// `not_greater(a, b)` must answer "does `a` not exceed `b`". At each step the
/// heads of both lists are compared; the left head is emitted when
/// `not_greater(left_head, right_head)` holds, otherwise the right head. Once
/// one list is exhausted the rest of the other follows unchanged.
///
/// Both inputs are expected to be sorted under `not_greater`. That is not
/// checked: unsorted input, or an inconsistent predicate, produces a
/// deterministic but possibly unsorted permutation of the inputs.
///
/// The result length `R` is usually inferred from context; a length other
/// than `N + M` is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use fixlist::algorithm::merge_by;
/// use fixlist::persistent::FixedList;
///
/// let descending_left = FixedList::from([5, 3, 1]);
/// let descending_right = FixedList::from([4, 2]);
/// let merged: FixedList<i32, 5> =
///     merge_by(&descending_left, &descending_right, |left, right| left >= right);
/// assert_eq!(merged.as_array(), &[5, 4, 3, 2, 1]);
/// ```
#[must_use]
pub fn merge_by<T, F, const N: usize, const M: usize, const R: usize>(
    left: &FixedList<T, N>,
    right: &FixedList<T, M>,
    not_greater: F,
) -> FixedList<T, R>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    const { assert!(R == N + M, "merged length must equal the sum of the input lengths") };
    #[cfg(feature = "tracing")]
    tracing::trace!(left = N, right = M, "merging fixed lists");
    let mut merged = Merged::new(left.as_slice(), right.as_slice(), not_greater);
    FixedList::from_items(std::array::from_fn(|_| merged.take_next()))
}

/// Merges two lists sorted in ascending order, using `<=`.
///
/// # Examples
///
/// ```rust
/// use fixlist::algorithm::merge;
/// use fixlist::persistent::FixedList;
///
/// let merged: FixedList<i32, 5> = merge(&FixedList::from([1, 3, 5]), &FixedList::from([2, 4]));
/// assert_eq!(merged, FixedList::from([1, 2, 3, 4, 5]));
/// ```
#[inline]
#[must_use]
pub fn merge<T, const N: usize, const M: usize, const R: usize>(
    left: &FixedList<T, N>,
    right: &FixedList<T, M>,
) -> FixedList<T, R>
where
    T: Copy + PartialOrd,
{
    merge_by(left, right, |left, right| left <= right)
}
