//! Read-only cursor over a snapshot of a [`FixedList`].

use std::iter::FusedIterator;

use super::FixedList;
use super::FixedListError;

/// A position within a copy of a [`FixedList`].
///
/// The cursor owns its own copy of the list taken when it was created, so it
/// never aliases the list it came from. Its position ranges over `[0, N]`;
/// position `N` is one past the last element and cannot be dereferenced.
///
/// Moving the cursor (`advance`, `retreat`) returns a new cursor. The cursor
/// is also an [`Iterator`] yielding the remaining elements, which is how
/// ranges of a list are fed back into the sequence constructors.
///
/// Two cursors compare equal when they sit at the same position over equal
/// snapshots.
///
/// # Examples
///
/// ```rust
/// use fixlist::persistent::FixedList;
///
/// let list = FixedList::from([1, 2, 3]);
/// let cursor = list.begin().advance(2).unwrap();
/// assert_eq!(cursor.get(), Ok(&3));
/// assert_eq!(cursor.retreat(1).unwrap().get(), Ok(&2));
/// assert!(list.end().get().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListCursor<T, const N: usize> {
    list: FixedList<T, N>,
    position: usize,
}

impl<T, const N: usize> ListCursor<T, N> {
    #[inline]
    pub(crate) const fn new(list: FixedList<T, N>, position: usize) -> Self {
        Self { list, position }
    }

    /// Returns the current position, in `[0, N]`.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of elements between the cursor and the end.
    #[inline]
    pub const fn remaining(&self) -> usize {
        N - self.position
    }

    /// Returns `true` if the cursor is at position `N`.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.position == N
    }

    /// Borrows the snapshot this cursor walks over.
    #[inline]
    pub const fn list(&self) -> &FixedList<T, N> {
        &self.list
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] at position `N`.
    #[inline]
    pub const fn get(&self) -> Result<&T, FixedListError> {
        self.list.get(self.position)
    }
}

impl<T: Copy, const N: usize> ListCursor<T, N> {
    /// Returns a cursor `count` positions further along.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if the new position would pass
    /// `N`.
    pub const fn advance(&self, count: usize) -> Result<Self, FixedListError> {
        match self.position.checked_add(count) {
            Some(position) if position <= N => Ok(Self::new(self.list, position)),
            _ => Err(FixedListError::OutOfRange {
                position: self.position.saturating_add(count),
                bound: N,
            }),
        }
    }

    /// Returns a cursor `count` positions further back.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `count` exceeds the current
    /// position; the error reports `count` against the current position.
    pub const fn retreat(&self, count: usize) -> Result<Self, FixedListError> {
        if count > self.position {
            return Err(FixedListError::OutOfRange {
                position: count,
                bound: self.position,
            });
        }
        Ok(Self::new(self.list, self.position - count))
    }
}

impl<T: Copy, const N: usize> Iterator for ListCursor<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = *self.list.get(self.position).ok()?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for ListCursor<T, N> {}

impl<T: Copy, const N: usize> FusedIterator for ListCursor<T, N> {}

static_assertions::assert_impl_all!(ListCursor<i32, 4>: Send, Sync, Clone, ExactSizeIterator);
static_assertions::assert_not_impl_any!(ListCursor<i32, 4>: Copy);
