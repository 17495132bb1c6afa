//! Fixed-capacity persistent list.
//!
//! This module provides [`FixedList`], an immutable sequence of exactly `N`
//! elements whose length is part of its type.
//!
//! # Overview
//!
//! `FixedList` behaves like a value: copying it copies every element, and
//! every operation that looks like a mutation (`set`, `insert`, `erase`)
//! returns a new list, leaving the receiver untouched. Operations that would
//! change the length instead keep it fixed:
//!
//! - `insert` shifts elements right and drops whatever falls off the end
//! - `erase` shifts elements left and pads the vacated tail with a fill value
//!
//! For `Copy` element types the constructors and transformers are `const fn`s,
//! so the same code runs during constant evaluation and at runtime:
//!
//! ```rust
//! use fixlist::persistent::FixedList;
//! use fixlist::unwrap_const;
//!
//! const BASE: FixedList<i32, 4> = FixedList::from_array_padded([1, 2, 3], 0);
//! const UPDATED: FixedList<i32, 4> = unwrap_const!(BASE.set(1, 3));
//! const SHIFTED: FixedList<i32, 4> = unwrap_const!(UPDATED.insert(0, 0));
//!
//! assert_eq!(SHIFTED.as_array(), &[0, 1, 3, 3]);
//! assert_eq!(BASE.as_array(), &[1, 2, 3, 0]); // Original unchanged
//! ```
//!
//! Forms that fall back to `T::default()` (such as [`FixedList::new`] or
//! [`FixedList::erase`]) are runtime-only; each has a `const` counterpart that
//! takes the fill value explicitly.

use std::fmt;
use std::iter::FromIterator;

use super::FixedListError;
use super::ListCursor;

/// An immutable list of exactly `N` elements of type `T`.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `size`        | O(1)       |
/// | `get`         | O(1)       |
/// | `set`         | O(N)       |
/// | `insert`      | O(N)       |
/// | `insert_all`  | O(N)       |
/// | `erase`       | O(N)       |
/// | `erase_range` | O(N)       |
/// | `begin`/`end` | O(N)       |
///
/// Every transformer copies the whole list, since the result is an
/// independent value.
///
/// # Examples
///
/// ```rust
/// use fixlist::persistent::FixedList;
///
/// let list = FixedList::from([0, 1]);
/// let inserted = list.insert(0, 2).unwrap();
/// assert_eq!(inserted.as_array(), &[2, 0]);
///
/// // The element pushed past the end is gone for good.
/// assert_eq!(inserted.erase(0).unwrap(), FixedList::from([0, 0]));
/// assert_eq!(inserted.erase_with(0, 1).unwrap(), list);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedList<T, const N: usize> {
    items: [T; N],
}

#[inline]
const fn out_of_range(position: usize, bound: usize) -> FixedListError {
    FixedListError::OutOfRange { position, bound }
}

impl<T, const N: usize> FixedList<T, N> {
    /// Wraps an array of exactly `N` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// const LIST: FixedList<char, 3> = FixedList::from_items(['a', 'b', 'c']);
    /// assert_eq!(LIST.get(2), Ok(&'c'));
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_items(items: [T; N]) -> Self {
        Self { items }
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::{FixedList, FixedListError};
    ///
    /// let list = FixedList::from([10, 20]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(
    ///     list.get(2),
    ///     Err(FixedListError::OutOfRange { position: 2, bound: 2 })
    /// );
    /// ```
    #[inline]
    pub const fn get(&self, position: usize) -> Result<&T, FixedListError> {
        if position < N {
            Ok(&self.items[position])
        } else {
            Err(out_of_range(position, N))
        }
    }

    /// Returns the number of elements, which is always `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns the number of elements, which is always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the maximum number of elements, which is always `N`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns `true` if the list holds no elements, i.e. `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows the elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.items
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list and returns its elements.
    #[inline]
    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.items
    }

    /// Returns a borrowing iterator over the elements.
    ///
    /// Unlike a [`ListCursor`], this iterator does not copy the list.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Copy, const N: usize> FixedList<T, N> {
    /// Creates a list with every element a copy of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// const ONES: FixedList<u8, 3> = FixedList::filled(1);
    /// assert_eq!(ONES.as_array(), &[1, 1, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn filled(value: T) -> Self {
        Self { items: [value; N] }
    }

    /// Creates a list from the first `N` elements of `values`, padding with
    /// `pad` if `values` is shorter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// const PADDED: FixedList<i32, 3> = FixedList::from_slice_padded(&[1], 9);
    /// const TRUNCATED: FixedList<i32, 1> = FixedList::from_slice_padded(&[1, 2], 9);
    /// assert_eq!(PADDED.as_array(), &[1, 9, 9]);
    /// assert_eq!(TRUNCATED.as_array(), &[1]);
    /// ```
    #[must_use]
    pub const fn from_slice_padded(values: &[T], pad: T) -> Self {
        let mut items = [pad; N];
        let mut index = 0;
        while index < N && index < values.len() {
            items[index] = values[index];
            index += 1;
        }
        Self { items }
    }

    /// Creates a list from the first `N` elements of an array of any length,
    /// padding with `pad`.
    #[inline]
    #[must_use]
    pub const fn from_array_padded<const M: usize>(values: [T; M], pad: T) -> Self {
        Self::from_slice_padded(&values, pad)
    }

    /// Creates a list from the first `N` elements of a list of any length,
    /// padding with `pad`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let short = FixedList::from([1]);
    /// let long: FixedList<i32, 3> = FixedList::from_list_padded(&short, 2);
    /// assert_eq!(long.as_array(), &[1, 2, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_list_padded<const M: usize>(source: &FixedList<T, M>, pad: T) -> Self {
        Self::from_slice_padded(source.as_slice(), pad)
    }

    /// Creates a list from the first `N` values of a finite sequence, padding
    /// with `pad` once the sequence runs out.
    ///
    /// Any iterator works as a source, including a [`ListCursor`] (or a
    /// `take` of one), which is how sub-lists are cut out of a list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([1, 2, 3, 4]);
    /// let cursor = list.begin().advance(1).unwrap();
    /// let middle: FixedList<i32, 3> = FixedList::from_sequence_padded(cursor.take(2), 0);
    /// assert_eq!(middle.as_array(), &[2, 3, 0]);
    /// ```
    #[must_use]
    pub fn from_sequence_padded<I>(values: I, pad: T) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        Self {
            items: std::array::from_fn(|_| values.next().unwrap_or(pad)),
        }
    }

    /// Returns a list identical to this one except that `position` holds
    /// `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([0, 1]);
    /// assert_eq!(list.set(1, 2).unwrap().as_array(), &[0, 2]);
    /// assert!(list.set(2, 2).is_err());
    /// ```
    pub const fn set(&self, position: usize, value: T) -> Result<Self, FixedListError> {
        if position >= N {
            return Err(out_of_range(position, N));
        }
        let mut items = self.items;
        items[position] = value;
        Ok(Self { items })
    }

    /// Inserts `value` at `position`, shifting later elements right and
    /// dropping the last one.
    ///
    /// Inserting at `N` yields a list equal to the receiver, since the value
    /// lands past the end.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position > N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([0, 1, 2]);
    /// assert_eq!(list.insert(1, 9).unwrap().as_array(), &[0, 9, 1]);
    /// assert_eq!(list.insert(3, 9).unwrap(), list);
    /// ```
    #[inline]
    pub const fn insert(&self, position: usize, value: T) -> Result<Self, FixedListError> {
        self.insert_all(position, &[value])
    }

    /// Splices `values` in at `position`, keeping the list at `N` elements.
    ///
    /// Trailing elements are dropped to make room. Values that would land at
    /// or past `N` are dropped as well; that is truncation, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position > N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([1, 3, 3, 0]);
    /// assert_eq!(list.insert_all(1, &[2, 3]).unwrap().as_array(), &[1, 2, 3, 3]);
    /// assert_eq!(list.insert_all(3, &[7, 8, 9]).unwrap().as_array(), &[1, 3, 3, 7]);
    /// assert_eq!(list.insert_all(2, &[]).unwrap(), list);
    /// ```
    pub const fn insert_all(&self, position: usize, values: &[T]) -> Result<Self, FixedListError> {
        if position > N {
            return Err(out_of_range(position, N));
        }
        let mut items = self.items;
        let mut index = position;
        while index < N {
            let offset = index - position;
            items[index] = if offset < values.len() {
                values[offset]
            } else {
                self.items[index - values.len()]
            };
            index += 1;
        }
        Ok(Self { items })
    }

    /// Removes the element at `position`, shifting later elements left and
    /// writing `fill` into the last slot.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position >= N`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([0, 1, 2]);
    /// assert_eq!(list.erase_with(0, 7).unwrap().as_array(), &[1, 2, 7]);
    /// ```
    pub const fn erase_with(&self, position: usize, fill: T) -> Result<Self, FixedListError> {
        if position >= N {
            return Err(out_of_range(position, N));
        }
        self.erase_range_with(position, position + 1, fill)
    }

    /// Removes the half-open range `[first, last)`, shifting the remainder
    /// left and writing `fill` into the `last - first` vacated slots.
    ///
    /// `first == last` removes nothing.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::OutOfRange`] if `last > N`
    /// - [`FixedListError::InvalidRange`] if `first > last`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::{FixedList, FixedListError};
    ///
    /// let list = FixedList::from([0, 1, 2, 3]);
    /// assert_eq!(list.erase_range_with(1, 3, 9).unwrap().as_array(), &[0, 3, 9, 9]);
    /// assert_eq!(
    ///     list.erase_range_with(3, 1, 9),
    ///     Err(FixedListError::InvalidRange { first: 3, last: 1 })
    /// );
    /// ```
    pub const fn erase_range_with(
        &self,
        first: usize,
        last: usize,
        fill: T,
    ) -> Result<Self, FixedListError> {
        if last > N {
            return Err(out_of_range(last, N));
        }
        if first > last {
            return Err(FixedListError::InvalidRange { first, last });
        }
        let removed = last - first;
        let mut items = self.items;
        let mut index = first;
        while index < N {
            items[index] = if index + removed < N {
                self.items[index + removed]
            } else {
                fill
            };
            index += 1;
        }
        Ok(Self { items })
    }

    /// Returns a cursor at position 0 over a copy of this list.
    #[inline]
    #[must_use]
    pub const fn cbegin(&self) -> ListCursor<T, N> {
        ListCursor::new(*self, 0)
    }

    /// Returns a cursor at position `N` over a copy of this list.
    #[inline]
    #[must_use]
    pub const fn cend(&self) -> ListCursor<T, N> {
        ListCursor::new(*self, N)
    }

    /// Returns a cursor at position 0 over a copy of this list.
    ///
    /// Equivalent to [`cbegin`](Self::cbegin): cursors are always read-only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([1, 2, 3]);
    /// let collected: Vec<i32> = list.begin().collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// assert_eq!(list.begin().advance(3).unwrap(), list.end());
    /// ```
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> ListCursor<T, N> {
        self.cbegin()
    }

    /// Returns a cursor at position `N` over a copy of this list.
    ///
    /// Equivalent to [`cend`](Self::cend).
    #[inline]
    #[must_use]
    pub const fn end(&self) -> ListCursor<T, N> {
        self.cend()
    }
}

impl<T: Copy + Default, const N: usize> FixedList<T, N> {
    /// Creates a list of `N` default-valued elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list: FixedList<i32, 2> = FixedList::new();
    /// assert_eq!(list.as_array(), &[0, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::filled(T::default())
    }

    /// Creates a list from the first `N` elements of an array of any length,
    /// padding with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list: FixedList<i32, 4> = FixedList::from_array([1, 2, 3]);
    /// assert_eq!(list.as_array(), &[1, 2, 3, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_array<const M: usize>(values: [T; M]) -> Self {
        Self::from_array_padded(values, T::default())
    }

    /// Creates a list from the first `N` elements of a list of any length,
    /// padding with default values.
    #[inline]
    #[must_use]
    pub fn from_list<const M: usize>(source: &FixedList<T, M>) -> Self {
        Self::from_list_padded(source, T::default())
    }

    /// Creates a list from the first `N` values of a finite sequence, padding
    /// with default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list: FixedList<u32, 5> = FixedList::from_sequence(1..=3);
    /// assert_eq!(list.as_array(), &[1, 2, 3, 0, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence_padded(values, T::default())
    }

    /// Removes the element at `position`, padding the last slot with a
    /// default value.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::OutOfRange`] if `position >= N`.
    #[inline]
    pub fn erase(&self, position: usize) -> Result<Self, FixedListError> {
        self.erase_with(position, T::default())
    }

    /// Removes the half-open range `[first, last)`, padding the vacated slots
    /// with default values.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::OutOfRange`] if `last > N`
    /// - [`FixedListError::InvalidRange`] if `first > last`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlist::persistent::FixedList;
    ///
    /// let list = FixedList::from([0, 1]);
    /// assert!(list.erase_range(0, 3).unwrap_err().is_out_of_range());
    /// assert_eq!(list.erase_range(1, 1).unwrap(), list);
    /// ```
    #[inline]
    pub fn erase_range(&self, first: usize, last: usize) -> Result<Self, FixedListError> {
        self.erase_range_with(first, last, T::default())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Copy + Default, const N: usize> Default for FixedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedList<T, N> {
    fn from(items: [T; N]) -> Self {
        Self::from_items(items)
    }
}

impl<T, const N: usize> From<FixedList<T, N>> for [T; N] {
    fn from(list: FixedList<T, N>) -> Self {
        list.into_array()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for FixedList<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T, const N: usize> IntoIterator for FixedList<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedList<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedList<T, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedList<T, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(FixedList<i32, 4>: Send, Sync, Copy);
static_assertions::assert_impl_all!(FixedList<String, 2>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(FixedList<std::rc::Rc<i32>, 2>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for FixedList<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(N))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct FixedListVisitor<T, const N: usize> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T, const N: usize> FixedListVisitor<T, N> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::de::Visitor<'de> for FixedListVisitor<T, N>
where
    T: serde::Deserialize<'de>,
{
    type Value = FixedList<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of exactly {N} elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = arrayvec::ArrayVec::<T, N>::new();
        while let Some(element) = seq.next_element()? {
            if elements.try_push(element).is_err() {
                return Err(serde::de::Error::invalid_length(N + 1, &self));
            }
        }
        let length = elements.len();
        elements
            .into_inner()
            .map(FixedList::from_items)
            .map_err(|_| serde::de::Error::invalid_length(length, &self))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for FixedList<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FixedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
