//! Compile-time merge and sort for built-in ordered types.
//!
//! Trait methods cannot be called during constant evaluation, so the generic
//! [`merge_by`](super::merge_by) and [`sort_by`](super::sort_by) are runtime
//! only. For the primitive integer types, `char` and `bool`, `<=` is usable
//! in a `const fn`, and [`FixedList`] gains `const` [`sorted`] and [`merged`]
//! methods with the same split shape and tie-break as the generic versions.
//!
//! [`sorted`]: FixedList::sorted
//! [`merged`]: FixedList::merged
//!
//! ```rust
//! use fixlist::persistent::FixedList;
//!
//! const SORTED: FixedList<i32, 10> =
//!     FixedList::<i32, 10>::from_items([1, 5, 6, 3, 4, 2, 8, 0, 9, 7]).sorted();
//! const MERGED: FixedList<u8, 5> =
//!     FixedList::<u8, 3>::from_items([1, 3, 5]).merged(&FixedList::from_items([2, 4]));
//!
//! assert_eq!(SORTED.as_array(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(MERGED.as_array(), &[1, 2, 3, 4, 5]);
//! ```

use crate::persistent::FixedList;

macro_rules! impl_const_merge_sort {
    ($($element:ty => $seed:expr),* $(,)?) => {$(
        impl<const N: usize> FixedList<$element, N> {
            /// Returns a copy of this list sorted in ascending order.
            ///
            /// Evaluable at compile time. Stable, and identical in result to
            #[doc = concat!("[`sort`](crate::algorithm::sort) on `", stringify!($element), "`.")]
            #[must_use]
            pub const fn sorted(&self) -> Self {
                let mut items = *self.as_array();
                let mut scratch = items;
                Self::sort_span(&mut items, &mut scratch, 0, N);
                Self::from_items(items)
            }

            /// Merges this ascending list with another into one ascending
            /// list of length `R = N + M`.
            ///
            /// Evaluable at compile time. Ties go to `self`. A result length
            /// other than `N + M` is rejected at compile time.
            #[must_use]
            pub const fn merged<const M: usize, const R: usize>(
                &self,
                other: &FixedList<$element, M>,
            ) -> FixedList<$element, R> {
                const { assert!(R == N + M, "merged length must equal the sum of the input lengths") };
                let left = self.as_array();
                let right = other.as_array();
                let mut items = [$seed; R];
                let mut left_index = 0;
                let mut right_index = 0;
                let mut output = 0;
                while output < R {
                    if left_index < N && (right_index >= M || left[left_index] <= right[right_index]) {
                        items[output] = left[left_index];
                        left_index += 1;
                    } else {
                        items[output] = right[right_index];
                        right_index += 1;
                    }
                    output += 1;
                }
                FixedList::from_items(items)
            }

            // Sorts items[low..high], splitting at low + (high - low) / 2.
            const fn sort_span(
                items: &mut [$element; N],
                scratch: &mut [$element; N],
                low: usize,
                high: usize,
            ) {
                if high - low <= 1 {
                    return;
                }
                let middle = low + (high - low) / 2;
                Self::sort_span(items, scratch, low, middle);
                Self::sort_span(items, scratch, middle, high);

                let mut left = low;
                let mut right = middle;
                let mut output = low;
                while output < high {
                    if left < middle && (right >= high || items[left] <= items[right]) {
                        scratch[output] = items[left];
                        left += 1;
                    } else {
                        scratch[output] = items[right];
                        right += 1;
                    }
                    output += 1;
                }

                let mut index = low;
                while index < high {
                    items[index] = scratch[index];
                    index += 1;
                }
            }
        }
    )*};
}

impl_const_merge_sort! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    char => '\0',
    bool => false,
}
