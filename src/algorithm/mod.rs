//! Merge and merge sort over [`FixedList`](crate::persistent::FixedList).
//!
//! - [`merge_by`] / [`merge`]: merge two sorted lists of lengths `N` and `M`
//!   into one of length `N + M`
//! - [`sort_by`] / [`sort`]: stable top-down merge sort
//!
//! Orderings are given as a "not greater than" predicate, `not_greater(a, b)`
//! holding when `a` does not exceed `b`; the `*_by`-less variants use `<=`.
//! Nothing here allocates, and the inputs are never modified.
//!
//! For primitive integers, `char` and `bool`, `FixedList::sorted` and
//! `FixedList::merged` run the same algorithm as `const fn`s.
//!
//! # Examples
//!
//! ```rust
//! use fixlist::algorithm::{merge, sort};
//! use fixlist::persistent::FixedList;
//!
//! let left = sort(&FixedList::from([5, 1, 3]));
//! let right = sort(&FixedList::from([4, 2]));
//! let merged: FixedList<i32, 5> = merge(&left, &right);
//! assert_eq!(merged.as_array(), &[1, 2, 3, 4, 5]);
//! ```

mod constant;
mod merge;
mod sort;

pub use merge::merge;
pub use merge::merge_by;
pub use sort::sort;
pub use sort::sort_by;
