//! Persistent (immutable) fixed-capacity data structures.
//!
//! - [`FixedList`]: list of exactly `N` elements, updated by copy
//! - [`ListCursor`]: read-only cursor over a snapshot of a `FixedList`
//! - [`FixedListError`]: contract violations reported by both
//!
//! # Value Semantics
//!
//! Nothing in this module shares storage. A `FixedList` owns its elements
//! inline, every transformer returns a fresh list, and a cursor carries its
//! own copy of the list it was taken from. No operation allocates.
//!
//! # Examples
//!
//! ```rust
//! use fixlist::persistent::FixedList;
//!
//! let list: FixedList<i32, 4> = FixedList::from_array([1, 2, 3]);
//! assert_eq!(list.as_array(), &[1, 2, 3, 0]);
//!
//! let updated = list.set(3, 4).unwrap();
//! assert_eq!(list.get(3), Ok(&0));     // Original unchanged
//! assert_eq!(updated.get(3), Ok(&4));  // New version
//!
//! // Length never changes: insert drops the overflow, erase pads.
//! let shifted = updated.insert(0, 0).unwrap();
//! assert_eq!(shifted.as_array(), &[0, 1, 2, 3]);
//! let closed = shifted.erase_range(0, 2).unwrap();
//! assert_eq!(closed.as_array(), &[2, 3, 0, 0]);
//! ```

mod cursor;
mod error;
mod fixed_list;

pub use cursor::ListCursor;
pub use error::FixedListError;
pub use fixed_list::FixedList;
