//! # fixlist
//!
//! A fixed-capacity, persistent list whose operations can run at compile
//! time, plus a merge sort built on top of it.
//!
//! ## Overview
//!
//! - **Persistent list**: [`FixedList<T, N>`](persistent::FixedList) holds
//!   exactly `N` elements; `set`, `insert` and `erase` return new lists and
//!   never change the length
//! - **Cursors**: [`ListCursor`](persistent::ListCursor) walks a private
//!   snapshot of a list
//! - **Merge sort**: stable `merge`/`sort` over `FixedList`, with `const`
//!   variants for primitive element types
//!
//! Contract violations (out-of-range positions, reversed ranges) are reported
//! as [`FixedListError`](persistent::FixedListError) through `Result`, at
//! runtime and during constant evaluation alike.
//!
//! ## Feature Flags
//!
//! - `algorithm` (default): merge and sort
//! - `serde`: `Serialize`/`Deserialize` for `FixedList`
//! - `tracing`: trace-level events from the runtime merge and sort
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fixlist::prelude::*;
//!
//! const BASE: FixedList<i32, 4> = FixedList::from_array_padded([1, 2, 3], 0);
//! const SHIFTED: FixedList<i32, 4> = unwrap_const!(BASE.insert(0, 0));
//!
//! assert_eq!(SHIFTED.as_array(), &[0, 1, 2, 3]);
//! assert_eq!(SHIFTED.get(0), Ok(&0));
//! assert!(SHIFTED.get(4).is_err());
//! ```
//!
//! With the `algorithm` feature, the same list sorts at compile time:
//!
//! ```rust
//! # #[cfg(feature = "algorithm")]
//! # {
//! use fixlist::prelude::*;
//!
//! const SCRAMBLED: FixedList<i32, 10> = FixedList::from_items([1, 5, 6, 3, 4, 2, 8, 0, 9, 7]);
//! const SORTED: FixedList<i32, 10> = SCRAMBLED.sorted();
//!
//! assert_eq!(SORTED, sort(&SCRAMBLED));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fixlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;

    #[cfg(feature = "algorithm")]
    pub use crate::algorithm::*;

    pub use crate::unwrap_const;
}

pub mod persistent;

#[cfg(feature = "algorithm")]
pub mod algorithm;
