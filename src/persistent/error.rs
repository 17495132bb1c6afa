//! Contract violations reported by [`FixedList`](super::FixedList) and
//! [`ListCursor`](super::ListCursor).
//!
//! Every fallible operation in this crate returns
//! `Result<_, FixedListError>`. The error is `Copy` and carries no heap data,
//! so it can be produced and inspected inside `const fn`s; use
//! [`FixedListError::into_panic`] (or the [`unwrap_const!`](crate::unwrap_const)
//! macro) to turn a violation into a compile error during constant evaluation.

use std::fmt;

/// Represents an operation whose arguments violate the list's contract.
///
/// # Examples
///
/// ```rust
/// use fixlist::persistent::{FixedList, FixedListError};
///
/// let list = FixedList::from([0, 1]);
/// assert_eq!(
///     list.get(2),
///     Err(FixedListError::OutOfRange { position: 2, bound: 2 })
/// );
/// assert_eq!(
///     format!("{}", list.get(2).unwrap_err()),
///     "position 2 is out of range (bound 2)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedListError {
    /// An index or position lies outside the bound accepted by the operation.
    ///
    /// For element access the bound is exclusive (`position < bound`); for
    /// positions between elements (insertion points, range ends, cursor
    /// positions) it is inclusive (`position <= bound`).
    OutOfRange {
        /// The offending position.
        position: usize,
        /// The bound it was checked against.
        bound: usize,
    },
    /// A half-open range whose start lies after its end.
    InvalidRange {
        /// Start of the range.
        first: usize,
        /// End of the range.
        last: usize,
    },
}

impl FixedListError {
    /// Aborts constant evaluation (or panics at runtime) with a message
    /// describing the violation.
    ///
    /// Formatting arguments are not available in `const` panics, so the
    /// message names the kind of violation only.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub const fn into_panic(self) -> ! {
        match self {
            Self::OutOfRange { .. } => panic!("fixed list position out of range"),
            Self::InvalidRange { .. } => panic!("fixed list range start is after its end"),
        }
    }

    /// Returns `true` if this is an [`OutOfRange`](Self::OutOfRange) violation.
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` if this is an [`InvalidRange`](Self::InvalidRange) violation.
    #[inline]
    pub const fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

impl fmt::Display for FixedListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, bound } => {
                write!(formatter, "position {position} is out of range (bound {bound})")
            }
            Self::InvalidRange { first, last } => {
                write!(formatter, "range start {first} is after its end {last}")
            }
        }
    }
}

impl std::error::Error for FixedListError {}

/// Unwraps a `Result<_, FixedListError>` inside a constant context.
///
/// `Result::unwrap` is not callable during constant evaluation; this macro
/// matches on the result instead and routes a violation through
/// [`FixedListError::into_panic`], so a contract violation in a `const` item
/// becomes a compile error.
///
/// # Examples
///
/// ```rust
/// use fixlist::persistent::FixedList;
/// use fixlist::unwrap_const;
///
/// const LIST: FixedList<i32, 3> = unwrap_const!(FixedList::filled(0).set(1, 7));
/// assert_eq!(LIST.as_array(), &[0, 7, 0]);
/// ```
#[macro_export]
macro_rules! unwrap_const {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => $crate::persistent::FixedListError::into_panic(error),
        }
    };
}
