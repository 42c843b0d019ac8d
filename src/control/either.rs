//! Either type - the outcome of a prism match.
//!
//! `Either<T, A>` is `Left(T)` when a prism misses (carrying the whole that
//! should be returned unchanged) and `Right(A)` when it hits (carrying the
//! focused value).
//!
//! # Examples
//!
//! ```rust
//! use kaleido::control::Either;
//!
//! let hit: Either<String, i32> = Either::Right(42);
//! let miss: Either<String, i32> = Either::Left("no number".to_string());
//!
//! assert_eq!(hit.right(), Some(42));
//! assert_eq!(miss.left().map(|whole| whole.len()), Some(9));
//! ```

use std::fmt;

/// A value that is one of two alternatives.
///
/// Prisms use `Left` for a miss and `Right` for a hit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The miss branch.
    Left(L),
    /// The hit branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts the `Either` into an `Option<L>`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("hit");
    /// assert_eq!(right.right(), Some("hit"));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}
