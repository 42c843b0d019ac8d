//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is a type `T` together with an associative function
//! `combine: (T, T) -> T`. The constant interpreter of the optics engine
//! folds the summaries produced at every focus with this operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kaleido::typeclass::Semigroup;
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

use super::wrappers::{Any, First};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that starts
    /// from the identity element, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::typeclass::Semigroup;
    ///
    /// let parts = vec![vec![1], vec![2, 3]];
    /// assert_eq!(Vec::reduce_all(parts), Some(vec![1, 2, 3]));
    ///
    /// let empty: Vec<Vec<i32>> = vec![];
    /// assert_eq!(Vec::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Option forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Summary Wrapper Implementations
// =============================================================================

/// The leftmost present value wins.
impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

/// Logical disjunction.
impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}
