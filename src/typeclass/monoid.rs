//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that for
//! all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! The constant interpreter uses a monoid to summarize the foci of an optic:
//! `pure` yields `empty()` and visiting several foci folds them with
//! `combine`.
//!
//! # Examples
//!
//! ```rust
//! use kaleido::typeclass::{First, Monoid, Semigroup};
//!
//! assert_eq!(First::<i32>::empty(), First(None));
//! assert_eq!(First::empty().combine(First(Some(3))), First(Some(3)));
//! ```

use super::semigroup::Semigroup;
use super::wrappers::{Any, First};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::typeclass::{Any, Monoid};
    ///
    /// assert_eq!(Any::combine_all(vec![Any(false), Any(true)]), Any(true));
    /// assert_eq!(Any::combine_all(Vec::new()), Any(false));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn vec_identity_laws() {
        let value = vec![1, 2, 3];
        assert_eq!(Vec::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Vec::empty()), value);
    }

    #[rstest]
    #[case(First(Some(7)))]
    #[case(First(None))]
    fn first_identity_laws(#[case] value: First<i32>) {
        assert_eq!(First::empty().combine(value), value);
        assert_eq!(value.combine(First::empty()), value);
    }

    #[rstest]
    #[case(Any(true))]
    #[case(Any(false))]
    fn any_identity_laws(#[case] value: Any) {
        assert_eq!(Any::empty().combine(value), value);
        assert_eq!(value.combine(Any::empty()), value);
    }

    #[rstest]
    fn combine_all_flattens_lists_in_order() {
        let parts = vec![vec!["a"], vec![], vec!["b", "c"]];
        assert_eq!(Vec::combine_all(parts), vec!["a", "b", "c"]);
    }

    #[rstest]
    fn combine_all_of_first_picks_leftmost_present() {
        let parts = vec![First(None), First(Some(2)), First(Some(3))];
        assert_eq!(First::combine_all(parts), First(Some(2)));
    }

    #[rstest]
    fn is_empty_value_detects_identity() {
        assert!(Any(false).is_empty_value());
        assert!(!Any(true).is_empty_value());
    }
}
