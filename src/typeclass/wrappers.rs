//! Newtype wrappers that select a summary monoid.
//!
//! The same underlying value can be summarized in different ways. These
//! wrappers pick the `Semigroup` and `Monoid` instance used by the constant
//! interpreter:
//!
//! - [`First`]: the leftmost present value (identity: `First(None)`)
//! - [`Any`]: logical or (identity: `Any(false)`)
//!
//! List summaries need no wrapper; `Vec<A>` is already a monoid under
//! concatenation.

/// A newtype wrapper selecting the "first present value wins" monoid.
///
/// # Examples
///
/// ```rust
/// use kaleido::typeclass::{First, Semigroup};
///
/// let first = First(None).combine(First(Some(2))).combine(First(Some(3)));
/// assert_eq!(first.into_inner(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Creates a `First` holding a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the `First` and returns the inner option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> From<Option<A>> for First<A> {
    fn from(value: Option<A>) -> Self {
        Self(value)
    }
}

/// A newtype wrapper selecting the disjunction monoid over `bool`.
///
/// # Examples
///
/// ```rust
/// use kaleido::typeclass::{Any, Monoid};
///
/// assert!(Any::combine_all(vec![Any(false), Any(true)]).into_inner());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

impl Any {
    /// Consumes the `Any` and returns the inner flag.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
