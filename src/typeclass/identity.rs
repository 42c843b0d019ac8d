//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the simplest possible wrapper around a value. The identity
//! interpreter of the optics engine wraps every rebuilt whole in it, so that
//! running an optic under that interpreter means "actually rebuild the value".

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kaleido::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_into_inner_unwraps() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn identity_preserves_integer_values(#[case] value: i32) {
        let wrapped = Identity::new(value);
        assert_eq!(wrapped.into_inner(), value);
    }
}
