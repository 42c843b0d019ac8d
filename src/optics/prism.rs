//! Prisms: parts that may be absent, and can rebuild the whole alone.
//!
//! A prism is built from a match function and a build function:
//!
//! ```text
//! matching : S -> Either<T, A>     Left(t): miss, Right(a): hit
//! review   : B -> T
//! ```
//!
//! On a miss the whole is handed back untouched and the caller's transform
//! is never invoked.
//!
//! # Laws
//!
//! 1. **`PreviewReview`**: `prism.matching(prism.review(value)) == Right(value)`
//! 2. **`ReviewPreview`**: if `prism.matching(source) == Right(value)`, then
//!    `prism.review(value) == source`
//!
//! # Examples
//!
//! ```rust
//! use kaleido::optics::{over, preview, some};
//!
//! assert_eq!(preview(&some(), Some(3)).unwrap(), Some(3));
//! assert_eq!(preview(&some::<i32>(), None).unwrap(), None);
//! assert_eq!(over(&some(), |x: i32| x + 1, None).unwrap(), None);
//! ```

use std::rc::Rc;

use super::optic::Payload;
use super::{Optic, OpticError, OpticKind, SimpleOptic};
use crate::control::Either;

type Matcher<S, T, A> = dyn Fn(S) -> Result<Either<T, A>, OpticError>;

/// The raw `(matching, review)` pair of a prism.
///
/// Obtained from [`Optic::as_prism`] or [`with_prism`], or built directly
/// and turned into an optic with [`Prism::to_optic`].
pub struct Prism<S, T, A, B> {
    matcher: Rc<Matcher<S, T, A>>,
    build: Rc<dyn Fn(B) -> Result<T, OpticError>>,
}

impl<S, T, A, B> Prism<S, T, A, B> {
    /// Creates a prism from two infallible functions.
    pub fn new<M, R>(matching: M, review: R) -> Self
    where
        M: Fn(S) -> Either<T, A> + 'static,
        R: Fn(B) -> T + 'static,
    {
        Self::try_new(move |source| Ok(matching(source)), move |value| Ok(review(value)))
    }

    /// Creates a prism whose functions may fail.
    ///
    /// A failure is an error, not a miss; use `Left` for a miss.
    pub fn try_new<M, R>(matching: M, review: R) -> Self
    where
        M: Fn(S) -> Result<Either<T, A>, OpticError> + 'static,
        R: Fn(B) -> Result<T, OpticError> + 'static,
    {
        Self {
            matcher: Rc::new(matching),
            build: Rc::new(review),
        }
    }

    /// Tries to extract the focus.
    ///
    /// # Errors
    ///
    /// Whatever the match function reports.
    pub fn matching(&self, source: S) -> Result<Either<T, A>, OpticError> {
        (self.matcher)(source)
    }

    /// Extracts the focus, dropping the whole on a miss.
    ///
    /// # Errors
    ///
    /// Whatever the match function reports.
    pub fn preview(&self, source: S) -> Result<Option<A>, OpticError> {
        self.matching(source).map(Either::right)
    }

    /// Builds a whole from a focus alone.
    ///
    /// # Errors
    ///
    /// Whatever the build function reports.
    pub fn review(&self, value: B) -> Result<T, OpticError> {
        (self.build)(value)
    }
}

impl<S, T, A, B> Prism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Composes two prisms directly, keeping the match and build functions.
    ///
    /// The first miss short-circuits. A miss in `other` is rebuilt into a
    /// whole through `self.review`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::control::Either;
    /// use kaleido::optics::Prism;
    ///
    /// let outer: Prism<Option<Option<i32>>, Option<Option<i32>>, Option<i32>, Option<i32>> =
    ///     Prism::new(
    ///         |value: Option<Option<i32>>| value.map_or(Either::Left(None), Either::Right),
    ///         Some,
    ///     );
    /// let inner: Prism<Option<i32>, Option<i32>, i32, i32> =
    ///     Prism::new(|value: Option<i32>| value.map_or(Either::Left(None), Either::Right), Some);
    ///
    /// let both = outer.compose(&inner);
    /// assert_eq!(both.matching(Some(Some(4))).unwrap(), Either::Right(4));
    /// assert_eq!(both.matching(Some(None)).unwrap(), Either::Left(Some(None)));
    /// assert_eq!(both.review(7).unwrap(), Some(Some(7)));
    /// ```
    #[must_use]
    pub fn compose<X, Y>(&self, other: &Prism<A, B, X, Y>) -> Prism<S, T, X, Y>
    where
        X: 'static,
        Y: 'static,
    {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_build, inner_build) = (Rc::clone(&self.build), Rc::clone(&other.build));
        Prism::try_new(
            move |source| match outer.matching(source)? {
                Either::Left(whole) => Ok(Either::Left(whole)),
                Either::Right(part) => match inner.matching(part)? {
                    Either::Right(focus) => Ok(Either::Right(focus)),
                    Either::Left(rebuilt) => outer.review(rebuilt).map(Either::Left),
                },
            },
            move |value| outer_build(inner_build(value)?),
        )
    }

    /// Wraps the pair into an optic of kind [`OpticKind::Prism`].
    #[must_use]
    pub fn to_optic(&self) -> Optic<S, T, A, B> {
        let (matcher, build) = (Rc::clone(&self.matcher), Rc::clone(&self.build));
        Optic::from_rule(OpticKind::Prism, move |interpreter, transform, whole| {
            match matcher(whole)? {
                Either::Left(untouched) => interpreter.pure(untouched),
                Either::Right(focus) => {
                    let applied = transform(focus)?;
                    interpreter.map(|value| build(value), applied)
                }
            }
        })
        .with_payload(Payload::Prism(self.clone()))
    }
}

impl<S, T, A, B> Clone for Prism<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            matcher: Rc::clone(&self.matcher),
            build: Rc::clone(&self.build),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for Prism<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Prism").finish_non_exhaustive()
    }
}

impl<S, T, A, B> From<Prism<S, T, A, B>> for Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    fn from(prism: Prism<S, T, A, B>) -> Self {
        prism.to_optic()
    }
}

/// Builds a prism optic from a match function and a build function.
///
/// # Examples
///
/// ```rust
/// use kaleido::control::Either;
/// use kaleido::optics::{has, prism, set, SimpleOptic};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Shape { Circle(f64), Square(f64) }
///
/// let radius: SimpleOptic<Shape, f64> = prism(
///     |shape: Shape| match shape {
///         Shape::Circle(r) => Either::Right(r),
///         other => Either::Left(other),
///     },
///     Shape::Circle,
/// );
///
/// assert!(has(&radius, Shape::Circle(1.0)).unwrap());
/// assert!(!has(&radius, Shape::Square(1.0)).unwrap());
/// assert_eq!(set(&radius, 2.0, Shape::Square(1.0)).unwrap(), Shape::Square(1.0));
/// ```
pub fn prism<S, T, A, B, M, R>(matching: M, review: R) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    M: Fn(S) -> Either<T, A> + 'static,
    R: Fn(B) -> T + 'static,
{
    Prism::new(matching, review).to_optic()
}

/// Builds a prism optic whose functions may fail.
pub fn try_prism<S, T, A, B, M, R>(matching: M, review: R) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    M: Fn(S) -> Result<Either<T, A>, OpticError> + 'static,
    R: Fn(B) -> Result<T, OpticError> + 'static,
{
    Prism::try_new(matching, review).to_optic()
}

/// Builds a monomorphic prism from an optional extractor.
///
/// A `None` from `preview` is a miss that hands the whole back.
pub fn simple_prism<S, A, P, R>(preview: P, review: R) -> SimpleOptic<S, A>
where
    S: 'static,
    A: 'static,
    P: Fn(&S) -> Option<A> + 'static,
    R: Fn(A) -> S + 'static,
{
    prism(
        move |whole: S| preview(&whole).map_or(Either::Left(whole), Either::Right),
        review,
    )
}

/// Runs `function` against the raw prism behind `optic`.
///
/// # Errors
///
/// [`OpticError::CapabilityMisuse`] if `optic` was not built as a prism.
pub fn with_prism<S, T, A, B, R, F>(
    optic: &Optic<S, T, A, B>,
    function: F,
) -> Result<R, OpticError>
where
    F: FnOnce(&Prism<S, T, A, B>) -> R,
{
    optic
        .as_prism()
        .map(function)
        .ok_or(OpticError::CapabilityMisuse {
            operation: "with_prism",
            kind: optic.kind(),
        })
}

/// Focuses the value inside `Some`.
pub fn some<A: 'static>() -> SimpleOptic<Option<A>, A> {
    prism(
        |maybe: Option<A>| maybe.map_or(Either::Left(None), Either::Right),
        Some,
    )
}

/// Focuses the value inside `Ok`.
pub fn ok<A: 'static, E: 'static>() -> SimpleOptic<Result<A, E>, A> {
    prism(
        |result: Result<A, E>| match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(Err(error)),
        },
        Ok,
    )
}

/// Focuses the error inside `Err`.
pub fn err<A: 'static, E: 'static>() -> SimpleOptic<Result<A, E>, E> {
    prism(
        |result: Result<A, E>| match result {
            Ok(value) => Either::Left(Ok(value)),
            Err(error) => Either::Right(error),
        },
        Err,
    )
}

/// Focuses the value inside [`Either::Left`].
pub fn left<L: 'static, R: 'static>() -> SimpleOptic<Either<L, R>, L> {
    prism(
        |either: Either<L, R>| match either {
            Either::Left(value) => Either::Right(value),
            Either::Right(other) => Either::Left(Either::Right(other)),
        },
        Either::Left,
    )
}

/// Focuses the value inside [`Either::Right`].
pub fn right<L: 'static, R: 'static>() -> SimpleOptic<Either<L, R>, R> {
    prism(
        |either: Either<L, R>| match either {
            Either::Left(other) => Either::Left(Either::Left(other)),
            Either::Right(value) => Either::Right(value),
        },
        Either::Right,
    )
}
