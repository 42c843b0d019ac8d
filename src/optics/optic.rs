//! The shared optic representation.
//!
//! Every iso, lens, prism, traversal and getter is an [`Optic`]: a kind tag,
//! a stored apply rule, and (for isos and prisms) the raw functions it was
//! built from. The apply rule receives an [`Interpreter`], a transform from a
//! focus `A` to an interpreted `B`, and the whole `S`, and returns an
//! interpreted `T`:
//!
//! ```text
//! apply : (Interpreter, A -> Applied<B>, S) -> Applied<T>
//! ```
//!
//! Because every kind shares this shape, one composition rule works for all
//! of them.

use std::fmt;
use std::rc::Rc;

use super::interpreter::{Applied, Interpreter};
use super::iso::Iso;
use super::prism::Prism;
use super::{OpticError, OpticKind};

/// The transform threaded down to the foci of an optic.
pub type Transform<'t, A, B> = dyn FnMut(A) -> Result<Applied<B>, OpticError> + 't;

type ApplyRule<S, T, A, B> =
    dyn Fn(&Interpreter<'_>, &mut Transform<'_, A, B>, S) -> Result<Applied<T>, OpticError>;

/// Raw functions kept alongside the apply rule so composition can retain
/// iso and prism capabilities.
pub(crate) enum Payload<S, T, A, B> {
    Plain,
    Iso(Iso<S, T, A, B>),
    Prism(Prism<S, T, A, B>),
}

impl<S, T, A, B> Clone for Payload<S, T, A, B> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain => Self::Plain,
            Self::Iso(iso) => Self::Iso(iso.clone()),
            Self::Prism(prism) => Self::Prism(prism.clone()),
        }
    }
}

/// A composable access path from a whole `S` to zero or more parts `A`.
///
/// `T` and `B` are the types of the whole and of the parts after an update;
/// see [`SimpleOptic`] for the common case where they do not change.
///
/// Cloning an optic is cheap: the apply rule is shared.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{each, lens, over, to_list, SimpleOptic};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Team { members: Vec<String> }
///
/// let members: SimpleOptic<Team, Vec<String>> = lens(
///     |team: &Team| team.members.clone(),
///     |team: Team, members| Team { members, ..team },
/// );
/// let every_member = members.compose(&each());
///
/// let team = Team { members: vec!["ann".into(), "bo".into()] };
/// assert_eq!(to_list(&every_member, team.clone()).unwrap(), vec!["ann", "bo"]);
///
/// let shouted = over(&every_member, |name| name.to_uppercase(), team).unwrap();
/// assert_eq!(shouted.members, vec!["ANN", "BO"]);
/// ```
pub struct Optic<S, T, A, B> {
    kind: OpticKind,
    rule: Rc<ApplyRule<S, T, A, B>>,
    payload: Payload<S, T, A, B>,
}

/// An optic whose update does not change any type.
pub type SimpleOptic<S, A> = Optic<S, S, A, A>;

impl<S, T, A, B> Optic<S, T, A, B> {
    /// Builds an optic from a hand-written apply rule.
    ///
    /// This is how leaf optics for new data shapes are written. The rule
    /// must call `transform` once per focus, in order, and reassemble the
    /// results with the interpreter's `pure`, `map` and `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::{over, to_list, Optic, OpticKind, SimpleOptic};
    ///
    /// // Both components of a pair.
    /// let both: SimpleOptic<(i32, i32), i32> =
    ///     Optic::from_rule(OpticKind::Traversal, |interpreter, transform, (left, right)| {
    ///         let parts = vec![transform(left)?, transform(right)?];
    ///         interpreter.combine(|values: Vec<i32>| Ok((values[0], values[1])), parts)
    ///     });
    ///
    /// assert_eq!(to_list(&both, (1, 2)).unwrap(), vec![1, 2]);
    /// assert_eq!(over(&both, |x| x * 10, (1, 2)).unwrap(), (10, 20));
    /// ```
    pub fn from_rule<R>(kind: OpticKind, rule: R) -> Self
    where
        R: Fn(&Interpreter<'_>, &mut Transform<'_, A, B>, S) -> Result<Applied<T>, OpticError>
            + 'static,
    {
        Self {
            kind,
            rule: Rc::new(rule),
            payload: Payload::Plain,
        }
    }

    pub(crate) fn with_payload(mut self, payload: Payload<S, T, A, B>) -> Self {
        self.payload = payload;
        self
    }

    /// The kind tag of this optic.
    pub const fn kind(&self) -> OpticKind {
        self.kind
    }

    /// Runs the apply rule.
    ///
    /// # Errors
    ///
    /// Whatever a leaf, the transform, or the interpreter reports; the first
    /// error aborts the run.
    pub fn apply(
        &self,
        interpreter: &Interpreter<'_>,
        transform: &mut Transform<'_, A, B>,
        whole: S,
    ) -> Result<Applied<T>, OpticError> {
        (self.rule)(interpreter, transform, whole)
    }

    /// The raw `(get, reverse_get)` pair, if this optic was built as an iso.
    pub const fn as_iso(&self) -> Option<&Iso<S, T, A, B>> {
        match &self.payload {
            Payload::Iso(iso) => Some(iso),
            _ => None,
        }
    }

    /// The raw `(matching, review)` pair, if this optic was built as a prism.
    pub const fn as_prism(&self) -> Option<&Prism<S, T, A, B>> {
        match &self.payload {
            Payload::Prism(prism) => Some(prism),
            _ => None,
        }
    }
}

impl<S, T, A, B> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Focuses through `self`, then through `child`.
    ///
    /// Same as [`compose2`](super::compose2).
    #[must_use]
    pub fn compose<X, Y>(&self, child: &Optic<A, B, X, Y>) -> Optic<S, T, X, Y>
    where
        X: 'static,
        Y: 'static,
    {
        super::compose2(self, child)
    }

    /// Reverses an iso.
    ///
    /// # Errors
    ///
    /// [`OpticError::CapabilityMisuse`] if this optic was not built as an iso.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::{iso, view, SimpleOptic};
    ///
    /// let celsius: SimpleOptic<f64, f64> =
    ///     iso(|f: f64| (f - 32.0) / 1.8, |c: f64| c * 1.8 + 32.0);
    /// let fahrenheit = celsius.invert().unwrap();
    /// assert_eq!(view(&fahrenheit, 100.0).unwrap(), 212.0);
    /// ```
    pub fn invert(&self) -> Result<Optic<B, A, T, S>, OpticError> {
        self.as_iso()
            .map(|iso| iso.invert().to_optic())
            .ok_or(OpticError::CapabilityMisuse {
                operation: "invert",
                kind: self.kind,
            })
    }
}

impl<S, T, A, B> Clone for Optic<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            rule: Rc::clone(&self.rule),
            payload: self.payload.clone(),
        }
    }
}

impl<S, T, A, B> fmt::Debug for Optic<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Optic")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SimpleOptic<i32, i32>: Clone, fmt::Debug);
static_assertions::assert_not_impl_any!(SimpleOptic<i32, i32>: Send, Sync);
