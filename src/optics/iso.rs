//! Isos: lossless, invertible shape changes.
//!
//! An iso is built from a pair of mutually inverse functions:
//!
//! ```text
//! get         : S -> A
//! reverse_get : B -> T
//! ```
//!
//! # Laws
//!
//! 1. **`GetReverseGet`**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet`**: `iso.get(iso.reverse_get(value)) == value`
//!
//! The laws are the caller's obligation and are not checked at run time.
//!
//! # Examples
//!
//! ```rust
//! use kaleido::optics::{iso, over, view, SimpleOptic};
//!
//! let chars: SimpleOptic<String, Vec<char>> = iso(
//!     |text: String| text.chars().collect(),
//!     |chars: Vec<char>| chars.into_iter().collect(),
//! );
//!
//! assert_eq!(view(&chars, "hi".to_string()).unwrap(), vec!['h', 'i']);
//!
//! let reversed = over(&chars, |mut chars| { chars.reverse(); chars }, "abc".to_string());
//! assert_eq!(reversed.unwrap(), "cba");
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use super::optic::Payload;
use super::{Optic, OpticError, OpticKind, SimpleOptic};

/// The raw `(get, reverse_get)` pair of an iso.
///
/// Obtained from [`Optic::as_iso`] or [`with_iso`], or built directly and
/// turned into an optic with [`Iso::to_optic`].
pub struct Iso<S, T, A, B> {
    get: Rc<dyn Fn(S) -> Result<A, OpticError>>,
    reverse_get: Rc<dyn Fn(B) -> Result<T, OpticError>>,
}

impl<S, T, A, B> Iso<S, T, A, B> {
    /// Creates an iso from two infallible functions.
    pub fn new<G, R>(get: G, reverse_get: R) -> Self
    where
        G: Fn(S) -> A + 'static,
        R: Fn(B) -> T + 'static,
    {
        Self::try_new(move |source| Ok(get(source)), move |value| Ok(reverse_get(value)))
    }

    /// Creates an iso whose directions may fail, e.g. a decoder.
    pub fn try_new<G, R>(get: G, reverse_get: R) -> Self
    where
        G: Fn(S) -> Result<A, OpticError> + 'static,
        R: Fn(B) -> Result<T, OpticError> + 'static,
    {
        Self {
            get: Rc::new(get),
            reverse_get: Rc::new(reverse_get),
        }
    }

    /// Converts forward.
    ///
    /// # Errors
    ///
    /// Whatever the `get` function reports.
    pub fn get(&self, source: S) -> Result<A, OpticError> {
        (self.get)(source)
    }

    /// Converts backward.
    ///
    /// # Errors
    ///
    /// Whatever the `reverse_get` function reports.
    pub fn reverse_get(&self, value: B) -> Result<T, OpticError> {
        (self.reverse_get)(value)
    }

    /// Swaps the two directions.
    #[must_use]
    pub fn invert(&self) -> Iso<B, A, T, S> {
        Iso {
            get: Rc::clone(&self.reverse_get),
            reverse_get: Rc::clone(&self.get),
        }
    }
}

impl<S, T, A, B> Iso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Composes two isos directly, keeping the result invertible.
    ///
    /// ```text
    /// get         = other.get ∘ self.get
    /// reverse_get = self.reverse_get ∘ other.reverse_get
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::Iso;
    ///
    /// let widen: Iso<i32, i32, i64, i64> = Iso::new(i64::from, |x: i64| x as i32);
    /// let text: Iso<i64, i64, String, String> =
    ///     Iso::new(|x: i64| x.to_string(), |s: String| s.parse().unwrap_or_default());
    ///
    /// let composed = widen.compose(&text);
    /// assert_eq!(composed.get(42).unwrap(), "42");
    /// assert_eq!(composed.reverse_get("7".to_string()).unwrap(), 7);
    /// ```
    #[must_use]
    pub fn compose<X, Y>(&self, other: &Iso<A, B, X, Y>) -> Iso<S, T, X, Y>
    where
        X: 'static,
        Y: 'static,
    {
        let (outer_get, inner_get) = (Rc::clone(&self.get), Rc::clone(&other.get));
        let (outer_reverse, inner_reverse) =
            (Rc::clone(&self.reverse_get), Rc::clone(&other.reverse_get));
        Iso::try_new(
            move |source| inner_get(outer_get(source)?),
            move |value| outer_reverse(inner_reverse(value)?),
        )
    }

    /// Wraps the pair into an optic of kind [`OpticKind::Iso`].
    #[must_use]
    pub fn to_optic(&self) -> Optic<S, T, A, B> {
        let (get, reverse_get) = (Rc::clone(&self.get), Rc::clone(&self.reverse_get));
        Optic::from_rule(OpticKind::Iso, move |interpreter, transform, whole| {
            let applied = transform(get(whole)?)?;
            interpreter.map(|value| reverse_get(value), applied)
        })
        .with_payload(Payload::Iso(self.clone()))
    }
}

impl<S, T, A, B> Clone for Iso<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            reverse_get: Rc::clone(&self.reverse_get),
        }
    }
}

impl<S, T, A, B> std::fmt::Debug for Iso<S, T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Iso").finish_non_exhaustive()
    }
}

impl<S, T, A, B> From<Iso<S, T, A, B>> for Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    fn from(iso: Iso<S, T, A, B>) -> Self {
        iso.to_optic()
    }
}

/// Builds an iso optic from `get` and its inverse `reverse_get`.
pub fn iso<S, T, A, B, G, R>(get: G, reverse_get: R) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    G: Fn(S) -> A + 'static,
    R: Fn(B) -> T + 'static,
{
    Iso::new(get, reverse_get).to_optic()
}

/// Builds an iso optic whose directions may fail.
pub fn try_iso<S, T, A, B, G, R>(get: G, reverse_get: R) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    G: Fn(S) -> Result<A, OpticError> + 'static,
    R: Fn(B) -> Result<T, OpticError> + 'static,
{
    Iso::try_new(get, reverse_get).to_optic()
}

/// The iso that changes nothing. Root of every path.
pub fn identity<S: 'static>() -> SimpleOptic<S, S> {
    iso(|whole| whole, |whole| whole)
}

/// Runs `function` against the raw iso behind `optic`.
///
/// # Errors
///
/// [`OpticError::CapabilityMisuse`] if `optic` was not built as an iso.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{iso, with_iso, SimpleOptic};
///
/// let negate: SimpleOptic<i32, i32> = iso(|x: i32| -x, |x: i32| -x);
/// let round_trip = with_iso(&negate, |raw| raw.reverse_get(raw.get(5)?)).unwrap();
/// assert_eq!(round_trip.unwrap(), 5);
/// ```
pub fn with_iso<S, T, A, B, R, F>(optic: &Optic<S, T, A, B>, function: F) -> Result<R, OpticError>
where
    F: FnOnce(&Iso<S, T, A, B>) -> R,
{
    optic
        .as_iso()
        .map(function)
        .ok_or(OpticError::CapabilityMisuse {
            operation: "with_iso",
            kind: optic.kind(),
        })
}

/// Treats an absent value as `default`.
///
/// Writing `default` back stores `None`.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{non, over, view};
///
/// let count = non(0);
/// assert_eq!(view(&count, None).unwrap(), 0);
/// assert_eq!(over(&count, |n| n + 1, None).unwrap(), Some(1));
/// assert_eq!(over(&count, |n| n - 1, Some(1)).unwrap(), None);
/// ```
pub fn non<A>(default: A) -> SimpleOptic<Option<A>, A>
where
    A: PartialEq + Clone + 'static,
{
    let sentinel = default.clone();
    anon(default, move |value: &A| *value == sentinel)
}

/// Treats an absent value as `default`; values matching `is_empty` are
/// stored as `None`.
pub fn anon<A, P>(default: A, is_empty: P) -> SimpleOptic<Option<A>, A>
where
    A: Clone + 'static,
    P: Fn(&A) -> bool + 'static,
{
    iso(
        move |maybe: Option<A>| maybe.unwrap_or_else(|| default.clone()),
        move |value: A| if is_empty(&value) { None } else { Some(value) },
    )
}

/// Views an ordered map as its list of entries.
///
/// Rebuilding from entries with duplicate keys keeps the last one.
pub fn map_entries<K, V>() -> SimpleOptic<BTreeMap<K, V>, Vec<(K, V)>>
where
    K: Ord + 'static,
    V: 'static,
{
    iso(
        |map: BTreeMap<K, V>| map.into_iter().collect(),
        |entries: Vec<(K, V)>| entries.into_iter().collect(),
    )
}
