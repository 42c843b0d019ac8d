//! Lenses: exactly one always-present part.
//!
//! A lens is built from a getter and a setter:
//!
//! ```text
//! get : &S -> A
//! set : (S, B) -> T
//! ```
//!
//! # Laws
//!
//! 1. **`GetPut`**: `set(s, get(&s)) == s`
//! 2. **`PutGet`**: `get(&set(s, a)) == a`
//! 3. **`PutPut`**: `set(set(s, a1), a2) == set(s, a2)`
//!
//! A getter that is not total on its domain must report
//! [`OpticError::NotFound`] instead of inventing a value; see [`try_lens`].
//!
//! # Examples
//!
//! ```rust
//! use kaleido::lens;
//! use kaleido::optics::{over, set, view};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let x = lens!(Point, x);
//! let point = Point { x: 1, y: 2 };
//!
//! assert_eq!(view(&x, point.clone()).unwrap(), 1);
//! assert_eq!(set(&x, 5, point.clone()).unwrap(), Point { x: 5, y: 2 });
//! assert_eq!(over(&x, |v| v * 10, point).unwrap(), Point { x: 10, y: 2 });
//! ```

use super::{Optic, OpticError, OpticKind, SimpleOptic};

/// Builds a lens optic from a getter and a setter.
///
/// The setter receives the original whole and the new part.
pub fn lens<S, T, A, B, G, P>(get: G, set: P) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    G: Fn(&S) -> A + 'static,
    P: Fn(S, B) -> T + 'static,
{
    try_lens(move |whole: &S| Ok(get(whole)), move |whole, value| Ok(set(whole, value)))
}

/// Builds a lens optic whose getter or setter may fail.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{try_lens, view, OpticError, SimpleOptic};
///
/// let head: SimpleOptic<Vec<i32>, i32> = try_lens(
///     |items: &Vec<i32>| items.first().copied().ok_or_else(|| OpticError::not_found("head")),
///     |mut items: Vec<i32>, value| {
///         items[0] = value;
///         Ok(items)
///     },
/// );
///
/// assert_eq!(view(&head, vec![4, 5]).unwrap(), 4);
/// assert!(view(&head, vec![]).is_err());
/// ```
pub fn try_lens<S, T, A, B, G, P>(get: G, set: P) -> Optic<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    G: Fn(&S) -> Result<A, OpticError> + 'static,
    P: Fn(S, B) -> Result<T, OpticError> + 'static,
{
    Optic::from_rule(OpticKind::Lens, move |interpreter, transform, whole| {
        let applied = transform(get(&whole)?)?;
        interpreter.map(|value| set(whole, value), applied)
    })
}

/// Focuses the element at `position` of a `Vec`.
///
/// Reading or writing past the end reports [`OpticError::NotFound`].
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{index, set, view};
///
/// assert_eq!(view(&index(1), vec!['a', 'b']).unwrap(), 'b');
/// assert_eq!(set(&index(0), 'z', vec!['a', 'b']).unwrap(), vec!['z', 'b']);
/// assert!(view(&index::<char>(2), vec!['a', 'b']).is_err());
/// ```
pub fn index<A: Clone + 'static>(position: usize) -> SimpleOptic<Vec<A>, A> {
    try_lens(
        move |items: &Vec<A>| items.get(position).cloned().ok_or_else(|| missing(position)),
        move |mut items: Vec<A>, value| match items.get_mut(position) {
            Some(slot) => {
                *slot = value;
                Ok(items)
            }
            None => Err(missing(position)),
        },
    )
}

fn missing(position: usize) -> OpticError {
    OpticError::not_found(format!("index {position}"))
}

/// Creates a lens for a struct field.
///
/// The field type must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(GenericType<T>, field_name)
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::lens(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
