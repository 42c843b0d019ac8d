//! Getters: read-only access to one computed value.

use super::interpreter::Interpreter;
use super::{Optic, OpticError, OpticKind};

/// Builds a read-only optic from a projection.
///
/// Composing a getter with anything yields a getter. `over` and `set`
/// through a getter fail with [`OpticError::ReadOnlyMutation`].
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{getter, over, view, OpticError};
///
/// let length = getter(|text: &String| text.len());
/// assert_eq!(view(&length, "four".to_string()).unwrap(), 4);
/// assert_eq!(
///     over(&length, |n| n + 1, "four".to_string()).unwrap_err(),
///     OpticError::ReadOnlyMutation
/// );
/// ```
pub fn getter<S, A, G>(to: G) -> Optic<S, S, A, A>
where
    S: 'static,
    A: 'static,
    G: Fn(&S) -> A + 'static,
{
    Optic::from_rule(OpticKind::Getter, move |interpreter, transform, whole| {
        if let Interpreter::Identity = interpreter {
            return Err(OpticError::ReadOnlyMutation);
        }
        let applied = transform(to(&whole))?;
        interpreter.map(|_| Ok(whole), applied)
    })
}
