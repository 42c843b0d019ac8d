//! Optic composition.
//!
//! [`compose2`] focuses through a parent optic and then a child optic. Any
//! two optics compose through the generic rule
//!
//! ```text
//! composed(interpreter, transform, s) =
//!     parent(interpreter, a => child(interpreter, transform, a), s)
//! ```
//!
//! Two fast paths keep the raw functions that the generic rule would hide:
//!
//! - Iso ∘ Iso composes `get` and `reverse_get` directly, so the result can
//!   still be inverted.
//! - Prism ∘ Prism (an iso counts as a prism that always hits) composes the
//!   match and build functions, so the result still exposes them.
//!
//! The kind of the result is the [meet](OpticKind::meet) of the two inputs.

use super::{Optic, OpticKind, Prism};
use crate::control::Either;

/// Focuses through `parent`, then through `child`.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{compose2, each, index, over, to_list, OpticKind};
///
/// let grid = vec![vec![1, 2], vec![3, 4]];
/// let second_row = compose2(&index(1), &each());
///
/// assert_eq!(second_row.kind(), OpticKind::Traversal);
/// assert_eq!(to_list(&second_row, grid.clone()).unwrap(), vec![3, 4]);
/// assert_eq!(
///     over(&second_row, |x| -x, grid).unwrap(),
///     vec![vec![1, 2], vec![-3, -4]]
/// );
/// ```
pub fn compose2<S, T, A, B, X, Y>(
    parent: &Optic<S, T, A, B>,
    child: &Optic<A, B, X, Y>,
) -> Optic<S, T, X, Y>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    X: 'static,
    Y: 'static,
{
    let kind = parent.kind().meet(child.kind());

    if let (Some(outer), Some(inner)) = (parent.as_iso(), child.as_iso()) {
        trace_dispatch(parent, child, kind, "iso");
        return outer.compose(inner).to_optic();
    }

    if let (Some(outer), Some(inner)) = (prism_view(parent), prism_view(child))
        && (parent.as_prism().is_some() || child.as_prism().is_some())
    {
        trace_dispatch(parent, child, kind, "prism");
        return outer.compose(&inner).to_optic();
    }

    trace_dispatch(parent, child, kind, "generic");
    let (outer, inner) = (parent.clone(), child.clone());
    Optic::from_rule(kind, move |interpreter, transform, whole| {
        outer.apply(
            interpreter,
            &mut |part: A| inner.apply(interpreter, &mut *transform, part),
            whole,
        )
    })
}

/// The raw prism behind an optic; an iso is read as a prism that never misses.
fn prism_view<S, T, A, B>(optic: &Optic<S, T, A, B>) -> Option<Prism<S, T, A, B>>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    if let Some(prism) = optic.as_prism() {
        return Some(prism.clone());
    }
    optic.as_iso().map(|iso| {
        let (forward, backward) = (iso.clone(), iso.clone());
        Prism::try_new(
            move |whole| forward.get(whole).map(Either::Right),
            move |value| backward.reverse_get(value),
        )
    })
}

fn trace_dispatch<S, T, A, B, X, Y>(
    parent: &Optic<S, T, A, B>,
    child: &Optic<A, B, X, Y>,
    kind: OpticKind,
    path: &'static str,
) {
    tracing::trace!(
        parent = %parent.kind(),
        child = %child.kind(),
        result = %kind,
        path,
        "composed optics"
    );
}

/// Composes two or more optics, left to right.
///
/// `compose!(a, b, c)` is `compose2(&compose2(&a, &b), &c)`. Composing fewer
/// than two optics does not compile.
///
/// # Examples
///
/// ```rust
/// use kaleido::compose;
/// use kaleido::optics::{each, index, some, to_list};
///
/// let maybe_rows = vec![Some(vec![1, 2]), None];
/// let first_row = compose!(index(0), some(), each());
/// assert_eq!(to_list(&first_row, maybe_rows).unwrap(), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr, $second:expr $(,)?) => {
        $crate::optics::compose2(&$first, &$second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose!($crate::optics::compose2(&$first, &$second), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{
        OpticError, SimpleOptic, each, getter, iso, lens, over, preview, prism, set, some,
        to_list, view,
    };
    use rstest::rstest;

    fn celsius() -> SimpleOptic<f64, f64> {
        iso(|f: f64| (f - 32.0) * 5.0 / 9.0, |c: f64| c * 9.0 / 5.0 + 32.0)
    }

    fn doubled() -> SimpleOptic<f64, f64> {
        iso(|x: f64| x * 2.0, |x: f64| x / 2.0)
    }

    fn positive() -> SimpleOptic<i32, i32> {
        prism(
            |x: i32| if x > 0 { Either::Right(x) } else { Either::Left(x) },
            |x| x,
        )
    }

    #[rstest]
    fn iso_iso_stays_invertible() {
        let composed = compose2(&celsius(), &doubled());
        assert_eq!(composed.kind(), OpticKind::Iso);
        let inverted = composed.invert().expect("iso");
        assert_eq!(view(&inverted, 200.0), Ok(212.0));
    }

    #[rstest]
    fn prism_prism_keeps_match_and_build() {
        let composed = compose2(&some(), &positive());
        assert_eq!(composed.kind(), OpticKind::Prism);
        let raw = composed.as_prism().expect("prism");
        assert_eq!(raw.matching(Some(3)), Ok(Either::Right(3)));
        assert_eq!(raw.matching(Some(-3)), Ok(Either::Left(Some(-3))));
        assert_eq!(raw.matching(None), Ok(Either::Left(None)));
        assert_eq!(raw.review(5), Ok(Some(5)));
    }

    #[rstest]
    fn iso_prism_keeps_prism_payload() {
        let negated: SimpleOptic<i32, i32> = iso(|x: i32| -x, |x: i32| -x);
        let composed = compose2(&negated, &positive());
        assert_eq!(composed.kind(), OpticKind::Prism);
        let raw = composed.as_prism().expect("prism");
        assert_eq!(raw.matching(-4), Ok(Either::Right(4)));
        assert_eq!(raw.matching(4), Ok(Either::Left(4)));
        assert_eq!(raw.review(4), Ok(-4));
    }

    #[rstest]
    fn lens_prism_is_traversal() {
        let first: SimpleOptic<(Option<i32>, u8), Option<i32>> = lens(
            |pair: &(Option<i32>, u8)| pair.0,
            |pair: (Option<i32>, u8), value| (value, pair.1),
        );
        let composed = compose2(&first, &some());
        assert_eq!(composed.kind(), OpticKind::Traversal);
        assert!(composed.as_prism().is_none());
        assert_eq!(preview(&composed, (Some(1), 0)), Ok(Some(1)));
        assert_eq!(set(&composed, 9, (None, 0)), Ok((None, 0)));
    }

    #[rstest]
    fn getter_absorbs_kind() {
        let composed = compose2(&each::<i32>(), &getter(|x: &i32| x * 3));
        assert_eq!(composed.kind(), OpticKind::Getter);
        assert_eq!(to_list(&composed, vec![1, 2]), Ok(vec![3, 6]));
        assert_eq!(
            over(&composed, |x| x, vec![1]),
            Err(OpticError::ReadOnlyMutation)
        );
    }

    #[rstest]
    fn macro_left_folds() {
        let nested = vec![vec![Some(1), None], vec![Some(3)]];
        let all = compose!(each(), each(), some());
        assert_eq!(to_list(&all, nested.clone()), Ok(vec![1, 3]));
        assert_eq!(
            over(&all, |x: i32| x * 2, nested),
            Ok(vec![vec![Some(2), None], vec![Some(6)]])
        );
    }

    #[rstest]
    fn first_failure_aborts_everything() {
        let items = compose2(&each(), &crate::optics::index::<i32>(1));
        let result = over(&items, |x| x + 1, vec![vec![1, 2], vec![3]]);
        assert_eq!(result, Err(OpticError::not_found("index 1")));
    }
}
