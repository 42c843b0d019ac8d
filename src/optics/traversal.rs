//! Traversals: zero or more parts at once.
//!
//! A traversal visits its foci in order, hands each one to the transform,
//! and reassembles the results with the interpreter's `combine`. Elements
//! it chooses not to visit go through `pure` and keep their place, so a
//! traversal never changes the number of elements in a container.
//!
//! # Examples
//!
//! ```rust
//! use kaleido::optics::{each, filtered, over, to_list};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! assert_eq!(to_list(&each(), numbers.clone()).unwrap(), numbers);
//!
//! let evens = filtered(|x: &i32| x % 2 == 0);
//! assert_eq!(to_list(&evens, numbers.clone()).unwrap(), vec![2, 4, 6]);
//! assert_eq!(
//!     over(&evens, |x| x * 10, numbers).unwrap(),
//!     vec![1, 20, 3, 40, 5, 60]
//! );
//! ```

use super::{Optic, OpticKind, SimpleOptic};

/// Visits every element of a `Vec`, in order.
pub fn each<A: 'static>() -> SimpleOptic<Vec<A>, A> {
    elements()
}

/// Visits every element of any container that can be iterated and
/// rebuilt from an iterator.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use kaleido::optics::{elements, over};
///
/// let queue = VecDeque::from([1, 2, 3]);
/// let bumped = over(&elements::<VecDeque<i32>, i32>(), |x| x + 1, queue).unwrap();
/// assert_eq!(bumped, VecDeque::from([2, 3, 4]));
/// ```
pub fn elements<C, A>() -> SimpleOptic<C, A>
where
    C: IntoIterator<Item = A> + FromIterator<A> + 'static,
    A: 'static,
{
    Optic::from_rule(OpticKind::Traversal, |interpreter, transform, whole: C| {
        let parts = whole
            .into_iter()
            .map(|element| transform(element))
            .collect::<Result<Vec<_>, _>>()?;
        interpreter.combine(|values: Vec<A>| Ok(values.into_iter().collect()), parts)
    })
}

/// Visits the elements of a `Vec` that satisfy `predicate`.
///
/// Same as `filtered_by(predicate, &each())`.
pub fn filtered<A, P>(predicate: P) -> SimpleOptic<Vec<A>, A>
where
    A: 'static,
    P: Fn(&A) -> bool + 'static,
{
    filtered_by(predicate, &each())
}

/// Restricts `base` to the foci that satisfy `predicate`.
///
/// Foci that fail the predicate are passed through untouched and are not
/// reported by read operations.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use kaleido::optics::{elements, filtered_by, set};
///
/// let letters = filtered_by(
///     |c: &char| c.is_alphabetic(),
///     &elements::<VecDeque<char>, char>(),
/// );
/// let masked = set(&letters, '_', VecDeque::from(['a', '1', 'b'])).unwrap();
/// assert_eq!(masked, VecDeque::from(['_', '1', '_']));
/// ```
pub fn filtered_by<S, A, P>(predicate: P, base: &SimpleOptic<S, A>) -> SimpleOptic<S, A>
where
    S: 'static,
    A: 'static,
    P: Fn(&A) -> bool + 'static,
{
    let base = base.clone();
    Optic::from_rule(
        base.kind().meet(OpticKind::Traversal),
        move |interpreter, transform, whole| {
            base.apply(
                interpreter,
                &mut |focus: A| {
                    if predicate(&focus) {
                        transform(focus)
                    } else {
                        interpreter.pure(focus)
                    }
                },
                whole,
            )
        },
    )
}

/// Builds an affine traversal: zero or one focus.
///
/// When `preview` finds nothing the whole is returned as it was and the
/// transform is never invoked.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{affine, over, preview};
///
/// let head = affine(
///     |items: &Vec<i32>| items.first().copied(),
///     |mut items: Vec<i32>, value: i32| {
///         items[0] = value;
///         items
///     },
/// );
///
/// assert_eq!(preview(&head, vec![]).unwrap(), None);
/// assert_eq!(over(&head, |x| x + 1, vec![]).unwrap(), Vec::<i32>::new());
/// assert_eq!(over(&head, |x| x + 1, vec![1, 1]).unwrap(), vec![2, 1]);
/// ```
pub fn affine<S, A, P, U>(preview: P, set: U) -> SimpleOptic<S, A>
where
    S: 'static,
    A: 'static,
    P: Fn(&S) -> Option<A> + 'static,
    U: Fn(S, A) -> S + 'static,
{
    Optic::from_rule(OpticKind::Traversal, move |interpreter, transform, whole| {
        match preview(&whole) {
            None => interpreter.pure(whole),
            Some(focus) => {
                let applied = transform(focus)?;
                interpreter.map(|value| Ok(set(whole, value)), applied)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{OpticError, has, over, preview, set, to_list, view};
    use rstest::rstest;
    use std::collections::{BTreeSet, VecDeque};

    #[rstest]
    fn each_preserves_order() {
        let mut seen = Vec::new();
        let result = over(
            &each(),
            |x: i32| {
                seen.push(x);
                x
            },
            vec![3, 1, 2],
        );
        assert_eq!(result, Ok(vec![3, 1, 2]));
        assert_eq!(seen, vec![3, 1, 2]);
    }

    #[rstest]
    fn each_on_empty_vec() {
        assert_eq!(to_list(&each::<i32>(), vec![]), Ok(vec![]));
        assert_eq!(has(&each::<i32>(), vec![]), Ok(false));
        assert_eq!(preview(&each::<i32>(), vec![]), Ok(None));
    }

    #[rstest]
    fn view_through_each_is_misuse() {
        assert_eq!(
            view(&each(), vec![1]),
            Err(OpticError::CapabilityMisuse {
                operation: "view",
                kind: OpticKind::Traversal
            })
        );
    }

    #[rstest]
    fn filtered_keeps_cardinality() {
        let odd = filtered(|x: &i32| x % 2 == 1);
        assert_eq!(set(&odd, 0, vec![1, 2, 3]), Ok(vec![0, 2, 0]));
    }

    #[rstest]
    fn filter_rejecting_everything_is_no_op() {
        let none = filtered(|_: &i32| false);
        assert_eq!(over(&none, |x| x * 100, vec![4, 5]), Ok(vec![4, 5]));
        assert_eq!(to_list(&none, vec![4, 5]), Ok(vec![]));
    }

    #[rstest]
    fn filtered_by_over_affine_is_traversal() {
        let positive = filtered_by(
            |x: &i32| *x > 0,
            &affine(|pair: &(i32, i32)| Some(pair.0), |pair: (i32, i32), x| (x, pair.1)),
        );
        assert_eq!(positive.kind(), OpticKind::Traversal);
        assert_eq!(set(&positive, 9, (-1, 0)), Ok((-1, 0)));
        assert_eq!(set(&positive, 9, (1, 0)), Ok((9, 0)));
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![7, 8], Some(7))]
    fn affine_previews_first(#[case] items: Vec<i32>, #[case] expected: Option<i32>) {
        let head = affine(
            |items: &Vec<i32>| items.first().copied(),
            |mut items: Vec<i32>, value| {
                items[0] = value;
                items
            },
        );
        assert_eq!(preview(&head, items), Ok(expected));
    }

    #[rstest]
    fn elements_rebuilds_other_containers() {
        let upper = over(
            &elements::<VecDeque<char>, char>(),
            |c| c.to_ascii_uppercase(),
            VecDeque::from(['a', 'b']),
        );
        assert_eq!(upper, Ok(VecDeque::from(['A', 'B'])));
        let shifted = to_list(&elements::<BTreeSet<i32>, i32>(), BTreeSet::from([3, 1, 2]));
        assert_eq!(shifted, Ok(vec![1, 2, 3]));
    }
}
