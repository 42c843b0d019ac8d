//! Partially applied forms of the public operations.
//!
//! Each function takes the leading arguments of its counterpart in
//! [`operations`](super::operations) and returns a closure awaiting the rest.
//! The returned closures implement `Fn` and can be called any number of
//! times. They own a clone of the optic, so the original can be dropped.
//!
//! # Examples
//!
//! ```rust
//! use kaleido::optics::{curried, index};
//!
//! let second = index::<i32>(1);
//! let read_second = curried::view(&second);
//! let bump_second = curried::over_with(&second, |x| x + 1);
//!
//! assert_eq!(read_second(vec![1, 2]).unwrap(), 2);
//! assert_eq!(bump_second(vec![1, 2]).unwrap(), vec![1, 3]);
//! assert_eq!(read_second(vec![7, 8]).unwrap(), 8);
//! ```

use super::{Optic, OpticError, operations};

/// `view(optic)(whole)`.
pub fn view<S, T, A, B>(
    optic: &Optic<S, T, A, B>,
) -> impl Fn(S) -> Result<A, OpticError> + use<S, T, A, B>
where
    A: 'static,
{
    let optic = optic.clone();
    move |whole| operations::view(&optic, whole)
}

/// `preview(optic)(whole)`.
pub fn preview<S, T, A, B>(
    optic: &Optic<S, T, A, B>,
) -> impl Fn(S) -> Result<Option<A>, OpticError> + use<S, T, A, B>
where
    A: 'static,
{
    let optic = optic.clone();
    move |whole| operations::preview(&optic, whole)
}

/// `has(optic)(whole)`.
pub fn has<S, T, A, B>(
    optic: &Optic<S, T, A, B>,
) -> impl Fn(S) -> Result<bool, OpticError> + use<S, T, A, B> {
    let optic = optic.clone();
    move |whole| operations::has(&optic, whole)
}

/// `to_list(optic)(whole)`.
pub fn to_list<S, T, A, B>(
    optic: &Optic<S, T, A, B>,
) -> impl Fn(S) -> Result<Vec<A>, OpticError> + use<S, T, A, B>
where
    A: 'static,
{
    let optic = optic.clone();
    move |whole| operations::to_list(&optic, whole)
}

/// A whole-to-result function produced by [`over`].
pub type Updater<S, T> = Box<dyn Fn(S) -> Result<T, OpticError>>;

/// `over(optic)(function)(whole)`.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{curried, each};
///
/// let over_each = curried::over(&each::<i32>());
/// let double_all = over_each(|x| x * 2);
///
/// assert_eq!(double_all(vec![1, 2]).unwrap(), vec![2, 4]);
/// assert_eq!(double_all(vec![5]).unwrap(), vec![10]);
/// ```
pub fn over<S, T, A, B, F>(
    optic: &Optic<S, T, A, B>,
) -> impl Fn(F) -> Updater<S, T> + use<S, T, A, B, F>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    let optic = optic.clone();
    move |function: F| -> Updater<S, T> { Box::new(over_with(&optic, function)) }
}

/// `over(optic, function)(whole)`.
pub fn over_with<S, T, A, B, F>(
    optic: &Optic<S, T, A, B>,
    function: F,
) -> impl Fn(S) -> Result<T, OpticError> + use<S, T, A, B, F>
where
    F: Fn(A) -> B,
{
    let optic = optic.clone();
    move |whole| operations::over(&optic, &function, whole)
}

/// `set(optic, value)(whole)`.
pub fn set<S, T, A, B>(
    optic: &Optic<S, T, A, B>,
    value: B,
) -> impl Fn(S) -> Result<T, OpticError> + use<S, T, A, B>
where
    B: Clone,
{
    let optic = optic.clone();
    move |whole| operations::set(&optic, value.clone(), whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{SimpleOptic, each, some};
    use rstest::rstest;

    #[rstest]
    fn partial_reads_are_reusable() {
        let listed = to_list(&each::<u8>());
        assert_eq!(listed(vec![1, 2]), Ok(vec![1, 2]));
        assert_eq!(listed(vec![]), Ok(vec![]));

        let present = has(&some::<u8>());
        assert_eq!(present(Some(1)), Ok(true));
        assert_eq!(present(None), Ok(false));

        let first = preview(&each::<u8>());
        assert_eq!(first(vec![9, 8]), Ok(Some(9)));
    }

    #[rstest]
    fn set_captures_value() {
        let zero: SimpleOptic<Vec<i32>, i32> = each();
        let clear = set(&zero, 0);
        assert_eq!(clear(vec![3, 4]), Ok(vec![0, 0]));
        assert_eq!(clear(vec![5]), Ok(vec![0]));
    }
}
