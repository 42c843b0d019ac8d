//! Interpreters: what "apply a transform, then reassemble" means for a run.
//!
//! Every optic has a single apply rule. Running it against a different
//! interpreter gives each public operation its meaning:
//!
//! | Interpreter | `pure(x)` | `map(f, x)` | `combine(f, xs)` |
//! |---|---|---|---|
//! | [`Interpreter::Identity`] | `x` | `f(x)` | `f(xs)` |
//! | [`Interpreter::Constant`] | `empty()` | `x` | `concat(xs)` |
//!
//! The identity interpreter rebuilds the whole; the constant interpreter
//! ignores the rebuild functions and folds the summaries produced at each
//! focus with a monoid.
//!
//! A stored apply rule has to serve every summary type an operation might
//! choose, so the constant interpreter carries its summary type-erased in
//! [`Const`] and the operation that picked the monoid restores it.

use std::any::Any as Erased;
use std::fmt;
use std::marker::PhantomData;

use super::{OpticError, OpticKind};
use crate::typeclass::{Identity, Monoid};

type Boxed = Box<dyn Erased>;

/// A constant-interpreter result: a summary that ignores the `T` it would
/// rebuild.
pub struct Const<T> {
    summary: Boxed,
    marker: PhantomData<fn() -> T>,
}

impl<T> Const<T> {
    /// Wraps a summary value.
    pub fn new<M: 'static>(summary: M) -> Self {
        Self::from_boxed(Box::new(summary))
    }

    fn from_boxed(summary: Boxed) -> Self {
        Self {
            summary,
            marker: PhantomData,
        }
    }

    /// Changes the phantom type; the summary is untouched.
    pub fn retag<U>(self) -> Const<U> {
        Const::from_boxed(self.summary)
    }

    /// Restores the summary as the monoid the operation chose.
    ///
    /// # Errors
    ///
    /// [`OpticError::InterpreterMismatch`] if the summary has another type.
    pub fn into_summary<M: 'static>(self) -> Result<M, OpticError> {
        self.summary
            .downcast::<M>()
            .map(|summary| *summary)
            .map_err(|_| OpticError::InterpreterMismatch)
    }
}

impl<T> fmt::Debug for Const<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Const(..)")
    }
}

/// The wrapped value produced by running an optic.
#[derive(Debug)]
pub enum Applied<T> {
    /// Produced by [`Interpreter::Identity`].
    Identity(Identity<T>),
    /// Produced by [`Interpreter::Constant`].
    Const(Const<T>),
}

impl<T> Applied<T> {
    /// Unwraps an identity result.
    ///
    /// # Errors
    ///
    /// [`OpticError::InterpreterMismatch`] for a constant result.
    pub fn into_identity(self) -> Result<T, OpticError> {
        match self {
            Self::Identity(identity) => Ok(identity.into_inner()),
            Self::Const(_) => Err(OpticError::InterpreterMismatch),
        }
    }

    /// Unwraps a constant result.
    ///
    /// # Errors
    ///
    /// [`OpticError::InterpreterMismatch`] for an identity result.
    pub fn into_const(self) -> Result<Const<T>, OpticError> {
        match self {
            Self::Const(constant) => Ok(constant),
            Self::Identity(_) => Err(OpticError::InterpreterMismatch),
        }
    }
}

/// A monoid seen through its erased summary values.
///
/// Implemented by [`Collect`] for every [`Monoid`] and by [`Void`].
pub trait Summary {
    /// The identity summary, produced when a run visits no focus.
    ///
    /// # Errors
    ///
    /// Summaries may refuse to be empty; see [`Void`].
    fn empty(&self) -> Result<Const<()>, OpticError>;

    /// Folds the summaries of several foci, in visitation order.
    ///
    /// # Errors
    ///
    /// Summaries may refuse to combine; see [`Void`].
    fn concat(&self, parts: Vec<Const<()>>) -> Result<Const<()>, OpticError>;
}

/// Summarizes foci with the monoid `M`.
pub struct Collect<M>(PhantomData<fn() -> M>);

impl<M> Collect<M> {
    /// Creates the summary for `M`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M> Default for Collect<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Monoid + 'static> Summary for Collect<M> {
    fn empty(&self) -> Result<Const<()>, OpticError> {
        Ok(Const::new(M::empty()))
    }

    fn concat(&self, parts: Vec<Const<()>>) -> Result<Const<()>, OpticError> {
        let summaries = parts
            .into_iter()
            .map(Const::into_summary::<M>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Const::new(M::combine_all(summaries)))
    }
}

/// The poisoned summary behind `view`: fails as soon as a run reports
/// anything other than exactly one focus.
#[derive(Debug, Clone, Copy)]
pub struct Void {
    operation: &'static str,
    kind: OpticKind,
}

impl Void {
    /// Creates the summary for `operation` run through an optic of `kind`.
    pub const fn new(operation: &'static str, kind: OpticKind) -> Self {
        Self { operation, kind }
    }

    const fn misuse(self) -> OpticError {
        OpticError::CapabilityMisuse {
            operation: self.operation,
            kind: self.kind,
        }
    }
}

impl Summary for Void {
    fn empty(&self) -> Result<Const<()>, OpticError> {
        Err(self.misuse())
    }

    fn concat(&self, _parts: Vec<Const<()>>) -> Result<Const<()>, OpticError> {
        Err(self.misuse())
    }
}

/// The capability record an apply rule is run against.
#[derive(Clone, Copy)]
pub enum Interpreter<'s> {
    /// Rebuild the whole.
    Identity,
    /// Summarize the foci with the given summary monoid.
    Constant(&'s dyn Summary),
}

impl Interpreter<'_> {
    /// Lifts a value that was not visited by the transform.
    ///
    /// # Errors
    ///
    /// Propagates a summary that refuses to be empty.
    pub fn pure<T>(&self, value: T) -> Result<Applied<T>, OpticError> {
        match self {
            Self::Identity => Ok(Applied::Identity(Identity::new(value))),
            Self::Constant(summary) => Ok(Applied::Const(summary.empty()?.retag())),
        }
    }

    /// Rebuilds through `function`, or keeps the collected summary.
    ///
    /// # Errors
    ///
    /// Propagates `function`'s error, or [`OpticError::InterpreterMismatch`]
    /// if `applied` came from the other interpreter.
    pub fn map<T, U, F>(&self, function: F, applied: Applied<T>) -> Result<Applied<U>, OpticError>
    where
        F: FnOnce(T) -> Result<U, OpticError>,
    {
        match (self, applied) {
            (Self::Identity, Applied::Identity(Identity(value))) => {
                Ok(Applied::Identity(Identity(function(value)?)))
            }
            (Self::Constant(_), Applied::Const(constant)) => Ok(Applied::Const(constant.retag())),
            _ => Err(OpticError::InterpreterMismatch),
        }
    }

    /// Reassembles the results of several foci.
    ///
    /// # Errors
    ///
    /// Propagates `function`'s error, a summary that refuses to combine, or
    /// [`OpticError::InterpreterMismatch`].
    pub fn combine<T, U, F>(
        &self,
        function: F,
        parts: Vec<Applied<T>>,
    ) -> Result<Applied<U>, OpticError>
    where
        F: FnOnce(Vec<T>) -> Result<U, OpticError>,
    {
        match self {
            Self::Identity => {
                let values = parts
                    .into_iter()
                    .map(Applied::into_identity)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Applied::Identity(Identity(function(values)?)))
            }
            Self::Constant(summary) => {
                let summaries = parts
                    .into_iter()
                    .map(|part| part.into_const().map(Const::retag))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Applied::Const(summary.concat(summaries)?.retag()))
            }
        }
    }
}

impl fmt::Debug for Interpreter<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => formatter.write_str("Identity"),
            Self::Constant(_) => formatter.write_str("Constant(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Any, First};
    use rstest::rstest;

    fn summary_of<M: 'static>(applied: Applied<i32>) -> M {
        applied
            .into_const()
            .and_then(Const::into_summary::<M>)
            .expect("constant result")
    }

    #[rstest]
    fn identity_pure_wraps_value() {
        let applied = Interpreter::Identity.pure(5).expect("pure");
        assert_eq!(applied.into_identity(), Ok(5));
    }

    #[rstest]
    fn identity_map_applies_function() {
        let interpreter = Interpreter::Identity;
        let applied = interpreter.pure(5).expect("pure");
        let mapped = interpreter.map(|x| Ok(x * 2), applied).expect("map");
        assert_eq!(mapped.into_identity(), Ok(10));
    }

    #[rstest]
    fn identity_combine_reassembles() {
        let interpreter = Interpreter::Identity;
        let parts = vec![interpreter.pure(1).unwrap(), interpreter.pure(2).unwrap()];
        let combined = interpreter
            .combine(|values: Vec<i32>| Ok(values.iter().sum::<i32>()), parts)
            .expect("combine");
        assert_eq!(combined.into_identity(), Ok(3));
    }

    #[rstest]
    fn constant_pure_is_empty_summary() {
        let summary = Collect::<Vec<i32>>::new();
        let applied = Interpreter::Constant(&summary).pure(9).expect("pure");
        assert_eq!(summary_of::<Vec<i32>>(applied), Vec::<i32>::new());
    }

    #[rstest]
    fn constant_map_ignores_function() {
        let summary = Collect::<Vec<i32>>::new();
        let interpreter = Interpreter::Constant(&summary);
        let applied: Applied<i32> = Applied::Const(Const::new(vec![1]));
        let mapped = interpreter
            .map(|_: i32| -> Result<i32, OpticError> { panic!("not called") }, applied)
            .expect("map");
        assert_eq!(summary_of::<Vec<i32>>(mapped), vec![1]);
    }

    #[rstest]
    fn constant_combine_concats_in_order() {
        let summary = Collect::<Vec<i32>>::new();
        let interpreter = Interpreter::Constant(&summary);
        let parts: Vec<Applied<i32>> = vec![
            Applied::Const(Const::new(vec![1])),
            Applied::Const(Const::new(vec![2, 3])),
        ];
        let combined = interpreter
            .combine(|values: Vec<i32>| Ok(values.len() as i32), parts)
            .expect("combine");
        assert_eq!(summary_of::<Vec<i32>>(combined), vec![1, 2, 3]);
    }

    #[rstest]
    fn first_summary_keeps_leftmost() {
        let summary = Collect::<First<i32>>::new();
        let interpreter = Interpreter::Constant(&summary);
        let parts: Vec<Applied<i32>> = vec![
            Applied::Const(Const::new(First::<i32>(None))),
            Applied::Const(Const::new(First(Some(4)))),
            Applied::Const(Const::new(First(Some(5)))),
        ];
        let combined = interpreter
            .combine(|_: Vec<i32>| Ok(0), parts)
            .expect("combine");
        assert_eq!(summary_of::<First<i32>>(combined), First(Some(4)));
    }

    #[rstest]
    fn any_summary_of_nothing_is_false() {
        let summary = Collect::<Any>::new();
        let combined = Interpreter::Constant(&summary)
            .combine(|_: Vec<i32>| Ok(0), Vec::<Applied<i32>>::new())
            .expect("combine");
        assert_eq!(summary_of::<Any>(combined), Any(false));
    }

    #[rstest]
    fn void_summary_refuses_empty_and_concat() {
        let summary = Void::new("view", OpticKind::Traversal);
        let interpreter = Interpreter::Constant(&summary);
        let expected = OpticError::CapabilityMisuse {
            operation: "view",
            kind: OpticKind::Traversal,
        };
        assert_eq!(interpreter.pure(1).unwrap_err(), expected);
        let parts: Vec<Applied<i32>> = vec![Applied::Const(Const::new(1))];
        assert_eq!(interpreter.combine(Ok, parts).unwrap_err(), expected);
    }

    #[rstest]
    fn mixing_interpreters_is_reported() {
        let summary = Collect::<Vec<i32>>::new();
        let identity_result = Interpreter::Identity.pure(1).expect("pure");
        let error = Interpreter::Constant(&summary)
            .map(Ok, identity_result)
            .unwrap_err();
        assert_eq!(error, OpticError::InterpreterMismatch);
    }

    #[rstest]
    fn wrong_summary_type_is_reported() {
        let constant: Const<i32> = Const::new(vec![1_u8]);
        assert_eq!(
            constant.into_summary::<First<i32>>().unwrap_err(),
            OpticError::InterpreterMismatch
        );
    }
}
