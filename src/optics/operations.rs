//! The public operations.
//!
//! Each operation picks an interpreter and a transform and runs the optic;
//! none of them knows anything about particular optic kinds beyond the
//! up-front capability checks.
//!
//! | Operation | Interpreter | Transform |
//! |---|---|---|
//! | [`view`] | constant, [`Void`] summary | keep the focus |
//! | [`preview`] | constant, [`First`] summary | keep the focus |
//! | [`has`] | constant, [`Any`] summary | `true` |
//! | [`to_list`] | constant, `Vec` summary | singleton list |
//! | [`fold_map`] | constant, any [`Monoid`] | the caller's function |
//! | [`over`] | identity | the caller's function |
//! | [`set`] | identity | a constant |
//!
//! No operation mutates its input; updates return a rebuilt whole.

use super::interpreter::{Applied, Collect, Const, Interpreter, Void};
use super::{Optic, OpticError};
use crate::typeclass::{Any, First, Identity, Monoid};

/// Reads the single focus.
///
/// # Errors
///
/// - [`OpticError::CapabilityMisuse`] if the optic may report zero or many
///   foci (prisms and traversals), or if a getter chain fans out at run time.
/// - Any error raised by the optic's leaves.
pub fn view<S, T, A, B>(optic: &Optic<S, T, A, B>, whole: S) -> Result<A, OpticError>
where
    A: 'static,
{
    let kind = optic.kind();
    if !kind.has_single_focus() {
        tracing::debug!(operation = "view", %kind, "rejected optic without a single focus");
        return Err(OpticError::CapabilityMisuse {
            operation: "view",
            kind,
        });
    }
    let summary = Void::new("view", kind);
    optic
        .apply(
            &Interpreter::Constant(&summary),
            &mut |focus: A| Ok(Applied::Const(Const::new(focus))),
            whole,
        )?
        .into_const()?
        .into_summary::<A>()
}

/// Maps every focus into a monoid and combines the results in visitation
/// order. An optic without foci yields `M::empty()`.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{each, fold_map};
///
/// let words = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(fold_map(&each(), |word| word + ";", words).unwrap(), "a;b;");
/// assert_eq!(fold_map(&each(), |x: i32| Some(vec![x]), vec![]).unwrap(), None);
/// ```
///
/// # Errors
///
/// Any error raised by the optic's leaves.
pub fn fold_map<S, T, A, B, M, F>(
    optic: &Optic<S, T, A, B>,
    mut function: F,
    whole: S,
) -> Result<M, OpticError>
where
    M: Monoid + 'static,
    F: FnMut(A) -> M,
{
    let summary = Collect::<M>::new();
    optic
        .apply(
            &Interpreter::Constant(&summary),
            &mut |focus: A| Ok(Applied::Const(Const::new(function(focus)))),
            whole,
        )?
        .into_const()?
        .into_summary::<M>()
}

/// Reads the first focus, if any.
///
/// # Errors
///
/// Any error raised by the optic's leaves.
pub fn preview<S, T, A, B>(optic: &Optic<S, T, A, B>, whole: S) -> Result<Option<A>, OpticError>
where
    A: 'static,
{
    fold_map(optic, First::new, whole).map(First::into_inner)
}

/// Reports whether the optic has at least one focus.
///
/// # Errors
///
/// Any error raised by the optic's leaves.
pub fn has<S, T, A, B>(optic: &Optic<S, T, A, B>, whole: S) -> Result<bool, OpticError> {
    fold_map(optic, |_| Any(true), whole).map(Any::into_inner)
}

/// Collects every focus, in visitation order.
///
/// # Errors
///
/// Any error raised by the optic's leaves.
pub fn to_list<S, T, A, B>(optic: &Optic<S, T, A, B>, whole: S) -> Result<Vec<A>, OpticError>
where
    A: 'static,
{
    fold_map(optic, |focus| vec![focus], whole)
}

/// Replaces every focus with `function(focus)`.
///
/// # Errors
///
/// - [`OpticError::ReadOnlyMutation`] if the optic is a getter.
/// - Any error raised by the optic's leaves.
pub fn over<S, T, A, B, F>(
    optic: &Optic<S, T, A, B>,
    mut function: F,
    whole: S,
) -> Result<T, OpticError>
where
    F: FnMut(A) -> B,
{
    let kind = optic.kind();
    if kind.is_read_only() {
        tracing::debug!(operation = "over", %kind, "rejected update through a read-only optic");
        return Err(OpticError::ReadOnlyMutation);
    }
    optic
        .apply(
            &Interpreter::Identity,
            &mut |focus: A| Ok(Applied::Identity(Identity(function(focus)))),
            whole,
        )?
        .into_identity()
}

/// Replaces every focus with `value`.
///
/// # Errors
///
/// Same as [`over`].
pub fn set<S, T, A, B>(optic: &Optic<S, T, A, B>, value: B, whole: S) -> Result<T, OpticError>
where
    B: Clone,
{
    over(optic, |_| value.clone(), whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{OpticKind, SimpleOptic, each, filtered, index, lens, some};
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Account {
        owner: String,
        balance: i64,
    }

    fn balance() -> SimpleOptic<Account, i64> {
        lens(
            |account: &Account| account.balance,
            |account: Account, balance| Account { balance, ..account },
        )
    }

    fn account() -> Account {
        Account {
            owner: "ann".to_string(),
            balance: 10,
        }
    }

    #[rstest]
    fn view_reads_lens_focus() {
        assert_eq!(view(&balance(), account()), Ok(10));
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![5], Some(5))]
    #[case(vec![6, 7], Some(6))]
    fn preview_is_first_of_to_list(#[case] items: Vec<i32>, #[case] expected: Option<i32>) {
        let listed = to_list(&each(), items.clone()).expect("to_list");
        assert_eq!(preview(&each(), items), Ok(expected));
        assert_eq!(listed.first().copied(), expected);
    }

    #[rstest]
    fn has_reports_presence() {
        assert_eq!(has(&some::<i32>(), None), Ok(false));
        assert_eq!(has(&some::<i32>(), Some(0)), Ok(true));
    }

    #[rstest]
    fn fold_map_concatenates_strings_in_order() {
        let owners = vec![account(), Account { owner: "bo".to_string(), ..account() }];
        let joined = fold_map(&each(), |account: Account| account.owner + "/", owners);
        assert_eq!(joined, Ok("ann/bo/".to_string()));
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![Some(2), None, Some(5)], Some(vec![2, 5]))]
    #[case(vec![None], None)]
    fn fold_map_into_option_is_none_without_hits(
        #[case] items: Vec<Option<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        let present = crate::optics::compose2(&each(), &some());
        assert_eq!(fold_map(&present, |x| Some(vec![x]), items), Ok(expected));
    }

    #[rstest]
    fn set_is_over_with_constant() {
        let evens = filtered(|x: &i32| x % 2 == 0);
        let items = vec![1, 2, 3, 4];
        assert_eq!(set(&evens, 0, items.clone()), over(&evens, |_| 0, items));
    }

    #[rstest]
    fn over_does_not_touch_input() {
        let original = account();
        let updated = over(&balance(), |b| b * 3, original.clone()).expect("over");
        assert_eq!(original.balance, 10);
        assert_eq!(updated.balance, 30);
        assert_eq!(updated.owner, original.owner);
    }

    #[rstest]
    fn view_through_index_in_bounds() {
        assert_eq!(view(&index(1), vec!['x', 'y']), Ok('y'));
    }

    #[rstest]
    fn view_through_traversal_is_rejected_early() {
        let error = view(&filtered(|_: &i32| true), vec![1]).unwrap_err();
        assert_eq!(
            error,
            OpticError::CapabilityMisuse {
                operation: "view",
                kind: OpticKind::Traversal
            }
        );
    }
}
