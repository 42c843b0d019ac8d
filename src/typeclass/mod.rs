//! Type classes backing the optics interpreters.
//!
//! - [`Semigroup`] / [`Monoid`]: how the constant interpreter summarizes foci
//! - [`Identity`]: the wrapper produced by the rebuilding interpreter
//! - [`First`] / [`Any`]: summary monoids selected by `preview` and `has`
//!
//! `Vec<A>` is the list monoid used by `to_list`; `String` and `Option<T>`
//! are ready-made summaries for `fold_map`.

mod identity;
mod monoid;
mod semigroup;
mod wrappers;

pub use identity::Identity;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Any, First};
