//! Optics for immutable data manipulation.
//!
//! An optic describes how to reach zero or more foci inside a whole and how
//! to rebuild the whole from updated foci. Every optic is a single rule run
//! by an [`Interpreter`]: the identity interpreter rebuilds, the constant
//! interpreter summarizes foci through a [`Monoid`](crate::typeclass::Monoid).
//! The public operations ([`view`], [`preview`], [`has`], [`to_list`],
//! [`over`], [`set`]) only choose the interpreter and the transform.
//!
//! # Kinds
//!
//! ```text
//! Iso <: Lens <: Traversal
//! Iso <: Prism <: Traversal
//! Getter absorbs everything it is composed with
//! ```
//!
//! | Kind | Foci | Updates | Constructors |
//! |---|---|---|---|
//! | [`Iso`](OpticKind::Iso) | exactly one, invertible | yes | [`iso`], [`try_iso`], [`identity`], [`non`] |
//! | [`Lens`](OpticKind::Lens) | exactly one | yes | [`lens`], [`try_lens`], [`index`], [`at`], [`lens!`](crate::lens) |
//! | [`Prism`](OpticKind::Prism) | zero or one, buildable | yes | [`prism`], [`simple_prism`], [`some`], [`ok`] |
//! | [`Traversal`](OpticKind::Traversal) | zero or more | yes | [`each`], [`elements`], [`filtered`], [`affine`] |
//! | [`Getter`](OpticKind::Getter) | exactly one | no | [`getter`] |
//!
//! Composition ([`compose2`], [`compose!`](crate::compose)) meets the kinds.
//! Iso with iso and prism with prism keep their structure, so composed isos
//! still invert and composed prisms still build.
//!
//! # Example
//!
//! ```rust
//! use kaleido::compose;
//! use kaleido::optics::{each, lens, over, some, to_list, view, SimpleOptic};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Team { lead: Option<String>, scores: Vec<u32> }
//!
//! let lead: SimpleOptic<Team, Option<String>> = kaleido::lens!(Team, lead);
//! let scores: SimpleOptic<Team, Vec<u32>> = kaleido::lens!(Team, scores);
//!
//! let team = Team { lead: Some("kim".into()), scores: vec![3, 4] };
//!
//! assert_eq!(view(&lead, team.clone()).unwrap(), Some("kim".to_string()));
//! assert_eq!(to_list(&compose!(lead, some()), team.clone()).unwrap(), vec!["kim".to_string()]);
//!
//! let doubled = over(&compose!(scores, each()), |s| s * 2, team).unwrap();
//! assert_eq!(doubled.scores, vec![6, 8]);
//! ```
//!
//! # Paths
//!
//! [`path`] builds memoized chains of leaf optics for types implementing
//! [`Navigable`]; with the `json` feature [`json`] provides them for
//! `serde_json::Value`.

mod at;
mod compose;
mod error;
mod getter;
pub mod interpreter;
mod iso;
mod kind;
mod lens;
mod operations;
mod optic;
mod path;
mod prism;
mod traversal;

pub mod curried;

#[cfg(feature = "json")]
pub mod json;

pub use at::{At, at};
pub use compose::compose2;
pub use error::OpticError;
pub use getter::getter;
pub use interpreter::{Applied, Collect, Const, Interpreter, Summary, Void};
pub use iso::{Iso, anon, identity, iso, map_entries, non, try_iso, with_iso};
pub use kind::OpticKind;
pub use lens::{index, lens, try_lens};
pub use operations::{fold_map, has, over, preview, set, to_list, view};
pub use optic::{Optic, SimpleOptic, Transform};
pub use path::{Navigable, PathKey, PathNode, path, path_from};
pub use prism::{Prism, err, left, ok, prism, right, simple_prism, some, try_prism, with_prism};
pub use traversal::{affine, each, elements, filtered, filtered_by};
