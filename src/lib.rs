//! # kaleido
//!
//! Composable optics for immutable data.
//!
//! ## Overview
//!
//! An optic focuses on parts of a value: one field, an optional variant, every
//! element of a collection. Optics compose, and the composite can read the
//! foci or rebuild the whole with new ones, without mutating the input.
//!
//! - **Optics**: iso, lens, prism, traversal and getter, one representation
//!   for all of them, composed with [`compose!`]
//! - **Operations**: `view`, `preview`, `has`, `to_list`, `over`, `set`, plus
//!   partially applied forms in [`optics::curried`]
//! - **Paths**: a memoized path builder, with `serde_json::Value` leaves
//!   under the `json` feature
//! - **Type classes**: the `Semigroup`/`Monoid` summaries the read operations
//!   are built on
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup`, `Monoid` and the summary wrappers
//! - `control`: `Either`
//! - `optics`: the optics engine (implies `typeclass` and `control`)
//! - `json`: optics over `serde_json::Value`
//! - `derive`: `#[derive(Lenses, Prisms)]`
//! - `serde`: `Serialize`/`Deserialize` for the control types
//! - `fxhash`: `FxHashMap` for the path memo
//! - `full`: everything above
//!
//! ## Example
//!
//! ```rust
//! use kaleido::prelude::*;
//!
//! let pairs = vec![(1, 'a'), (2, 'b')];
//! let firsts = kaleido::compose!(
//!     each(),
//!     lens(|pair: &(i32, char)| pair.0, |pair: (i32, char), n| (n, pair.1)),
//! );
//!
//! assert_eq!(to_list(&firsts, pairs.clone()).unwrap(), vec![1, 2]);
//! assert_eq!(
//!     over(&firsts, |n| n * 10, pairs).unwrap(),
//!     vec![(10, 'a'), (20, 'b')]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use kaleido::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use kaleido_derive::{Lenses, Prisms};
