//! Errors raised while applying an optic.
//!
//! Every error is fatal for the application that raised it: the first failing
//! leaf aborts the whole composed application and no partial result is
//! produced. A prism or affine traversal that does not match is *not* an
//! error; it leaves the whole untouched.

use thiserror::Error;

use super::OpticKind;

/// The failure modes of optic application.
///
/// # Examples
///
/// ```rust
/// use kaleido::optics::{OpticError, OpticKind};
///
/// let error = OpticError::CapabilityMisuse {
///     operation: "view",
///     kind: OpticKind::Traversal,
/// };
/// assert_eq!(error.to_string(), "view is not supported through a traversal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OpticError {
    /// A strict getter was applied to a whole that lacks the expected part.
    #[error("nothing to focus on at {location}")]
    NotFound {
        /// Description of the missing part, e.g. ``field `name` ``.
        location: String,
    },

    /// An operation was run through an optic whose kind cannot support it.
    #[error("{operation} is not supported through a {kind}")]
    CapabilityMisuse {
        /// The rejected operation.
        operation: &'static str,
        /// The kind of the optic it was run through.
        kind: OpticKind,
    },

    /// `over` or `set` was run through a read-only getter.
    #[error("cannot modify a value through a read-only getter")]
    ReadOnlyMutation,

    /// A decoding leaf optic rejected its input.
    #[error("could not decode focus: {reason}")]
    Decode {
        /// The decoder's message.
        reason: String,
    },

    /// An apply rule combined results produced by different interpreters.
    #[error("an apply rule mixed results from the identity and constant interpreters")]
    InterpreterMismatch,
}

impl OpticError {
    /// Builds a [`OpticError::NotFound`] for the given location.
    pub fn not_found(location: impl Into<String>) -> Self {
        Self::NotFound {
            location: location.into(),
        }
    }

    /// Builds a [`OpticError::Decode`] from any displayable decoder error.
    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            reason: reason.to_string(),
        }
    }
}
