//! Control structures.
//!
//! - [`Either`]: the miss/hit outcome produced by a prism's match function

mod either;

pub use either::Either;
