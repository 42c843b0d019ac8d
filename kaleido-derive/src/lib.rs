//! Derive macros generating kaleido optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: one lens constructor per named struct field
//! - [`Prisms`]: one prism constructor per enum variant
//!
//! Generated code refers to `::kaleido::optics`, so the deriving crate must
//! depend on `kaleido` under that name.
//!
//! # Example
//!
//! ```rust,ignore
//! use kaleido::{Lenses, Prisms};
//! use kaleido::optics::{preview, set, view};
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! assert_eq!(view(&Point::x_lens(), Point { x: 1, y: 2 }).unwrap(), 1);
//! assert_eq!(
//!     preview(&Shape::rectangle_prism(), Shape::Rectangle(3.0, 4.0)).unwrap(),
//!     Some((3.0, 4.0))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Generates `{field}_lens()` for every named field of a struct.
///
/// Each method returns `SimpleOptic<Self, FieldType>` of kind lens. Reading
/// clones the field, so field types must implement `Clone`.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Person {
///     pub fn name_lens() -> ::kaleido::optics::SimpleOptic<Self, String> { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the method on a concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = Container::<i32>::value_lens();
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Generates `{variant_snake_case}_prism()` for every variant of an enum.
///
/// The focus type depends on the variant shape:
///
/// - **Unit variants**: `()`
/// - **Single-field tuple variants**: the field type
/// - **Multi-field tuple variants**: a tuple of the field types
/// - **Struct variants**: a tuple of the field types, in definition order
///
/// Matching takes the enum by value, so every variant can be previewed,
/// including multi-field ones.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Close,
/// }
///
/// let click = Event::click_prism();       // SimpleOptic<Event, (i32, i32)>
/// let key = Event::key_press_prism();     // SimpleOptic<Event, char>
/// let close = Event::close_prism();       // SimpleOptic<Event, ()>
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
