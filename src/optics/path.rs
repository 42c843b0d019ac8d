//! A memoizing path builder.
//!
//! A [`PathNode`] wraps the optic composed so far and hands out child nodes
//! for fields, indices and optional fields. Each node remembers the children
//! it has built, so asking for the same path twice returns the same node
//! (and the same composed optic) instead of composing again.
//!
//! ```text
//! path().field("todos").via(&each()).field("title")
//!     == compose!(prop("todos"), each(), prop("title"))
//! ```
//!
//! The leaf optics come from the [`Navigable`] implementation of the focus
//! type; `serde_json::Value` implements it with the `json` feature.
//!
//! Nodes deref to their optic, so a node can be passed to every operation.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # {
//! use kaleido::optics::{path, set, view};
//! use serde_json::{json, Value};
//!
//! let root = path::<Value>();
//! let city = root.field("address").field("city");
//!
//! let user = json!({ "address": { "city": "Lyon" } });
//! assert_eq!(view(&city, user.clone()).unwrap(), json!("Lyon"));
//! assert_eq!(
//!     set(&city, json!("Nice"), user).unwrap(),
//!     json!({ "address": { "city": "Nice" } })
//! );
//!
//! assert!(std::rc::Rc::ptr_eq(&city, &root.field("address").field("city")));
//! # }
//! ```

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use super::{SimpleOptic, identity};

#[cfg(feature = "fxhash")]
type MemoMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(feature = "fxhash"))]
type MemoMap<K, V> = std::collections::HashMap<K, V>;

/// Types with leaf optics for named fields, positions and optional fields.
pub trait Navigable: Sized + 'static {
    /// Strict lens onto the field `name`.
    fn field(name: &str) -> SimpleOptic<Self, Self>;

    /// Strict lens onto the element at `position`.
    fn index(position: usize) -> SimpleOptic<Self, Self>;

    /// Traversal onto the field `name` with no focus when it is absent.
    fn maybe_field(name: &str) -> SimpleOptic<Self, Self>;
}

/// The memo key of a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// A strict field.
    Field(String),
    /// A position in a sequence.
    Index(usize),
    /// A field that may be absent.
    MaybeField(String),
}

impl PathKey {
    /// Reads a key written in the compact string form.
    ///
    /// A canonical decimal number is an [`Index`](Self::Index), a name
    /// starting with `$` is a [`MaybeField`](Self::MaybeField), anything
    /// else is a [`Field`](Self::Field).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::PathKey;
    ///
    /// assert_eq!(PathKey::parse("3"), PathKey::Index(3));
    /// assert_eq!(PathKey::parse("03"), PathKey::Field("03".to_string()));
    /// assert_eq!(PathKey::parse("$nick"), PathKey::MaybeField("nick".to_string()));
    /// assert_eq!(PathKey::parse("name"), PathKey::Field("name".to_string()));
    /// ```
    pub fn parse(key: &str) -> Self {
        if let Ok(position) = key.parse::<usize>()
            && position.to_string() == key
        {
            return Self::Index(position);
        }
        key.strip_prefix('$').map_or_else(
            || Self::Field(key.to_string()),
            |name| Self::MaybeField(name.to_string()),
        )
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => formatter.write_str(name),
            Self::Index(position) => write!(formatter, "{position}"),
            Self::MaybeField(name) => write!(formatter, "${name}"),
        }
    }
}

/// A node of the path builder: the optic composed so far plus its memoized
/// children.
pub struct PathNode<S, A> {
    optic: SimpleOptic<S, A>,
    children: RefCell<MemoMap<PathKey, Rc<PathNode<S, A>>>>,
}

impl<S, A> PathNode<S, A> {
    fn new(optic: SimpleOptic<S, A>) -> Self {
        Self {
            optic,
            children: RefCell::new(MemoMap::default()),
        }
    }

    /// The composed optic of this node.
    pub const fn optic(&self) -> &SimpleOptic<S, A> {
        &self.optic
    }

    /// Number of children built from this node so far.
    pub fn memoized(&self) -> usize {
        self.children.borrow().len()
    }
}

impl<S, A> PathNode<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Continues the path through an arbitrary optic.
    ///
    /// Not memoized: an optic has no stable identity to key on.
    pub fn via<B: 'static>(&self, child: &SimpleOptic<A, B>) -> Rc<PathNode<S, B>> {
        Rc::new(PathNode::new(self.optic.compose(child)))
    }
}

impl<S, A> PathNode<S, A>
where
    S: 'static,
    A: Navigable,
{
    /// The child for the strict field `name`.
    pub fn field(&self, name: &str) -> Rc<Self> {
        self.child(PathKey::Field(name.to_string()))
    }

    /// The child for the element at `position`.
    pub fn at(&self, position: usize) -> Rc<Self> {
        self.child(PathKey::Index(position))
    }

    /// The child for the field `name`, which may be absent.
    pub fn maybe_field(&self, name: &str) -> Rc<Self> {
        self.child(PathKey::MaybeField(name.to_string()))
    }

    /// The child for a key in the compact string form; see [`PathKey::parse`].
    pub fn key(&self, key: &str) -> Rc<Self> {
        self.child(PathKey::parse(key))
    }

    /// The child for `key`, built on first request.
    pub fn child(&self, key: PathKey) -> Rc<Self> {
        let cached = self.children.borrow().get(&key).map(Rc::clone);
        if let Some(node) = cached {
            tracing::trace!(%key, "path memo hit");
            return node;
        }
        tracing::trace!(%key, "path memo miss");
        let leaf = match &key {
            PathKey::Field(name) => A::field(name),
            PathKey::Index(position) => A::index(*position),
            PathKey::MaybeField(name) => A::maybe_field(name),
        };
        let node = Rc::new(Self::new(self.optic.compose(&leaf)));
        self.children.borrow_mut().insert(key, Rc::clone(&node));
        node
    }
}

impl<S, A> Deref for PathNode<S, A> {
    type Target = SimpleOptic<S, A>;

    fn deref(&self) -> &Self::Target {
        &self.optic
    }
}

impl<S, A> fmt::Debug for PathNode<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PathNode")
            .field("kind", &self.optic.kind())
            .field("memoized", &self.memoized())
            .finish()
    }
}

/// A root node whose optic is the identity iso on `S`.
pub fn path<S: 'static>() -> Rc<PathNode<S, S>> {
    path_from(identity())
}

/// A root node starting from `optic`.
pub fn path_from<S, A>(optic: SimpleOptic<S, A>) -> Rc<PathNode<S, A>> {
    Rc::new(PathNode::new(optic))
}

static_assertions::assert_not_impl_any!(PathNode<(), ()>: Send, Sync);
