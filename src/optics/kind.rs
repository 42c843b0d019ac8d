//! The closed set of optic kinds and their capability lattice.
//!
//! ```text
//! Iso <: Lens <: Traversal
//! Iso <: Prism <: Traversal
//! Getter: read-only
//! ```
//!
//! Composition produces the meet of the two input kinds: the least capable
//! kind that still describes "focus through the parent, then the child".

use std::fmt;

/// The kind tag carried by every [`Optic`](super::Optic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpticKind {
    /// Read-only access to exactly one computed value.
    Getter,
    /// A lossless, invertible shape change.
    Iso,
    /// Exactly one always-present part.
    Lens,
    /// A part that may be absent and can rebuild the whole on its own.
    Prism,
    /// Zero or more parts.
    Traversal,
}

impl OpticKind {
    /// Returns the kind of `self` composed with `child`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::OpticKind;
    ///
    /// assert_eq!(OpticKind::Iso.meet(OpticKind::Lens), OpticKind::Lens);
    /// assert_eq!(OpticKind::Prism.meet(OpticKind::Prism), OpticKind::Prism);
    /// assert_eq!(OpticKind::Lens.meet(OpticKind::Prism), OpticKind::Traversal);
    /// assert_eq!(OpticKind::Getter.meet(OpticKind::Lens), OpticKind::Getter);
    /// ```
    #[must_use]
    pub const fn meet(self, child: Self) -> Self {
        match (self, child) {
            (Self::Getter, _) | (_, Self::Getter) => Self::Getter,
            (Self::Iso, other) | (other, Self::Iso) => other,
            (Self::Lens, Self::Lens) => Self::Lens,
            (Self::Prism, Self::Prism) => Self::Prism,
            _ => Self::Traversal,
        }
    }

    /// Whether optics of this kind always report exactly one focus.
    ///
    /// A getter assembled from fan-out parts is still tagged `Getter`; the
    /// constant interpreter catches that case at run time.
    pub const fn has_single_focus(self) -> bool {
        matches!(self, Self::Getter | Self::Iso | Self::Lens)
    }

    /// Whether `over` and `set` are forbidden through optics of this kind.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Self::Getter)
    }

    /// Whether `self` can be used wherever `other` is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kaleido::optics::OpticKind;
    ///
    /// assert!(OpticKind::Iso.is_subkind_of(OpticKind::Prism));
    /// assert!(OpticKind::Lens.is_subkind_of(OpticKind::Traversal));
    /// assert!(!OpticKind::Traversal.is_subkind_of(OpticKind::Lens));
    /// ```
    pub const fn is_subkind_of(self, other: Self) -> bool {
        match (self, other) {
            (Self::Iso, _) => true,
            (Self::Lens, Self::Lens | Self::Traversal | Self::Getter)
            | (Self::Prism, Self::Prism | Self::Traversal)
            | (Self::Traversal, Self::Traversal)
            | (Self::Getter, Self::Getter) => true,
            _ => false,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Getter => "getter",
            Self::Iso => "iso",
            Self::Lens => "lens",
            Self::Prism => "prism",
            Self::Traversal => "traversal",
        }
    }
}

impl fmt::Display for OpticKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ALL: [OpticKind; 5] = [
        OpticKind::Getter,
        OpticKind::Iso,
        OpticKind::Lens,
        OpticKind::Prism,
        OpticKind::Traversal,
    ];

    #[rstest]
    #[case(OpticKind::Iso, OpticKind::Iso, OpticKind::Iso)]
    #[case(OpticKind::Iso, OpticKind::Lens, OpticKind::Lens)]
    #[case(OpticKind::Prism, OpticKind::Iso, OpticKind::Prism)]
    #[case(OpticKind::Lens, OpticKind::Lens, OpticKind::Lens)]
    #[case(OpticKind::Prism, OpticKind::Prism, OpticKind::Prism)]
    #[case(OpticKind::Lens, OpticKind::Prism, OpticKind::Traversal)]
    #[case(OpticKind::Prism, OpticKind::Lens, OpticKind::Traversal)]
    #[case(OpticKind::Traversal, OpticKind::Lens, OpticKind::Traversal)]
    #[case(OpticKind::Iso, OpticKind::Traversal, OpticKind::Traversal)]
    #[case(OpticKind::Getter, OpticKind::Getter, OpticKind::Getter)]
    #[case(OpticKind::Lens, OpticKind::Getter, OpticKind::Getter)]
    #[case(OpticKind::Getter, OpticKind::Traversal, OpticKind::Getter)]
    fn meet_follows_lattice(
        #[case] parent: OpticKind,
        #[case] child: OpticKind,
        #[case] expected: OpticKind,
    ) {
        assert_eq!(parent.meet(child), expected);
    }

    #[rstest]
    fn meet_is_commutative_and_associative() {
        for first in ALL {
            for second in ALL {
                assert_eq!(first.meet(second), second.meet(first));
                for third in ALL {
                    assert_eq!(
                        first.meet(second).meet(third),
                        first.meet(second.meet(third))
                    );
                }
            }
        }
    }

    #[rstest]
    fn meet_result_is_below_both_settable_inputs() {
        for first in ALL {
            for second in ALL {
                let result = first.meet(second);
                if !result.is_read_only() {
                    assert!(first.is_subkind_of(result));
                    assert!(second.is_subkind_of(result));
                }
            }
        }
    }

    #[rstest]
    #[case(OpticKind::Traversal, false)]
    #[case(OpticKind::Prism, false)]
    #[case(OpticKind::Lens, true)]
    #[case(OpticKind::Iso, true)]
    fn single_focus_kinds(#[case] kind: OpticKind, #[case] expected: bool) {
        assert_eq!(kind.has_single_focus(), expected);
    }

    #[rstest]
    fn display_is_lowercase_name() {
        assert_eq!(OpticKind::Traversal.to_string(), "traversal");
    }
}
