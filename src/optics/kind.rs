//! The lattice of optic kinds.
//!
//! Every optic kind is characterised by the primitive capabilities it
//! supports:
//!
//! | kind        | `GET` | `PREVIEW` | `GET_ALL` | `MODIFY` | `REVIEW` |
//! |-------------|:-----:|:---------:|:---------:|:--------:|:--------:|
//! | `Iso`       |   ✓   |     ✓     |     ✓     |    ✓     |    ✓     |
//! | `Lens`      |   ✓   |     ✓     |     ✓     |    ✓     |          |
//! | `Prism`     |       |     ✓     |     ✓     |    ✓     |    ✓     |
//! | `Optional`  |       |     ✓     |     ✓     |    ✓     |          |
//! | `Traversal` |       |           |     ✓     |    ✓     |          |
//! | `Getter`    |   ✓   |           |     ✓     |          |          |
//! | `Fold`      |       |           |     ✓     |          |          |
//! | `Setter`    |       |           |           |    ✓     |          |
//!
//! The kind of a composition is the kind whose capability set is the
//! intersection of both operands' sets. The table is closed under
//! intersection except where a read-only kind meets the write-only
//! `Setter`; those pairs have no meet.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Capabilities, OpticKind};
//!
//! assert_eq!(OpticKind::Lens.meet(OpticKind::Prism), Ok(OpticKind::Optional));
//! assert_eq!(OpticKind::Iso.meet(OpticKind::Traversal), Ok(OpticKind::Traversal));
//! assert!(OpticKind::Fold.meet(OpticKind::Setter).is_err());
//!
//! assert!(OpticKind::Optional.capabilities().contains(Capabilities::PREVIEW));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr};

use thiserror::Error;

/// A set of primitive optic capabilities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No capability at all.
    pub const NONE: Self = Self(0);
    /// Total read of exactly one focus.
    pub const GET: Self = Self(1);
    /// Partial read of at most one focus.
    pub const PREVIEW: Self = Self(1 << 1);
    /// Read of every focus.
    pub const GET_ALL: Self = Self(1 << 2);
    /// Write through a modifying function.
    pub const MODIFY: Self = Self(1 << 3);
    /// Construction of the whole from a focus.
    pub const REVIEW: Self = Self(1 << 4);

    /// Returns `true` if every capability in `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the capabilities present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the capabilities present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if no capability is present.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitAnd for Capabilities {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        self.intersection(other)
    }
}

impl BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        self.union(other)
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Capabilities, &str); 5] = [
            (Capabilities::GET, "GET"),
            (Capabilities::PREVIEW, "PREVIEW"),
            (Capabilities::GET_ALL, "GET_ALL"),
            (Capabilities::MODIFY, "MODIFY"),
            (Capabilities::REVIEW, "REVIEW"),
        ];
        formatter
            .debug_set()
            .entries(
                NAMES
                    .iter()
                    .filter(|(capability, _)| self.contains(*capability))
                    .map(|(_, name)| name),
            )
            .finish()
    }
}

/// The eight kinds of optic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpticKind {
    /// Lossless two-way conversion.
    Iso,
    /// Exactly one readable and writable focus.
    Lens,
    /// Zero or one focus, constructible from the focus.
    Prism,
    /// Zero or one readable and writable focus.
    Optional,
    /// Zero or more foci, writable as a batch.
    Traversal,
    /// Exactly one read-only focus.
    Getter,
    /// Zero or more read-only foci.
    Fold,
    /// Write-only foci.
    Setter,
}

impl OpticKind {
    /// Every kind, strongest first.
    pub const ALL: [Self; 8] = [
        Self::Iso,
        Self::Lens,
        Self::Prism,
        Self::Optional,
        Self::Traversal,
        Self::Getter,
        Self::Fold,
        Self::Setter,
    ];

    /// Returns the primitive capabilities of this kind.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        let Capabilities(get) = Capabilities::GET;
        let Capabilities(preview) = Capabilities::PREVIEW;
        let Capabilities(get_all) = Capabilities::GET_ALL;
        let Capabilities(modify) = Capabilities::MODIFY;
        let Capabilities(review) = Capabilities::REVIEW;
        Capabilities(match self {
            Self::Iso => get | preview | get_all | modify | review,
            Self::Lens => get | preview | get_all | modify,
            Self::Prism => preview | get_all | modify | review,
            Self::Optional => preview | get_all | modify,
            Self::Traversal => get_all | modify,
            Self::Getter => get | get_all,
            Self::Fold => get_all,
            Self::Setter => modify,
        })
    }

    /// Returns the kind with exactly these capabilities, if there is one.
    #[must_use]
    pub fn from_capabilities(capabilities: Capabilities) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.capabilities() == capabilities)
    }

    /// Returns `true` if an optic of this kind can be presented as `other`.
    ///
    /// ```
    /// use optica::optics::OpticKind;
    ///
    /// assert!(OpticKind::Lens.widens_to(OpticKind::Traversal));
    /// assert!(!OpticKind::Prism.widens_to(OpticKind::Getter));
    /// ```
    #[must_use]
    pub const fn widens_to(self, other: Self) -> bool {
        self.capabilities().contains(other.capabilities())
    }

    /// Returns the kind produced by composing an optic of this kind (outer)
    /// with one of kind `inner`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::NoCommonCapability`] when one side is
    /// read-only and the other write-only.
    pub fn meet(self, inner: Self) -> Result<Self, CompositionError> {
        let shared = self.capabilities() & inner.capabilities();
        Self::from_capabilities(shared).ok_or_else(|| {
            tracing::debug!(outer = %self, inner = %inner, "optic kinds share no capability");
            CompositionError::NoCommonCapability { outer: self, inner }
        })
    }

    /// Returns `true` if the kind focuses on at most one element.
    #[must_use]
    pub const fn is_affine(self) -> bool {
        matches!(self, Self::Iso | Self::Lens | Self::Prism | Self::Optional | Self::Getter)
    }

    /// Returns the kind's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso => "Iso",
            Self::Lens => "Lens",
            Self::Prism => "Prism",
            Self::Optional => "Optional",
            Self::Traversal => "Traversal",
            Self::Getter => "Getter",
            Self::Fold => "Fold",
            Self::Setter => "Setter",
        }
    }
}

impl fmt::Display for OpticKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Errors raised when composing optic kinds at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// The two kinds have no capability in common.
    #[error("cannot compose {outer} with {inner}: no common capability")]
    NoCommonCapability {
        /// The outer optic's kind.
        outer: OpticKind,
        /// The inner optic's kind.
        inner: OpticKind,
    },
}

/// Implemented by every optic value, exposing its kind for inspection.
pub trait Optic {
    /// The kind of this optic.
    const KIND: OpticKind;

    /// Returns the kind of this optic.
    fn kind(&self) -> OpticKind {
        Self::KIND
    }

    /// Returns the capabilities of this optic.
    fn capabilities(&self) -> Capabilities {
        Self::KIND.capabilities()
    }
}
