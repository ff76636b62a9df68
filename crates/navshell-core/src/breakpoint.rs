#![forbid(unsafe_code)]

//! Viewport width → device tier classification.
//!
//! [`Breakpoints`] holds the three cut points that partition the width axis
//! into four [`DeviceTier`]s. Classification is a pure function: the tiers
//! cover the axis with no gaps and no overlaps at the documented thresholds.
//!
//! # Usage
//!
//! ```
//! use navshell_core::{Breakpoints, DeviceTier};
//!
//! let bp = Breakpoints::DEFAULT;
//! assert_eq!(bp.classify_width(767), DeviceTier::Mobile);
//! assert_eq!(bp.classify_width(768), DeviceTier::TabletPortrait);
//! assert_eq!(bp.classify_width(1280), DeviceTier::Desktop);
//! ```
//!
//! # Invariants
//!
//! 1. For every width exactly one tier matches.
//! 2. Thresholds are strictly increasing (enforced by the constructor).
//! 3. `classify_width` is pure: same width, same tier.
//! 4. The whole application shares one table instance — callers receive it
//!    by injection, they do not construct independent copies.
//!
//! # Failure Modes
//!
//! None at classification time. Constructing a table with non-increasing
//! thresholds panics immediately (configuration bug, not a runtime state).

use serde::{Deserialize, Serialize};

/// A device tier derived from viewport width.
///
/// Ordinal order follows width: `Mobile` is the narrowest, `Desktop` the
/// widest. Not persisted; recomputed on every resize.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceTier {
    /// Width below the tablet-portrait threshold. The sidebar is a
    /// full-screen overlay here, not a layout-affecting rail.
    #[default]
    Mobile,
    /// Narrow tablet (portrait orientation).
    TabletPortrait,
    /// Wide tablet (landscape orientation).
    Tablet,
    /// Full desktop. Sidebar collapse is not applicable at this tier.
    Desktop,
}

impl DeviceTier {
    /// All tiers in ascending width order.
    pub const ALL: [DeviceTier; 4] = [
        DeviceTier::Mobile,
        DeviceTier::TabletPortrait,
        DeviceTier::Tablet,
        DeviceTier::Desktop,
    ];

    /// Short lowercase label, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DeviceTier::Mobile => "mobile",
            DeviceTier::TabletPortrait => "tablet-portrait",
            DeviceTier::Tablet => "tablet",
            DeviceTier::Desktop => "desktop",
        }
    }

    /// Whether this tier renders the sidebar as a collapsible rail.
    ///
    /// Mobile uses an overlay instead; desktop has a fixed-width rail.
    #[must_use]
    pub const fn has_collapsible_rail(self) -> bool {
        matches!(self, DeviceTier::TabletPortrait | DeviceTier::Tablet)
    }
}

impl std::fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Width thresholds for tier classification.
///
/// Each field is the *minimum* width of its tier; widths below
/// `tablet_portrait` classify as [`DeviceTier::Mobile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Minimum width for `TabletPortrait`.
    pub tablet_portrait: u16,
    /// Minimum width for `Tablet`.
    pub tablet: u16,
    /// Minimum width for `Desktop`.
    pub desktop: u16,
}

impl Breakpoints {
    /// The calibrated default cut points: 768 / 1024 / 1280.
    pub const DEFAULT: Self = Self::new(768, 1024, 1280);

    /// Create a threshold table.
    ///
    /// # Panics
    ///
    /// Panics if the thresholds are not strictly increasing.
    #[must_use]
    pub const fn new(tablet_portrait: u16, tablet: u16, desktop: u16) -> Self {
        assert!(
            tablet_portrait < tablet && tablet < desktop,
            "breakpoint thresholds must be strictly increasing"
        );
        Self {
            tablet_portrait,
            tablet,
            desktop,
        }
    }

    /// Classify a viewport width into a tier.
    #[must_use]
    pub const fn classify_width(self, width: u16) -> DeviceTier {
        if width >= self.desktop {
            DeviceTier::Desktop
        } else if width >= self.tablet {
            DeviceTier::Tablet
        } else if width >= self.tablet_portrait {
            DeviceTier::TabletPortrait
        } else {
            DeviceTier::Mobile
        }
    }

    /// Check if a width change crosses a tier boundary.
    ///
    /// Returns `Some((old, new))` if the tier changed, `None` otherwise.
    #[must_use]
    pub const fn detect_transition(
        self,
        old_width: u16,
        new_width: u16,
    ) -> Option<(DeviceTier, DeviceTier)> {
        let old = self.classify_width(old_width);
        let new = self.classify_width(new_width);
        if old as u8 != new as u8 {
            Some((old, new))
        } else {
            None
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
