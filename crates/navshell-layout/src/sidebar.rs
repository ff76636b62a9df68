#![forbid(unsafe_code)]

//! Sidebar width policy: the fixed `(tier, collapsed) → width` lookup table.
//!
//! Widths are policy constants, not derived values. The defaults:
//!
//! | tier            | collapsed | expanded |
//! |-----------------|-----------|----------|
//! | mobile          | 0         | 0        |
//! | tablet-portrait | 64        | 160      |
//! | tablet          | 64        | 200      |
//! | desktop         | 216       | 216      |
//!
//! Mobile reports 0 because its sidebar is a full-screen overlay that never
//! affects layout math. Desktop ignores the collapse flag entirely.
//!
//! # Invariants
//!
//! 1. `width_for` is a pure function of `(tier, collapsed)`.
//! 2. Desktop width is identical for both collapse states.
//! 3. One table instance is shared app-wide, injected at construction.
//!
//! # Failure Modes
//!
//! None — lookups are total.

use navshell_core::DeviceTier;
use serde::{Deserialize, Serialize};

/// Collapsed/expanded width pair for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWidths {
    pub collapsed: u16,
    pub expanded: u16,
}

impl TierWidths {
    /// A width that does not react to the collapse flag.
    #[must_use]
    pub const fn fixed(width: u16) -> Self {
        Self {
            collapsed: width,
            expanded: width,
        }
    }

    /// Resolve against a collapse flag.
    #[must_use]
    pub const fn resolve(self, collapsed: bool) -> u16 {
        if collapsed { self.collapsed } else { self.expanded }
    }
}

/// Per-tier sidebar width lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarWidths {
    pub mobile: TierWidths,
    pub tablet_portrait: TierWidths,
    pub tablet: TierWidths,
    pub desktop: TierWidths,
}

impl SidebarWidths {
    /// The calibrated default table (see module docs).
    pub const DEFAULT: Self = Self {
        mobile: TierWidths::fixed(0),
        tablet_portrait: TierWidths {
            collapsed: 64,
            expanded: 160,
        },
        tablet: TierWidths {
            collapsed: 64,
            expanded: 200,
        },
        desktop: TierWidths::fixed(216),
    };

    /// Resolve the sidebar width for a tier and collapse flag.
    #[must_use]
    pub const fn width_for(&self, tier: DeviceTier, collapsed: bool) -> u16 {
        match tier {
            DeviceTier::Mobile => self.mobile.resolve(collapsed),
            DeviceTier::TabletPortrait => self.tablet_portrait.resolve(collapsed),
            DeviceTier::Tablet => self.tablet.resolve(collapsed),
            DeviceTier::Desktop => self.desktop.resolve(collapsed),
        }
    }
}

impl Default for SidebarWidths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The sidebar's resolved state: collapse flag plus the width it implies.
///
/// Owned by the layout root, mutated only through the single writer
/// ([`crate::SidebarContext`]), read-only for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub collapsed: bool,
    pub width_px: u16,
}

impl SidebarState {
    /// Resolve a state from the table.
    #[must_use]
    pub const fn resolve(widths: &SidebarWidths, tier: DeviceTier, collapsed: bool) -> Self {
        Self {
            collapsed,
            width_px: widths.width_for(tier, collapsed),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
