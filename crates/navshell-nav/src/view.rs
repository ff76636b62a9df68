#![forbid(unsafe_code)]

//! Per-tier navigation view models from one parameterized renderer.
//!
//! The source system rendered four near-duplicate sidebar variants, one per
//! device tier. Here a single builder walks the tree once and a
//! [`TierLayout`] table carries the per-tier differences, so tiers cannot
//! drift apart behaviorally.
//!
//! A [`NavViewModel`] is a pure function of
//! `(tree, current path, expansion set, collapse flag, tier)` — it owns no
//! state and performs no mutation. Hosts render its rows and route taps back
//! through the coordinator. The transient open/closed flag of the mobile
//! overlay panel stays with the host; it is visibility toggling, not
//! coordinator state.
//!
//! # Invariants
//!
//! 1. `active` is an exact path match, nothing fuzzier.
//! 2. Sub-rows appear only under expanded groups, and never in a collapsed
//!    rail (64 px shows icons only).
//! 3. Building a view model never mutates anything.

use navshell_core::DeviceTier;
use serde::{Deserialize, Serialize};

use crate::expansion::ExpansionSet;
use crate::tree::NavTree;

/// How the sidebar occupies the screen at a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// A layout-affecting rail beside the content area.
    Rail,
    /// A full-screen overlay; never affects layout math.
    Overlay,
}

/// Per-tier rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLayout {
    pub presentation: Presentation,
    /// Whether the collapse toggle does anything at this tier.
    pub collapsible: bool,
    /// Whether item labels survive a collapsed rail.
    pub labels_when_collapsed: bool,
    /// Indent applied to sub-item rows, in pixels.
    pub sub_item_indent: u16,
}

impl TierLayout {
    /// The per-tier layout table.
    #[must_use]
    pub const fn for_tier(tier: DeviceTier) -> Self {
        match tier {
            DeviceTier::Mobile => Self {
                presentation: Presentation::Overlay,
                collapsible: false,
                // The overlay is full-screen; labels always fit.
                labels_when_collapsed: true,
                sub_item_indent: 16,
            },
            DeviceTier::TabletPortrait => Self {
                presentation: Presentation::Rail,
                collapsible: true,
                labels_when_collapsed: false,
                sub_item_indent: 12,
            },
            DeviceTier::Tablet => Self {
                presentation: Presentation::Rail,
                collapsible: true,
                labels_when_collapsed: false,
                sub_item_indent: 16,
            },
            DeviceTier::Desktop => Self {
                presentation: Presentation::Rail,
                collapsible: false,
                labels_when_collapsed: true,
                sub_item_indent: 20,
            },
        }
    }
}

/// One renderable navigation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRow {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// 0 for top-level items, 1 for sub-items.
    pub depth: u8,
    /// Exact match against the current path.
    pub active: bool,
    /// For group rows: whether the group is expanded. Always false on leaves.
    pub expanded: bool,
    /// Whether the host should draw the label (collapsed rails are icon-only).
    pub show_label: bool,
    /// Left indent in pixels.
    pub indent: u16,
}

/// The rendered navigation tree for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavViewModel {
    pub tier: DeviceTier,
    pub presentation: Presentation,
    pub rows: Vec<NavRow>,
}

impl NavViewModel {
    /// Build the view model. Pure; owns and mutates nothing.
    #[must_use]
    pub fn build(
        tree: &NavTree,
        current_path: &str,
        expansion: &ExpansionSet,
        collapsed: bool,
        tier: DeviceTier,
    ) -> Self {
        let layout = TierLayout::for_tier(tier);
        let effective_collapsed = collapsed && layout.collapsible;
        let show_labels = !effective_collapsed || layout.labels_when_collapsed;

        let mut rows = Vec::new();
        for item in tree.items() {
            let expanded = item.is_group() && expansion.contains(&item.path);
            rows.push(NavRow {
                label: item.label.clone(),
                path: item.path.clone(),
                icon: item.icon.clone(),
                depth: 0,
                active: item.path == current_path,
                expanded,
                show_label: show_labels,
                indent: 0,
            });
            // A collapsed rail has no room for sub-rows.
            if expanded && !effective_collapsed {
                for sub in &item.sub_items {
                    rows.push(NavRow {
                        label: sub.label.clone(),
                        path: sub.path.clone(),
                        icon: sub.icon.clone(),
                        depth: 1,
                        active: sub.path == current_path,
                        expanded: false,
                        show_label: show_labels,
                        indent: layout.sub_item_indent,
                    });
                }
            }
        }

        Self {
            tier,
            presentation: layout.presentation,
            rows,
        }
    }

    /// The active row, if the current path matches any item.
    #[must_use]
    pub fn active_row(&self) -> Option<&NavRow> {
        self.rows.iter().find(|r| r.active)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
