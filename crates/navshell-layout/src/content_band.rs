#![forbid(unsafe_code)]

//! Content-area size banding: how much room remains after the sidebar.
//!
//! Tablet-tier layouts pack more or less information depending on the
//! *content* width, not the viewport width. [`ContentSizeClassifier`]
//! computes `available = viewport − sidebar` and bands it through
//! [`BandThresholds`] — a second, independent table from the tier
//! breakpoints. The two classify different axes; do not conflate them.
//!
//! The subtle correctness requirement: the band depends on the sidebar
//! width, so collapsing the sidebar must retroactively promote a `Small`
//! band to `Medium`/`Large` without any viewport resize occurring. The
//! classifier is a pure function of both inputs, so callers re-reading it
//! after either change observe the promotion immediately.
//!
//! # Invariants
//!
//! 1. Bands partition the available-width axis with no gaps or overlaps.
//! 2. `Xlarge` is reachable only through a table with `xlarge_min` set
//!    (the desktop table).
//! 3. An absent context degrades to the documented fallback width; the
//!    classifier never panics.
//!
//! # Failure Modes
//!
//! None — classification is total; `available` saturates at zero when the
//! sidebar is wider than the viewport.

use serde::{Deserialize, Serialize};

use crate::context::SidebarContext;

/// Content-area size band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentSizeBand {
    Small,
    Medium,
    Large,
    /// Desktop-only: reported above `xlarge_min` when the table defines one.
    Xlarge,
}

impl ContentSizeBand {
    /// Short lowercase label, matching the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContentSizeBand::Small => "small",
            ContentSizeBand::Medium => "medium",
            ContentSizeBand::Large => "large",
            ContentSizeBand::Xlarge => "xlarge",
        }
    }
}

impl std::fmt::Display for ContentSizeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Band cut points over the available content width.
///
/// The 700/1000 values are calibrated policy, preserved verbatim; they are
/// not derived from any other constant in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Minimum available width for `Medium`.
    pub medium_min: u16,
    /// Minimum available width for `Large`.
    pub large_min: u16,
    /// Minimum available width for `Xlarge`; `None` caps the scale at `Large`.
    pub xlarge_min: Option<u16>,
}

impl BandThresholds {
    /// Tablet-tier table: small < 700 ≤ medium < 1000 ≤ large.
    pub const TABLET: Self = Self {
        medium_min: 700,
        large_min: 1000,
        xlarge_min: None,
    };

    /// Desktop table: adds the `xlarge` band above 1400.
    pub const DESKTOP: Self = Self {
        medium_min: 700,
        large_min: 1000,
        xlarge_min: Some(1400),
    };

    /// Band an already-computed available width.
    #[must_use]
    pub fn classify_available(self, available: u16) -> ContentSizeBand {
        if let Some(xlarge_min) = self.xlarge_min
            && available >= xlarge_min
        {
            return ContentSizeBand::Xlarge;
        }
        if available >= self.large_min {
            ContentSizeBand::Large
        } else if available >= self.medium_min {
            ContentSizeBand::Medium
        } else {
            ContentSizeBand::Small
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self::TABLET
    }
}

/// Classifier of remaining content width, parameterized by a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentSizeClassifier {
    thresholds: BandThresholds,
}

impl ContentSizeClassifier {
    /// Classifier with the tablet table.
    #[must_use]
    pub const fn tablet() -> Self {
        Self {
            thresholds: BandThresholds::TABLET,
        }
    }

    /// Classifier with the desktop table (xlarge enabled).
    #[must_use]
    pub const fn desktop() -> Self {
        Self {
            thresholds: BandThresholds::DESKTOP,
        }
    }

    /// Classifier with a custom table.
    #[must_use]
    pub const fn with_thresholds(thresholds: BandThresholds) -> Self {
        Self { thresholds }
    }

    /// The active threshold table.
    #[must_use]
    pub const fn thresholds(&self) -> BandThresholds {
        self.thresholds
    }

    /// Band the content area remaining after the sidebar.
    ///
    /// `ctx = None` falls back to the default sidebar width (see
    /// [`crate::DEFAULT_FALLBACK_WIDTH`]) so the classifier stays usable
    /// outside the provider's subtree.
    #[must_use]
    pub fn classify(&self, viewport_width: u16, ctx: Option<&SidebarContext>) -> ContentSizeBand {
        let sidebar = SidebarContext::resolve_width(ctx);
        let available = viewport_width.saturating_sub(sidebar);
        self.thresholds.classify_available(available)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use navshell_core::DeviceTier;
    use proptest::prelude::*;

    #[test]
    fn band_boundaries() {
        let t = BandThresholds::TABLET;
        assert_eq!(t.classify_available(0), ContentSizeBand::Small);
        assert_eq!(t.classify_available(699), ContentSizeBand::Small);
        assert_eq!(t.classify_available(700), ContentSizeBand::Medium);
        assert_eq!(t.classify_available(999), ContentSizeBand::Medium);
        assert_eq!(t.classify_available(1000), ContentSizeBand::Large);
        // Tablet table never reports xlarge.
        assert_eq!(t.classify_available(u16::MAX), ContentSizeBand::Large);
    }

    #[test]
    fn desktop_table_reaches_xlarge() {
        let d = BandThresholds::DESKTOP;
        assert_eq!(d.classify_available(1399), ContentSizeBand::Large);
        assert_eq!(d.classify_available(1400), ContentSizeBand::Xlarge);
    }

    #[test]
    fn retroactive_promotion_on_collapse() {
        // Tablet, viewport 850, sidebar expanded 200: available 650 → small.
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let classifier = ContentSizeClassifier::tablet();
        assert_eq!(classifier.classify(850, Some(&ctx)), ContentSizeBand::Small);

        // Collapse flips the sidebar to 64: available 786 → medium, with no
        // viewport resize having fired.
        ctx.set_collapsed(true);
        assert_eq!(classifier.classify(850, Some(&ctx)), ContentSizeBand::Medium);
    }

    #[test]
    fn absent_context_uses_fallback() {
        let classifier = ContentSizeClassifier::tablet();
        // 900 − 200 (fallback) = 700 → medium, not a panic.
        assert_eq!(classifier.classify(900, None), ContentSizeBand::Medium);
        assert_eq!(classifier.classify(899, None), ContentSizeBand::Small);
    }

    #[test]
    fn sidebar_wider_than_viewport_saturates() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let classifier = ContentSizeClassifier::tablet();
        assert_eq!(classifier.classify(100, Some(&ctx)), ContentSizeBand::Small);
    }

    #[test]
    fn band_ordering() {
        assert!(ContentSizeBand::Small < ContentSizeBand::Medium);
        assert!(ContentSizeBand::Medium < ContentSizeBand::Large);
        assert!(ContentSizeBand::Large < ContentSizeBand::Xlarge);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&ContentSizeBand::Xlarge).unwrap();
        assert_eq!(json, "\"xlarge\"");
    }

    #[test]
    fn display_labels() {
        assert_eq!(format!("{}", ContentSizeBand::Medium), "medium");
    }

    proptest! {
        // Bands partition the available-width axis.
        #[test]
        fn partition_no_gaps(available in 0u16..=u16::MAX) {
            let band = BandThresholds::TABLET.classify_available(available);
            let expected = if available < 700 {
                ContentSizeBand::Small
            } else if available < 1000 {
                ContentSizeBand::Medium
            } else {
                ContentSizeBand::Large
            };
            prop_assert_eq!(band, expected);
        }

        // Wider content never yields a smaller band.
        #[test]
        fn banding_monotone(a in 0u16..=u16::MAX, b in 0u16..=u16::MAX) {
            let t = BandThresholds::DESKTOP;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(t.classify_available(lo) <= t.classify_available(hi));
        }
    }
}
