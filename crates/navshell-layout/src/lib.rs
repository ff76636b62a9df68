#![forbid(unsafe_code)]

//! Layout: sidebar width policy, shared sidebar context, content-size bands.
//!
//! # Role in navshell
//! `navshell-layout` turns a device tier plus a collapse intent into concrete
//! pixel widths, publishes the result through a tree-scoped shared context,
//! and re-bands the remaining content area whenever either input changes.
//!
//! # Primary responsibilities
//! - **SidebarWidths / SidebarState**: the fixed `(tier, collapsed) → width`
//!   lookup table and its resolved value.
//! - **SidebarContext**: single-writer shared state with change
//!   notification, consumed read-only by descendants.
//! - **ContentSizeBand**: classification of `viewport − sidebar` width into
//!   small/medium/large(/xlarge) bands, independent of the tier table.
//!
//! # How it fits in the system
//! `navshell-nav`'s shell facade owns one [`SidebarContext`] and feeds it
//! tier changes from `navshell-core`; view code reads widths and bands, and
//! only the sidebar toggle control writes the collapse flag.

pub mod content_band;
pub mod context;
pub mod sidebar;

pub use content_band::{BandThresholds, ContentSizeBand, ContentSizeClassifier};
pub use context::{DEFAULT_FALLBACK_WIDTH, SidebarContext, Subscription};
pub use sidebar::{SidebarState, SidebarWidths, TierWidths};
