#![forbid(unsafe_code)]

//! The shell facade: one object wiring classification, layout, and expansion.
//!
//! [`NavShell`] owns the [`Viewport`], the [`SidebarContext`], the
//! [`ExpansionCoordinator`], and the current path, and wires the one-way
//! data flow between them:
//!
//! ```text
//! resize ──► tier ──► sidebar width ──► content band
//! navigate ──► current path ──► auto-expansion ──► view model
//! ```
//!
//! Every input method runs its full cascade synchronously before returning,
//! so a [`snapshot`](NavShell::snapshot) taken between events is always
//! coherent: observers never see a new path with stale expansion state or a
//! new tier with a stale width.
//!
//! Routing stays external. [`navigate`](NavShell::navigate) records the path,
//! synchronizes expansion, and invokes the registered `on_navigate` callback
//! outward; it performs no navigation itself. Collapse changes reach
//! ancestors through [`subscribe_sidebar`](NavShell::subscribe_sidebar).
//!
//! # Failure Modes
//!
//! None — all inputs are total; unknown paths degrade to no-ops.

use std::rc::Rc;

use navshell_core::{DeviceTier, TierChange, Viewport};
use navshell_layout::{
    ContentSizeBand, ContentSizeClassifier, SidebarContext, SidebarState, SidebarWidths,
    Subscription,
};
use serde::Serialize;
use tracing::debug;

use crate::coordinator::{ExpansionCoordinator, TargetState};
use crate::tree::{NavItem, NavTree};
use crate::view::NavViewModel;

type NavigateCallback = Rc<dyn Fn(&str)>;

/// One coherent read of the whole shell state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSnapshot {
    pub tier: DeviceTier,
    pub band: ContentSizeBand,
    pub sidebar: SidebarState,
    /// Expanded group paths, oldest-expanded first.
    pub expanded: Vec<String>,
    pub current_path: String,
}

/// The navigation shell: root owner of the coordinator subsystem.
pub struct NavShell {
    viewport: Viewport,
    context: SidebarContext,
    tree: Rc<NavTree>,
    coordinator: ExpansionCoordinator,
    current_path: String,
    on_navigate: Option<NavigateCallback>,
}

impl std::fmt::Debug for NavShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavShell")
            .field("viewport", &self.viewport)
            .field("context", &self.context)
            .field("current_path", &self.current_path)
            .field("expanded", &self.coordinator.expanded())
            .finish_non_exhaustive()
    }
}

impl NavShell {
    /// Create a shell around the static menu tree.
    ///
    /// Seeds the expansion set from `initial_path` and resolves the sidebar
    /// for the tier `initial_width` classifies into.
    #[must_use]
    pub fn new(items: Vec<NavItem>, initial_width: u16, initial_path: &str) -> Self {
        Self::with_widths(items, initial_width, initial_path, SidebarWidths::DEFAULT)
    }

    /// Create a shell with a custom sidebar width table.
    #[must_use]
    pub fn with_widths(
        items: Vec<NavItem>,
        initial_width: u16,
        initial_path: &str,
        widths: SidebarWidths,
    ) -> Self {
        let viewport = Viewport::new(initial_width);
        let context = SidebarContext::with_widths(viewport.tier(), widths);
        let tree = Rc::new(NavTree::new(items));
        let coordinator = ExpansionCoordinator::new(Rc::clone(&tree), initial_path);
        Self {
            viewport,
            context,
            tree,
            coordinator,
            current_path: initial_path.to_string(),
            on_navigate: None,
        }
    }

    /// Register the outward navigation callback (builder pattern).
    #[must_use]
    pub fn on_navigate(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_navigate = Some(Rc::new(callback));
        self
    }

    // -- inputs ------------------------------------------------------------

    /// Apply a viewport resize. Re-keys the sidebar width on tier change.
    pub fn resize(&mut self, width: u16) -> Option<TierChange> {
        let change = self.viewport.resize(width);
        if let Some(change) = change {
            debug!(from = %change.from, to = %change.to, width, "tier transition");
            self.context.set_tier(change.to);
        }
        change
    }

    /// Flip the sidebar collapse flag; returns the new value.
    ///
    /// This is the single writer of the collapse state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.context.toggle()
    }

    /// Apply an explicit group expand/collapse request.
    pub fn toggle_group(&mut self, path: &str, target: TargetState) -> Option<String> {
        self.coordinator.toggle(path, target)
    }

    /// Record a route change: update the path, auto-expand the owning
    /// group, then notify the routing collaborator.
    ///
    /// The path and expansion updates complete before the callback fires,
    /// so observers see one atomic transition.
    pub fn navigate(&mut self, path: &str) {
        self.current_path = path.to_string();
        self.coordinator.route_changed(path);
        if let Some(cb) = &self.on_navigate {
            cb(path);
        }
    }

    // -- outputs -----------------------------------------------------------

    /// Current device tier.
    #[must_use]
    pub fn tier(&self) -> DeviceTier {
        self.viewport.tier()
    }

    /// Current viewport width.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.viewport.width()
    }

    /// Current resolved sidebar state.
    #[must_use]
    pub fn sidebar(&self) -> SidebarState {
        self.context.state()
    }

    /// A shared handle to the sidebar context, for consumers deeper in the
    /// tree (content-band classifiers, width-aware panels).
    #[must_use]
    pub fn sidebar_context(&self) -> SidebarContext {
        self.context.clone()
    }

    /// Observe collapse/width changes. The guard unsubscribes on drop.
    pub fn subscribe_sidebar(&self, callback: impl Fn(&SidebarState) + 'static) -> Subscription {
        self.context.subscribe(callback)
    }

    /// Current content-size band for the remaining content area.
    ///
    /// Desktop uses the xlarge-capable table; every other tier uses the
    /// tablet table.
    #[must_use]
    pub fn content_band(&self) -> ContentSizeBand {
        let classifier = match self.tier() {
            DeviceTier::Desktop => ContentSizeClassifier::desktop(),
            _ => ContentSizeClassifier::tablet(),
        };
        classifier.classify(self.viewport.width(), Some(&self.context))
    }

    /// Expanded group paths, oldest-expanded first.
    #[must_use]
    pub fn expanded(&self) -> &[String] {
        self.coordinator.expanded()
    }

    /// The externally-owned current path, as last reported.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The static menu tree.
    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// One coherent read of the whole shell state.
    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            tier: self.tier(),
            band: self.content_band(),
            sidebar: self.sidebar(),
            expanded: self.coordinator.expanded().to_vec(),
            current_path: self.current_path.clone(),
        }
    }

    /// Build the view model for the current tier and state.
    #[must_use]
    pub fn view_model(&self) -> NavViewModel {
        NavViewModel::build(
            &self.tree,
            &self.current_path,
            self.coordinator.expansion(),
            self.context.collapsed(),
            self.tier(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
