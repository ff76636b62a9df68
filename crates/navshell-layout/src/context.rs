#![forbid(unsafe_code)]

//! Tree-scoped shared sidebar state with change notification.
//!
//! # Design
//!
//! [`SidebarContext`] wraps the sidebar's `(tier, collapsed)` inputs and the
//! [`SidebarState`] they resolve to in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). Cloning a context creates another handle to the
//! **same** inner state; the shell provides one near the root and descendants
//! hold clones. When the resolved state changes (by `PartialEq`), all live
//! subscribers are notified in registration order.
//!
//! Exactly one writer exists by convention: the sidebar toggle control flips
//! the collapse flag via [`set_collapsed`](SidebarContext::set_collapsed),
//! and the shell feeds tier changes via
//! [`set_tier`](SidebarContext::set_tier). Everything else reads.
//!
//! # Out-of-tree fallback
//!
//! Consumers that hold no context (incremental adoption: a screen not yet
//! wrapped by the provider) must not crash. [`SidebarContext::resolve_width`]
//! maps `None` to the documented default — expanded, [`DEFAULT_FALLBACK_WIDTH`]
//! pixels — so derived classifiers stay usable standalone.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each state-changing mutation.
//! 2. A mutation that resolves to the current state is a no-op (desktop
//!    collapse toggles notify nobody — the width table ignores them).
//! 3. Subscribers are notified in registration order.
//! 4. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily.
//!
//! # Failure Modes
//!
//! - **Re-entrant write**: calling a setter from within a subscriber
//!   callback panics (`RefCell` borrow rules). Re-entrant mutation indicates
//!   a second writer, which this design forbids.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use navshell_core::DeviceTier;
use tracing::debug;

use crate::sidebar::{SidebarState, SidebarWidths};

/// Width reported to consumers that hold no context: expanded, 200 px.
pub const DEFAULT_FALLBACK_WIDTH: u16 = 200;

type CallbackRc = Rc<dyn Fn(&SidebarState)>;
type CallbackWeak = Weak<dyn Fn(&SidebarState)>;

struct ContextInner {
    tier: DeviceTier,
    collapsed: bool,
    widths: SidebarWidths,
    state: SidebarState,
    version: u64,
    /// Subscribers stored as weak references; dead entries pruned on notify.
    subscribers: Vec<CallbackWeak>,
}

/// Shared, version-tracked sidebar state.
///
/// Cloning creates a new handle to the same inner state.
pub struct SidebarContext {
    inner: Rc<RefCell<ContextInner>>,
}

impl Clone for SidebarContext {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for SidebarContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SidebarContext")
            .field("tier", &inner.tier)
            .field("state", &inner.state)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl SidebarContext {
    /// Create a context for the given tier, expanded, with default widths.
    #[must_use]
    pub fn new(tier: DeviceTier) -> Self {
        Self::with_widths(tier, SidebarWidths::DEFAULT)
    }

    /// Create a context with a custom width table.
    #[must_use]
    pub fn with_widths(tier: DeviceTier, widths: SidebarWidths) -> Self {
        let collapsed = false;
        let state = SidebarState::resolve(&widths, tier, collapsed);
        Self {
            inner: Rc::new(RefCell::new(ContextInner {
                tier,
                collapsed,
                widths,
                state,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current resolved state.
    #[must_use]
    pub fn state(&self) -> SidebarState {
        self.inner.borrow().state
    }

    /// Current collapse flag.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.inner.borrow().collapsed
    }

    /// Current sidebar width in pixels.
    #[must_use]
    pub fn width_px(&self) -> u16 {
        self.inner.borrow().state.width_px
    }

    /// The tier this context currently resolves widths for.
    #[must_use]
    pub fn tier(&self) -> DeviceTier {
        self.inner.borrow().tier
    }

    /// Version number; increments on each state-changing mutation.
    /// Useful for dirty-checking in render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers (including dead ones not yet pruned).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Set the collapse flag. Writer: the sidebar toggle control.
    pub fn set_collapsed(&self, collapsed: bool) {
        self.mutate(|inner| inner.collapsed = collapsed);
    }

    /// Flip the collapse flag; returns the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.collapsed();
        self.set_collapsed(next);
        next
    }

    /// Re-key the width lookup on a tier change. Writer: the shell.
    pub fn set_tier(&self, tier: DeviceTier) {
        self.mutate(|inner| inner.tier = tier);
    }

    /// Subscribe to state changes. The callback receives the new state each
    /// time the resolved width or collapse flag changes.
    ///
    /// Returns a [`Subscription`] guard; dropping it unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&SidebarState) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Width for a consumer that may sit outside the provider's subtree.
    ///
    /// `None` degrades to the documented default (expanded,
    /// [`DEFAULT_FALLBACK_WIDTH`]) instead of panicking.
    #[must_use]
    pub fn resolve_width(ctx: Option<&SidebarContext>) -> u16 {
        match ctx {
            Some(ctx) => ctx.width_px(),
            None => DEFAULT_FALLBACK_WIDTH,
        }
    }

    /// Apply a mutation, re-resolve the state, and notify on change.
    fn mutate(&self, f: impl FnOnce(&mut ContextInner)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner);
            let next = SidebarState::resolve(&inner.widths, inner.tier, inner.collapsed);
            if next == inner.state {
                false
            } else {
                inner.state = next;
                inner.version += 1;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first; holding the borrow across calls
        // would turn any read in a callback into a panic.
        let (state, callbacks): (SidebarState, Vec<CallbackRc>) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let live = inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.state, live)
        };

        if callbacks.is_empty() {
            return;
        }

        debug!(
            width_px = state.width_px,
            collapsed = state.collapsed,
            subscribers = callbacks.len(),
            "sidebar state propagated"
        );

        for cb in &callbacks {
            cb(&state);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the guard drops the strong `Rc` holding the callback, so the
/// `Weak` in the context's subscriber list fails to upgrade on the next
/// notification cycle.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn initial_state_expanded() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        assert!(!ctx.collapsed());
        assert_eq!(ctx.width_px(), 200);
        assert_eq!(ctx.version(), 0);
    }

    #[test]
    fn collapse_recomputes_width() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        ctx.set_collapsed(true);
        assert_eq!(ctx.width_px(), 64);
        assert_eq!(ctx.version(), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = SidebarContext::new(DeviceTier::TabletPortrait);
        let b = a.clone();
        a.set_collapsed(true);
        assert_eq!(b.width_px(), 64);
        assert!(b.collapsed());
    }

    #[test]
    fn desktop_collapse_is_noop() {
        let ctx = SidebarContext::new(DeviceTier::Desktop);
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let _sub = ctx.subscribe(move |_| seen.set(seen.get() + 1));

        ctx.set_collapsed(true);
        // Width table ignores collapse on desktop: no state change, no notify.
        assert_eq!(ctx.width_px(), 216);
        assert_eq!(ctx.version(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn subscribers_notified_with_new_state() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let widths = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&widths);
        let _sub = ctx.subscribe(move |s| sink.borrow_mut().push(s.width_px));

        ctx.set_collapsed(true);
        ctx.set_collapsed(false);
        assert_eq!(*widths.borrow(), vec![64, 200]);
    }

    #[test]
    fn redundant_set_does_not_notify() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let _sub = ctx.subscribe(move |_| seen.set(seen.get() + 1));

        ctx.set_collapsed(false);
        assert_eq!(count.get(), 0);
        assert_eq!(ctx.version(), 0);
    }

    #[test]
    fn dropped_subscription_stops_callbacks() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let sub = ctx.subscribe(move |_| seen.set(seen.get() + 1));

        ctx.set_collapsed(true);
        assert_eq!(count.get(), 1);

        drop(sub);
        ctx.set_collapsed(false);
        assert_eq!(count.get(), 1);
        // Dead weak refs are pruned during notify.
        assert_eq!(ctx.subscriber_count(), 0);
    }

    #[test]
    fn tier_change_rekeys_width() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        ctx.set_collapsed(true);
        assert_eq!(ctx.width_px(), 64);
        ctx.set_tier(DeviceTier::Desktop);
        // Desktop is fixed-width regardless of the retained collapse flag.
        assert_eq!(ctx.width_px(), 216);
        assert!(ctx.collapsed());
    }

    #[test]
    fn toggle_returns_new_flag() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        assert!(ctx.toggle());
        assert!(!ctx.toggle());
    }

    #[test]
    fn resolve_width_fallback() {
        assert_eq!(SidebarContext::resolve_width(None), DEFAULT_FALLBACK_WIDTH);
        let ctx = SidebarContext::new(DeviceTier::TabletPortrait);
        assert_eq!(SidebarContext::resolve_width(Some(&ctx)), 160);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let ctx = SidebarContext::new(DeviceTier::Tablet);
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let _a = ctx.subscribe(move |_| first.borrow_mut().push("a"));
        let _b = ctx.subscribe(move |_| second.borrow_mut().push("b"));

        ctx.set_collapsed(true);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }
}
