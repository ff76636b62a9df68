#![forbid(unsafe_code)]

//! Viewport width tracking and resize-burst coalescing.
//!
//! [`Viewport`] owns the current width together with the one [`Breakpoints`]
//! table the application shares, and reports tier transitions so callers can
//! react to boundary crossings instead of every pixel change.
//!
//! [`ResizeCoalescer`] collapses a burst of resize events into the latest
//! width. Hosts that already deliver coalesced resize notifications can feed
//! [`Viewport::resize`] directly; the coalescer is for hosts that do not.
//!
//! # Invariants
//!
//! 1. `tier()` always equals `breakpoints().classify_width(width())`.
//! 2. `resize` returns `Some(TierChange)` iff the tier actually changed.
//! 3. Coalescing is latest-wins: after any push sequence, `flush()` yields
//!    the most recent width or nothing.
//!
//! # Failure Modes
//!
//! None — all operations are infallible.

use crate::breakpoint::{Breakpoints, DeviceTier};

/// A tier boundary crossing reported by [`Viewport::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierChange {
    pub from: DeviceTier,
    pub to: DeviceTier,
}

/// Live viewport width plus the shared breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    breakpoints: Breakpoints,
}

impl Viewport {
    /// Create a viewport with the default breakpoint table.
    #[must_use]
    pub fn new(width: u16) -> Self {
        Self {
            width,
            breakpoints: Breakpoints::DEFAULT,
        }
    }

    /// Override the breakpoint table (builder pattern).
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Current width in pixels.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Current device tier.
    #[must_use]
    pub const fn tier(&self) -> DeviceTier {
        self.breakpoints.classify_width(self.width)
    }

    /// The shared breakpoint table.
    #[must_use]
    pub const fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Apply a resize. Returns the tier transition if one occurred.
    pub fn resize(&mut self, width: u16) -> Option<TierChange> {
        let old = self.tier();
        self.width = width;
        let new = self.tier();
        if old != new {
            Some(TierChange { from: old, to: new })
        } else {
            None
        }
    }
}

/// Coalesces bursts of resize events, keeping only the latest width.
///
/// Not thread-safe; lives on the single event-processing path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeCoalescer {
    pending: Option<u16>,
}

impl ResizeCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resize event. Later widths replace earlier ones.
    pub fn push(&mut self, width: u16) {
        self.pending = Some(width);
    }

    /// Take the pending width, if any, leaving the coalescer empty.
    pub fn flush(&mut self) -> Option<u16> {
        self.pending.take()
    }

    /// Peek at the pending width without consuming it.
    #[must_use]
    pub const fn pending(&self) -> Option<u16> {
        self.pending
    }

    /// Whether a resize is waiting to be flushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
