#![forbid(unsafe_code)]

//! Navigation: static menu tree, bounded expansion state, and the shell facade.
//!
//! # Role in navshell
//! `navshell-nav` owns the navigation-group expansion state machine and the
//! glue that ties classification (`navshell-core`) and layout
//! (`navshell-layout`) into one coherent shell.
//!
//! # Primary responsibilities
//! - **NavTree**: the static, compile-time menu configuration with a path →
//!   owning-group index and structural validation.
//! - **ExpansionSet / ExpansionCoordinator**: which top-level groups are
//!   expanded, capped at two with FIFO eviction, auto-expanding the group
//!   that owns the active route.
//! - **NavViewModel**: one parameterized renderer driven by a per-tier
//!   layout table, replacing per-tier view duplicates.
//! - **NavShell**: the facade hosts feed widths, routes, and toggle intents
//!   into, and read snapshots and view models back out of.
//!
//! # How it fits in the system
//! A host (TUI shell, web bridge, test harness) owns a [`NavShell`], relays
//! resize/route/toggle events to it, and renders from
//! [`NavShell::view_model`]. Routing stays external: the shell only tracks
//! the current path and notifies the registered `on_navigate` callback.

pub mod coordinator;
pub mod expansion;
pub mod shell;
pub mod tree;
pub mod view;

pub use coordinator::{ExpansionCoordinator, TargetState};
pub use expansion::{DEFAULT_CAPACITY, ExpandOutcome, ExpansionSet};
pub use shell::{NavShell, ShellSnapshot};
pub use tree::{NavItem, NavTree, NavTreeError};
pub use view::{NavRow, NavViewModel, Presentation, TierLayout};
