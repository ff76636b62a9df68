#![forbid(unsafe_code)]

//! Core: device tiers, breakpoint tables, and viewport tracking.
//!
//! # Role in navshell
//! `navshell-core` is the classification layer. It owns the mapping from a
//! live viewport width to a [`DeviceTier`] and the bookkeeping around resize
//! events, so every other crate can reason in tiers instead of raw pixels.
//!
//! # Primary responsibilities
//! - **DeviceTier / Breakpoints**: pure width → tier classification with a
//!   single configurable threshold table.
//! - **Viewport**: owns the current width and reports tier transitions.
//! - **ResizeCoalescer**: latest-wins coalescing of resize event bursts.
//!
//! # How it fits in the system
//! The layout crate (`navshell-layout`) resolves sidebar widths and content
//! bands from the tier this crate produces; the navigation crate
//! (`navshell-nav`) wires both behind its shell facade. Nothing outside this
//! crate classifies raw widths — all call sites share one table instance.

pub mod breakpoint;
pub mod viewport;

pub use breakpoint::{Breakpoints, DeviceTier};
pub use viewport::{ResizeCoalescer, TierChange, Viewport};
