#![forbid(unsafe_code)]

//! Capacity-bounded FIFO set of expanded group paths.
//!
//! [`ExpansionSet`] is deliberately *not* an unordered set: eviction order
//! is an observable contract. Entries keep their expansion order (oldest
//! first), a path appears at most once, and expanding beyond capacity
//! evicts the oldest member.
//!
//! # Usage
//!
//! ```
//! use navshell_nav::{ExpandOutcome, ExpansionSet};
//!
//! let mut set = ExpansionSet::new();
//! set.expand("/facturacion");
//! set.expand("/proyectos");
//! // Third expansion evicts the oldest.
//! let outcome = set.expand("/rrhh");
//! assert_eq!(outcome, ExpandOutcome::Expanded { evicted: Some("/facturacion".to_string()) });
//! assert_eq!(set.as_slice(), ["/proyectos", "/rrhh"]);
//! ```
//!
//! # Invariants
//!
//! 1. `len() ≤ capacity` at every point in any call sequence.
//! 2. A path appears at most once; re-expanding is a no-op.
//! 3. `as_slice()` is ordered oldest-expanded first.
//!
//! # Failure Modes
//!
//! None — all operations are total.

/// Default maximum number of simultaneously expanded groups.
pub const DEFAULT_CAPACITY: usize = 2;

/// Result of an [`ExpansionSet::expand`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandOutcome {
    /// The path was already expanded; nothing changed.
    AlreadyExpanded,
    /// The path was appended, evicting the oldest member if at capacity.
    Expanded { evicted: Option<String> },
}

impl ExpandOutcome {
    /// The evicted path, if this expansion displaced one.
    #[must_use]
    pub fn evicted(&self) -> Option<&str> {
        match self {
            Self::Expanded {
                evicted: Some(path),
            } => Some(path),
            _ => None,
        }
    }
}

/// Ordered, capacity-bounded collection of expanded group paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionSet {
    /// Oldest-expanded first. Small and bounded; linear scans are fine.
    entries: Vec<String>,
    capacity: usize,
}

impl ExpansionSet {
    /// An empty set with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty set with a custom capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of simultaneously expanded paths.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently expanded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `path` is currently expanded.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    /// Expanded paths, oldest-expanded first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Expand `path`.
    ///
    /// Idempotent; at capacity the oldest member is evicted (FIFO).
    pub fn expand(&mut self, path: &str) -> ExpandOutcome {
        if self.contains(path) {
            return ExpandOutcome::AlreadyExpanded;
        }
        let evicted = if self.entries.len() == self.capacity {
            Some(self.entries.remove(0))
        } else {
            None
        };
        self.entries.push(path.to_string());
        ExpandOutcome::Expanded { evicted }
    }

    /// Collapse `path`. Returns whether it was expanded.
    ///
    /// No-op if absent.
    pub fn collapse(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p != path);
        self.entries.len() != before
    }
}

impl Default for ExpansionSet {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
