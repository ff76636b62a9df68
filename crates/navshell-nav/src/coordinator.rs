#![forbid(unsafe_code)]

//! The navigation-group expansion state machine.
//!
//! [`ExpansionCoordinator`] owns the [`ExpansionSet`] and applies the three
//! transitions the shell feeds it:
//!
//! - **toggle**: an explicit expand/collapse request from the user;
//! - **route_changed**: the externally-owned current path moved, so the
//!   group owning the new path auto-expands under the same FIFO cap;
//! - **seeding**: on construction, the set is initialized from whichever
//!   groups contain the current path, in declaration order, capped at
//!   capacity (capped, not evicting — earlier matches win at mount).
//!
//! Navigating into a third group's sub-item silently collapses the
//! least-recently-expanded of the other two. That is the intended
//! space-management policy, not a bug.
//!
//! # Invariants
//!
//! 1. All transitions are total functions over the static tree; an
//!    unmatched path is a no-op.
//! 2. The FIFO cap applies identically to toggles and route changes.
//! 3. Transitions complete synchronously; there is no partially-applied
//!    state to observe.
//!
//! # Failure Modes
//!
//! None — this machine has no error conditions and no terminal state.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::expansion::{ExpandOutcome, ExpansionSet};
use crate::tree::NavTree;

/// Requested end state of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Expanded,
    Collapsed,
}

/// Expansion state machine for the sidebar's navigation groups.
#[derive(Debug, Clone)]
pub struct ExpansionCoordinator {
    tree: Rc<NavTree>,
    set: ExpansionSet,
    /// The path of the most recent explicit user interaction, if any.
    last_interaction: Option<String>,
}

impl ExpansionCoordinator {
    /// Create a coordinator seeded from the current path.
    #[must_use]
    pub fn new(tree: Rc<NavTree>, current_path: &str) -> Self {
        Self::with_set(tree, current_path, ExpansionSet::new())
    }

    /// Create a coordinator with a custom-capacity set, seeded from the
    /// current path.
    #[must_use]
    pub fn with_set(tree: Rc<NavTree>, current_path: &str, mut set: ExpansionSet) -> Self {
        // Seed: groups containing the current path, declaration order,
        // capped at capacity. Capping differs from eviction on purpose.
        for item in tree.items() {
            if set.len() == set.capacity() {
                break;
            }
            if item.sub_items.iter().any(|s| s.path == current_path) {
                set.expand(&item.path);
            }
        }
        Self {
            tree,
            set,
            last_interaction: None,
        }
    }

    /// The shared navigation tree.
    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Currently expanded group paths, oldest-expanded first.
    #[must_use]
    pub fn expanded(&self) -> &[String] {
        self.set.as_slice()
    }

    /// The underlying expansion set (read-only).
    #[must_use]
    pub fn expansion(&self) -> &ExpansionSet {
        &self.set
    }

    /// Whether a group is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, path: &str) -> bool {
        self.set.contains(path)
    }

    /// The path the user most recently toggled, if any.
    #[must_use]
    pub fn last_interaction(&self) -> Option<&str> {
        self.last_interaction.as_deref()
    }

    /// Apply an explicit expand/collapse request.
    ///
    /// Returns the evicted group path when expanding at capacity.
    pub fn toggle(&mut self, path: &str, target: TargetState) -> Option<String> {
        self.last_interaction = Some(path.to_string());
        match target {
            TargetState::Collapsed => {
                let removed = self.set.collapse(path);
                trace!(path, removed, "group collapsed");
                None
            }
            TargetState::Expanded => match self.set.expand(path) {
                ExpandOutcome::AlreadyExpanded => None,
                ExpandOutcome::Expanded { evicted } => {
                    if let Some(evicted) = &evicted {
                        debug!(path, evicted, "expansion evicted oldest group");
                    }
                    evicted
                }
            },
        }
    }

    /// React to a change of the externally-owned current path.
    ///
    /// Expands the owning group under the same FIFO cap as
    /// [`toggle`](Self::toggle). Top-level and unknown paths are no-ops.
    /// Returns the evicted group path, if any.
    pub fn route_changed(&mut self, new_path: &str) -> Option<String> {
        let Some(group) = self.tree.owning_group(new_path) else {
            return None;
        };
        if self.set.contains(group) {
            return None;
        }
        let group = group.to_string();
        match self.set.expand(&group) {
            ExpandOutcome::Expanded { evicted } => {
                debug!(path = new_path, group, "route change auto-expanded group");
                if let Some(evicted) = &evicted {
                    debug!(group, evicted, "auto-expansion evicted oldest group");
                }
                evicted
            }
            // contains() was checked above.
            ExpandOutcome::AlreadyExpanded => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NavItem;

    fn tree() -> Rc<NavTree> {
        Rc::new(NavTree::new(vec![
            NavItem::leaf("Calendario", "/"),
            NavItem::group(
                "Facturación",
                "/facturacion",
                [
                    NavItem::leaf("Facturas", "/facturacion/facturas"),
                    NavItem::leaf("Presupuestos", "/facturacion/presupuestos"),
                ],
            ),
            NavItem::group(
                "Proyectos",
                "/proyectos",
                [
                    NavItem::leaf("Listado", "/proyectos/listado"),
                    NavItem::leaf("Clientes", "/proyectos/clientes"),
                ],
            ),
            NavItem::group(
                "RRHH",
                "/rrhh",
                [NavItem::leaf("Nóminas", "/rrhh/nominas")],
            ),
        ]))
    }

    #[test]
    fn seeds_from_current_path() {
        let coord = ExpansionCoordinator::new(tree(), "/proyectos/clientes");
        assert_eq!(coord.expanded(), ["/proyectos"]);
    }

    #[test]
    fn seeds_empty_for_top_level_path() {
        let coord = ExpansionCoordinator::new(tree(), "/");
        assert!(coord.expanded().is_empty());
    }

    #[test]
    fn route_sync_expands_owning_group() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        assert_eq!(coord.route_changed("/proyectos/clientes"), None);
        assert_eq!(coord.expanded(), ["/proyectos"]);
    }

    #[test]
    fn route_to_already_expanded_group_is_noop() {
        let mut coord = ExpansionCoordinator::new(tree(), "/proyectos/listado");
        assert_eq!(coord.route_changed("/proyectos/clientes"), None);
        assert_eq!(coord.expanded(), ["/proyectos"]);
    }

    #[test]
    fn unmatched_route_is_noop() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        assert_eq!(coord.route_changed("/desconocido"), None);
        assert_eq!(coord.route_changed("/facturacion"), None); // top-level
        assert!(coord.expanded().is_empty());
    }

    #[test]
    fn end_to_end_three_group_sequence() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");

        coord.route_changed("/facturacion/facturas");
        assert_eq!(coord.expanded(), ["/facturacion"]);

        coord.route_changed("/proyectos/listado");
        assert_eq!(coord.expanded(), ["/facturacion", "/proyectos"]);

        let evicted = coord.route_changed("/rrhh/nominas");
        assert_eq!(evicted.as_deref(), Some("/facturacion"));
        assert_eq!(coord.expanded(), ["/proyectos", "/rrhh"]);
    }

    #[test]
    fn toggle_expand_and_collapse() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        coord.toggle("/rrhh", TargetState::Expanded);
        assert!(coord.is_expanded("/rrhh"));
        assert_eq!(coord.last_interaction(), Some("/rrhh"));

        coord.toggle("/rrhh", TargetState::Collapsed);
        assert!(!coord.is_expanded("/rrhh"));
    }

    #[test]
    fn toggle_expand_is_idempotent() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        coord.toggle("/rrhh", TargetState::Expanded);
        assert_eq!(coord.toggle("/rrhh", TargetState::Expanded), None);
        assert_eq!(coord.expanded(), ["/rrhh"]);
    }

    #[test]
    fn collapse_absent_group_is_noop() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        assert_eq!(coord.toggle("/rrhh", TargetState::Collapsed), None);
        assert!(coord.expanded().is_empty());
    }

    #[test]
    fn toggle_at_capacity_evicts_fifo() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        coord.toggle("/facturacion", TargetState::Expanded);
        coord.toggle("/proyectos", TargetState::Expanded);
        let evicted = coord.toggle("/rrhh", TargetState::Expanded);
        assert_eq!(evicted.as_deref(), Some("/facturacion"));
        assert_eq!(coord.expanded(), ["/proyectos", "/rrhh"]);
    }

    #[test]
    fn mixed_toggle_and_route_respect_one_cap() {
        let mut coord = ExpansionCoordinator::new(tree(), "/");
        coord.toggle("/rrhh", TargetState::Expanded);
        coord.route_changed("/facturacion/facturas");
        // Route change into a third group evicts the oldest (the toggle).
        let evicted = coord.route_changed("/proyectos/clientes");
        assert_eq!(evicted.as_deref(), Some("/rrhh"));
        assert_eq!(coord.expanded(), ["/facturacion", "/proyectos"]);
    }
}
