#![forbid(unsafe_code)]

//! Static navigation tree: two levels deep, immutable at runtime.
//!
//! A [`NavTree`] wraps the compile-time [`NavItem`] list with a
//! sub-item-path → owning-group index so route changes resolve their group
//! in O(1). The tree is configuration, not state: it is built once near the
//! shell root and shared read-only from then on.
//!
//! # Validation
//!
//! [`NavTree::new`] does not validate — an unmatched or malformed path is a
//! no-op at runtime, never an error. Structural mistakes (duplicate paths,
//! empty labels, nesting deeper than two levels) are configuration bugs the
//! test suite catches by calling [`NavTree::validate`] explicitly.
//!
//! # Invariants
//!
//! 1. The item list never changes after construction.
//! 2. `owning_group` is total: unmatched paths return `None`.
//! 3. When a sub-item path appears under several groups, the index keeps
//!    the first group in declaration order.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One entry of the static menu configuration.
///
/// Top-level items may carry a flat list of sub-items; sub-items never nest
/// further (two levels maximum).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavItem>,
}

impl NavItem {
    /// A leaf item with no sub-items.
    #[must_use]
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            sub_items: Vec::new(),
        }
    }

    /// A top-level group owning a flat list of sub-items.
    #[must_use]
    pub fn group(
        label: impl Into<String>,
        path: impl Into<String>,
        sub_items: impl IntoIterator<Item = NavItem>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            sub_items: sub_items.into_iter().collect(),
        }
    }

    /// Attach an icon name (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether this item owns sub-items.
    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

/// The static menu tree plus its path → owning-group index.
#[derive(Debug, Clone)]
pub struct NavTree {
    items: Vec<NavItem>,
    /// Sub-item path → owning top-level group path. First declaration wins.
    group_of: FxHashMap<String, String>,
}

impl NavTree {
    /// Build a tree from the static item list.
    #[must_use]
    pub fn new(items: Vec<NavItem>) -> Self {
        let mut group_of = FxHashMap::default();
        for item in &items {
            for sub in &item.sub_items {
                group_of
                    .entry(sub.path.clone())
                    .or_insert_with(|| item.path.clone());
            }
        }
        Self { items, group_of }
    }

    /// The top-level items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// The top-level group whose sub-items contain `path`, if any.
    ///
    /// Top-level paths and unknown paths return `None`.
    #[must_use]
    pub fn owning_group(&self, path: &str) -> Option<&str> {
        self.group_of.get(path).map(String::as_str)
    }

    /// Whether any item (either level) carries `path`.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        self.items
            .iter()
            .any(|i| i.path == path || i.sub_items.iter().any(|s| s.path == path))
    }

    /// Check the structural invariants of the configuration.
    ///
    /// Intended for the test suite; runtime code treats malformed paths as
    /// no-ops instead.
    pub fn validate(&self) -> Result<(), NavTreeError> {
        let mut seen: FxHashMap<&str, ()> = FxHashMap::default();
        for item in &self.items {
            Self::validate_item(item, &mut seen)?;
            for sub in &item.sub_items {
                if sub.is_group() {
                    return Err(NavTreeError::TooDeep {
                        path: sub.path.clone(),
                    });
                }
                Self::validate_item(sub, &mut seen)?;
            }
        }
        Ok(())
    }

    fn validate_item<'a>(
        item: &'a NavItem,
        seen: &mut FxHashMap<&'a str, ()>,
    ) -> Result<(), NavTreeError> {
        if item.path.is_empty() {
            return Err(NavTreeError::EmptyPath {
                label: item.label.clone(),
            });
        }
        if item.label.is_empty() {
            return Err(NavTreeError::EmptyLabel {
                path: item.path.clone(),
            });
        }
        if seen.insert(item.path.as_str(), ()).is_some() {
            return Err(NavTreeError::DuplicatePath {
                path: item.path.clone(),
            });
        }
        Ok(())
    }
}

/// Structural configuration errors reported by [`NavTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTreeError {
    /// The same path appears on more than one item.
    DuplicatePath { path: String },
    /// An item has no path.
    EmptyPath { label: String },
    /// An item has no label.
    EmptyLabel { path: String },
    /// A sub-item carries sub-items of its own (two levels maximum).
    TooDeep { path: String },
}

impl fmt::Display for NavTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePath { path } => {
                write!(f, "navigation path {path:?} is declared more than once")
            }
            Self::EmptyPath { label } => {
                write!(f, "navigation item {label:?} has an empty path")
            }
            Self::EmptyLabel { path } => {
                write!(f, "navigation item at {path:?} has an empty label")
            }
            Self::TooDeep { path } => {
                write!(
                    f,
                    "sub-item at {path:?} has its own sub-items (two levels maximum)"
                )
            }
        }
    }
}

impl std::error::Error for NavTreeError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard_tree() -> NavTree {
        NavTree::new(vec![
            NavItem::leaf("Calendario", "/").with_icon("calendar"),
            NavItem::group(
                "Proyectos",
                "/proyectos",
                [
                    NavItem::leaf("Listado", "/proyectos/listado"),
                    NavItem::leaf("Clientes", "/proyectos/clientes"),
                ],
            )
            .with_icon("briefcase"),
            NavItem::group(
                "Facturación",
                "/facturacion",
                [NavItem::leaf("Facturas", "/facturacion/facturas")],
            ),
        ])
    }

    #[test]
    fn owning_group_resolves_sub_items() {
        let tree = dashboard_tree();
        assert_eq!(tree.owning_group("/proyectos/clientes"), Some("/proyectos"));
        assert_eq!(
            tree.owning_group("/facturacion/facturas"),
            Some("/facturacion")
        );
    }

    #[test]
    fn top_level_and_unknown_paths_have_no_group() {
        let tree = dashboard_tree();
        assert_eq!(tree.owning_group("/"), None);
        assert_eq!(tree.owning_group("/proyectos"), None);
        assert_eq!(tree.owning_group("/nope"), None);
    }

    #[test]
    fn contains_path_both_levels() {
        let tree = dashboard_tree();
        assert!(tree.contains_path("/proyectos"));
        assert!(tree.contains_path("/proyectos/listado"));
        assert!(!tree.contains_path("/rrhh"));
    }

    #[test]
    fn duplicate_sub_path_keeps_first_group() {
        let tree = NavTree::new(vec![
            NavItem::group("A", "/a", [NavItem::leaf("X", "/shared")]),
            NavItem::group("B", "/b", [NavItem::leaf("Y", "/shared")]),
        ]);
        assert_eq!(tree.owning_group("/shared"), Some("/a"));
    }

    #[test]
    fn validate_accepts_well_formed_tree() {
        assert!(dashboard_tree().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_paths() {
        let tree = NavTree::new(vec![
            NavItem::leaf("Uno", "/x"),
            NavItem::leaf("Dos", "/x"),
        ]);
        assert_eq!(
            tree.validate(),
            Err(NavTreeError::DuplicatePath {
                path: "/x".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_deep_nesting() {
        let tree = NavTree::new(vec![NavItem::group(
            "A",
            "/a",
            [NavItem::group("B", "/a/b", [NavItem::leaf("C", "/a/b/c")])],
        )]);
        assert!(matches!(
            tree.validate(),
            Err(NavTreeError::TooDeep { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let tree = NavTree::new(vec![NavItem::leaf("", "/x")]);
        assert!(matches!(tree.validate(), Err(NavTreeError::EmptyLabel { .. })));

        let tree = NavTree::new(vec![NavItem::leaf("X", "")]);
        assert!(matches!(tree.validate(), Err(NavTreeError::EmptyPath { .. })));
    }

    #[test]
    fn error_display() {
        let err = NavTreeError::DuplicatePath {
            path: "/x".to_string(),
        };
        assert!(err.to_string().contains("/x"));
    }

    #[test]
    fn serde_skips_empty_fields() {
        let item = NavItem::leaf("Calendario", "/");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("icon"));
        assert!(!json.contains("sub_items"));
        let back: NavItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
