// ============================================================================
// SSO Core - Menu Tree Deriver
// File: crates/sso-core/src/navigation/deriver.rs
// Description: Menu map -> ordered, filtered, icon-resolved navigation
// ============================================================================

use sso_shared::constants::DEFAULT_NAV_PATH_PREFIX;

use crate::domain::{MenuMap, MenuNode};
use super::icons::{Icon, IconTable};

/// One entry of the primary navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Short id derived from the path, used for active-state highlighting.
    pub id: String,
    pub menu_id: Option<String>,
    pub label: String,
    pub path: String,
    pub icon: Icon,
    pub sort_order: i32,
}

/// Visible nodes sorted by `sort_order`.
///
/// The sort is stable over the map's iteration order (menu id ascending), so
/// equal `sort_order` values come out by menu id.
pub fn visible_menus(map: &MenuMap) -> Vec<&MenuNode> {
    let mut nodes: Vec<&MenuNode> = map.values().filter(|node| node.visible).collect();
    nodes.sort_by_key(|node| node.sort_order);
    nodes
}

/// Strip `prefix` and any surrounding separators from a menu path.
pub fn nav_id_from_path(path: &str, prefix: &str) -> String {
    let path = path.trim();
    let rest = if prefix.is_empty() {
        path
    } else {
        path.strip_prefix(prefix).unwrap_or(path)
    };
    rest.trim_end_matches('/').trim_start_matches('/').to_string()
}

#[derive(Debug, Clone)]
pub struct MenuTreeDeriver {
    icons: IconTable,
    path_prefix: String,
}

impl Default for MenuTreeDeriver {
    fn default() -> Self {
        Self::new(IconTable::builtin(), DEFAULT_NAV_PATH_PREFIX)
    }
}

impl MenuTreeDeriver {
    pub fn new(icons: IconTable, path_prefix: impl Into<String>) -> Self {
        Self { icons, path_prefix: path_prefix.into() }
    }

    pub fn icons(&self) -> &IconTable {
        &self.icons
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn nav_id(&self, path: &str) -> String {
        nav_id_from_path(path, &self.path_prefix)
    }

    pub fn icon_for(&self, node: &MenuNode) -> Icon {
        self.icons.resolve(node.menu_icon.as_deref(), &node.menu_path)
    }

    /// Visible list for generic card display.
    pub fn visible_list<'a>(&self, map: &'a MenuMap) -> Vec<&'a MenuNode> {
        visible_menus(map)
    }

    /// Primary navigation: visible navigable leaves only, directories and
    /// buttons never appear.
    pub fn navigation_items(&self, map: &MenuMap) -> Vec<NavItem> {
        visible_menus(map)
            .into_iter()
            .filter(|node| node.menu_type.is_navigable())
            .map(|node| self.to_nav_item(node))
            .collect()
    }

    pub fn to_nav_item(&self, node: &MenuNode) -> NavItem {
        NavItem {
            id: self.nav_id(&node.menu_path),
            menu_id: Some(node.menu_id.clone()),
            label: node.menu_name.clone(),
            path: node.menu_path.clone(),
            icon: self.icon_for(node),
            sort_order: node.sort_order,
        }
    }

    /// Entry to highlight for `current_path`: exact id match first, then the
    /// longest id that is a segment prefix of the current id.
    pub fn active_item<'a>(&self, items: &'a [NavItem], current_path: &str) -> Option<&'a NavItem> {
        let current = self.nav_id(current_path);
        if let Some(exact) = items.iter().find(|item| item.id == current) {
            return Some(exact);
        }
        items
            .iter()
            .filter(|item| {
                !item.id.is_empty()
                    && current.len() > item.id.len()
                    && current.starts_with(&item.id)
                    && current.as_bytes()[item.id.len()] == b'/'
            })
            .max_by_key(|item| item.id.len())
    }
}
