// ============================================================================
// SSO Core - Menu Entity
// File: crates/sso-core/src/domain/menu.rs
// Description: Admin menu node as served by the identity backend
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sso_shared::utils::{deserialize_id, deserialize_optional_id};

use crate::error::DomainError;

/// Menu kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MenuType {
    /// Grouping entry, never navigable.
    Directory,
    /// Navigable leaf.
    Menu,
    /// Permission marker attached to a page.
    Button,
}

impl MenuType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuType::Directory => "directory",
            MenuType::Menu => "menu",
            MenuType::Button => "button",
        }
    }

    pub fn is_navigable(&self) -> bool {
        matches!(self, MenuType::Menu)
    }
}

impl Default for MenuType {
    fn default() -> Self {
        MenuType::Menu
    }
}

impl TryFrom<u8> for MenuType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MenuType::Directory),
            1 => Ok(MenuType::Menu),
            2 => Ok(MenuType::Button),
            other => Err(DomainError::UnknownMenuType(other)),
        }
    }
}

impl From<MenuType> for u8 {
    fn from(value: MenuType) -> Self {
        match value {
            MenuType::Directory => 0,
            MenuType::Menu => 1,
            MenuType::Button => 2,
        }
    }
}

/// One node of the admin menu graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    #[serde(deserialize_with = "deserialize_id")]
    pub menu_id: String,
    pub menu_name: String,
    #[serde(default)]
    pub menu_path: String,
    #[serde(default)]
    pub menu_icon: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub menu_type: MenuType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl MenuNode {
    pub fn is_navigable(&self) -> bool {
        self.visible && self.menu_type.is_navigable()
    }
}

/// Menu graph keyed by menu id.
///
/// Iteration yields entries in ascending menu id order. That order is the
/// source order every consumer uses to break `sort_order` ties; nothing else
/// may depend on it.
pub type MenuMap = BTreeMap<String, MenuNode>;

/// Create/update body for a menu. `menu_id` is only sent on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
    pub menu_name: String,
    pub menu_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub sort_order: i32,
    pub menu_type: MenuType,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_menu_map() {
        let json = r#"{
            "12": {"menuId": 12, "menuName": "Users", "menuPath": "/admin/users",
                   "menuIcon": "users", "parentId": null, "sortOrder": 2,
                   "menuType": 1, "visible": true},
            "3": {"menuId": "3", "menuName": "System", "menuPath": "",
                  "sortOrder": 1, "menuType": 0, "visible": false}
        }"#;

        let map: MenuMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["12"].menu_type, MenuType::Menu);
        assert_eq!(map["12"].menu_id, "12");
        assert_eq!(map["3"].menu_type, MenuType::Directory);
        assert!(map["3"].menu_icon.is_none());
        // BTreeMap orders keys as strings
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["12", "3"]);
    }

    #[test]
    fn test_unknown_menu_type_rejected() {
        let json = r#"{"menuId": "1", "menuName": "X", "menuType": 7}"#;
        assert!(serde_json::from_str::<MenuNode>(json).is_err());
    }

    #[test]
    fn test_menu_type_round_trips_as_integer() {
        assert_eq!(serde_json::to_string(&MenuType::Button).unwrap(), "2");
        assert_eq!(MenuType::try_from(0).unwrap(), MenuType::Directory);
    }

    #[test]
    fn test_payload_omits_id_on_create() {
        let payload = MenuPayload {
            menu_id: None,
            menu_name: "Audit".to_string(),
            menu_path: "/admin/audit".to_string(),
            menu_icon: None,
            parent_id: None,
            sort_order: 7,
            menu_type: MenuType::Menu,
            visible: true,
            description: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("menuId").is_none());
        assert_eq!(value["menuType"], 1);
        assert_eq!(value["sortOrder"], 7);
    }
}
