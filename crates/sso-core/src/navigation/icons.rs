// ============================================================================
// SSO Core - Navigation Icons
// File: crates/sso-core/src/navigation/icons.rs
// Description: Static icon-key lookup for menu entries
// ============================================================================

use std::collections::HashMap;

/// Symbolic icon name understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon(&'static str);

impl Icon {
    pub const DASHBOARD: Icon = Icon("layout-dashboard");
    pub const USERS: Icon = Icon("users");
    pub const ROLES: Icon = Icon("shield");
    pub const PERMISSIONS: Icon = Icon("key");
    pub const MENUS: Icon = Icon("menu");
    pub const CLIENTS: Icon = Icon("app-window");
    pub const RELATIONS: Icon = Icon("link");
    pub const ANALYTICS: Icon = Icon("bar-chart");
    pub const AUDIT: Icon = Icon("file-search");
    pub const SETTINGS: Icon = Icon("settings");
    pub const DEFAULT: Icon = Icon("circle");

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

/// Immutable key → icon table.
///
/// Keys are either icon names as stored in `menuIcon` or full menu paths.
#[derive(Debug, Clone)]
pub struct IconTable {
    entries: HashMap<String, Icon>,
    default: Icon,
}

impl IconTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Icon)>, default: Icon) -> Self {
        Self { entries: entries.into_iter().collect(), default }
    }

    /// Table covering the console's own sections, keyed both by icon name and
    /// by admin route.
    pub fn builtin() -> Self {
        let pairs: [(&str, Icon); 26] = [
            ("dashboard", Icon::DASHBOARD),
            ("home", Icon::DASHBOARD),
            ("user", Icon::USERS),
            ("users", Icon::USERS),
            ("role", Icon::ROLES),
            ("roles", Icon::ROLES),
            ("permission", Icon::PERMISSIONS),
            ("permissions", Icon::PERMISSIONS),
            ("menu", Icon::MENUS),
            ("menus", Icon::MENUS),
            ("client", Icon::CLIENTS),
            ("clients", Icon::CLIENTS),
            ("relation", Icon::RELATIONS),
            ("analytics", Icon::ANALYTICS),
            ("audit", Icon::AUDIT),
            ("settings", Icon::SETTINGS),
            ("/admin/dashboard", Icon::DASHBOARD),
            ("/admin/users", Icon::USERS),
            ("/admin/roles", Icon::ROLES),
            ("/admin/permissions", Icon::PERMISSIONS),
            ("/admin/menus", Icon::MENUS),
            ("/admin/clients", Icon::CLIENTS),
            ("/admin/role-menus", Icon::RELATIONS),
            ("/admin/analytics", Icon::ANALYTICS),
            ("/admin/audit", Icon::AUDIT),
            ("/admin/settings", Icon::SETTINGS),
        ];
        Self::new(pairs.into_iter().map(|(k, v)| (k.to_string(), v)), Icon::DEFAULT)
    }

    pub fn get(&self, key: &str) -> Option<Icon> {
        self.entries.get(key).copied()
    }

    pub fn default_icon(&self) -> Icon {
        self.default
    }

    /// `menu_icon` hit, then `menu_path` hit, then the default. Never fails.
    pub fn resolve(&self, menu_icon: Option<&str>, menu_path: &str) -> Icon {
        menu_icon
            .and_then(|key| self.get(key.trim()))
            .or_else(|| self.get(menu_path))
            .unwrap_or(self.default)
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_icon_key() {
        let table = IconTable::builtin();
        assert_eq!(table.resolve(Some("roles"), "/admin/users"), Icon::ROLES);
    }

    #[test]
    fn test_resolve_falls_back_to_path() {
        let table = IconTable::builtin();
        assert_eq!(table.resolve(Some("no-such-icon"), "/admin/users"), Icon::USERS);
        assert_eq!(table.resolve(None, "/admin/audit"), Icon::AUDIT);
    }

    #[test]
    fn test_resolve_default_when_nothing_matches() {
        let table = IconTable::builtin();
        assert_eq!(table.resolve(Some("???"), "/elsewhere"), Icon::DEFAULT);
        assert_eq!(table.resolve(None, ""), table.default_icon());
    }

    #[test]
    fn test_custom_table() {
        let table = IconTable::new(vec![("x".to_string(), Icon::AUDIT)], Icon::SETTINGS);
        assert_eq!(table.resolve(Some("x"), ""), Icon::AUDIT);
        assert_eq!(table.resolve(None, "y"), Icon::SETTINGS);
    }
}
