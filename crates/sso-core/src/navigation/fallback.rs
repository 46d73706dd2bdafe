// ============================================================================
// SSO Core - Fallback Navigation
// File: crates/sso-core/src/navigation/fallback.rs
// Description: Static navigation used when the menu service is unreachable
// ============================================================================

use super::deriver::NavItem;
use super::icons::Icon;

const FALLBACK_ENTRIES: [(&str, &str, Icon); 8] = [
    ("dashboard", "Dashboard", Icon::DASHBOARD),
    ("users", "Users", Icon::USERS),
    ("roles", "Roles", Icon::ROLES),
    ("permissions", "Permissions", Icon::PERMISSIONS),
    ("menus", "Menus", Icon::MENUS),
    ("analytics", "Analytics", Icon::ANALYTICS),
    ("audit", "Audit Log", Icon::AUDIT),
    ("settings", "Settings", Icon::SETTINGS),
];

/// Core admin sections, in display order, routed under `path_prefix`.
pub fn fallback_navigation(path_prefix: &str) -> Vec<NavItem> {
    let base = path_prefix.trim_end_matches('/');
    FALLBACK_ENTRIES
        .iter()
        .zip(0..)
        .map(|((id, label, icon), order)| NavItem {
            id: (*id).to_string(),
            menu_id: None,
            label: (*label).to_string(),
            path: format!("{}/{}", base, id),
            icon: *icon,
            sort_order: order,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::deriver::nav_id_from_path;

    #[test]
    fn test_fallback_covers_core_sections() {
        let items = fallback_navigation("/admin/");
        assert_eq!(items.len(), 8);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        for expected in ["dashboard", "users", "roles", "permissions", "menus", "analytics", "audit", "settings"] {
            assert!(ids.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_fallback_ids_match_paths() {
        for item in fallback_navigation("/admin/") {
            assert_eq!(item.path, format!("/admin/{}", item.id));
            assert_eq!(nav_id_from_path(&item.path, "/admin/"), item.id);
            assert!(item.menu_id.is_none());
        }
    }
}
