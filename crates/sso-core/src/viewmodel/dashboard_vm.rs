//! Dashboard cards
//!
//! One card per visible menu, in display order. Unlike the sidebar there is
//! no fallback: a failed fetch is reported to the caller.

use tracing::{info, warn};

use crate::error::DomainError;
use crate::navigation::{Icon, MenuTreeDeriver};
use crate::domain::MenuType;
use crate::repositories::MenuSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub menu_id: String,
    pub nav_id: String,
    pub title: String,
    pub description: Option<String>,
    pub path: String,
    pub icon: Icon,
    pub menu_type: MenuType,
}

pub struct DashboardCards;

impl DashboardCards {
    pub async fn load<S: MenuSource + ?Sized>(
        source: &S,
        deriver: &MenuTreeDeriver,
    ) -> Result<Vec<DashboardCard>, DomainError> {
        let map = source.fetch_menus().await.map_err(|e| {
            warn!("Dashboard menu fetch failed: {}", e);
            e
        })?;

        let cards: Vec<DashboardCard> = deriver
            .visible_list(&map)
            .into_iter()
            .map(|node| DashboardCard {
                menu_id: node.menu_id.clone(),
                nav_id: deriver.nav_id(&node.menu_path),
                title: node.menu_name.clone(),
                description: node.description.clone(),
                path: node.menu_path.clone(),
                icon: deriver.icon_for(node),
                menu_type: node.menu_type,
            })
            .collect();

        info!("Dashboard loaded {} cards", cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuMap, MenuNode};
    use crate::repositories::MockMenuSource;

    fn node(id: &str, order: i32, menu_type: MenuType, visible: bool) -> MenuNode {
        MenuNode {
            menu_id: id.to_string(),
            menu_name: format!("Card {}", id),
            menu_path: format!("/admin/{}", id),
            menu_icon: Some("audit".to_string()),
            parent_id: None,
            sort_order: order,
            menu_type,
            visible,
            description: Some("desc".to_string()),
        }
    }

    #[tokio::test]
    async fn test_cards_are_visible_and_sorted() {
        let mut source = MockMenuSource::new();
        source.expect_fetch_menus().returning(|| {
            let mut map = MenuMap::new();
            for n in [
                node("a", 3, MenuType::Menu, true),
                node("b", 1, MenuType::Directory, true),
                node("c", 2, MenuType::Button, false),
                node("d", 0, MenuType::Button, true),
            ] {
                map.insert(n.menu_id.clone(), n);
            }
            Ok(map)
        });

        let cards = DashboardCards::load(&source, &MenuTreeDeriver::default()).await.unwrap();
        let ids: Vec<&str> = cards.iter().map(|c| c.menu_id.as_str()).collect();
        // Directories and buttons stay, only visibility filters
        assert_eq!(ids, vec!["d", "b", "a"]);
        assert!(cards.iter().all(|c| c.icon == Icon::AUDIT));
        assert_eq!(cards[2].nav_id, "a");
    }

    #[tokio::test]
    async fn test_fetch_error_is_returned() {
        let mut source = MockMenuSource::new();
        source
            .expect_fetch_menus()
            .returning(|| Err(DomainError::MenuSourceError("boom".into())));

        let result = DashboardCards::load(&source, &MenuTreeDeriver::default()).await;
        assert_eq!(result.unwrap_err(), DomainError::MenuSourceError("boom".into()));
    }
}
