//! Menu source trait (port)

use async_trait::async_trait;

use crate::domain::MenuMap;
use crate::error::DomainError;

/// Supplies the signed-in operator's menu graph.
///
/// Every call is a fresh fetch; implementations must not cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menus(&self) -> Result<MenuMap, DomainError>;
}
