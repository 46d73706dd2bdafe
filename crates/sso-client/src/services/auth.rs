//! Session endpoints: who is signed in and which menus they may see

use async_trait::async_trait;
use sso_core::domain::{CurrentUser, MenuMap, UserProfile};
use sso_core::repositories::MenuSource;
use sso_core::DomainError;
use tracing::debug;

use crate::error::ClientError;
use crate::http::{ApiClient, RequestOptions};

const ME_PATH: &str = "/api/auth/me";
const USERINFO_PATH: &str = "/api/auth/userinfo";
const MENU_TREE_PATH: &str = "/api/auth";

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn me(&self) -> Result<CurrentUser, ClientError> {
        self.api.get(ME_PATH, RequestOptions::default()).await
    }

    pub async fn userinfo(&self) -> Result<UserProfile, ClientError> {
        self.api.post_empty(USERINFO_PATH).await
    }

    /// Menu graph of the signed-in operator, keyed by menu id.
    pub async fn menu_tree(&self) -> Result<MenuMap, ClientError> {
        let map: MenuMap = self.api.post_empty(MENU_TREE_PATH).await?;
        debug!("Fetched {} menu nodes", map.len());
        Ok(map)
    }
}

#[async_trait]
impl MenuSource for AuthService {
    async fn fetch_menus(&self) -> Result<MenuMap, DomainError> {
        Ok(self.menu_tree().await?)
    }
}
