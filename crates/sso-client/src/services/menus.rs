//! Menu management endpoints

use sso_core::domain::{MenuNode, MenuPayload};
use sso_shared::{Page, PageBase, PageRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use super::resource::Resource;

const RESOURCE: Resource = Resource {
    base: "/api/menus",
    list_action: "getAllMenus",
    add_action: "addMenu",
    update_action: "updateMenu",
};

#[derive(Debug, Clone)]
pub struct MenuService {
    api: ApiClient,
}

impl MenuService {
    /// First page index this endpoint expects.
    pub const PAGE_BASE: PageBase = PageBase::One;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<MenuNode>, ClientError> {
        RESOURCE.list(&self.api, request).await
    }

    pub async fn get(&self, id: &str) -> Result<MenuNode, ClientError> {
        RESOURCE.get(&self.api, id).await
    }

    pub async fn create(&self, payload: &MenuPayload) -> Result<Option<MenuNode>, ClientError> {
        RESOURCE.create(&self.api, payload).await
    }

    pub async fn update(&self, payload: &MenuPayload) -> Result<Option<MenuNode>, ClientError> {
        RESOURCE.update(&self.api, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        RESOURCE.delete(&self.api, id).await
    }
}
