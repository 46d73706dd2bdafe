//! Role management endpoints

use sso_core::domain::{Role, RolePayload};
use sso_shared::{Page, PageBase, PageRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use super::resource::Resource;

const RESOURCE: Resource = Resource {
    base: "/api/roles",
    list_action: "getAllRoles",
    add_action: "addRole",
    update_action: "updateRole",
};

#[derive(Debug, Clone)]
pub struct RoleService {
    api: ApiClient,
}

impl RoleService {
    /// First page index this endpoint expects.
    pub const PAGE_BASE: PageBase = PageBase::One;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<Role>, ClientError> {
        RESOURCE.list(&self.api, request).await
    }

    pub async fn get(&self, id: &str) -> Result<Role, ClientError> {
        RESOURCE.get(&self.api, id).await
    }

    pub async fn create(&self, payload: &RolePayload) -> Result<Option<Role>, ClientError> {
        RESOURCE.create(&self.api, payload).await
    }

    pub async fn update(&self, payload: &RolePayload) -> Result<Option<Role>, ClientError> {
        RESOURCE.update(&self.api, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        RESOURCE.delete(&self.api, id).await
    }
}
