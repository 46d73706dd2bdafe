//! Permission management endpoints

use sso_core::domain::{Permission, PermissionPayload};
use sso_shared::{Page, PageBase, PageRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use super::resource::Resource;

const RESOURCE: Resource = Resource {
    base: "/api/permissions",
    list_action: "getAllPermissions",
    add_action: "addPermission",
    update_action: "updatePermission",
};

#[derive(Debug, Clone)]
pub struct PermissionService {
    api: ApiClient,
}

impl PermissionService {
    /// First page index this endpoint expects.
    pub const PAGE_BASE: PageBase = PageBase::One;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<Permission>, ClientError> {
        RESOURCE.list(&self.api, request).await
    }

    pub async fn get(&self, id: &str) -> Result<Permission, ClientError> {
        RESOURCE.get(&self.api, id).await
    }

    pub async fn create(&self, payload: &PermissionPayload) -> Result<Option<Permission>, ClientError> {
        RESOURCE.create(&self.api, payload).await
    }

    pub async fn update(&self, payload: &PermissionPayload) -> Result<Option<Permission>, ClientError> {
        RESOURCE.update(&self.api, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        RESOURCE.delete(&self.api, id).await
    }
}
