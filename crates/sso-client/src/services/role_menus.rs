//! Role to menu relations

use sso_core::domain::{RoleMenuAssignment, RoleMenuRelation};
use sso_shared::{Page, PageBase, PageRequest};
use tracing::info;

use crate::envelope::affected_count;
use crate::error::ClientError;
use crate::http::{ApiClient, RequestOptions};

const BASE: &str = "/api/role-menus";

#[derive(Debug, Clone)]
pub struct RoleMenuService {
    api: ApiClient,
}

impl RoleMenuService {
    pub const PAGE_BASE: PageBase = PageBase::One;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<RoleMenuRelation>, ClientError> {
        self.api.post_form(&format!("{}/getAllRelations", BASE), request).await
    }

    pub async fn by_role(&self, role_id: &str) -> Result<Vec<RoleMenuRelation>, ClientError> {
        self.api
            .get(&format!("{}/role/{}", BASE, role_id.trim()), RequestOptions::default())
            .await
    }

    /// Replace the menu set of a role.
    pub async fn assign(&self, assignment: &RoleMenuAssignment) -> Result<(), ClientError> {
        let _: serde_json::Value = self.api.post_json(&format!("{}/assign", BASE), assignment).await?;
        info!(
            "Assigned {} menu(s) to role {}",
            assignment.menu_ids.len(),
            assignment.role_id
        );
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        let data: serde_json::Value = self.api.delete(&format!("{}/{}", BASE, id.trim())).await?;
        Ok(affected_count(&data))
    }
}
