//! User management endpoints. Pages count from 0 here.

use sso_core::domain::{UserAccount, UserPayload};
use sso_shared::{Page, PageBase, PageRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use super::resource::Resource;

const RESOURCE: Resource = Resource {
    base: "/api/users",
    list_action: "getAllUsers",
    add_action: "addUser",
    update_action: "updateUser",
};

#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    /// First page index this endpoint expects.
    pub const PAGE_BASE: PageBase = PageBase::Zero;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<UserAccount>, ClientError> {
        RESOURCE.list(&self.api, request).await
    }

    pub async fn get(&self, id: &str) -> Result<UserAccount, ClientError> {
        RESOURCE.get(&self.api, id).await
    }

    pub async fn create(&self, payload: &UserPayload) -> Result<Option<UserAccount>, ClientError> {
        RESOURCE.create(&self.api, payload).await
    }

    pub async fn update(&self, payload: &UserPayload) -> Result<Option<UserAccount>, ClientError> {
        RESOURCE.update(&self.api, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        RESOURCE.delete(&self.api, id).await
    }

    /// Keyword search narrowed to an exact username match.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, ClientError> {
        let request = PageRequest::first(Self::PAGE_BASE).with_keyword(username);
        let page = self.list(&request).await?;
        Ok(page.list.into_iter().find(|u| u.username == username))
    }
}
