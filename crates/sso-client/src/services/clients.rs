//! Registered OAuth2 client endpoints

use sso_core::domain::{OAuth2Client, OAuth2ClientPayload};
use sso_shared::{Page, PageBase, PageRequest};

use crate::error::ClientError;
use crate::http::ApiClient;
use super::resource::Resource;

const RESOURCE: Resource = Resource {
    base: "/api/oauth2/clients",
    list_action: "getAllClients",
    add_action: "addClient",
    update_action: "updateClient",
};

#[derive(Debug, Clone)]
pub struct ClientService {
    api: ApiClient,
}

impl ClientService {
    /// First page index this endpoint expects.
    pub const PAGE_BASE: PageBase = PageBase::One;

    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, request: &PageRequest) -> Result<Page<OAuth2Client>, ClientError> {
        RESOURCE.list(&self.api, request).await
    }

    pub async fn get(&self, id: &str) -> Result<OAuth2Client, ClientError> {
        RESOURCE.get(&self.api, id).await
    }

    pub async fn create(&self, payload: &OAuth2ClientPayload) -> Result<Option<OAuth2Client>, ClientError> {
        RESOURCE.create(&self.api, payload).await
    }

    pub async fn update(&self, payload: &OAuth2ClientPayload) -> Result<Option<OAuth2Client>, ClientError> {
        RESOURCE.update(&self.api, payload).await
    }

    /// Removes the registration by its row id, not its `client_id`.
    pub async fn delete(&self, id: &str) -> Result<u64, ClientError> {
        RESOURCE.delete(&self.api, id).await
    }

    pub async fn find_by_client_id(&self, client_id: &str) -> Result<Option<OAuth2Client>, ClientError> {
        let request = PageRequest::first(Self::PAGE_BASE).with_keyword(client_id);
        let page = self.list(&request).await?;
        Ok(page.list.into_iter().find(|c| c.client_id == client_id))
    }
}
