//! Shared CRUD endpoint layout
//!
//! Each managed entity lives under one base path with the same five calls:
//! `POST {base}/getAll{Plural}` (form-encoded page request),
//! `GET {base}/{id}`, `POST {base}/add{Entity}`, `POST {base}/update{Entity}`
//! and `DELETE {base}/{id}`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sso_shared::{Page, PageRequest};
use tracing::info;

use crate::envelope::affected_count;
use crate::error::ClientError;
use crate::http::{ApiClient, RequestOptions};

#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub base: &'static str,
    pub list_action: &'static str,
    pub add_action: &'static str,
    pub update_action: &'static str,
}

impl Resource {
    pub fn list_path(&self) -> String {
        format!("{}/{}", self.base, self.list_action)
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base, id.trim())
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        api: &ApiClient,
        request: &PageRequest,
    ) -> Result<Page<T>, ClientError> {
        api.post_form(&self.list_path(), request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, api: &ApiClient, id: &str) -> Result<T, ClientError> {
        api.get(&self.item_path(id), RequestOptions::default()).await
    }

    /// The backend answers with the stored record or with nothing.
    pub async fn create<B, T>(&self, api: &ApiClient, payload: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = format!("{}/{}", self.base, self.add_action);
        let created = api.post_json(&path, payload).await?;
        info!("Created record via {}", path);
        Ok(created)
    }

    pub async fn update<B, T>(&self, api: &ApiClient, payload: &B) -> Result<Option<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = format!("{}/{}", self.base, self.update_action);
        let updated = api.post_json(&path, payload).await?;
        info!("Updated record via {}", path);
        Ok(updated)
    }

    /// Number of rows the backend reports as removed.
    pub async fn delete(&self, api: &ApiClient, id: &str) -> Result<u64, ClientError> {
        let data: Value = api.delete(&self.item_path(id)).await?;
        let count = affected_count(&data);
        info!("Deleted {} ({} affected)", self.item_path(id), count);
        Ok(count)
    }
}
