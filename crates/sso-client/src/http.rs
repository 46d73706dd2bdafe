//! Envelope HTTP client

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sso_shared::config::ApiSettings;
use tracing::{debug, warn};

use crate::csrf::CsrfGuard;
use crate::envelope;
use crate::error::ClientError;

/// Per-request flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    csrf: bool,
}

impl RequestOptions {
    /// Attach the CSRF token to a non-mutating request as well.
    pub fn with_csrf() -> Self {
        Self { csrf: true }
    }

    pub fn needs_csrf(&self) -> bool {
        self.csrf
    }
}

/// Shared handle to the admin API. Cloning is cheap and clones share the
/// cookie jar and the CSRF token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
    csrf: Arc<CsrfGuard>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Config("api.base_url is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            base_url,
            bearer_token: settings.bearer_token.clone().filter(|t| !t.trim().is_empty()),
            csrf: Arc::new(CsrfGuard::from_settings(settings)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn csrf(&self) -> &CsrfGuard {
        &self.csrf
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let request = self.http.request(Method::GET, self.url(path));
        self.execute(Method::GET, path, request, options.needs_csrf()).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.execute(Method::POST, path, request, true).await
    }

    /// POST with an `application/x-www-form-urlencoded` body, used by the
    /// paged list endpoints.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).form(form);
        self.execute(Method::POST, path, request, true).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.http.post(self.url(path));
        self.execute(Method::POST, path, request, true).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let request = self.http.delete(self.url(path));
        self.execute(Method::DELETE, path, request, true).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut request: RequestBuilder,
        with_csrf: bool,
    ) -> Result<T, ClientError> {
        if with_csrf {
            let token = self.csrf.ensure(&self.http, &self.base_url).await?;
            request = request.header(self.csrf.header_name(), token);
        }
        if let Some(bearer) = &self.bearer_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", bearer));
        }

        debug!("{} {}", method, path);
        let response = request.send().await?;
        self.csrf.capture(response.headers());

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} failed with HTTP {}", method, path, status.as_u16());
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        envelope::parse(&body).map_err(|e| {
            if let ClientError::Envelope { code, msg } = &e {
                warn!("{} {} rejected: {} {}", method, path, code, msg);
            }
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new(&ApiSettings::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/auth/me"), "http://localhost:8080/api/auth/me");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(matches!(
            ApiClient::new(&ApiSettings::new("/")),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_request_options() {
        assert!(!RequestOptions::default().needs_csrf());
        assert!(RequestOptions::with_csrf().needs_csrf());
    }
}
