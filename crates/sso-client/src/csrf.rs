//! CSRF token handling
//!
//! The backend issues the token as a cookie (`XSRF-TOKEN` by default) and
//! expects it echoed in a header on every mutating request. The token is
//! picked up from any response that sets the cookie; when a mutating call
//! finds none, one bootstrap GET to the CSRF endpoint is made first.

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, SET_COOKIE};
use serde_json::Value;
use sso_shared::config::ApiSettings;
use tracing::{debug, warn};

use crate::error::ClientError;

#[derive(Debug)]
pub struct CsrfGuard {
    cookie_name: String,
    header_name: String,
    path: String,
    /// Configured tokens are never replaced by cookies.
    fixed: bool,
    token: RwLock<Option<String>>,
}

impl CsrfGuard {
    pub fn from_settings(settings: &ApiSettings) -> Self {
        let fixed_token = settings
            .csrf_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            cookie_name: settings.csrf_cookie_name.clone(),
            header_name: settings.csrf_header_name.clone(),
            path: settings.csrf_path.clone(),
            fixed: fixed_token.is_some(),
            token: RwLock::new(fixed_token),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Store the token from a response's `Set-Cookie` headers, if present.
    pub fn capture(&self, headers: &HeaderMap) -> bool {
        if self.fixed {
            return false;
        }
        let found = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| cookie_value(header, &self.cookie_name));
        match found {
            Some(token) => {
                *self.token.write() = Some(token);
                true
            }
            None => false,
        }
    }

    /// Token for a mutating request, bootstrapping it when unknown.
    pub async fn ensure(&self, http: &reqwest::Client, base_url: &str) -> Result<String, ClientError> {
        if let Some(token) = self.token() {
            return Ok(token);
        }

        let url = format!("{}{}", base_url, self.path);
        debug!("Fetching CSRF token from {}", url);
        match http.get(&url).send().await {
            Ok(response) => {
                if !self.capture(response.headers()) {
                    // Some deployments hand the token out in the body instead
                    if let Ok(body) = response.json::<Value>().await {
                        if let Some(token) = token_from_body(&body) {
                            *self.token.write() = Some(token);
                        }
                    }
                }
            }
            Err(e) => warn!("CSRF bootstrap request failed: {}", e),
        }

        self.token().ok_or(ClientError::MissingCsrfToken)
    }
}

/// Value of cookie `name` in one `Set-Cookie` header. Empty values (a
/// cookie being cleared) count as absent.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    let pair = header.split(';').next()?;
    let (key, value) = pair.split_once('=')?;
    if key.trim() != name {
        return None;
    }
    let value = value.trim().trim_matches('"');
    (!value.is_empty()).then(|| value.to_string())
}

fn token_from_body(body: &Value) -> Option<String> {
    let data = body.get("data").unwrap_or(body);
    data.get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn guard(token: Option<&str>) -> CsrfGuard {
        let mut settings = ApiSettings::new("http://localhost");
        settings.csrf_token = token.map(str::to_string);
        CsrfGuard::from_settings(&settings)
    }

    #[test]
    fn test_cookie_value() {
        assert_eq!(
            cookie_value("XSRF-TOKEN=abc123; Path=/; SameSite=Lax", "XSRF-TOKEN"),
            Some("abc123".to_string())
        );
        assert_eq!(cookie_value("SESSION=xyz; HttpOnly", "XSRF-TOKEN"), None);
        assert_eq!(cookie_value("XSRF-TOKEN=; Max-Age=0", "XSRF-TOKEN"), None);
    }

    #[test]
    fn test_capture_from_headers() {
        let guard = guard(None);
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("SESSION=s1; HttpOnly"));
        headers.append(SET_COOKIE, HeaderValue::from_static("XSRF-TOKEN=t1; Path=/"));

        assert!(guard.capture(&headers));
        assert_eq!(guard.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_fixed_token_is_kept() {
        let guard = guard(Some("static"));
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("XSRF-TOKEN=rotated"));

        assert!(!guard.capture(&headers));
        assert_eq!(guard.token().as_deref(), Some("static"));
    }

    #[test]
    fn test_token_from_body() {
        let body = serde_json::json!({"code": 200, "data": {"token": "b1"}});
        assert_eq!(token_from_body(&body).as_deref(), Some("b1"));
        assert_eq!(token_from_body(&serde_json::json!({"code": 200})), None);
    }
}
