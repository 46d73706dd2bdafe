use serde_json::json;
use sso_client::{ApiClient, AuthService, ClientError, MenuService, RequestOptions};
use sso_shared::config::ApiSettings;
use sso_shared::PageRequest;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 200, "msg": "success", "data": data}))
}

fn page() -> serde_json::Value {
    json!({"list": [], "total": 0, "pageNum": 1, "pageSize": 10})
}

#[tokio::test]
async fn test_mutating_call_bootstraps_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ok(json!(null)).insert_header("set-cookie", "XSRF-TOKEN=boot-1; Path=/"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/menus/getAllMenus"))
        .and(header("X-XSRF-TOKEN", "boot-1"))
        .respond_with(ok(page()))
        .expect(2)
        .mount(&server)
        .await;

    let api = ApiClient::new(&ApiSettings::new(server.uri())).unwrap();
    let menus = MenuService::new(api.clone());
    menus.list(&PageRequest::first(MenuService::PAGE_BASE)).await.unwrap();
    // Second call reuses the cached token, no second bootstrap
    menus.list(&PageRequest::first(MenuService::PAGE_BASE)).await.unwrap();
    assert_eq!(api.csrf().token().as_deref(), Some("boot-1"));
}

#[tokio::test]
async fn test_missing_token_never_reaches_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/menus/5"))
        .respond_with(ok(json!(1)))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiClient::new(&ApiSettings::new(server.uri())).unwrap();
    let err = MenuService::new(api).delete("5").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingCsrfToken));
}

#[tokio::test]
async fn test_configured_token_skips_bootstrap() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ok(json!(null)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/menus/5"))
        .and(header("X-XSRF-TOKEN", "fixed"))
        .respond_with(ok(json!(1)))
        .mount(&server)
        .await;

    let mut settings = ApiSettings::new(server.uri());
    settings.csrf_token = Some("fixed".to_string());
    let api = ApiClient::new(&settings).unwrap();
    assert_eq!(MenuService::new(api).delete("5").await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_sends_token_only_when_flagged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ok(json!({"username": "admin", "authorities": ["ROLE_ADMIN"]}))
                .insert_header("set-cookie", "XSRF-TOKEN=from-me; Path=/"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf"))
        .respond_with(ok(json!(null)))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiClient::new(&ApiSettings::new(server.uri())).unwrap();
    // Plain GET: no bootstrap even though no token is known yet
    let me = AuthService::new(api.clone()).me().await.unwrap();
    assert_eq!(me.username, "admin");
    // The cookie on that response is enough for a flagged GET
    assert_eq!(api.csrf().token().as_deref(), Some("from-me"));

    let _: serde_json::Value = api.get("/api/auth/me", RequestOptions::with_csrf()).await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let flagged = requests.last().unwrap();
    assert_eq!(
        flagged.headers.get("X-XSRF-TOKEN").and_then(|v| v.to_str().ok()),
        Some("from-me")
    );
    assert!(requests[0].headers.get("X-XSRF-TOKEN").is_none());
}
