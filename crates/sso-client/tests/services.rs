use serde_json::json;
use sso_client::{
    ApiClient, AuthService, ClientError, ClientService, MenuService, RoleMenuService, UserService,
};
use sso_core::domain::{MenuType, RoleMenuAssignment, UserPayload};
use sso_core::navigation::MenuTreeDeriver;
use sso_core::repositories::MenuSource;
use sso_core::viewmodel::DashboardCards;
use sso_core::DomainError;
use sso_shared::config::ApiSettings;
use sso_shared::constants::GENERIC_FAILURE_MESSAGE;
use sso_shared::{PageBase, PageRequest};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 200, "msg": "success", "data": data}))
}

fn failed(code: i64, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": code, "msg": msg, "data": null}))
}

async fn client(server: &MockServer) -> ApiClient {
    let mut settings = ApiSettings::new(server.uri());
    settings.csrf_token = Some("test-token".to_string());
    ApiClient::new(&settings).unwrap()
}

#[tokio::test]
async fn test_menu_tree_feeds_menu_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ok(json!({
            "1": {"menuId": 1, "menuName": "Users", "menuPath": "/admin/users",
                  "menuIcon": "users", "sortOrder": 2, "menuType": 1, "visible": true},
            "2": {"menuId": 2, "menuName": "System", "menuPath": "/admin/system",
                  "sortOrder": 1, "menuType": 0, "visible": true},
            "3": {"menuId": "3", "menuName": "Hidden", "menuPath": "/admin/hidden",
                  "sortOrder": 0, "menuType": 1, "visible": false}
        })))
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server).await);
    let map = auth.fetch_menus().await.unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["2"].menu_type, MenuType::Directory);

    let cards = DashboardCards::load(&auth, &MenuTreeDeriver::default()).await.unwrap();
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["System", "Users"]);
}

#[tokio::test]
async fn test_envelope_error_becomes_domain_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(failed(401, "Login expired"))
        .mount(&server)
        .await;

    let auth = AuthService::new(client(&server).await);
    assert_eq!(
        auth.fetch_menus().await.unwrap_err(),
        DomainError::MenuSourceError("Login expired".into())
    );
}

#[tokio::test]
async fn test_http_failure_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = AuthService::new(client(&server).await).me().await.unwrap_err();
    assert!(matches!(err, ClientError::Status(502)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_userinfo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/userinfo"))
        .respond_with(ok(json!({
            "userId": 7, "username": "admin", "email": "admin@example.com",
            "roles": ["ROLE_ADMIN"]
        })))
        .mount(&server)
        .await;

    let profile = AuthService::new(client(&server).await).userinfo().await.unwrap();
    assert_eq!(profile.user_id, "7");
    assert_eq!(profile.roles, vec!["ROLE_ADMIN"]);
}

#[tokio::test]
async fn test_user_list_is_zero_based_and_form_encoded() {
    assert_eq!(UserService::PAGE_BASE, PageBase::Zero);
    assert_eq!(MenuService::PAGE_BASE, PageBase::One);
    assert_eq!(ClientService::PAGE_BASE, PageBase::One);
    assert_eq!(RoleMenuService::PAGE_BASE, PageBase::One);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/getAllUsers"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("page=0"))
        .and(body_string_contains("keyword=ali"))
        .respond_with(ok(json!({
            "list": [{"userId": 1, "username": "alice"}, {"userId": 2, "username": "alina"}],
            "total": 2, "pageNum": 0, "pageSize": 10
        })))
        .mount(&server)
        .await;

    let users = UserService::new(client(&server).await);
    let request = PageRequest::first(UserService::PAGE_BASE).with_keyword("ali");
    let page = users.list(&request).await.unwrap();
    assert_eq!(page.total, 2);
    assert!(page.list[0].enabled);

    let alice = users.find_by_username("ali").await.unwrap();
    assert!(alice.is_none());
}

#[tokio::test]
async fn test_user_create_sends_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/addUser"))
        .and(header("X-XSRF-TOKEN", "test-token"))
        .and(body_string_contains("\"username\":\"bob\""))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let payload = UserPayload {
        user_id: None,
        username: "bob".into(),
        nickname: None,
        email: "bob@example.com".into(),
        phone: None,
        password: Some("s3cret-pass".into()),
        enabled: true,
        role_ids: vec![],
    };
    let created = UserService::new(client(&server).await).create(&payload).await.unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn test_menu_get_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menus/12"))
        .respond_with(ok(json!({"menuId": 12, "menuName": "Audit", "menuPath": "/admin/audit"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/menus/12"))
        .respond_with(ok(json!(1)))
        .mount(&server)
        .await;

    let menus = MenuService::new(client(&server).await);
    let menu = menus.get("12").await.unwrap();
    assert_eq!(menu.menu_name, "Audit");
    assert!(menu.visible);
    assert_eq!(menus.delete("12").await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_rejected_by_backend() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/oauth2/clients/4"))
        .respond_with(failed(500, ""))
        .mount(&server)
        .await;

    let err = ClientService::new(client(&server).await).delete("4").await.unwrap_err();
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_role_menu_assign_and_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/role-menus/assign"))
        .and(body_string_contains("\"menuIds\":[\"m1\",\"m2\"]"))
        .respond_with(ok(json!(2)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/role-menus/role/r1"))
        .respond_with(ok(json!([{"id": 1, "roleId": "r1", "menuId": 5}])))
        .mount(&server)
        .await;

    let relations = RoleMenuService::new(client(&server).await);
    relations
        .assign(&RoleMenuAssignment::new("r1", vec!["m1".into(), "m2".into(), "m1".into()]))
        .await
        .unwrap();
    let found = relations.by_role("r1").await.unwrap();
    assert_eq!(found[0].menu_id, "5");
}
