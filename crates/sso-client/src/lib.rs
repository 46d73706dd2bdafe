//! REST client for the identity backend's admin API
//!
//! Every endpoint answers with a `{code, msg, data}` envelope. The client
//! unwraps it, keeps the CSRF token current and exposes one service per
//! managed entity.

pub mod csrf;
pub mod envelope;
pub mod error;
pub mod http;
pub mod services;

pub use error::ClientError;
pub use http::{ApiClient, RequestOptions};
pub use services::{
    AuthService, ClientService, MenuService, PermissionService, RoleMenuService, RoleService,
    UserService,
};
