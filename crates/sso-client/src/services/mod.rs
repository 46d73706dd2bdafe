//! Per-entity REST services

pub mod auth;
pub mod clients;
pub mod menus;
pub mod permissions;
pub mod resource;
pub mod role_menus;
pub mod roles;
pub mod users;

pub use auth::AuthService;
pub use clients::ClientService;
pub use menus::MenuService;
pub use permissions::PermissionService;
pub use resource::Resource;
pub use role_menus::RoleMenuService;
pub use roles::RoleService;
pub use users::UserService;
