//! # SSO Core - Domain Module
//! 
//! Records the console reads from and writes to the identity backend.

pub mod menu;
pub mod user;
pub mod role;
pub mod permission;
pub mod client_app;
pub mod role_menu;

// Re-export all entities and enums
pub use menu::{MenuMap, MenuNode, MenuPayload, MenuType};
pub use user::{CurrentUser, UserAccount, UserPayload, UserProfile};
pub use role::{Role, RolePayload};
pub use permission::{Permission, PermissionPayload};
pub use client_app::{GrantType, OAuth2Client, OAuth2ClientPayload};
pub use role_menu::{RoleMenuAssignment, RoleMenuRelation};
