//! # SSO Core
//! 
//! Domain entities, menu navigation derivation, view models and forms for
//! the SSO admin console.

pub mod domain;
pub mod navigation;
pub mod viewmodel;
pub mod forms;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
