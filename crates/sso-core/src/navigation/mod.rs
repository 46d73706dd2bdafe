//! Menu navigation derivation
//!
//! Turns the backend's menu map into ordered lists for the sidebar and the
//! dashboard cards.

pub mod icons;
pub mod deriver;
pub mod fallback;

pub use deriver::{nav_id_from_path, visible_menus, MenuTreeDeriver, NavItem};
pub use fallback::fallback_navigation;
pub use icons::{Icon, IconTable};
