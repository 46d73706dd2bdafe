//! Source traits (ports) implemented by the REST client

pub mod menu_source;

pub use menu_source::MenuSource;
#[cfg(test)]
pub use menu_source::MockMenuSource;
