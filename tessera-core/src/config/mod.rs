//! Panel configuration
//!
//! Board-agnostic configuration structures. The firmware embeds them as a
//! `panel.toml` file and reads it with [`parse_config`].

pub mod toml;
pub mod types;

pub use self::toml::parse_config;
pub use types::*;
