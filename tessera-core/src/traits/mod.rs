//! Collaborator interfaces
//!
//! The paint pipeline talks to exactly two outside parties: the bus to the
//! panel controller and the compositor that answers color queries.

pub mod bus;
pub mod provider;

pub use bus::DisplayBus;
pub use provider::{PixelProvider, ProviderFn};
