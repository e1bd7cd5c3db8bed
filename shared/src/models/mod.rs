//! Data models
//!
//! Shared between market-server and frontend (via API).
//! All IDs are opaque strings (UUID v4, see [`crate::util::new_id`]).

pub mod demand;
pub mod logistics;
pub mod order;
pub mod stock;
pub mod user;

// Re-exports
pub use demand::*;
pub use logistics::*;
pub use order::*;
pub use stock::*;
pub use user::*;
