//! Shared types for the Agrimarket workspace
//!
//! Entity models and small helpers used by the market server and any
//! client crates talking to its API.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
