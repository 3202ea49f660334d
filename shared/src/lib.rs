//! Shared types for the space catalog
//!
//! Source rows, joined views and selection state used by the catalog engine
//! and its front ends.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
