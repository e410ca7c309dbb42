//! Common types and utilities shared by the formula and document modules.

// Submodule declarations
pub mod error;
pub mod id;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::{generate_id, now_millis};
