//! Error module orchestrator.
//!
//! The error surface is intentionally small: placement refusals are values
//! (`Placement`), so only lookups, config parsing and I/O end up here.

mod types;

pub use types::{GridError, Result};
