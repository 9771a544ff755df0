use thiserror::Error;

use crate::registry::AreaId;

/// Unified result type for the gridcraft crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced by the grid editor core.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("area `{0}` not found")]
    AreaNotFound(AreaId),
    #[error("invalid grid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
