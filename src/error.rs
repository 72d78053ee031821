//! Error types for player state management

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Index out of bounds for the supplied episode list
    #[error("Index out of bounds: {index} (list length {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
