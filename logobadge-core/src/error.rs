//! Core error types for `LogoBadge`.

use thiserror::Error;

/// Core error type for `LogoBadge` operations.
///
/// Rendering never fails; these errors only come out of strict lookups.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Provider name has no entry in the logo table.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}
