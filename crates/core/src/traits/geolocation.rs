//! Device geolocation source trait

use async_trait::async_trait;
use thiserror::Error;

use crate::geo::Coordinate;

/// Why a position fix could not be produced.
///
/// The resolver does not depend on any vendor-specific error shape beyond
/// this classification; every variant takes the same recovery path
/// (fallback place substitution).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Geolocation permission denied")]
    PermissionDenied,

    #[error("Geolocation is not available: {0}")]
    Unavailable(String),

    #[error("Position acquisition timed out")]
    Timeout,
}

/// Supplies the device's current position.
#[async_trait]
pub trait GeolocationSource: Send + Sync {
    /// Acquire a position fix. Implementations may take arbitrarily long;
    /// the resolver bounds the wait with its own timeout.
    async fn current_position(&self) -> Result<Coordinate, PositionError>;
}
