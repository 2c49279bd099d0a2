//! Geolocation source implementations
//!
//! A server deployment has no hardware geolocation of its own: the fix
//! either comes from the client (passed through the refresh endpoint) or
//! from a configured fixed position. Both paths go through the same
//! [`GeolocationSource`] seam the resolver consumes.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::{Duration, Instant};

use vita_path_core::{Coordinate, GeolocationSource, PositionError};

/// A source that always reports the configured position, or `Unavailable`
/// when none is configured. Used for development deployments.
pub struct FixedPosition {
    coordinate: Option<Coordinate>,
}

impl FixedPosition {
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl GeolocationSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        self.coordinate.ok_or_else(|| {
            PositionError::Unavailable("no device position configured".to_string())
        })
    }
}

/// Wraps a source with the position-cache tolerance: a fix younger than
/// `max_age` is reused instead of re-polling hardware. Failures are never
/// cached.
pub struct CachingSource<S> {
    inner: S,
    max_age: Duration,
    last_fix: Mutex<Option<(Coordinate, Instant)>>,
}

impl<S: GeolocationSource> CachingSource<S> {
    pub fn new(inner: S, max_age: Duration) -> Self {
        Self {
            inner,
            max_age,
            last_fix: Mutex::new(None),
        }
    }
}

#[async_trait]
impl<S: GeolocationSource> GeolocationSource for CachingSource<S> {
    async fn current_position(&self) -> Result<Coordinate, PositionError> {
        if let Some((fix, at)) = *self.last_fix.lock() {
            if at.elapsed() <= self.max_age {
                tracing::debug!(age_ms = at.elapsed().as_millis() as u64, "Reusing cached fix");
                return Ok(fix);
            }
        }

        let fix = self.inner.current_position().await?;
        *self.last_fix.lock() = Some((fix, Instant::now()));
        Ok(fix)
    }
}
