//! Weather provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::geo::Coordinate;
use crate::weather::WeatherReading;

/// Produces an environmental reading for a coordinate.
///
/// The bundled implementation synthesizes readings; a production
/// integration honors only the shape and ranges of [`WeatherReading`].
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn reading(&self, coordinate: Coordinate) -> Result<WeatherReading>;
}
