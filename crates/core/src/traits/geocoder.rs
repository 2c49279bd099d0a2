//! Reverse-geocoding provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::geo::{AddressComponent, Coordinate};

/// Maps a coordinate to a structured address.
///
/// The contract is the component tagging scheme in
/// [`crate::geo::component_types`]; the provider's transport and response
/// envelope are its own business.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Return the address components for the best match at `coordinate`.
    ///
    /// An empty result or a provider-level failure surfaces as
    /// [`crate::Error::GeocodeFailure`]; the caller recovers with the
    /// fallback place.
    async fn reverse(&self, coordinate: Coordinate) -> Result<Vec<AddressComponent>>;
}
