//! Trait seams for pluggable backends
//!
//! The resolver treats its collaborators as black boxes with narrow
//! contracts: a geolocation source yields a coordinate or a classified
//! failure, a reverse geocoder yields tagged address components, and a
//! weather provider yields one reading. Implementations live in the
//! location crate; tests substitute scripted fakes.

mod geolocation;
mod geocoder;
mod weather;

pub use geocoder::ReverseGeocoder;
pub use geolocation::{GeolocationSource, PositionError};
pub use weather::WeatherProvider;
