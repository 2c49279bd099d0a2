//! Location context resolution
//!
//! Acquires device coordinates, reverse-geocodes them into a structured
//! place record, derives locale settings from the country, synthesizes a
//! weather reading, and publishes the aggregate as shared, lazily-refreshed
//! context. Every failure degrades totally to a fixed fallback place so
//! that no consuming view is ever left without data.

pub mod context;
pub mod device;
pub mod geocode;
pub mod resolver;
pub mod weather;

pub use context::{fallback_place, LocationContext, ResolutionStatus};
pub use device::{CachingSource, FixedPosition};
pub use geocode::{parse_place, HttpGeocoder};
pub use resolver::LocationService;
pub use weather::SimulatedWeather;
