//! Core traits and types for the Vita Path context service
//!
//! This crate provides foundational types used across all other crates:
//! - Geographic types (coordinates, resolved place records)
//! - Locale definitions (timezone/currency/language triples)
//! - Weather reading types
//! - Chat message and category types
//! - Core traits for pluggable backends (geolocation, geocoding, weather)
//! - Error types

pub mod chat;
pub mod error;
pub mod geo;
pub mod locale;
pub mod traits;
pub mod weather;

pub use chat::{ChatMessage, MessageAuthor, MessageCategory};
pub use error::{Error, Result};
pub use geo::{AddressComponent, Coordinate, PlaceRecord};
pub use locale::{Language, LocaleSettings, Script};
pub use weather::{AirQuality, WeatherCondition, WeatherReading};

// Trait re-exports
pub use traits::{GeolocationSource, PositionError, ReverseGeocoder, WeatherProvider};
