//! Centralized constants for the context service
//!
//! Single source of truth for the documented numeric contracts. Values
//! that are part of the resolver's and assistant's external behavior live
//! here rather than scattered across call sites.

/// Geolocation acquisition bounds
pub mod geolocation {
    /// Maximum wait for a position fix (ms)
    pub const ACQUIRE_TIMEOUT_MS: u64 = 10_000;

    /// Maximum age of a cached fix that is still acceptable (ms).
    /// A fix younger than this is reused instead of re-polling hardware.
    pub const MAX_FIX_AGE_MS: u64 = 300_000;
}

/// Fallback place substituted whenever live acquisition fails.
///
/// The system never leaves a user without some place and locale: dependent
/// views assume non-null data once loading is over.
pub mod fallback {
    pub const LATITUDE: f64 = 19.076;
    pub const LONGITUDE: f64 = 72.8777;
    pub const CITY: &str = "Mumbai";
    pub const AREA: &str = "Bandra West";
    pub const STATE: &str = "Maharashtra";
    pub const COUNTRY: &str = "India";
    pub const POSTAL_CODE: &str = "400050";
}

/// Ranges for the simulated weather provider
pub mod weather {
    /// Temperature range (°C), inclusive
    pub const TEMP_MIN_C: i32 = 20;
    pub const TEMP_MAX_C: i32 = 40;

    /// Relative humidity range (%), inclusive
    pub const HUMIDITY_MIN_PCT: i32 = 40;
    pub const HUMIDITY_MAX_PCT: i32 = 80;

    /// UV index range, inclusive
    pub const UV_INDEX_MIN: i32 = 1;
    pub const UV_INDEX_MAX: i32 = 11;

    /// Wind speed range (km/h), inclusive
    pub const WIND_MIN_KMH: i32 = 5;
    pub const WIND_MAX_KMH: i32 = 20;
}

/// Chat assistant timings
pub mod chat {
    /// Cosmetic delay before the bot reply is appended (ms). Emulates
    /// processing latency; the ordering guarantee does not depend on it.
    pub const RESPONSE_DELAY_MS: u64 = 1_500;
}

/// Service endpoints (defaults for local development)
pub mod endpoints {
    /// Reverse-geocoding provider base URL
    pub const GEOCODER_DEFAULT: &str = "https://maps.googleapis.com/maps/api/geocode/json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_bounds() {
        assert_eq!(geolocation::ACQUIRE_TIMEOUT_MS, 10_000);
        assert_eq!(geolocation::MAX_FIX_AGE_MS, 300_000);
        assert_eq!(chat::RESPONSE_DELAY_MS, 1_500);
        assert!(weather::TEMP_MIN_C < weather::TEMP_MAX_C);
        assert!(weather::UV_INDEX_MIN >= 1 && weather::UV_INDEX_MAX <= 11);
    }
}
