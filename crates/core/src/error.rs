//! Error types shared across the context service

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Platform denied or lacks geolocation capability
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Position acquisition exceeded the configured timeout
    #[error("Location acquisition timed out after {0}ms")]
    LocationTimeout(u64),

    /// Geocoding provider returned a non-OK status or no results
    #[error("Geocoding failed: {0}")]
    GeocodeFailure(String),

    /// Transport-level failure talking to an external provider
    #[error("Provider request failed: {0}")]
    Provider(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Human-readable message suitable for the non-blocking error badge
    /// shown by consuming views. All location failures collapse into the
    /// same recovery path, so this stays deliberately short.
    pub fn user_message(&self) -> String {
        match self {
            Error::LocationUnavailable(_) => "Unable to get your location".to_string(),
            Error::LocationTimeout(_) => "Location request timed out".to_string(),
            Error::GeocodeFailure(_) | Error::Provider(_) => {
                "Unable to look up your location".to_string()
            }
            Error::Internal(msg) => msg.clone(),
        }
    }
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_short() {
        let err = Error::LocationUnavailable("permission denied by user agent".into());
        assert_eq!(err.user_message(), "Unable to get your location");

        let err = Error::LocationTimeout(10_000);
        assert_eq!(err.user_message(), "Location request timed out");
    }
}
