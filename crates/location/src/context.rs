//! The published location context and its lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vita_path_config::constants::fallback;
use vita_path_core::{Coordinate, LocaleSettings, PlaceRecord, WeatherReading};

/// Resolution lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    /// Created at application start, before any resolution
    #[default]
    Idle,
    /// A resolution is in flight
    Loading,
    /// Place and weather are both set from a successful resolution
    Ready,
    /// Resolution failed; the fallback place has been substituted
    Failed,
}

/// The aggregate state published to all consumers.
///
/// Exactly one live instance exists per running service, owned by the
/// resolver and handed to views read-only; only the resolver's own refresh
/// replaces it. Once `status` leaves `Loading`, `place` and `locale` are
/// always populated (live or fallback).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocationContext {
    pub place: Option<PlaceRecord>,
    pub locale: Option<LocaleSettings>,
    pub weather: Option<WeatherReading>,
    pub status: ResolutionStatus,
    /// Human-readable failure description, rendered as a dismissible badge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the current place/weather were produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl LocationContext {
    /// The initial context at application start
    pub fn idle() -> Self {
        Self::default()
    }

    /// Re-enter `Loading`, keeping any previously resolved data so views
    /// can keep rendering during a refresh. The error badge is cleared.
    pub fn into_loading(mut self) -> Self {
        self.status = ResolutionStatus::Loading;
        self.error = None;
        self
    }

    /// A successful resolution
    pub fn ready(place: PlaceRecord, locale: LocaleSettings, weather: WeatherReading) -> Self {
        Self {
            place: Some(place),
            locale: Some(locale),
            weather: Some(weather),
            status: ResolutionStatus::Ready,
            error: None,
            resolved_at: Some(Utc::now()),
        }
    }

    /// A failed resolution with the fallback place substituted. The
    /// context is still fully renderable; only the error badge differs
    /// from the ready state.
    pub fn failed(error: impl Into<String>, weather: Option<WeatherReading>) -> Self {
        let place = fallback_place();
        let locale = LocaleSettings::for_country(&place.country);
        Self {
            place: Some(place),
            locale: Some(locale),
            weather,
            status: ResolutionStatus::Failed,
            error: Some(error.into()),
            resolved_at: Some(Utc::now()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ResolutionStatus::Loading
    }
}

/// The fixed place substituted whenever live acquisition fails
pub fn fallback_place() -> PlaceRecord {
    PlaceRecord {
        coordinate: Coordinate::new(fallback::LATITUDE, fallback::LONGITUDE),
        city: fallback::CITY.to_string(),
        area: fallback::AREA.to_string(),
        state: fallback::STATE.to_string(),
        country: fallback::COUNTRY.to_string(),
        postal_code: fallback::POSTAL_CODE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_path_core::Language;

    #[test]
    fn test_fallback_place() {
        let place = fallback_place();
        assert_eq!(place.city, "Mumbai");
        assert_eq!(place.area, "Bandra West");
        assert_eq!(place.state, "Maharashtra");
        assert_eq!(place.country, "India");
        assert_eq!(place.postal_code, "400050");
        assert!((place.coordinate.latitude - 19.076).abs() < 1e-6);
    }

    #[test]
    fn test_failed_context_is_renderable() {
        let ctx = LocationContext::failed("Unable to get your location", None);
        assert_eq!(ctx.status, ResolutionStatus::Failed);
        let place = ctx.place.expect("fallback place must be substituted");
        assert_eq!(place.country, "India");
        let locale = ctx.locale.expect("fallback locale must be derived");
        assert_eq!(locale.timezone, "Asia/Kolkata");
        assert_eq!(locale.currency, "INR");
        assert_eq!(locale.language, Language::Hindi);
        assert!(ctx.error.is_some());
    }

    #[test]
    fn test_loading_keeps_prior_data_and_clears_error() {
        let ctx = LocationContext::failed("timed out", None).into_loading();
        assert_eq!(ctx.status, ResolutionStatus::Loading);
        assert!(ctx.error.is_none());
        assert!(ctx.place.is_some());
    }

    #[test]
    fn test_initial_state_is_idle() {
        let ctx = LocationContext::idle();
        assert_eq!(ctx.status, ResolutionStatus::Idle);
        assert!(ctx.place.is_none());
        assert!(ctx.locale.is_none());
        assert!(ctx.weather.is_none());
    }
}
