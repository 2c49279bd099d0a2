//! The location resolution service
//!
//! Owns the single published [`LocationContext`] and is the only writer to
//! it. Consumers receive a watch handle and treat the context as
//! read-only. Refreshes are safe to issue while a prior resolution is
//! still in flight: each resolution carries a generation number, and only
//! the result whose generation is still current is applied, so a stale
//! resolution can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::Duration;

use vita_path_config::LocationConfig;
use vita_path_core::{
    Coordinate, Error, GeolocationSource, LocaleSettings, PositionError, ReverseGeocoder,
    WeatherProvider, WeatherReading,
};

use crate::context::{fallback_place, LocationContext, ResolutionStatus};
use crate::geocode::parse_place;

/// Resolves device position into the shared location context.
pub struct LocationService {
    source: Arc<dyn GeolocationSource>,
    geocoder: Arc<dyn ReverseGeocoder>,
    weather: Arc<dyn WeatherProvider>,
    acquire_timeout: Duration,
    /// Monotonically increasing resolution generation; the latest issued
    /// generation is the only one whose result may be applied.
    generation: AtomicU64,
    tx: watch::Sender<LocationContext>,
}

impl LocationService {
    pub fn new(
        source: Arc<dyn GeolocationSource>,
        geocoder: Arc<dyn ReverseGeocoder>,
        weather: Arc<dyn WeatherProvider>,
        config: &LocationConfig,
    ) -> Self {
        let (tx, _rx) = watch::channel(LocationContext::idle());
        Self {
            source,
            geocoder,
            weather,
            acquire_timeout: Duration::from_millis(config.acquire_timeout_ms),
            generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Subscribe to context updates
    pub fn subscribe(&self) -> watch::Receiver<LocationContext> {
        self.tx.subscribe()
    }

    /// Snapshot of the current context
    pub fn current(&self) -> LocationContext {
        self.tx.borrow().clone()
    }

    /// Acquire the device position and resolve it. Always terminates in
    /// `Ready` or `Failed` + fallback within the acquisition timeout plus
    /// provider time; acquisition errors never escape to the caller.
    pub async fn refresh(&self) -> LocationContext {
        let generation = self.begin();
        let started = std::time::Instant::now();

        let outcome = match tokio::time::timeout(
            self.acquire_timeout,
            self.source.current_position(),
        )
        .await
        {
            Ok(Ok(coordinate)) => self.resolve_coordinate(coordinate).await,
            Ok(Err(err)) => self.acquisition_failed(err).await,
            Err(_) => self.acquisition_failed(PositionError::Timeout).await,
        };

        metrics::histogram!("location_resolution_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        self.apply(generation, outcome)
    }

    /// Resolve a client-supplied coordinate, skipping device acquisition.
    /// This is the browser-geolocation path: the client owns the fix.
    pub async fn refresh_at(&self, coordinate: Coordinate) -> LocationContext {
        let generation = self.begin();
        let outcome = self.resolve_coordinate(coordinate).await;
        self.apply(generation, outcome)
    }

    /// Issue a new generation and publish the loading state. Prior
    /// place/locale/weather are kept so views render through the refresh.
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_modify(|ctx| {
            let prior = std::mem::take(ctx);
            *ctx = prior.into_loading();
        });
        tracing::debug!(generation, "Location resolution started");
        generation
    }

    async fn resolve_coordinate(&self, coordinate: Coordinate) -> LocationContext {
        match self.geocoder.reverse(coordinate).await {
            Ok(components) => {
                let place = parse_place(coordinate, &components);
                let locale = LocaleSettings::for_country(&place.country);
                match self.weather.reading(coordinate).await {
                    Ok(weather) => {
                        tracing::info!(
                            city = %place.city,
                            country = %place.country,
                            timezone = %locale.timezone,
                            "Location resolved"
                        );
                        LocationContext::ready(place, locale, weather)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Weather provider failed, substituting fallback");
                        LocationContext::failed(err.user_message(), None)
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, %coordinate, "Reverse geocoding failed, substituting fallback");
                let weather = self.weather.reading(coordinate).await.ok();
                LocationContext::failed(err.user_message(), weather)
            }
        }
    }

    /// Convert an acquisition failure into the failed-with-fallback
    /// context. Weather is still synthesized (for the fallback coordinate)
    /// so every panel stays renderable.
    async fn acquisition_failed(&self, err: PositionError) -> LocationContext {
        let err = match err {
            PositionError::Timeout => {
                Error::LocationTimeout(self.acquire_timeout.as_millis() as u64)
            }
            PositionError::PermissionDenied => {
                Error::LocationUnavailable("permission denied".to_string())
            }
            PositionError::Unavailable(msg) => Error::LocationUnavailable(msg),
        };
        tracing::warn!(error = %err, "Position acquisition failed, substituting fallback");

        let weather = self.fallback_weather().await;
        LocationContext::failed(err.user_message(), weather)
    }

    async fn fallback_weather(&self) -> Option<WeatherReading> {
        self.weather
            .reading(fallback_place().coordinate)
            .await
            .ok()
    }

    /// Apply a resolution result unless a newer generation has been issued
    /// in the meantime. The check-and-set runs under the watch channel's
    /// lock, so a stale result can never clobber a newer one.
    fn apply(&self, generation: u64, outcome: LocationContext) -> LocationContext {
        let mut applied = false;
        self.tx.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) == generation {
                *current = outcome.clone();
                applied = true;
                true
            } else {
                false
            }
        });

        if applied {
            let label = match outcome.status {
                ResolutionStatus::Ready => "ready",
                ResolutionStatus::Failed => "failed",
                // apply() is only called with terminal outcomes
                ResolutionStatus::Idle | ResolutionStatus::Loading => "other",
            };
            metrics::counter!("location_resolutions_total", "outcome" => label).increment(1);
            outcome
        } else {
            tracing::debug!(generation, "Discarding stale resolution result");
            metrics::counter!("location_resolutions_total", "outcome" => "discarded").increment(1);
            self.current()
        }
    }
}
