//! Application State
//!
//! Shared state across all handlers. The location service and classifier
//! are constructed once here and injected by reference; handlers never
//! build their own.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use parking_lot::RwLock;
use tokio::time::Duration;

use vita_path_assistant::{Conversation, IntentClassifier};
use vita_path_config::Settings;
use vita_path_core::Coordinate;
use vita_path_location::{
    CachingSource, FixedPosition, HttpGeocoder, LocationService, SimulatedWeather,
};

use crate::session::SessionManager;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Settings>>,
    /// The process-wide location resolver
    pub location: Arc<LocationService>,
    /// Session manager
    pub sessions: Arc<SessionManager>,
    /// Stateless intent classifier shared by all conversations
    pub classifier: Arc<IntentClassifier>,
    /// Prometheus render handle (absent in tests)
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create application state, wiring the resolver from configuration:
    /// a fixed (or absent) device position behind the cache-tolerance
    /// wrapper, the HTTP geocoder, and the simulated weather provider.
    pub fn new(config: Settings) -> Self {
        let fixed = match (config.location.fixed_latitude, config.location.fixed_longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        };
        let source = CachingSource::new(
            FixedPosition::new(fixed),
            Duration::from_millis(config.location.max_fix_age_ms),
        );
        let geocoder = HttpGeocoder::new(
            config.location.geocoder_base_url.clone(),
            config.location.geocoder_api_key.clone(),
        );
        let location = LocationService::new(
            Arc::new(source),
            Arc::new(geocoder),
            Arc::new(SimulatedWeather::new()),
            &config.location,
        );

        Self::with_location_service(config, Arc::new(location))
    }

    /// Create application state around an existing location service
    /// (tests inject scripted sources through this)
    pub fn with_location_service(config: Settings, location: Arc<LocationService>) -> Self {
        let sessions = SessionManager::with_config(
            config.server.max_sessions,
            Duration::from_secs(config.server.session_timeout_seconds),
            Duration::from_secs(300),
        );

        Self {
            config: Arc::new(RwLock::new(config)),
            location,
            sessions: Arc::new(sessions),
            classifier: Arc::new(IntentClassifier::new()),
            metrics: None,
        }
    }

    /// Attach the Prometheus render handle
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a read guard to the current configuration
    pub fn get_config(&self) -> parking_lot::RwLockReadGuard<'_, Settings> {
        self.config.read()
    }

    /// Build a fresh conversation with the configured reply delay
    pub fn new_conversation(&self) -> Arc<Conversation> {
        let delay = Duration::from_millis(self.get_config().chat.response_delay_ms);
        Arc::new(Conversation::new(self.classifier.clone(), delay))
    }
}
