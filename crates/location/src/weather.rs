//! Simulated weather provider
//!
//! A stand-in for a real weather integration: uniform draws within the
//! documented ranges. A production provider implements the same trait and
//! replaces this without touching any consumer.

use async_trait::async_trait;
use rand::Rng;

use vita_path_config::constants::weather;
use vita_path_core::{
    AirQuality, Coordinate, Result, WeatherCondition, WeatherProvider, WeatherReading,
};

#[derive(Default)]
pub struct SimulatedWeather;

impl SimulatedWeather {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for SimulatedWeather {
    async fn reading(&self, _coordinate: Coordinate) -> Result<WeatherReading> {
        let mut rng = rand::thread_rng();
        Ok(WeatherReading {
            temperature_c: rng.gen_range(weather::TEMP_MIN_C..=weather::TEMP_MAX_C),
            condition: WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())],
            humidity_pct: rng.gen_range(weather::HUMIDITY_MIN_PCT..=weather::HUMIDITY_MAX_PCT),
            air_quality: AirQuality::ALL[rng.gen_range(0..AirQuality::ALL.len())],
            uv_index: rng.gen_range(weather::UV_INDEX_MIN..=weather::UV_INDEX_MAX),
            wind_speed_kmh: rng.gen_range(weather::WIND_MIN_KMH..=weather::WIND_MAX_KMH),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_readings_stay_in_documented_ranges() {
        let provider = SimulatedWeather::new();
        let coordinate = Coordinate::new(19.076, 72.8777);

        for _ in 0..200 {
            let reading = provider.reading(coordinate).await.unwrap();
            assert!((20..=40).contains(&reading.temperature_c));
            assert!((40..=80).contains(&reading.humidity_pct));
            assert!((1..=11).contains(&reading.uv_index));
            assert!((5..=20).contains(&reading.wind_speed_kmh));
        }
    }
}
