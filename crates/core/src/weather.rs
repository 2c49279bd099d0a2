//! Weather reading types
//!
//! The shape here is the contract: the bundled provider synthesizes
//! readings within the documented ranges, and a real weather integration
//! can be swapped in behind [`crate::traits::WeatherProvider`] without any
//! change to consumers.

use serde::{Deserialize, Serialize};

/// Sky/temperature condition bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Hot,
    Pleasant,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Hot,
        WeatherCondition::Pleasant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Hot => "Hot",
            Self::Pleasant => "Pleasant",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Air quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirQuality {
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQuality {
    pub const ALL: [AirQuality; 4] = [
        AirQuality::Good,
        AirQuality::Moderate,
        AirQuality::Poor,
        AirQuality::VeryPoor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

impl std::fmt::Display for AirQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One environmental reading for a coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in °C, within [20, 40] for the simulated provider
    pub temperature_c: i32,
    pub condition: WeatherCondition,
    /// Relative humidity in %, within [40, 80]
    pub humidity_pct: i32,
    pub air_quality: AirQuality,
    /// UV index, within [1, 11]
    pub uv_index: i32,
    /// Wind speed in km/h, within [5, 20]
    pub wind_speed_kmh: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels() {
        assert_eq!(WeatherCondition::Sunny.to_string(), "Sunny");
        assert_eq!(AirQuality::VeryPoor.to_string(), "Very Poor");
    }

    #[test]
    fn test_enum_cardinality() {
        assert_eq!(WeatherCondition::ALL.len(), 5);
        assert_eq!(AirQuality::ALL.len(), 4);
    }
}
