use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{error::WeatherError, units::kelvin_to_fahrenheit};

/// One decoded current-weather response for a city.
///
/// Field names follow the OpenWeather `data/2.5/weather` payload. Missing
/// or `null` fields decode to their zero value; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
    #[serde(deserialize_with = "null_as_default")]
    pub coord: Coordinates,
    #[serde(rename = "weather", deserialize_with = "null_as_default")]
    pub conditions: Vec<Condition>,
    #[serde(deserialize_with = "null_as_default")]
    pub base: String,
    #[serde(rename = "main", deserialize_with = "null_as_default")]
    pub measurements: Measurements,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: Wind,
    #[serde(rename = "clouds", deserialize_with = "null_as_default")]
    pub cloud_cover: CloudCover,
    #[serde(deserialize_with = "null_as_default")]
    pub dt: i64,
    #[serde(rename = "sys", deserialize_with = "null_as_default")]
    pub station: Station,
    #[serde(rename = "id", deserialize_with = "null_as_default")]
    pub city_id: i64,
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub city_name: String,
    #[serde(rename = "cod", deserialize_with = "null_as_default")]
    pub response_code: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lon: f32,
    pub lat: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub main: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
}

/// Temperatures are in Kelvin (the API default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Measurements {
    pub temp: f32,
    pub pressure: i64,
    pub humidity: i64,
    pub temp_min: f32,
    pub temp_max: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Wind {
    /// As returned upstream, meters/second unless another unit was requested.
    pub speed: f32,
    pub deg: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CloudCover {
    pub all: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Station {
    #[serde(rename = "type")]
    pub kind: i64,
    pub id: i64,
    pub message: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl WeatherReport {
    /// Decode a raw response body.
    pub fn decode(body: &[u8]) -> Result<Self, WeatherError> {
        let report: WeatherReport = serde_json::from_slice(body)?;
        tracing::debug!(
            city = %report.city_name,
            city_id = report.city_id,
            conditions = report.conditions.len(),
            "decoded weather report"
        );
        Ok(report)
    }

    /// First entry of the conditions list, if the service sent any.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.conditions.first()
    }

    pub fn temperature_fahrenheit(&self) -> f32 {
        kelvin_to_fahrenheit(self.measurements.temp)
    }

    /// Time of the observation, when the payload carries one.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.dt)
    }
}

impl Station {
    pub fn sunrise_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.sunrise)
    }

    pub fn sunset_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.sunset)
    }
}

// Explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Zero means the field was absent.
fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    if ts == 0 {
        return None;
    }
    DateTime::from_timestamp(ts, 0)
}
