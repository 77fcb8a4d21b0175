//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Input configuration (city query, API credential)
//! - The OpenWeather current-weather client
//! - The decoded response model and unit conversions
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod units;

pub use client::WeatherClient;
pub use config::{API_TOKEN_ENV, Config, DEFAULT_CITY};
pub use error::WeatherError;
pub use model::{Condition, WeatherReport};
pub use units::kelvin_to_fahrenheit;
