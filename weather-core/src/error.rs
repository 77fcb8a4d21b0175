//! Error kinds surfaced by the weather lookup.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to build weather request: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Weather service did not respond within {0:?}")]
    Timeout(std::time::Duration),

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Weather service rejected the request with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Failed to parse weather JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    /// A short suggestion for the user, for failures they can act on.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Rejected { status, .. } if *status == StatusCode::UNAUTHORIZED => {
                Some("Hint: set API_TOKEN to a valid OpenWeather API key.")
            }
            Self::Rejected { status, .. } if *status == StatusCode::NOT_FOUND => {
                Some("Hint: check the city name, e.g. --city \"London, GB\".")
            }
            Self::Timeout(_) | Self::Network(_) => {
                Some("Hint: check your network connection and try again.")
            }
            _ => None,
        }
    }
}
