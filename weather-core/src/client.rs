use std::{fmt, time::Duration};

use reqwest::Client;

use crate::{config::Config, error::WeatherError, model::WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Upper bound for the whole request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Fetches current conditions from the OpenWeather API.
///
/// Each call issues exactly one GET; nothing is retried.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Self::new(config.api_key.clone())
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform the request and return the raw body of a successful response.
    pub async fn fetch(&self, city: &str) -> Result<Vec<u8>, WeatherError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let request = self
            .http
            .get(&url)
            .query(&[("APPID", self.api_key.as_str()), ("q", city)])
            .build()
            .map_err(WeatherError::Client)?;

        tracing::debug!(%city, %url, "requesting current weather");

        let res = self.http.execute(request).await.map_err(transport_error)?;

        let status = res.status();
        let body = res.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::warn!(%status, "weather service rejected the request");
            return Err(WeatherError::Rejected {
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        tracing::debug!(%status, bytes = body.len(), "received weather response");
        Ok(body.to_vec())
    }

    /// Fetch and decode the current weather for `city`.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let body = self.fetch(city).await?;
        WeatherReport::decode(&body)
    }
}

impl fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn transport_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() {
        WeatherError::Timeout(REQUEST_TIMEOUT)
    } else {
        WeatherError::Network(err)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
