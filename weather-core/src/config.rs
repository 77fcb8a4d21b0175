use std::{env, fmt};

/// Environment variable holding the OpenWeather API key.
pub const API_TOKEN_ENV: &str = "API_TOKEN";

/// City queried when `--city` is not given.
pub const DEFAULT_CITY: &str = "San Francisco, US";

/// Inputs for a single lookup: the city query and the API credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub city: String,
    pub api_key: String,
}

impl Config {
    /// Build a config from the city and whatever credential was found.
    ///
    /// A missing key is not an error here; the weather service will reject
    /// the request instead.
    pub fn resolve(city: impl Into<String>, api_key: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_else(|| {
            tracing::warn!("{API_TOKEN_ENV} is not set; the weather service will likely reject the request");
            String::new()
        });

        Self { city: city.into(), api_key }
    }

    /// Read the credential from [`API_TOKEN_ENV`].
    pub fn from_env(city: impl Into<String>) -> Self {
        Self::resolve(city, env::var(API_TOKEN_ENV).ok())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { city: DEFAULT_CITY.to_string(), api_key: String::new() }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("city", &self.city)
            .field("api_key", &if self.has_api_key() { "***" } else { "<unset>" })
            .finish()
    }
}
