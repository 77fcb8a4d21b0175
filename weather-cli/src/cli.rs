use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use weather_core::{Config, DEFAULT_CITY, WeatherClient};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Get current weather for a city")]
pub struct Cli {
    /// City to look up, optionally followed by a country code.
    #[arg(long, default_value = DEFAULT_CITY)]
    pub city: String,
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    Interrupted,
}

impl Cli {
    pub async fn run(self, cancel: CancellationToken) -> anyhow::Result<Outcome> {
        let config = Config::from_env(self.city);
        tracing::debug!(?config, "resolved input");

        let client =
            WeatherClient::from_config(&config).context("Failed to set up the weather client")?;
        tracing::debug!(base_url = client.base_url(), "weather client ready");

        report_weather(&client, &config.city, &cancel, &mut io::stdout()).await
    }
}

/// Fetch, decode and print the weather for `city`, stopping early once
/// `cancel` fires. Nothing is written for a cancelled or failed run.
pub async fn report_weather<W: Write>(
    client: &WeatherClient,
    city: &str,
    cancel: &CancellationToken,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let report = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Ok(Outcome::Interrupted),
        report = client.current_weather(city) => match report {
            Ok(report) => report,
            Err(err) => {
                let mut msg = format!("Failed to get current weather for '{city}'");
                if let Some(hint) = err.hint() {
                    msg.push('\n');
                    msg.push_str(hint);
                }
                return Err(anyhow::Error::new(err).context(msg));
            }
        },
    };

    if cancel.is_cancelled() {
        return Ok(Outcome::Interrupted);
    }

    tracing::debug!(
        observed_at = ?report.observed_at(),
        sunrise = ?report.station.sunrise_utc(),
        sunset = ?report.station.sunset_utc(),
        country = %report.station.country,
        "presenting weather report"
    );

    output::print_report(out, &report).context("Failed to write weather report")?;

    Ok(Outcome::Reported)
}
