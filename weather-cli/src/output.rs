//! Human-readable rendering of a weather report.

use std::io::{self, Write};

use figlet_rs::FIGfont;
use weather_core::WeatherReport;

/// Printed in place of the description when the service sent no conditions.
pub const MISSING_CONDITION: &str = "Unknown";

/// Render `name` in block letters, or return it unchanged when the font
/// cannot (e.g. an empty name).
pub fn banner(name: &str) -> String {
    if name.trim().is_empty() {
        return name.to_string();
    }

    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(name).map(|figure| figure.to_string()))
        .unwrap_or_else(|| name.to_string())
}

/// Write the banner followed by the temperature, wind and cloud lines.
///
/// Wind speed is printed as received and labelled `kph`; the API's default
/// unit is actually m/s.
pub fn print_report<W: Write>(out: &mut W, report: &WeatherReport) -> io::Result<()> {
    let description = report
        .primary_condition()
        .map(|c| c.description.as_str())
        .unwrap_or(MISSING_CONDITION);

    writeln!(out, "{}", banner(&report.city_name).trim_end_matches('\n'))?;
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "Current: {:.2}F", report.temperature_fahrenheit())?;
    writeln!(out, "Wind: {:.1}kph", report.wind.speed)?;
    writeln!(out, "Clouds: {description}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &WeatherReport) -> String {
        let mut buf = Vec::new();
        print_report(&mut buf, report).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("report is utf-8")
    }

    fn london() -> WeatherReport {
        WeatherReport::decode(
            br#"{"name": "London", "main": {"temp": 290.0}, "wind": {"speed": 5.5},
                 "weather": [{"description": "clear sky"}, {"description": "mist"}]}"#,
        )
        .expect("valid payload")
    }

    #[test]
    fn prints_banner_and_report_lines() {
        let text = render(&london());
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.starts_with(banner("London").trim_end_matches('\n')));
        assert!(lines.contains(&"Current: 62.00F"));
        assert!(lines.contains(&"Wind: 5.5kph"));
        assert!(lines.contains(&"Clouds: clear sky"));
        assert!(!text.contains("mist"));
    }

    #[test]
    fn report_lines_come_last_in_order() {
        let text = render(&london());
        let tail: Vec<&str> = text.lines().rev().take(3).collect();

        assert_eq!(tail, vec!["Clouds: clear sky", "Wind: 5.5kph", "Current: 62.00F"]);
    }

    #[test]
    fn two_blank_lines_separate_banner_from_report() {
        let text = render(&london());
        let lines: Vec<&str> = text.lines().collect();
        let banner_height = banner("London").trim_end_matches('\n').lines().count();

        assert_eq!(&lines[banner_height..banner_height + 3], ["", "", "Current: 62.00F"]);
        assert_eq!(lines.len(), banner_height + 5);
    }

    #[test]
    fn empty_conditions_print_placeholder() {
        let mut report = london();
        report.conditions.clear();

        let text = render(&report);
        assert!(text.lines().any(|l| l == "Clouds: Unknown"));
    }

    #[test]
    fn temperature_always_has_zero_fraction() {
        let mut report = london();
        report.measurements.temp = 300.0;

        assert!(render(&report).lines().any(|l| l == "Current: 80.00F"));
    }

    #[test]
    fn banner_is_multiline_block_text() {
        let art = banner("London");
        assert!(art.lines().count() > 1);
        assert_ne!(art.trim(), "London");
    }

    #[test]
    fn banner_falls_back_to_plain_name_when_empty() {
        assert_eq!(banner(""), "");
    }
}
