use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn temperature_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // An integer directly followed by the °C marker. Narratives mention
        // plenty of other numbers; the unit is what disambiguates.
        Regex::new(r"(\d+)°C").expect("valid temperature regex")
    })
}

fn rain_chance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)%").expect("valid percent regex"))
}

/// Structured fields best-effort extracted from a weather narrative.
///
/// Derived fresh from the raw text each time it is needed; the text stays the
/// source of truth and re-extraction is cheap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWeather {
    pub temperature_c: Option<i32>,
    pub rain_chance_pct: Option<u32>,
}

/// Scans free-form weather text for a temperature and a rain chance.
///
/// The two scans are independent: a percentage counts as rain chance even when
/// it appears nowhere near the temperature. First match wins in each scan, and
/// a missing or malformed pattern degrades to `None` rather than an error.
pub fn parse_weather(text: Option<&str>) -> ParsedWeather {
    let Some(text) = text else {
        return ParsedWeather::default();
    };

    let temperature_c = temperature_re()
        .captures(text)
        .and_then(|c| c[1].parse().ok());
    let rain_chance_pct = rain_chance_re()
        .captures(text)
        .and_then(|c| c[1].parse().ok());

    ParsedWeather {
        temperature_c,
        rain_chance_pct,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherIcon {
    Rain,
    Sun,
    Cloud,
}

pub const RAIN_ICON_CHANCE_THRESHOLD_PCT: u32 = 30;
pub const SUN_ICON_TEMPERATURE_THRESHOLD_C: i32 = 25;

/// Picks the display icon for a parsed forecast.
///
/// Precipitation outranks temperature when both thresholds are exceeded; with
/// no usable fields at all the cloud is the neutral default. Both comparisons
/// are strict, so the threshold value itself still shows a cloud.
pub fn choose_icon(parsed: &ParsedWeather) -> WeatherIcon {
    if parsed
        .rain_chance_pct
        .is_some_and(|p| p > RAIN_ICON_CHANCE_THRESHOLD_PCT)
    {
        WeatherIcon::Rain
    } else if parsed
        .temperature_c
        .is_some_and(|t| t > SUN_ICON_TEMPERATURE_THRESHOLD_C)
    {
        WeatherIcon::Sun
    } else {
        WeatherIcon::Cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_temperature_and_rain_chance() {
        let parsed = parse_weather(Some("It's 28°C with 45% chance of rain"));
        assert_eq!(parsed.temperature_c, Some(28));
        assert_eq!(parsed.rain_chance_pct, Some(45));
    }

    #[test]
    fn absent_text_yields_no_fields() {
        assert_eq!(parse_weather(None), ParsedWeather::default());
    }

    #[test]
    fn text_without_patterns_yields_no_fields() {
        let parsed = parse_weather(Some("Cloudy today"));
        assert_eq!(parsed.temperature_c, None);
        assert_eq!(parsed.rain_chance_pct, None);
        assert_eq!(choose_icon(&parsed), WeatherIcon::Cloud);
    }

    #[test]
    fn scans_are_independent_and_first_match_wins() {
        // The percentage belongs to humidity here; extraction does not try to
        // relate it to anything.
        let parsed = parse_weather(Some("Humidity 80%, later 12°C dropping to 8°C"));
        assert_eq!(parsed.temperature_c, Some(12));
        assert_eq!(parsed.rain_chance_pct, Some(80));
    }

    #[test]
    fn rain_takes_priority_over_sun() {
        let parsed = ParsedWeather {
            temperature_c: Some(30),
            rain_chance_pct: Some(40),
        };
        assert_eq!(choose_icon(&parsed), WeatherIcon::Rain);
    }

    #[test]
    fn sun_when_warm_and_dry() {
        let parsed = ParsedWeather {
            temperature_c: Some(30),
            rain_chance_pct: Some(10),
        };
        assert_eq!(choose_icon(&parsed), WeatherIcon::Sun);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let parsed = ParsedWeather {
            temperature_c: Some(25),
            rain_chance_pct: Some(30),
        };
        assert_eq!(choose_icon(&parsed), WeatherIcon::Cloud);
    }
}
