//! `consistgen time` command.

use chrono::{DateTime, SecondsFormat};
use serde_json::json;

use crate::config::{ProvidersConfig, TimeConfig, TimeValues};
use crate::context::ProviderContext;

/// Flags accepted by the `time` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeArgs {
    /// Fixed milliseconds override.
    pub millis: Option<i64>,
    /// Fixed seconds override.
    pub seconds: Option<i64>,
    /// Use the system clock.
    pub live: bool,
}

/// Execute the `time` command.
///
/// # Errors
///
/// Returns an error string if the provider context cannot be built.
pub fn run(config: &ProvidersConfig, args: &TimeArgs, json: bool) -> Result<String, String> {
    let config = ProvidersConfig { time: apply_flags(config.time, args), ..config.clone() };
    let ctx = ProviderContext::from_config(&config).map_err(|e| e.to_string())?;

    let millis = ctx.time.current_millis();
    let seconds = ctx.time.current_seconds();
    let rfc3339 = DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true));

    if json {
        return Ok(json!({ "millis": millis, "seconds": seconds, "rfc3339": rfc3339 }).to_string());
    }
    let rendered = rfc3339.unwrap_or_else(|| "out of range".to_string());
    Ok(format!("millis:  {millis}\nseconds: {seconds}\nrfc3339: {rendered}"))
}

/// Command-line flags replace the configured time source.
fn apply_flags(configured: TimeConfig, args: &TimeArgs) -> TimeConfig {
    if args.live {
        TimeConfig::Live
    } else if args.millis.is_some() || args.seconds.is_some() {
        TimeConfig::Fixed(TimeValues { millis: args.millis, seconds: args.seconds })
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_prints_epoch() {
        let out = run(&ProvidersConfig::default(), &TimeArgs::default(), false).unwrap();
        assert_eq!(out, "millis:  0\nseconds: 0\nrfc3339: 1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn seconds_flag_scales() {
        let args = TimeArgs { seconds: Some(123_456), ..TimeArgs::default() };
        let out = run(&ProvidersConfig::default(), &args, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["millis"], 123_456_000);
        assert_eq!(value["seconds"], 123_456);
    }

    #[test]
    fn millis_flag_wins_over_seconds() {
        let args = TimeArgs { millis: Some(123_456_789), seconds: Some(1), live: false };
        let out = run(&ProvidersConfig::default(), &args, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["millis"], 123_456_789);
    }

    #[test]
    fn flags_override_config() {
        let config = ProvidersConfig { time: TimeConfig::Live, ..ProvidersConfig::default() };
        let args = TimeArgs { millis: Some(5), ..TimeArgs::default() };
        assert_eq!(
            apply_flags(config.time, &args),
            TimeConfig::Fixed(TimeValues { millis: Some(5), seconds: None })
        );
    }

    #[test]
    fn live_flag_selects_live() {
        let args = TimeArgs { live: true, ..TimeArgs::default() };
        assert_eq!(apply_flags(TimeConfig::default(), &args), TimeConfig::Live);
    }
}
