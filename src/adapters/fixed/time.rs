//! Fixed adapter for the `TimeSource` port.

use crate::config::TimeValues;
use crate::ports::TimeSource;

/// Time source pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedTimeSource {
    millis: i64,
}

impl FixedTimeSource {
    /// Creates a fixed time source.
    ///
    /// `millis` wins when given. Otherwise `seconds * 1000` is used, and with
    /// neither the time is the epoch (0 ms). A `seconds` value is ignored
    /// whenever `millis` is present.
    #[must_use]
    pub fn new(millis: Option<i64>, seconds: Option<i64>) -> Self {
        let millis = match (millis, seconds) {
            (Some(millis), _) => millis,
            (None, Some(seconds)) => seconds.wrapping_mul(1000),
            (None, None) => 0,
        };
        tracing::debug!(millis, "fixed time source configured");
        Self { millis }
    }

    /// Creates a fixed time source pinned to `millis`.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self::new(Some(millis), None)
    }

    /// Creates a fixed time source pinned to `seconds` (stored as millis).
    #[must_use]
    pub fn at_seconds(seconds: i64) -> Self {
        Self::new(None, Some(seconds))
    }

    /// Creates a fixed time source from configuration values.
    #[must_use]
    pub fn from_config(values: &TimeValues) -> Self {
        Self::new(values.millis, values.seconds)
    }
}

impl TimeSource for FixedTimeSource {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}
