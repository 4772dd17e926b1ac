//! Live time source using the system clock.

use chrono::Utc;

use crate::ports::TimeSource;

/// Live time source that returns the real current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveTimeSource;

impl TimeSource for LiveTimeSource {
    fn current_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
