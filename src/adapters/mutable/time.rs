//! Mutable adapter for the `TimeSource` port.

use crate::ports::TimeSource;

/// Time source whose value can be reassigned between reads.
///
/// Starts at the epoch (0 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutableTimeSource {
    millis: i64,
}

impl MutableTimeSource {
    /// Creates a mutable time source starting at `millis`.
    #[must_use]
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }

    /// Sets the current time in milliseconds.
    pub fn set_millis(&mut self, millis: i64) {
        tracing::debug!(millis, "mutable time source set");
        self.millis = millis;
    }

    /// Sets the current time in seconds; stored as `seconds * 1000`.
    pub fn set_seconds(&mut self, seconds: i64) {
        self.set_millis(seconds.wrapping_mul(1000));
    }
}

impl TimeSource for MutableTimeSource {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let time = MutableTimeSource::default();
        assert_eq!(time.current_millis(), 0);
        assert_eq!(time.current_seconds(), 0);
    }

    #[test]
    fn set_millis() {
        let mut time = MutableTimeSource::default();
        time.set_millis(123_456_789);
        assert_eq!(time.current_millis(), 123_456_789);
        assert_eq!(time.current_seconds(), 123_456);
    }

    #[test]
    fn set_seconds_overwrites() {
        let mut time = MutableTimeSource::default();
        time.set_seconds(10);
        assert_eq!(time.current_millis(), 10_000);
        assert_eq!(time.current_seconds(), 10);

        time.set_seconds(20);
        assert_eq!(time.current_millis(), 20_000);
        assert_eq!(time.current_seconds(), 20);
    }

    #[test]
    fn last_write_wins_across_units() {
        let mut time = MutableTimeSource::new(5);
        time.set_seconds(3);
        time.set_millis(7);
        assert_eq!(time.current_millis(), 7);
    }

    #[test]
    fn negative_seconds_view_truncates() {
        let mut time = MutableTimeSource::default();
        time.set_millis(-2500);
        assert_eq!(time.current_seconds(), -2);
    }
}
