//! Time port for obtaining the current epoch time.

/// Supplies the current logical time in milliseconds since the Unix epoch.
///
/// Abstracting time access lets tests pin or step the clock while
/// production code reads the system clock.
pub trait TimeSource: Send + Sync {
    /// Returns the current time in milliseconds.
    fn current_millis(&self) -> i64;

    /// Returns the current time in whole seconds.
    ///
    /// Derived from [`current_millis`](Self::current_millis) by integer
    /// division, truncating toward zero (`-1500` ms is `-1` s).
    fn current_seconds(&self) -> i64 {
        self.current_millis() / 1000
    }
}
