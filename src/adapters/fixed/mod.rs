//! Fixed adapters: configured once, return the same value forever.
//!
//! Immutable after construction, so safe to share across threads.

pub mod id;
pub mod string;
pub mod time;

pub use id::FixedIdentifierSource;
pub use string::FixedStringSource;
pub use time::FixedTimeSource;
