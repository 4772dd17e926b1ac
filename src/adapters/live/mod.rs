//! Live adapters backed by the system clock and random generators.

pub mod id;
pub mod string;
pub mod time;

pub use id::RandomIdentifierSource;
pub use string::RandomStringSource;
pub use time::LiveTimeSource;
