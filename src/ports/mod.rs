//! Capability traits implemented by every provider variant.
//!
//! Callers depend on these traits only and receive whichever variant
//! (fixed, mutable, live) they need. Implementations live in `src/adapters/`.

pub mod id;
pub mod string;
pub mod time;

pub use id::IdentifierSource;
pub use string::StringSource;
pub use time::TimeSource;
