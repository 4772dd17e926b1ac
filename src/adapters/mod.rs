//! Provider implementations, grouped by variant.

pub mod fixed;
pub mod live;
pub mod mutable;
