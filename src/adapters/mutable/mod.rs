//! Mutable adapters: deterministic like the fixed ones, but reassignable.
//!
//! Setters take `&mut self`. Every read reflects the latest assignment;
//! there is no history and no accumulation.

pub mod id;
pub mod string;
pub mod time;

pub use id::MutableIdentifierSource;
pub use string::MutableStringSource;
pub use time::MutableTimeSource;
