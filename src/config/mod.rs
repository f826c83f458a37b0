//! Configuration module for the token filter
//!
//! Compile-time limits live in `constants`; user-facing preferences and the
//! properties-file loader live in `runtime`.

pub mod constants;
pub mod runtime;

pub use runtime::{load_properties, ConfigError, FilterPreferences};
