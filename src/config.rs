//! Configuration loader and schema types.
//!
//! This module exposes the settings schema that drives the runtime and
//! helpers to load it from the environment and an optional TOML file.

mod error;
mod load;
mod schema;

pub use error::ConfigError;
pub use load::default_log_dir;
pub use schema::*;
