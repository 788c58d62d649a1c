//! Configuration loader and schema types.
//!
//! Settings come from an optional TOML file and `MIXTAPE__` environment
//! variables layered over struct defaults.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
