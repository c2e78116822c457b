//! Report configuration defaults.
//!
//! The configuration is a singleton: exactly one set of values exists
//! process-wide, persisted by the db layer and read at wizard entry.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::ReportSettings;
