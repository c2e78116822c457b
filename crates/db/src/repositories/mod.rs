//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod report;
pub mod settings;

pub use report::{ReportError, ReportRepository};
pub use settings::SettingsRepository;
