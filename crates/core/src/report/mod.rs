//! Report payload, query windows, and context assembly.
//!
//! Given a payload, the service runs one filtered fetch per enabled record
//! category through a [`RecordSource`](source::RecordSource) and assembles
//! the render context. Disabled categories contribute no context key at
//! all; an empty result list is a legitimate outcome, not an error.

pub mod service;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::{ReportService, ReportWindow};
pub use source::RecordSource;
pub use types::*;
