//! Single-shot report parameter wizard.
//!
//! The wizard pre-fills a [`GenerationRequest`](types::GenerationRequest)
//! from the configuration singleton, lets the caller override any field,
//! and emits a [`ReportPayload`](crate::report::ReportPayload) exactly once.
//! Both `generate` and `cancel` consume the wizard, so a finished wizard
//! cannot be re-run within one invocation.

pub mod service;
pub mod types;


pub use service::Wizard;
pub use types::GenerationRequest;
