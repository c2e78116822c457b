//! HTML rendering and PDF conversion.
//!
//! The pipeline is plain function composition: the context is rendered to
//! HTML through an embedded Tera template, then handed to a
//! [`PdfConverter`](service::PdfConverter) together with a fixed
//! [`PageSetup`](options::PageSetup). Any converter accepting key/value
//! page-setup options can be substituted; the shipped implementation
//! drives the wkhtmltopdf binary over stdin/stdout.

pub mod error;
pub mod options;
pub mod service;


pub use error::RenderError;
pub use options::PageSetup;
pub use service::{HtmlRenderer, PdfConverter, ReportMeta, WkhtmltopdfConverter};
