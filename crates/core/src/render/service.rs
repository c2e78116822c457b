//! HTML renderer and PDF converter.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tera::Tera;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use daybrief_shared::config::PdfConfig;

use crate::report::ReportContext;

use super::error::RenderError;
use super::options::PageSetup;

const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html.tera");
const TEMPLATE_NAME: &str = "report.html";

/// Report metadata rendered around the record sections.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Company display name bound in the execution context, if any.
    pub company: Option<String>,
    /// Lookback window in days.
    pub days: i64,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Renders the report context to HTML through the embedded template.
#[derive(Debug)]
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    /// Builds the renderer with the embedded report template.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders the context to an HTML document.
    ///
    /// Disabled categories are absent from the context and their sections
    /// are omitted entirely; enabled-but-empty categories render as empty
    /// sections.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, context: &ReportContext, meta: &ReportMeta) -> Result<String, RenderError> {
        let mut values = tera::Context::from_serialize(context)?;
        values.insert("company", meta.company.as_deref().unwrap_or(""));
        values.insert("days", &meta.days);
        values.insert(
            "generated_at",
            &meta.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );

        Ok(self.tera.render(TEMPLATE_NAME, &values)?)
    }
}

/// Converts rendered HTML to PDF bytes.
#[async_trait]
pub trait PdfConverter: Send + Sync {
    /// Converts `html` to PDF applying the given page setup.
    async fn convert(&self, html: &str, setup: &PageSetup) -> Result<Vec<u8>, RenderError>;
}

/// Converter driving the wkhtmltopdf binary.
///
/// The HTML document is fed over stdin and the PDF read back from stdout;
/// page setup options become command-line flags.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    binary: String,
    timeout_secs: u64,
}

impl WkhtmltopdfConverter {
    /// Creates a converter for the given binary path and timeout.
    #[must_use]
    pub const fn new(binary: String, timeout_secs: u64) -> Self {
        Self {
            binary,
            timeout_secs,
        }
    }

    /// Creates a converter from the application PDF configuration.
    #[must_use]
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(config.converter_binary.clone(), config.converter_timeout_secs)
    }
}

#[async_trait]
impl PdfConverter for WkhtmltopdfConverter {
    async fn convert(&self, html: &str, setup: &PageSetup) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new(&self.binary)
            .args(setup.to_args())
            .arg("-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // The stdin feed can block too (a stalled child stops draining the
        // pipe), so the whole feed-and-wait interaction runs under the
        // timeout. On expiry the child is dropped and killed.
        let stdin = child.stdin.take();
        let io = async {
            if let Some(mut stdin) = stdin {
                stdin.write_all(html.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            child.wait_with_output().await
        };

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), io)
            .await
            .map_err(|_| RenderError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            return Err(RenderError::Converter {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
