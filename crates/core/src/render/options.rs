//! PDF page setup options.

/// Fixed page setup for the generated PDF.
///
/// Margins are 0.50in on all sides and the footer shows the company name
/// on the left and `current page / total pages` on the right, in font
/// size 8 with fixed spacing. Only the company name varies; everything
/// else is constant regardless of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSetup {
    footer_left: String,
}

impl PageSetup {
    /// Builds the page setup for the given company display name.
    ///
    /// With no company bound in the execution context the footer left
    /// field degrades to an empty string rather than failing.
    #[must_use]
    pub fn for_company(company: Option<&str>) -> Self {
        Self {
            footer_left: company.unwrap_or_default().to_string(),
        }
    }

    /// The key/value option dictionary handed to the converter.
    #[must_use]
    pub fn options(&self) -> Vec<(&'static str, String)> {
        vec![
            ("margin-bottom", "0.50in".to_string()),
            ("margin-left", "0.50in".to_string()),
            ("margin-right", "0.50in".to_string()),
            ("margin-top", "0.50in".to_string()),
            ("footer-font-size", "8".to_string()),
            ("footer-left", self.footer_left.clone()),
            ("footer-line", String::new()),
            ("footer-right", "[page]/[toPage]".to_string()),
            ("footer-spacing", "5".to_string()),
        ]
    }

    /// The option dictionary as wkhtmltopdf command-line arguments.
    ///
    /// `footer-line` is a bare flag; every other option carries a value.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (key, value) in self.options() {
            args.push(format!("--{key}"));
            if key != "footer-line" {
                args.push(value);
            }
        }
        args
    }
}
