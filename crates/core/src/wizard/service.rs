//! Wizard state machine.

use crate::report::ReportPayload;
use crate::settings::ReportSettings;

use super::types::GenerationRequest;

/// Single-shot report parameter wizard.
///
/// Starts in the data-entry state with a request pre-filled from the
/// settings singleton. [`generate`](Self::generate) and
/// [`cancel`](Self::cancel) both take the wizard by value, so either
/// transition is terminal.
#[derive(Debug, Clone)]
pub struct Wizard {
    request: GenerationRequest,
}

impl Wizard {
    /// Enters the wizard, defaulting every field from the settings.
    #[must_use]
    pub fn start(settings: &ReportSettings) -> Self {
        Self {
            request: GenerationRequest::from_settings(settings),
        }
    }

    /// Read access to the current request.
    #[must_use]
    pub const fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Mutable access for user overrides before confirming.
    pub const fn request_mut(&mut self) -> &mut GenerationRequest {
        &mut self.request
    }

    /// Confirms the wizard and builds the payload.
    ///
    /// A zero or absent day count is floored to 1 ("1 day" is the minimum
    /// meaningful window, not an error). Negative values pass through to
    /// the query layer unvalidated. The boolean flags are copied verbatim.
    #[must_use]
    pub fn generate(self) -> ReportPayload {
        let days = match self.request.days {
            None | Some(0) => 1,
            Some(days) => days,
        };

        ReportPayload {
            days,
            sales: self.request.sales,
            shipments: self.request.shipments,
            productions: self.request.productions,
            inventories: self.request.inventories,
        }
    }

    /// Abandons the wizard. No payload is produced and no side effects
    /// occur.
    pub fn cancel(self) {
        drop(self);
    }
}
