//! Wizard data-entry types.

use serde::{Deserialize, Serialize};

use crate::settings::ReportSettings;

/// Transient parameter form for one report generation.
///
/// Defaults are copied from the configuration singleton at wizard entry;
/// every field is user-editable before the wizard confirms. The request is
/// discarded once the wizard completes, it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Lookback window in days. `None` behaves like zero and is floored
    /// to one day at payload build time.
    pub days: Option<i64>,
    /// Include sales.
    pub sales: bool,
    /// Include outbound shipments.
    pub shipments: bool,
    /// Include production orders.
    pub productions: bool,
    /// Include inventory counts.
    pub inventories: bool,
}

impl GenerationRequest {
    /// Builds a request pre-filled field by field from the settings
    /// singleton.
    #[must_use]
    pub fn from_settings(settings: &ReportSettings) -> Self {
        Self {
            days: Some(settings.days),
            sales: settings.sales,
            shipments: settings.shipments,
            productions: settings.productions,
            inventories: settings.inventories,
        }
    }
}
