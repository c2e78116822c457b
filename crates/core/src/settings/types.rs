//! Report settings types.

use serde::{Deserialize, Serialize};

/// Singleton report configuration.
///
/// Holds the default toggles and lookback window the wizard pre-fills
/// itself from. A never-configured installation behaves as if this record
/// held its `Default` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Default lookback window in days.
    pub days: i64,
    /// Include sales by default.
    pub sales: bool,
    /// Include outbound shipments by default.
    pub shipments: bool,
    /// Include production orders by default.
    pub productions: bool,
    /// Include inventory counts by default.
    pub inventories: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            days: 1,
            sales: true,
            shipments: true,
            productions: true,
            inventories: true,
        }
    }
}
