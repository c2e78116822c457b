//! Report data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters for one report generation, as emitted by the wizard.
///
/// `days` has already been floored at 1 for zero/absent input; the four
/// booleans gate which fetches run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    /// Lookback window in days.
    pub days: i64,
    /// Fetch sales.
    pub sales: bool,
    /// Fetch outbound shipments.
    pub shipments: bool,
    /// Fetch production orders.
    pub productions: bool,
    /// Fetch inventory counts.
    pub inventories: bool,
}

/// Sale record summary for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleSummary {
    /// Record ID.
    pub id: Uuid,
    /// Order reference.
    pub reference: String,
    /// Buying party.
    pub party: String,
    /// Order state.
    pub state: String,
    /// Order total.
    pub total: Decimal,
    /// Order date.
    pub sale_date: NaiveDate,
    /// Last modification timestamp.
    pub write_date: DateTime<Utc>,
}

/// Outbound shipment record summary for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentSummary {
    /// Record ID.
    pub id: Uuid,
    /// Shipment reference.
    pub reference: String,
    /// Receiving customer.
    pub customer: String,
    /// Shipment state.
    pub state: String,
    /// Date the shipment actually left, if it has.
    pub effective_date: Option<NaiveDate>,
    /// Last modification timestamp.
    pub write_date: DateTime<Utc>,
}

/// Production order summary for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSummary {
    /// Record ID.
    pub id: Uuid,
    /// Production reference.
    pub reference: String,
    /// Produced good.
    pub product: String,
    /// Quantity produced.
    pub quantity: Decimal,
    /// Production state.
    pub state: String,
    /// Last modification timestamp.
    pub write_date: DateTime<Utc>,
}

/// Inventory count summary for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Record ID.
    pub id: Uuid,
    /// Counted location.
    pub location: String,
    /// Inventory date.
    pub date: NaiveDate,
}

/// Render context for the report template.
///
/// A `None` field is serialized as an absent key, not a null, so the
/// template (and any downstream consumer) sees exactly the categories that
/// were enabled. `done_shipments_today` rides along with the shipments
/// toggle but is a count over a different date field than the list, the
/// two deliberately diverge ("completed in the window" vs "active in the
/// window").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    /// Recently modified sales in a reportable state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<SaleSummary>>,
    /// Recently modified outbound shipments in a reportable state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Vec<ShipmentSummary>>,
    /// Count of shipments completed within the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_shipments_today: Option<u64>,
    /// Recently modified production orders in a reportable state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub productions: Option<Vec<ProductionSummary>>,
    /// Inventory counts dated within the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventories: Option<Vec<InventorySummary>>,
}
