//! Record source seam between report assembly and persistence.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::types::{InventorySummary, ProductionSummary, SaleSummary, ShipmentSummary};

/// Reportable sale states.
pub const REPORTED_SALE_STATES: [&str; 3] = ["confirmed", "processing", "done"];

/// Reportable outbound shipment states.
pub const REPORTED_SHIPMENT_STATES: [&str; 4] = ["done", "packed", "assigned", "waiting"];

/// Reportable production states.
pub const REPORTED_PRODUCTION_STATES: [&str; 4] = ["done", "running", "assigned", "waiting"];

/// Read-only access to the domain records the report aggregates.
///
/// Implementations own the status filtering: each fetch returns only
/// records in the corresponding `REPORTED_*` state set (inventory counts
/// have no state filter). Query failures propagate unmodified, the report
/// layer performs no recovery.
#[async_trait]
pub trait RecordSource {
    /// Source error type.
    type Error;

    /// Sales in a reportable state modified at or after `cutoff`.
    async fn sales_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SaleSummary>, Self::Error>;

    /// Outbound shipments in a reportable state modified at or after
    /// `cutoff`.
    async fn shipments_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ShipmentSummary>, Self::Error>;

    /// Count of shipments in state `done` whose effective date is at or
    /// after `cutoff`. Note the date field: completion date, not
    /// modification timestamp.
    async fn count_shipments_done_since(&self, cutoff: NaiveDate) -> Result<u64, Self::Error>;

    /// Production orders in a reportable state modified at or after
    /// `cutoff`.
    async fn productions_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductionSummary>, Self::Error>;

    /// Inventory counts dated at or after `cutoff`. No state filter.
    async fn inventories_dated_since(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<InventorySummary>, Self::Error>;
}
