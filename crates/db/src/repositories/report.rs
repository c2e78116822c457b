//! Report repository implementing the record queries behind the CEO report.
//!
//! Each fetch applies the status filter for its category plus the recency
//! cutoff computed by the core; results are mapped to the core summary
//! types.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use daybrief_core::report::{
    InventorySummary, ProductionSummary, RecordSource, SaleSummary, ShipmentSummary,
};

use crate::entities::{
    inventories, productions, sales,
    sea_orm_active_enums::{ProductionState, SaleState, ShipmentState},
    shipments,
};

/// Error types for report record queries.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Report repository for record queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordSource for ReportRepository {
    type Error = ReportError;

    async fn sales_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SaleSummary>, Self::Error> {
        let rows = sales::Entity::find()
            .filter(sales::Column::State.is_in([
                SaleState::Confirmed,
                SaleState::Processing,
                SaleState::Done,
            ]))
            .filter(sales::Column::WriteDate.gte(cutoff))
            .order_by_desc(sales::Column::WriteDate)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(sale_summary).collect())
    }

    async fn shipments_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ShipmentSummary>, Self::Error> {
        let rows = shipments::Entity::find()
            .filter(shipments::Column::State.is_in([
                ShipmentState::Done,
                ShipmentState::Packed,
                ShipmentState::Assigned,
                ShipmentState::Waiting,
            ]))
            .filter(shipments::Column::WriteDate.gte(cutoff))
            .order_by_desc(shipments::Column::WriteDate)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(shipment_summary).collect())
    }

    async fn count_shipments_done_since(&self, cutoff: NaiveDate) -> Result<u64, Self::Error> {
        // Completion date, not modification timestamp: counts what
        // actually shipped in the window.
        let count = shipments::Entity::find()
            .filter(shipments::Column::State.eq(ShipmentState::Done))
            .filter(shipments::Column::EffectiveDate.gte(cutoff))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn productions_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductionSummary>, Self::Error> {
        let rows = productions::Entity::find()
            .filter(productions::Column::State.is_in([
                ProductionState::Done,
                ProductionState::Running,
                ProductionState::Assigned,
                ProductionState::Waiting,
            ]))
            .filter(productions::Column::WriteDate.gte(cutoff))
            .order_by_desc(productions::Column::WriteDate)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(production_summary).collect())
    }

    async fn inventories_dated_since(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<InventorySummary>, Self::Error> {
        // No state filter on inventory counts.
        let rows = inventories::Entity::find()
            .filter(inventories::Column::Date.gte(cutoff))
            .order_by_desc(inventories::Column::Date)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(inventory_summary).collect())
    }
}

fn sale_summary(model: sales::Model) -> SaleSummary {
    SaleSummary {
        id: model.id,
        reference: model.reference,
        party: model.party,
        state: model.state.to_value(),
        total: model.total,
        sale_date: model.sale_date,
        write_date: model.write_date.with_timezone(&Utc),
    }
}

fn shipment_summary(model: shipments::Model) -> ShipmentSummary {
    ShipmentSummary {
        id: model.id,
        reference: model.reference,
        customer: model.customer,
        state: model.state.to_value(),
        effective_date: model.effective_date,
        write_date: model.write_date.with_timezone(&Utc),
    }
}

fn production_summary(model: productions::Model) -> ProductionSummary {
    ProductionSummary {
        id: model.id,
        reference: model.reference,
        product: model.product,
        quantity: model.quantity,
        state: model.state.to_value(),
        write_date: model.write_date.with_timezone(&Utc),
    }
}

fn inventory_summary(model: inventories::Model) -> InventorySummary {
    InventorySummary {
        id: model.id,
        location: model.location,
        date: model.date,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
