//! Database enum types for record states.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a sale order.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "sale_state")]
#[serde(rename_all = "lowercase")]
pub enum SaleState {
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Sent as a quotation.
    #[sea_orm(string_value = "quotation")]
    Quotation,
    /// Confirmed by the party.
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    /// Being processed.
    #[sea_orm(string_value = "processing")]
    Processing,
    /// Fully processed.
    #[sea_orm(string_value = "done")]
    Done,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Lifecycle states of an outbound shipment.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "shipment_state")]
#[serde(rename_all = "lowercase")]
pub enum ShipmentState {
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Waiting for stock.
    #[sea_orm(string_value = "waiting")]
    Waiting,
    /// Stock assigned.
    #[sea_orm(string_value = "assigned")]
    Assigned,
    /// Packed and ready.
    #[sea_orm(string_value = "packed")]
    Packed,
    /// Shipped.
    #[sea_orm(string_value = "done")]
    Done,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Lifecycle states of a production order.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "production_state")]
#[serde(rename_all = "lowercase")]
pub enum ProductionState {
    /// Requested.
    #[sea_orm(string_value = "request")]
    Request,
    /// Being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Waiting for inputs.
    #[sea_orm(string_value = "waiting")]
    Waiting,
    /// Inputs assigned.
    #[sea_orm(string_value = "assigned")]
    Assigned,
    /// In progress.
    #[sea_orm(string_value = "running")]
    Running,
    /// Finished.
    #[sea_orm(string_value = "done")]
    Done,
    /// Cancelled.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
