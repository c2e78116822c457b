//! Tests for report record mapping.
//!
//! The filter chains themselves are exercised at the integration level;
//! what is unit-testable here is the entity-to-summary mapping and the
//! state string values the queries rely on.

use chrono::{FixedOffset, TimeZone, Utc};
use rust_decimal_macros::dec;
use sea_orm::ActiveEnum;
use uuid::Uuid;

use crate::entities::{
    sales,
    sea_orm_active_enums::{ProductionState, SaleState, ShipmentState},
    shipments,
};

use super::{sale_summary, shipment_summary};

#[test]
fn test_state_values_match_reported_sets() {
    for (state, expected) in [
        (SaleState::Confirmed, "confirmed"),
        (SaleState::Processing, "processing"),
        (SaleState::Done, "done"),
    ] {
        assert!(daybrief_core::report::source::REPORTED_SALE_STATES.contains(&expected));
        assert_eq!(state.to_value(), expected);
    }

    for (state, expected) in [
        (ShipmentState::Done, "done"),
        (ShipmentState::Packed, "packed"),
        (ShipmentState::Assigned, "assigned"),
        (ShipmentState::Waiting, "waiting"),
    ] {
        assert!(daybrief_core::report::source::REPORTED_SHIPMENT_STATES.contains(&expected));
        assert_eq!(state.to_value(), expected);
    }

    for (state, expected) in [
        (ProductionState::Done, "done"),
        (ProductionState::Running, "running"),
        (ProductionState::Assigned, "assigned"),
        (ProductionState::Waiting, "waiting"),
    ] {
        assert!(daybrief_core::report::source::REPORTED_PRODUCTION_STATES.contains(&expected));
        assert_eq!(state.to_value(), expected);
    }
}

#[test]
fn test_sale_summary_mapping_normalizes_to_utc() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let write_date = offset.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let model = sales::Model {
        id: Uuid::new_v4(),
        reference: "SO-7".into(),
        party: "Acme".into(),
        state: SaleState::Confirmed,
        total: dec!(42.00),
        sale_date: write_date.date_naive(),
        create_date: write_date,
        write_date,
    };

    let summary = sale_summary(model.clone());

    assert_eq!(summary.id, model.id);
    assert_eq!(summary.state, "confirmed");
    assert_eq!(summary.total, dec!(42.00));
    assert_eq!(summary.write_date, write_date.with_timezone(&Utc));
}

#[test]
fn test_shipment_summary_keeps_effective_date() {
    let write_date = Utc
        .with_ymd_and_hms(2026, 3, 10, 8, 0, 0)
        .unwrap()
        .fixed_offset();
    let model = shipments::Model {
        id: Uuid::new_v4(),
        reference: "OUT-3".into(),
        customer: "Acme".into(),
        state: ShipmentState::Done,
        effective_date: Some(write_date.date_naive()),
        create_date: write_date,
        write_date,
    };

    let summary = shipment_summary(model.clone());

    assert_eq!(summary.effective_date, model.effective_date);
    assert_eq!(summary.state, "done");
}
