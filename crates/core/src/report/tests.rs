//! Tests for report context assembly.

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::service::{ReportService, ReportWindow};
use super::source::RecordSource;
use super::types::{
    InventorySummary, ProductionSummary, ReportContext, ReportPayload, SaleSummary,
    ShipmentSummary,
};

fn payload(days: i64, sales: bool, shipments: bool, productions: bool, inventories: bool) -> ReportPayload {
    ReportPayload {
        days,
        sales,
        shipments,
        productions,
        inventories,
    }
}

fn sale(write_date: DateTime<Utc>) -> SaleSummary {
    SaleSummary {
        id: Uuid::new_v4(),
        reference: "SO-1".into(),
        party: "Acme".into(),
        state: "confirmed".into(),
        total: dec!(120.50),
        sale_date: write_date.date_naive(),
        write_date,
    }
}

fn shipment(write_date: DateTime<Utc>, effective_date: Option<NaiveDate>) -> ShipmentSummary {
    ShipmentSummary {
        id: Uuid::new_v4(),
        reference: "OUT-1".into(),
        customer: "Acme".into(),
        state: "done".into(),
        effective_date,
        write_date,
    }
}

/// In-memory source that applies the documented cutoff comparisons to a
/// fixed record set.
#[derive(Default)]
struct StubSource {
    sales: Vec<SaleSummary>,
    shipments: Vec<ShipmentSummary>,
    done_dates: Vec<NaiveDate>,
    productions: Vec<ProductionSummary>,
    inventories: Vec<InventorySummary>,
}

#[async_trait]
impl RecordSource for StubSource {
    type Error = std::convert::Infallible;

    async fn sales_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SaleSummary>, Self::Error> {
        Ok(self
            .sales
            .iter()
            .filter(|s| s.write_date >= cutoff)
            .cloned()
            .collect())
    }

    async fn shipments_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ShipmentSummary>, Self::Error> {
        Ok(self
            .shipments
            .iter()
            .filter(|s| s.write_date >= cutoff)
            .cloned()
            .collect())
    }

    async fn count_shipments_done_since(&self, cutoff: NaiveDate) -> Result<u64, Self::Error> {
        Ok(self.done_dates.iter().filter(|d| **d >= cutoff).count() as u64)
    }

    async fn productions_modified_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductionSummary>, Self::Error> {
        Ok(self
            .productions
            .iter()
            .filter(|p| p.write_date >= cutoff)
            .cloned()
            .collect())
    }

    async fn inventories_dated_since(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<InventorySummary>, Self::Error> {
        Ok(self
            .inventories
            .iter()
            .filter(|i| i.date >= cutoff)
            .cloned()
            .collect())
    }
}

/// Source that fails every fetch.
struct FailingSource;

#[async_trait]
impl RecordSource for FailingSource {
    type Error = &'static str;

    async fn sales_modified_since(
        &self,
        _cutoff: DateTime<Utc>,
    ) -> Result<Vec<SaleSummary>, Self::Error> {
        Err("query failed")
    }

    async fn shipments_modified_since(
        &self,
        _cutoff: DateTime<Utc>,
    ) -> Result<Vec<ShipmentSummary>, Self::Error> {
        Err("query failed")
    }

    async fn count_shipments_done_since(&self, _cutoff: NaiveDate) -> Result<u64, Self::Error> {
        Err("query failed")
    }

    async fn productions_modified_since(
        &self,
        _cutoff: DateTime<Utc>,
    ) -> Result<Vec<ProductionSummary>, Self::Error> {
        Err("query failed")
    }

    async fn inventories_dated_since(
        &self,
        _cutoff: NaiveDate,
    ) -> Result<Vec<InventorySummary>, Self::Error> {
        Err("query failed")
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap()
}

#[test]
fn test_window_carries_both_cutoffs() {
    let window = ReportWindow::ending_at(now(), 7);

    assert_eq!(window.modified_cutoff, now() - Duration::days(7));
    assert_eq!(
        window.date_cutoff,
        NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
    );
}

#[test]
fn test_negative_days_window_lies_in_future() {
    let window = ReportWindow::ending_at(now(), -2);

    assert!(window.modified_cutoff > now());
    assert!(window.date_cutoff > now().date_naive());
}

#[test]
fn test_extreme_days_saturate_instead_of_overflowing() {
    let window = ReportWindow::ending_at(now(), i64::MAX);
    assert_eq!(window.modified_cutoff, DateTime::<Utc>::MIN_UTC);
    assert_eq!(window.date_cutoff, NaiveDate::MIN);

    let window = ReportWindow::ending_at(now(), i64::MIN);
    assert_eq!(window.modified_cutoff, DateTime::<Utc>::MAX_UTC);
    assert_eq!(window.date_cutoff, NaiveDate::MAX);
}

#[tokio::test]
async fn test_disabled_categories_leave_keys_absent() {
    let source = StubSource::default();

    let context = ReportService::assemble(payload(1, false, false, false, false), now(), &source)
        .await
        .unwrap();

    assert_eq!(context, ReportContext::default());
    let json = serde_json::to_value(&context).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[tokio::test]
async fn test_enabled_categories_present_even_when_empty() {
    let source = StubSource::default();

    let context = ReportService::assemble(payload(1, true, true, true, true), now(), &source)
        .await
        .unwrap();

    assert_eq!(context.sales.as_deref(), Some(&[] as &[SaleSummary]));
    assert_eq!(context.shipments.as_deref(), Some(&[] as &[ShipmentSummary]));
    assert_eq!(context.done_shipments_today, Some(0));
    assert_eq!(
        context.productions.as_deref(),
        Some(&[] as &[ProductionSummary])
    );
    assert_eq!(
        context.inventories.as_deref(),
        Some(&[] as &[InventorySummary])
    );
}

#[tokio::test]
async fn test_sales_and_shipments_scenario() {
    let recent = now() - Duration::days(2);
    let stale = now() - Duration::days(9);
    let source = StubSource {
        sales: vec![sale(recent), sale(stale)],
        shipments: vec![shipment(recent, None)],
        done_dates: vec![
            now().date_naive(),
            now().date_naive() - Duration::days(10),
        ],
        ..StubSource::default()
    };

    let context = ReportService::assemble(payload(7, true, true, false, false), now(), &source)
        .await
        .unwrap();

    assert_eq!(context.sales.as_ref().unwrap().len(), 1);
    assert_eq!(context.shipments.as_ref().unwrap().len(), 1);
    assert_eq!(context.done_shipments_today, Some(1));
    assert!(context.productions.is_none());
    assert!(context.inventories.is_none());

    let json = serde_json::to_value(&context).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["done_shipments_today", "sales", "shipments"]);
}

#[tokio::test]
async fn test_modified_cutoff_boundary_is_inclusive() {
    let cutoff = now() - Duration::days(5);
    let source = StubSource {
        sales: vec![sale(cutoff)],
        ..StubSource::default()
    };

    let context = ReportService::assemble(payload(5, true, false, false, false), now(), &source)
        .await
        .unwrap();

    assert_eq!(context.sales.as_ref().unwrap().len(), 1);
}

#[tokio::test]
async fn test_done_count_diverges_from_shipment_list() {
    // Modified yesterday but shipped long ago: in the list, not the count.
    let modified_recently = shipment(
        now() - Duration::days(1),
        Some(now().date_naive() - Duration::days(30)),
    );
    let source = StubSource {
        shipments: vec![modified_recently],
        done_dates: vec![now().date_naive() - Duration::days(30)],
        ..StubSource::default()
    };

    let context = ReportService::assemble(payload(1, false, true, false, false), now(), &source)
        .await
        .unwrap();

    assert_eq!(context.shipments.as_ref().unwrap().len(), 1);
    assert_eq!(context.done_shipments_today, Some(0));
}

#[tokio::test]
async fn test_source_errors_propagate_unmodified() {
    let err = ReportService::assemble(payload(1, true, false, false, false), now(), &FailingSource)
        .await
        .unwrap_err();

    assert_eq!(err, "query failed");
}

proptest! {
    /// Key presence in the serialized context matches the toggles exactly,
    /// for every toggle combination.
    #[test]
    fn test_context_keys_match_toggles(
        sales in any::<bool>(),
        shipments in any::<bool>(),
        productions in any::<bool>(),
        inventories in any::<bool>(),
        days in 1i64..30,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let context = rt
            .block_on(ReportService::assemble(
                payload(days, sales, shipments, productions, inventories),
                now(),
                &StubSource::default(),
            ))
            .unwrap();

        let json = serde_json::to_value(&context).unwrap();
        let object = json.as_object().unwrap();
        prop_assert_eq!(object.contains_key("sales"), sales);
        prop_assert_eq!(object.contains_key("shipments"), shipments);
        prop_assert_eq!(object.contains_key("done_shipments_today"), shipments);
        prop_assert_eq!(object.contains_key("productions"), productions);
        prop_assert_eq!(object.contains_key("inventories"), inventories);
    }
}
