//! Report context assembly.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::source::RecordSource;
use super::types::{ReportContext, ReportPayload};

/// Query window for one report run.
///
/// Carries two separate cutoffs on purpose: the last-modified filters
/// compare against a timestamp anchored at "now", while the
/// effective-date and inventory-date filters compare against a date-only
/// anchor ("today"). Keeping them as distinct fields prevents the two
/// from being accidentally unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    /// Inclusive lower bound for last-modified timestamps.
    pub modified_cutoff: DateTime<Utc>,
    /// Inclusive lower bound for date-only fields.
    pub date_cutoff: NaiveDate,
}

impl ReportWindow {
    /// Computes the window ending at `now` and reaching `days` back.
    ///
    /// `days` is unbounded caller input. A span too large to represent,
    /// or one that would push a cutoff past the calendar range, saturates
    /// to the matching extreme: a huge positive `days` widens the window
    /// to everything, a huge negative one empties it.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>, days: i64) -> Self {
        let span = Duration::try_days(days);
        let modified_cutoff = span
            .and_then(|span| now.checked_sub_signed(span))
            .unwrap_or(if days > 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        let date_cutoff = span
            .and_then(|span| now.date_naive().checked_sub_signed(span))
            .unwrap_or(if days > 0 { NaiveDate::MIN } else { NaiveDate::MAX });

        Self {
            modified_cutoff,
            date_cutoff,
        }
    }
}

/// Service assembling the report render context.
pub struct ReportService;

impl ReportService {
    /// Fetches each enabled record category and assembles the context.
    ///
    /// Categories are independent: any subset may be enabled, and a
    /// disabled category leaves its context key absent. The shipment
    /// count uses the date-only cutoff while the shipment list uses the
    /// timestamp cutoff.
    ///
    /// # Errors
    ///
    /// Propagates the first source error unmodified.
    pub async fn assemble<S: RecordSource>(
        payload: ReportPayload,
        now: DateTime<Utc>,
        source: &S,
    ) -> Result<ReportContext, S::Error> {
        let window = ReportWindow::ending_at(now, payload.days);
        let mut context = ReportContext::default();

        if payload.sales {
            context.sales = Some(source.sales_modified_since(window.modified_cutoff).await?);
        }
        if payload.shipments {
            context.shipments = Some(
                source
                    .shipments_modified_since(window.modified_cutoff)
                    .await?,
            );
            context.done_shipments_today =
                Some(source.count_shipments_done_since(window.date_cutoff).await?);
        }
        if payload.productions {
            context.productions = Some(
                source
                    .productions_modified_since(window.modified_cutoff)
                    .await?,
            );
        }
        if payload.inventories {
            context.inventories =
                Some(source.inventories_dated_since(window.date_cutoff).await?);
        }

        Ok(context)
    }
}
