//! Attendance computation engine: pure, synchronous, no shared state.
//! Given the backend's daily records it always produces a fully-defined
//! grouped sequence and totals; bad or missing data degrades individual
//! metrics to zero instead of failing.

pub mod align;
pub mod export;
pub mod grouping;
pub mod metrics;
pub mod status;
pub mod time;
pub mod totals;

use chrono::NaiveDate;

use crate::model::record::DailyRecord;
use self::grouping::GroupedRecord;
use self::totals::ReportTotals;

pub struct ComputedReport {
    pub records: Vec<GroupedRecord>,
    pub totals: ReportTotals,
}

/// Full pipeline for one report request: group night shifts (computing
/// per-day metrics and display status along the way), then aggregate.
/// `reference` is "today" as seen by the caller; it only affects display
/// statuses.
pub fn build_report(records: &[DailyRecord], reference: NaiveDate) -> ComputedReport {
    let records = grouping::group_night_shifts(records, reference);
    let totals = totals::aggregate(&records);
    ComputedReport { records, totals }
}
