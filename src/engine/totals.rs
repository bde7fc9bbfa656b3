use serde::Serialize;
use utoipa::ToSchema;

use crate::engine::grouping::GroupedRecord;
use crate::engine::metrics::round2;

/// Period totals across the grouped sequence. Authoritative days already
/// carry their backend metrics (the per-day compute branches on status),
/// so summing the annotated metrics is sufficient here. ND and OT are
/// rounded once at the end rather than per addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct ReportTotals {
    #[schema(example = 9600)]
    pub billed_minutes: i64,
    #[schema(example = 25)]
    pub late_minutes: i64,
    #[schema(example = 0)]
    pub undertime_minutes: i64,
    #[schema(example = 35.0)]
    pub night_diff_hours: f64,
    #[schema(example = 4.5)]
    pub overtime_hours: f64,
}

pub fn aggregate(records: &[GroupedRecord]) -> ReportTotals {
    let mut totals = ReportTotals::default();
    for g in records {
        totals.billed_minutes += g.metrics.billed_minutes;
        totals.late_minutes += g.metrics.late_minutes;
        totals.undertime_minutes += g.metrics.undertime_minutes;
        totals.night_diff_hours += g.metrics.night_diff_hours;
        totals.overtime_hours += g.metrics.overtime_hours;
    }
    totals.night_diff_hours = round2(totals.night_diff_hours);
    totals.overtime_hours = round2(totals.overtime_hours);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grouping::group_night_shifts;
    use crate::model::record::{AttendanceStatus, DailyRecord};
    use chrono::NaiveDate;

    fn rec(day: u32, time_in: &str, time_out: &str) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            time_in: Some(time_in.to_string()),
            time_out: Some(time_out.to_string()),
            scheduled_in: Some("08:00".into()),
            scheduled_out: Some("17:00".into()),
            status: AttendanceStatus::Present,
            time_entries: vec![],
            overtime_hours: None,
            billed_hours: None,
            late_minutes: None,
            undertime_minutes: None,
            night_differential: None,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn sums_per_day_metrics() {
        let input = vec![rec(5, "08:00", "17:00"), rec(6, "08:06", "17:00")];
        let grouped = group_night_shifts(&input, reference());
        let totals = aggregate(&grouped);

        assert_eq!(totals.billed_minutes, 480 + 474);
        assert_eq!(totals.late_minutes, 11);
        assert_eq!(totals.undertime_minutes, 6);
    }

    #[test]
    fn authoritative_day_contributes_backend_values() {
        let mut incomplete = rec(5, "08:00", "17:00");
        incomplete.status = AttendanceStatus::Incomplete;
        incomplete.billed_hours = Some(45);
        incomplete.night_differential = Some(1.25);

        let grouped = group_night_shifts(&[incomplete, rec(6, "08:00", "17:00")], reference());
        let totals = aggregate(&grouped);

        assert_eq!(totals.billed_minutes, 45 + 480);
        assert_eq!(totals.night_diff_hours, 1.25);
    }

    #[test]
    fn overtime_summed_regardless_of_status() {
        let mut void = rec(5, "08:00", "17:00");
        void.status = AttendanceStatus::ShiftVoid;
        void.overtime_hours = Some(1.5);

        let mut plain = rec(6, "08:00", "17:00");
        plain.overtime_hours = Some(0.75);

        let grouped = group_night_shifts(&[void, plain], reference());
        assert_eq!(aggregate(&grouped).overtime_hours, 2.25);
    }
}
