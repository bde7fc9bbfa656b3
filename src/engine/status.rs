use chrono::NaiveDate;

use crate::engine::metrics::effective_time_in;
use crate::engine::time::is_present;
use crate::model::record::DailyRecord;

/// Where a record's date sits relative to the injected reference date.
/// The reference is passed in by the caller so the resolver stays
/// deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateContext {
    Past,
    Today,
    Future,
}

impl DateContext {
    pub fn of(date: NaiveDate, reference: NaiveDate) -> Self {
        if date < reference {
            DateContext::Past
        } else if date == reference {
            DateContext::Today
        } else {
            DateContext::Future
        }
    }
}

/// Display status for a record. This is a presentation-layer override
/// and does not affect metric authority: a scheduled day with no punch
/// is "Absent" once the day has passed, "Scheduled" until then; a day
/// with no schedule is "Not Yet Scheduled"; punched days pass the
/// backend status through as its title-case label.
pub fn resolve(record: &DailyRecord, reference: NaiveDate) -> String {
    let has_schedule = is_present(record.scheduled_in.as_deref())
        && is_present(record.scheduled_out.as_deref());
    let has_time_in = effective_time_in(record).is_some();

    if !has_schedule {
        return "Not Yet Scheduled".to_string();
    }
    if !has_time_in {
        return match DateContext::of(record.date, reference) {
            DateContext::Past => "Absent".to_string(),
            DateContext::Today | DateContext::Future => "Scheduled".to_string(),
        };
    }
    record.status.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::AttendanceStatus;

    fn rec(
        date: NaiveDate,
        time_in: Option<&str>,
        sched: Option<(&str, &str)>,
        status: AttendanceStatus,
    ) -> DailyRecord {
        DailyRecord {
            date,
            time_in: time_in.map(String::from),
            time_out: None,
            scheduled_in: sched.map(|(i, _)| i.to_string()),
            scheduled_out: sched.map(|(_, o)| o.to_string()),
            status,
            time_entries: vec![],
            overtime_hours: None,
            billed_hours: None,
            late_minutes: None,
            undertime_minutes: None,
            night_differential: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn scheduled_no_punch_past_is_absent() {
        let r = rec(
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            None,
            Some(("08:00", "17:00")),
            AttendanceStatus::Present,
        );
        assert_eq!(resolve(&r, today()), "Absent");
    }

    #[test]
    fn scheduled_no_punch_today_or_future_is_scheduled() {
        let r = rec(today(), None, Some(("08:00", "17:00")), AttendanceStatus::Present);
        assert_eq!(resolve(&r, today()), "Scheduled");

        let r = rec(
            NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            None,
            Some(("08:00", "17:00")),
            AttendanceStatus::Present,
        );
        assert_eq!(resolve(&r, today()), "Scheduled");
    }

    #[test]
    fn no_schedule_wins_regardless_of_date() {
        for date in [
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            today(),
            NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
        ] {
            let r = rec(date, Some("08:00"), None, AttendanceStatus::Present);
            assert_eq!(resolve(&r, today()), "Not Yet Scheduled");
        }
    }

    #[test]
    fn punched_day_passes_backend_status_through() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let sched = Some(("08:00", "17:00"));

        let r = rec(date, Some("08:20"), sched, AttendanceStatus::Late);
        assert_eq!(resolve(&r, today()), "Late");

        let r = rec(date, Some("08:00"), sched, AttendanceStatus::HalfDay);
        assert_eq!(resolve(&r, today()), "Half Day");
    }

    #[test]
    fn sentinel_schedule_counts_as_unscheduled() {
        let r = rec(today(), Some("08:00"), Some(("-", "-")), AttendanceStatus::Present);
        assert_eq!(resolve(&r, today()), "Not Yet Scheduled");
    }
}
