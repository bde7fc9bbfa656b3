use chrono::{NaiveDate, Timelike};
use serde::Serialize;
use utoipa::ToSchema;

use crate::engine::metrics::{self, DayMetrics, effective_time_in, effective_time_out};
use crate::engine::status;
use crate::engine::time::{format_display, is_present, time_of_day};
use crate::model::record::{DailyRecord, EntryType};

/// A daily record annotated for display and export: resolved status,
/// computed metrics, night-shift grouping flags and preformatted labels.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroupedRecord {
    pub record: DailyRecord,

    /// Display status per the resolver, e.g. "Absent" / "Scheduled".
    #[schema(example = "Present")]
    pub status: String,

    pub metrics: DayMetrics,

    /// Shift merged with the following day's early time-out.
    pub is_nightshift: bool,
    /// Night shift with a time-in but no recoverable time-out.
    pub is_incomplete: bool,
    /// This day's early time-out was claimed by the previous night's
    /// shift; the day stays in the sequence for a fresh time-in.
    pub has_previous_nightshift_timeout: bool,

    #[schema(example = "2026-01-05")]
    pub display_date: String,
    #[schema(example = "Monday")]
    pub display_day: String,
    #[schema(example = "10:00 PM")]
    pub display_time_in: String,
    #[schema(example = "06:00 AM")]
    pub display_time_out: String,

    /// Second day's labels, present only on merged night shifts.
    #[schema(example = "2026-01-06", nullable = true)]
    pub merged_date: Option<String>,
    #[schema(example = "Tuesday", nullable = true)]
    pub merged_day: Option<String>,
}

/// One grouping transition: either the current record is emitted alone,
/// or a night shift consumes the next day's early time-out and both days
/// are emitted together. Keeping the advance explicit avoids the usual
/// index-skipping bugs in a manual forward scan.
enum Step {
    One(GroupedRecord),
    Two(GroupedRecord, GroupedRecord),
}

/// Single forward pass with one-record lookahead. Every input record
/// maps to exactly one emitted record; a merged day is re-emitted with
/// `has_previous_nightshift_timeout` rather than dropped, so it remains
/// usable for a fresh time-in that same evening.
pub fn group_night_shifts(records: &[DailyRecord], reference: NaiveDate) -> Vec<GroupedRecord> {
    let mut grouped = Vec::with_capacity(records.len());
    let mut idx = 0;
    while idx < records.len() {
        match step(&records[idx], records.get(idx + 1), reference) {
            Step::One(g) => {
                grouped.push(g);
                idx += 1;
            }
            Step::Two(shift, passthrough) => {
                grouped.push(shift);
                grouped.push(passthrough);
                idx += 2;
            }
        }
    }
    grouped
}

fn step(current: &DailyRecord, next: Option<&DailyRecord>, reference: NaiveDate) -> Step {
    if !(is_night_shift(current) && has_open_shift(current)) {
        return Step::One(annotate(current.clone(), reference));
    }

    let timeout = next.and_then(next_day_timeout);
    let (next, timeout) = match (next, timeout) {
        (Some(next), Some(timeout)) => (next, timeout),
        // unresolved night shift: surfaced, never fatal
        _ => {
            let mut g = annotate(current.clone(), reference);
            g.is_incomplete = true;
            return Step::One(g);
        }
    };

    let mut merged = current.clone();
    merged.time_out = Some(timeout);
    let mut shift = annotate(merged, reference);
    shift.is_nightshift = true;
    shift.merged_date = Some(next.date.format("%Y-%m-%d").to_string());
    shift.merged_day = Some(next.date.format("%A").to_string());

    let mut passthrough = annotate(next.clone(), reference);
    passthrough.has_previous_nightshift_timeout = true;
    // its early punch now belongs to the previous shift
    passthrough.display_time_out = "-".to_string();

    Step::Two(shift, passthrough)
}

fn annotate(record: DailyRecord, reference: NaiveDate) -> GroupedRecord {
    let status = status::resolve(&record, reference);
    let metrics = metrics::compute(&record);
    GroupedRecord {
        status,
        metrics,
        is_nightshift: false,
        is_incomplete: false,
        has_previous_nightshift_timeout: false,
        display_date: record.date.format("%Y-%m-%d").to_string(),
        display_day: record.date.format("%A").to_string(),
        display_time_in: format_display(effective_time_in(&record).as_deref()),
        display_time_out: format_display(effective_time_out(&record).as_deref()),
        merged_date: None,
        merged_day: None,
        record,
    }
}

/// Heuristic for a shift planned across midnight: scheduled to start in
/// the evening (18:00 or later) and end before noon.
fn is_night_shift(record: &DailyRecord) -> bool {
    let sched_in = record.scheduled_in.as_deref().and_then(time_of_day);
    let sched_out = record.scheduled_out.as_deref().and_then(time_of_day);
    match (sched_in, sched_out) {
        (Some(i), Some(o)) => i.hour() >= 18 && o.hour() < 12,
        _ => false,
    }
}

fn has_open_shift(record: &DailyRecord) -> bool {
    is_present(record.time_in.as_deref()) && !is_present(record.time_out.as_deref())
}

/// Early time-out on the following day, at or before 06:00 (the end of
/// the night-differential window). The `time_out` field decides when it
/// is present and parseable; only an absent field falls back to
/// scanning the raw punches.
fn next_day_timeout(next: &DailyRecord) -> Option<String> {
    let cutoff = chrono::NaiveTime::from_hms_opt(6, 0, 0).unwrap();
    if let Some(value) = next.time_out.as_deref() {
        if let Some(t) = time_of_day(value) {
            return (t <= cutoff).then(|| value.to_string());
        }
    }
    next.time_entries.iter().find_map(|e| {
        if e.entry_type != EntryType::TimeOut {
            return None;
        }
        let t = time_of_day(&e.event_time)?;
        (t <= cutoff).then(|| t.format("%H:%M").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{AttendanceStatus, TimeEntry};

    fn rec(day: u32, time_in: Option<&str>, time_out: Option<&str>) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            time_in: time_in.map(String::from),
            time_out: time_out.map(String::from),
            scheduled_in: Some("22:00".into()),
            scheduled_out: Some("06:00".into()),
            status: AttendanceStatus::Present,
            time_entries: vec![],
            overtime_hours: None,
            billed_hours: None,
            late_minutes: None,
            undertime_minutes: None,
            night_differential: None,
        }
    }

    fn day_rec(day: u32, time_in: Option<&str>, time_out: Option<&str>) -> DailyRecord {
        let mut r = rec(day, time_in, time_out);
        r.scheduled_in = Some("08:00".into());
        r.scheduled_out = Some("17:00".into());
        r
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn night_shift_merges_with_next_day_timeout() {
        let input = vec![rec(5, Some("22:00"), None), rec(6, None, Some("06:00"))];
        let grouped = group_night_shifts(&input, reference());

        assert_eq!(grouped.len(), 2); // nothing silently dropped

        let shift = &grouped[0];
        assert!(shift.is_nightshift);
        assert_eq!(shift.record.time_out.as_deref(), Some("06:00"));
        assert_eq!(shift.merged_date.as_deref(), Some("2026-01-06"));
        // 8h shift, 1h break
        assert_eq!(shift.metrics.billed_minutes, 420);
        assert_eq!(shift.metrics.night_diff_hours, 7.0);

        let passthrough = &grouped[1];
        assert!(passthrough.has_previous_nightshift_timeout);
        assert!(!passthrough.is_nightshift);
        assert_eq!(passthrough.display_time_out, "-");
        // the slot itself is untouched and stays addressable
        assert_eq!(
            passthrough.record.date,
            NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()
        );
    }

    #[test]
    fn timeout_recovered_from_next_day_entries() {
        let mut next = rec(6, None, None);
        next.time_entries = vec![TimeEntry {
            event_time: "2026-01-06T05:45:00".into(),
            entry_type: EntryType::TimeOut,
            overtime: None,
        }];
        let input = vec![rec(5, Some("22:00"), None), next];

        let grouped = group_night_shifts(&input, reference());
        assert!(grouped[0].is_nightshift);
        assert_eq!(grouped[0].record.time_out.as_deref(), Some("05:45"));
    }

    #[test]
    fn unresolved_night_shift_is_incomplete() {
        let grouped = group_night_shifts(&[rec(5, Some("22:00"), None)], reference());
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].is_incomplete);
        assert!(!grouped[0].is_nightshift);
    }

    #[test]
    fn late_next_day_timeout_is_not_claimed() {
        // 18:00 is the next day's own punch-out, not the night shift's
        let input = vec![rec(5, Some("22:00"), None), day_rec(6, Some("09:00"), Some("18:00"))];
        let grouped = group_night_shifts(&input, reference());

        assert_eq!(grouped.len(), 2);
        assert!(grouped[0].is_incomplete);
        assert!(!grouped[1].has_previous_nightshift_timeout);
    }

    #[test]
    fn day_shifts_pass_through_unchanged() {
        let input = vec![
            day_rec(5, Some("08:00"), Some("17:00")),
            day_rec(6, Some("08:00"), Some("17:00")),
        ];
        let grouped = group_night_shifts(&input, reference());

        assert_eq!(grouped.len(), 2);
        for g in &grouped {
            assert!(!g.is_nightshift && !g.is_incomplete && !g.has_previous_nightshift_timeout);
        }
        assert_eq!(grouped[0].display_day, "Monday");
        assert_eq!(grouped[0].display_time_in, "08:00 AM");
        assert_eq!(grouped[0].display_time_out, "05:00 PM");
    }

    #[test]
    fn open_day_shift_is_not_treated_as_night_shift() {
        let grouped = group_night_shifts(
            &[day_rec(5, Some("08:00"), None), day_rec(6, None, Some("05:00"))],
            reference(),
        );
        assert!(!grouped[0].is_nightshift);
        assert!(!grouped[0].is_incomplete);
    }
}
