use std::cmp::{max, min};

use chrono::Duration;
use serde::Serialize;
use utoipa::ToSchema;

use crate::engine::align::{AlignedShift, align};
use crate::engine::time::is_present;
use crate::model::record::{DailyRecord, EntryType};

/// Derived payroll metrics for one day. BH/LT/UT are minutes, ND/OT are
/// hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct DayMetrics {
    #[schema(example = 480)]
    pub billed_minutes: i64,
    #[schema(example = 0)]
    pub late_minutes: i64,
    #[schema(example = 0)]
    pub undertime_minutes: i64,
    #[schema(example = 0.0)]
    pub night_diff_hours: f64,
    #[schema(example = 0.0)]
    pub overtime_hours: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Time-in for the day: the top-level field, or the first `time_in`
/// punch when the field is absent.
pub fn effective_time_in(record: &DailyRecord) -> Option<String> {
    if is_present(record.time_in.as_deref()) {
        return record.time_in.clone();
    }
    record
        .time_entries
        .iter()
        .find(|e| e.entry_type == EntryType::TimeIn)
        .map(|e| e.event_time.clone())
}

/// Time-out for the day: the top-level field, or the last `time_out`
/// punch when the field is absent.
pub fn effective_time_out(record: &DailyRecord) -> Option<String> {
    if is_present(record.time_out.as_deref()) {
        return record.time_out.clone();
    }
    record
        .time_entries
        .iter()
        .rev()
        .find(|e| e.entry_type == EntryType::TimeOut)
        .map(|e| e.event_time.clone())
}

/// Single entry point for the day's metrics. Branches once on the
/// authoritative statuses (`incomplete` / `shift_void`): those days keep
/// the backend-computed values untouched. Overtime is sourced either
/// way, never derived from the punches.
pub fn compute(record: &DailyRecord) -> DayMetrics {
    let overtime_hours = sourced_overtime(record);

    if record.status.is_authoritative() {
        return DayMetrics {
            billed_minutes: record.billed_hours.unwrap_or(0),
            late_minutes: record.late_minutes.unwrap_or(0),
            undertime_minutes: record.undertime_minutes.unwrap_or(0),
            night_diff_hours: record.night_differential.unwrap_or(0.0),
            overtime_hours,
        };
    }

    let aligned = match resolve_alignment(record) {
        Some(a) => a,
        // missing or unparseable punch/schedule: every aligned metric
        // degrades to zero, overtime still counts
        None => {
            return DayMetrics {
                overtime_hours,
                ..DayMetrics::default()
            };
        }
    };

    let billed_minutes = billed_minutes(&aligned);
    DayMetrics {
        billed_minutes,
        late_minutes: late_minutes(&aligned),
        undertime_minutes: undertime_minutes(&aligned, billed_minutes),
        night_diff_hours: night_diff_hours(&aligned),
        overtime_hours,
    }
}

fn resolve_alignment(record: &DailyRecord) -> Option<AlignedShift> {
    let time_in = effective_time_in(record)?;
    let time_out = effective_time_out(record)?;
    let sched_in = record.scheduled_in.as_deref()?;
    let sched_out = record.scheduled_out.as_deref()?;
    align(&time_in, &time_out, sched_in, sched_out, record.date)
}

/// Break deduction per worked span: a full hour for 7h+ shifts, half an
/// hour for 4h+ shifts.
fn break_deduction_minutes(duration: i64) -> i64 {
    if duration >= 420 {
        60
    } else if duration >= 240 {
        30
    } else {
        0
    }
}

/// Abuse-prevention capping: early clock-in and late clock-out are
/// clipped to the scheduled window, so nobody gets credited for time
/// outside the plan.
fn capped_bounds(
    shift: &AlignedShift,
) -> (chrono::NaiveDateTime, chrono::NaiveDateTime) {
    (
        max(shift.actual_in, shift.sched_in),
        min(shift.actual_out, shift.sched_out),
    )
}

fn billed_minutes(shift: &AlignedShift) -> i64 {
    let (eff_in, eff_out) = capped_bounds(shift);
    let duration = (eff_out - eff_in).num_minutes();
    if duration < 0 {
        return 0;
    }
    max(duration - break_deduction_minutes(duration), 0)
}

/// Lateness carries a 5-minute grace, but once exceeded the full raw
/// lateness plus a flat 5-minute surcharge is charged. Deliberate
/// payroll policy, not a rounding artifact.
fn late_minutes(shift: &AlignedShift) -> i64 {
    if shift.actual_in <= shift.sched_in {
        return 0;
    }
    let raw = (shift.actual_in - shift.sched_in).num_minutes();
    if raw <= 5 { 0 } else { raw + 5 }
}

/// Undertime compares net scheduled minutes against the *dynamic* billed
/// minutes, so capping and break deduction flow through.
fn undertime_minutes(shift: &AlignedShift, billed_minutes: i64) -> i64 {
    let scheduled = (shift.sched_out - shift.sched_in).num_minutes();
    if scheduled < 0 {
        return 0;
    }
    let net_scheduled = scheduled - break_deduction_minutes(scheduled);
    max(net_scheduled - billed_minutes, 0)
}

/// Night differential: overlap of the capped shift with the fixed
/// 22:00–06:00 premium window anchored on the record's date, minus the
/// break deduction the total shift length earns (in hours).
fn night_diff_hours(shift: &AlignedShift) -> f64 {
    let (eff_in, eff_out) = capped_bounds(shift);
    if eff_out <= eff_in {
        return 0.0;
    }

    let window_start = shift.actual_in.date().and_hms_opt(22, 0, 0).unwrap();
    let window_end = window_start + Duration::hours(8);

    let nd_start = max(window_start, eff_in);
    let nd_end = min(window_end, eff_out);
    if nd_start >= nd_end {
        return 0.0;
    }
    let nd_hours = (nd_end - nd_start).num_minutes() as f64 / 60.0;

    let total_hours = (eff_out - eff_in).num_minutes() as f64 / 60.0;
    let deduction = if total_hours >= 7.0 {
        1.0
    } else if total_hours >= 4.0 {
        0.5
    } else {
        0.0
    };

    round2((nd_hours - deduction).max(0.0))
}

/// Overtime is approval-sourced: the backend's `overtime_hours` wins
/// when positive, otherwise any `overtime` amounts on the raw punches
/// are summed.
fn sourced_overtime(record: &DailyRecord) -> f64 {
    match record.overtime_hours {
        Some(hours) if hours > 0.0 => hours,
        _ => record
            .time_entries
            .iter()
            .filter_map(|e| e.overtime)
            .sum(),
    }
}
