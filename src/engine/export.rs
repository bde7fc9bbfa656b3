use serde::Serialize;
use utoipa::ToSchema;

use crate::engine::grouping::GroupedRecord;
use crate::engine::time::format_display;

/// Column contract shared with the downstream CSV/Excel/PDF writers;
/// order and spelling must not change without coordinating with them.
pub const COLUMNS: [&str; 12] = [
    "Date",
    "Day",
    "Status",
    "Time In",
    "Time Out",
    "Scheduled In",
    "Scheduled Out",
    "BH(min)",
    "LT",
    "UT",
    "ND",
    "OT",
];

/// One export row, fully formatted: times as "hh:mm AM/PM", zero metrics
/// as "-" rather than "0".
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportRow {
    #[schema(example = "2026-01-05")]
    pub date: String,
    #[schema(example = "Monday")]
    pub day: String,
    #[schema(example = "Present")]
    pub status: String,
    #[schema(example = "08:00 AM")]
    pub time_in: String,
    #[schema(example = "05:00 PM")]
    pub time_out: String,
    #[schema(example = "08:00 AM")]
    pub scheduled_in: String,
    #[schema(example = "05:00 PM")]
    pub scheduled_out: String,
    #[schema(example = "480")]
    pub billed_hours: String,
    #[schema(example = "-")]
    pub late: String,
    #[schema(example = "-")]
    pub undertime: String,
    #[schema(example = "-")]
    pub night_diff: String,
    #[schema(example = "-")]
    pub overtime: String,
}

pub fn rows(records: &[GroupedRecord]) -> Vec<ReportRow> {
    records.iter().map(row).collect()
}

fn row(g: &GroupedRecord) -> ReportRow {
    ReportRow {
        date: g.display_date.clone(),
        day: g.display_day.clone(),
        status: g.status.clone(),
        time_in: g.display_time_in.clone(),
        time_out: g.display_time_out.clone(),
        scheduled_in: format_display(g.record.scheduled_in.as_deref()),
        scheduled_out: format_display(g.record.scheduled_out.as_deref()),
        billed_hours: fmt_minutes(g.metrics.billed_minutes),
        late: fmt_minutes(g.metrics.late_minutes),
        undertime: fmt_minutes(g.metrics.undertime_minutes),
        night_diff: fmt_hours(g.metrics.night_diff_hours),
        overtime: fmt_hours(g.metrics.overtime_hours),
    }
}

fn fmt_minutes(value: i64) -> String {
    if value == 0 {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn fmt_hours(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("{}h", value)
    }
}
