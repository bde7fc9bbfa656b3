use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// One calendar day's attendance facts as delivered by the report backend.
/// Time fields are wall-clock strings ("HH:mm" / "HH:mm:ss"); the backend
/// also sends "-" or "" for "no value", so readers must go through
/// `engine::time::is_present` rather than checking `Option` alone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2026-01-05",
        "time_in": "08:02",
        "time_out": "17:10",
        "scheduled_in": "08:00",
        "scheduled_out": "17:00",
        "status": "present",
        "time_entries": [],
        "overtime_hours": null
    })
)]
pub struct DailyRecord {
    #[schema(example = "2026-01-05", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(default)]
    #[schema(example = "08:02", nullable = true)]
    pub time_in: Option<String>,

    #[serde(default)]
    #[schema(example = "17:10", nullable = true)]
    pub time_out: Option<String>,

    #[serde(default)]
    #[schema(example = "08:00", nullable = true)]
    pub scheduled_in: Option<String>,

    #[serde(default)]
    #[schema(example = "17:00", nullable = true)]
    pub scheduled_out: Option<String>,

    #[schema(example = "present")]
    pub status: AttendanceStatus,

    /// Raw punch events; fallback source for time in/out when the
    /// top-level fields are absent.
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,

    /// Pre-approved overtime in hours, if the backend resolved it already.
    #[serde(default)]
    #[schema(example = 1.5, nullable = true)]
    pub overtime_hours: Option<f64>,

    // Backend-pre-computed metrics. Only trusted when `status` is
    // authoritative (incomplete / shift_void).
    #[serde(default)]
    #[schema(example = 480, nullable = true)]
    pub billed_hours: Option<i64>,

    #[serde(default)]
    #[schema(example = 0, nullable = true)]
    pub late_minutes: Option<i64>,

    #[serde(default)]
    #[schema(example = 0, nullable = true)]
    pub undertime_minutes: Option<i64>,

    #[serde(default)]
    #[schema(example = 0.0, nullable = true)]
    pub night_differential: Option<f64>,
}

/// A single raw punch event inside a day's `time_entries`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimeEntry {
    /// "HH:mm", "HH:mm:ss" or a full ISO timestamp.
    #[schema(example = "05:45")]
    pub event_time: String,

    #[schema(example = "time_out")]
    pub entry_type: EntryType,

    /// Overtime hours attached to this punch by the approval workflow.
    #[serde(default)]
    #[schema(example = 0.5, nullable = true)]
    pub overtime: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    TimeIn,
    TimeOut,
}

/// Backend attendance status. Wire format is lower-snake-case; the strum
/// `Display` strings are the title-case labels shown to users, so the
/// code↔label mapping lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[strum(serialize = "Present")]
    Present,
    #[strum(serialize = "Late")]
    Late,
    #[strum(serialize = "Absent")]
    Absent,
    #[strum(serialize = "Half Day")]
    HalfDay,
    #[strum(serialize = "Weekend")]
    Weekend,
    #[strum(serialize = "Not Yet Scheduled")]
    NotScheduled,
    #[strum(serialize = "Incomplete")]
    Incomplete,
    #[strum(serialize = "Shift Void")]
    ShiftVoid,
}

impl AttendanceStatus {
    /// Authoritative statuses carry backend-computed metrics that local
    /// recomputation must never override.
    pub fn is_authoritative(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Incomplete | AttendanceStatus::ShiftVoid
        )
    }
}
