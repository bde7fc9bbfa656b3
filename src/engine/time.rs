use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// The backend renders "no value" as `null`, `""` or `"-"` depending on
/// which layer produced the record. Every presence check in the engine
/// goes through here.
pub fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| {
        let v = v.trim();
        !v.is_empty() && v != "-"
    })
}

/// Extract a time-of-day from any representation the backend emits:
/// "HH:mm", "HH:mm:ss", or a full ISO timestamp (with or without
/// offset). Anything else, including the absence sentinels, is `None`.
pub fn time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if !is_present(Some(value)) {
        return None;
    }
    if let Ok(t) = NaiveTime::parse_from_str(value, "%H:%M:%S") {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(value, "%H:%M") {
        return Some(t);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.time());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.time());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.time());
    }
    None
}

/// Anchor a wall-clock string to a calendar day, producing a comparable
/// instant. Parse failures degrade to `None`; callers treat that as
/// "metric not computable", never as an error.
pub fn parse_on(value: &str, on: NaiveDate) -> Option<NaiveDateTime> {
    time_of_day(value).map(|t| on.and_time(t))
}

/// Wall-clock string rendered as "hh:mm AM/PM", or "-" when absent or
/// unparseable. Shared by the display and export layers.
pub fn format_display(value: Option<&str>) -> String {
    match value.and_then(time_of_day) {
        Some(t) => t.format("%I:%M %p").to_string(),
        None => "-".to_string(),
    }
}
