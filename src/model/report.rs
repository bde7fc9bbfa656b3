use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::record::DailyRecord;

/// Raw report envelope fetched from the report-data backend for one
/// employee and date range. `employee` and `summary` are passed through
/// untouched; only `daily_records` feeds the computation engine.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceReport {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub employee: serde_json::Value,

    pub period: ReportPeriod,

    #[serde(default)]
    #[schema(value_type = Object)]
    pub summary: serde_json::Value,

    /// One record per calendar day, ascending date, no duplicates.
    pub daily_records: Vec<DailyRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ReportPeriod {
    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-01-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,
}
