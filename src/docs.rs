use crate::api::report::{ExportResponse, ReportQuery, ReportResponse};
use crate::engine::export::ReportRow;
use crate::engine::grouping::GroupedRecord;
use crate::engine::metrics::DayMetrics;
use crate::engine::totals::ReportTotals;
use crate::model::record::{AttendanceStatus, DailyRecord, EntryType, TimeEntry};
use crate::model::report::{AttendanceReport, ReportPeriod};
use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Time Attendance Report API",
        version = "1.0.0",
        description = r#"
## Time Attendance Report Service

Turns raw clock-in/out punches plus a planned schedule into payroll
metrics and a reporting-ready day sequence.

### 🔹 Key Features
- **Derived metrics**
  - Billed Hours, Late, Undertime, Night Differential and sourced Overtime per day
- **Night-shift reconciliation**
  - A shift crossing midnight is merged with the next day's early time-out into one record
- **Display statuses**
  - Absent / Scheduled / Not Yet Scheduled resolved against the current date
- **Export rows**
  - Formatted tabular output for CSV, Excel and PDF writers

### 📦 Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::report::get_report,
        crate::api::report::compute_report,
        crate::api::report::export_report
    ),
    components(
        schemas(
            ReportQuery,
            ReportResponse,
            ExportResponse,
            AttendanceReport,
            ReportPeriod,
            DailyRecord,
            TimeEntry,
            EntryType,
            AttendanceStatus,
            GroupedRecord,
            DayMetrics,
            ReportTotals,
            ReportRow
        )
    ),
    tags(
        (name = "Report", description = "Attendance report computation APIs"),
    )
)]
pub struct ApiDoc;
