use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::engine;
use crate::engine::export::{self, COLUMNS, ReportRow};
use crate::engine::grouping::GroupedRecord;
use crate::engine::totals::ReportTotals;
use crate::model::report::{AttendanceReport, ReportPeriod};
use crate::upstream::ReportClient;

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ReportQuery {
    #[schema(example = 1001)]
    pub employee_id: u64,

    #[schema(example = "2026-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2026-01-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct ReportResponse {
    #[schema(value_type = Object)]
    pub employee: serde_json::Value,

    pub period: ReportPeriod,

    #[schema(value_type = Object)]
    pub summary: serde_json::Value,

    pub records: Vec<GroupedRecord>,
    pub totals: ReportTotals,
}

#[derive(Serialize, ToSchema)]
pub struct ExportResponse {
    #[schema(example = json!(["Date", "Day", "Status"]))]
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

/// Run the engine over a fetched report. "Today" is pinned once per
/// request so every record in the response sees the same reference date.
fn compute(report: AttendanceReport) -> ReportResponse {
    let reference = Local::now().date_naive();
    let computed = engine::build_report(&report.daily_records, reference);
    ReportResponse {
        employee: report.employee,
        period: report.period,
        summary: report.summary,
        records: computed.records,
        totals: computed.totals,
    }
}

async fn fetch_report(
    client: &ReportClient,
    query: &ReportQuery,
) -> actix_web::Result<AttendanceReport> {
    let client = client.clone();
    let (employee_id, start_date, end_date) =
        (query.employee_id, query.start_date, query.end_date);

    web::block(move || client.fetch_report(employee_id, start_date, end_date))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Report fetch task failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?
        .map_err(|e| {
            tracing::error!(error = %e, employee_id, "Upstream report fetch failed");
            actix_web::error::ErrorBadGateway("Report backend unavailable")
        })
}

fn validate_range(query: &ReportQuery) -> Option<HttpResponse> {
    if query.start_date > query.end_date {
        return Some(HttpResponse::BadRequest().json(serde_json::json!({
            "message": "start_date must not be after end_date"
        })));
    }
    None
}

/// Attendance report endpoint
#[utoipa::path(
    get,
    path = "/api/v1/report/attendance",
    params(ReportQuery),
    responses(
        (status = 200, description = "Computed attendance report", body = ReportResponse),
        (status = 400, description = "Invalid date range", body = Object, example = json!({
            "message": "start_date must not be after end_date"
        })),
        (status = 502, description = "Report backend unavailable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Report"
)]
pub async fn get_report(
    client: web::Data<ReportClient>,
    query: web::Query<ReportQuery>,
) -> actix_web::Result<impl Responder> {
    if let Some(resp) = validate_range(&query) {
        return Ok(resp);
    }

    tracing::info!(
        employee_id = query.employee_id,
        start_date = %query.start_date,
        end_date = %query.end_date,
        "Building attendance report"
    );

    let report = fetch_report(client.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(compute(report)))
}

/// Compute over a pushed payload instead of pulling from the backend
#[utoipa::path(
    post,
    path = "/api/v1/report/attendance",
    request_body = AttendanceReport,
    responses(
        (status = 200, description = "Computed attendance report", body = ReportResponse)
    ),
    tag = "Report"
)]
pub async fn compute_report(
    payload: web::Json<AttendanceReport>,
) -> actix_web::Result<impl Responder> {
    let report = payload.into_inner();
    tracing::info!(
        records = report.daily_records.len(),
        "Computing attendance report from supplied payload"
    );
    Ok(HttpResponse::Ok().json(compute(report)))
}

/// Tabular export endpoint for the CSV/Excel/PDF writers
#[utoipa::path(
    get,
    path = "/api/v1/report/attendance/export",
    params(ReportQuery),
    responses(
        (status = 200, description = "Formatted export rows", body = ExportResponse),
        (status = 400, description = "Invalid date range"),
        (status = 502, description = "Report backend unavailable")
    ),
    tag = "Report"
)]
pub async fn export_report(
    client: web::Data<ReportClient>,
    query: web::Query<ReportQuery>,
) -> actix_web::Result<impl Responder> {
    if let Some(resp) = validate_range(&query) {
        return Ok(resp);
    }

    let report = fetch_report(client.get_ref(), &query).await?;
    let computed = compute(report);

    Ok(HttpResponse::Ok().json(ExportResponse {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: export::rows(&computed.records),
    }))
}
