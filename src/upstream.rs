use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::config::Config;
use crate::model::report::AttendanceReport;

/// Blocking client for the report-data backend. Handlers call it through
/// `web::block`; each request gets its own fetched copy of the data, so
/// nothing is shared or cached between report computations.
#[derive(Clone)]
pub struct ReportClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ReportClient {
    pub fn from_config(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build();
        Self {
            base_url: config.report_api_base.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn fetch_report(
        &self,
        employee_id: u64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AttendanceReport> {
        let url = format!("{}/attendance-report", self.base_url);

        let response = self
            .agent
            .get(&url)
            .query("employee_id", &employee_id.to_string())
            .query("start_date", &start_date.to_string())
            .query("end_date", &end_date.to_string())
            .call()
            .with_context(|| format!("report backend request failed: {url}"))?;

        response
            .into_json::<AttendanceReport>()
            .context("report backend returned a malformed payload")
    }
}
