use std::collections::HashMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::days_before;
use super::stats::{RuntimeStats, whole_seconds};
use crate::core::galaxy::GalaxyApi;

pub const DEFAULT_DAYS_AGO: &str = "30";

/// Reads the optional first extra argument as the lookback window.
pub fn parse_days_ago(args: &[String]) -> Result<u64> {
    let raw = args.first().map(String::as_str).unwrap_or(DEFAULT_DAYS_AGO);
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid days_ago '{}': expected a non-negative integer", raw))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolRuntimes {
    pub tool_id: String,
    pub stats: RuntimeStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeReport {
    pub days: u64,
    pub since: NaiveDate,
    pub total_jobs: usize,
    /// Tools in the order their first runtime was recorded.
    pub tools: Vec<ToolRuntimes>,
    /// Set when a detail fetch failed and the remaining jobs were skipped.
    pub truncated: Option<Truncation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Truncation {
    pub job_id: String,
    pub cause: String,
}

/// Runtime samples keyed by tool id, remembering first-seen order.
#[derive(Default)]
struct RuntimeSamples {
    index: HashMap<String, usize>,
    samples: Vec<(String, Vec<f64>)>,
}

impl RuntimeSamples {
    fn record(&mut self, tool_id: &str, seconds: f64) {
        let slot = match self.index.get(tool_id) {
            Some(&slot) => slot,
            None => {
                self.samples.push((tool_id.to_string(), Vec::new()));
                self.index.insert(tool_id.to_string(), self.samples.len() - 1);
                self.samples.len() - 1
            }
        };
        self.samples[slot].1.push(seconds);
    }

    fn into_tools(self) -> Vec<ToolRuntimes> {
        self.samples
            .into_iter()
            .filter_map(|(tool_id, runtimes)| {
                RuntimeStats::from_samples(&runtimes).map(|stats| ToolRuntimes { tool_id, stats })
            })
            .collect()
    }
}

pub async fn collect_runtimes(
    api: &dyn GalaxyApi,
    today: NaiveDate,
    days: u64,
) -> Result<RuntimeReport> {
    let since = days_before(today, days)?;
    let jobs = api
        .list_jobs(since, false)
        .await
        .with_context(|| format!("failed to fetch jobs since {}", since))?;
    info!("fetched {} jobs since {}", jobs.len(), since);

    let mut samples = RuntimeSamples::default();
    let mut truncated = None;

    for job in jobs.iter().filter(|job| job.is_ok()) {
        let detail = match api.get_job_detail(&job.id).await {
            Ok(detail) => detail,
            Err(e) if e.is_connection_error() => {
                debug!(job_id = %job.id, error = %e, "job detail unavailable");
                truncated = Some(Truncation {
                    job_id: job.id.clone(),
                    cause: e.to_string(),
                });
                break;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to fetch job {}", job.id));
            }
        };

        match detail.runtime_seconds() {
            Some(seconds) => samples.record(&job.tool_id, seconds),
            None => debug!(job_id = %job.id, "no runtime_seconds metric"),
        }
    }

    Ok(RuntimeReport {
        days,
        since,
        total_jobs: jobs.len(),
        tools: samples.into_tools(),
        truncated,
    })
}

pub fn render_runtimes(report: &RuntimeReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{} jobs since {} ({} days)",
        report.total_jobs, report.since, report.days
    )?;
    writeln!(out, "tool_id\texecutions\tmin\tmax\tmedian\tmean")?;
    for tool in &report.tools {
        let s = &tool.stats;
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            tool.tool_id,
            s.executions,
            whole_seconds(s.min),
            whole_seconds(s.max),
            whole_seconds(s.median),
            whole_seconds(s.mean)
        )?;
    }
    Ok(())
}

pub async fn print_job_runtimes(
    api: &dyn GalaxyApi,
    today: NaiveDate,
    args: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let days = parse_days_ago(args)?;
    let report = collect_runtimes(api, today, days).await?;
    render_runtimes(&report, out)?;
    // Partial statistics are still printed as a normal report; only stderr hears about it.
    if let Some(t) = &report.truncated {
        warn!(
            job_id = %t.job_id,
            cause = %t.cause,
            "stopped at a failed job detail fetch, later jobs are not in the statistics"
        );
    }
    Ok(())
}
