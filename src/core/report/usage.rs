use std::collections::HashSet;
use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use super::days_before;
use crate::core::galaxy::GalaxyApi;

/// Lookback windows in days, reported in this order.
pub const WINDOWS: [u64; 6] = [1, 7, 30, 90, 180, 365];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRow {
    pub days: u64,
    pub jobs: usize,
    pub active_users: usize,
}

pub async fn collect_usage(api: &dyn GalaxyApi, today: NaiveDate) -> Result<Vec<UsageRow>> {
    let mut rows = Vec::with_capacity(WINDOWS.len());
    for days in WINDOWS {
        let since = days_before(today, days)?;
        let jobs = api
            .list_jobs(since, true)
            .await
            .with_context(|| format!("failed to fetch jobs since {}", since))?;

        let active_users = jobs
            .iter()
            .filter_map(|job| job.user_email.as_deref())
            .collect::<HashSet<_>>()
            .len();
        info!(days, jobs = jobs.len(), active_users, "usage window");

        rows.push(UsageRow {
            days,
            jobs: jobs.len(),
            active_users,
        });
    }
    Ok(rows)
}

pub fn render_usage(rows: &[UsageRow], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Galaxy usage (jobs and active users per window)")?;
    for row in rows {
        writeln!(
            out,
            "last {:>3} days: {:>6} jobs {:>4} active users",
            row.days, row.jobs, row.active_users
        )?;
    }
    Ok(())
}

pub async fn print_usage_report(
    api: &dyn GalaxyApi,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<()> {
    let rows = collect_usage(api, today).await?;
    render_usage(&rows, out)?;
    Ok(())
}
