//! Command-line front-end: parses arguments, builds the Galaxy client and
//! dispatches to the selected report.

pub mod args;

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, info};

use crate::core::galaxy::{GalaxyApi, GalaxyClient};
use crate::core::report::{job_runtimes, usage, user_emails};
use crate::core::terminal::print_warn;
use crate::logging;

pub use args::{Args, ReportCommand};

impl ReportCommand {
    pub fn name(self) -> &'static str {
        match self {
            ReportCommand::UserEmails => "user-emails",
            ReportCommand::UsageReport => "usage-report",
            ReportCommand::JobRuntimes => "job-runtimes",
        }
    }

    fn consumes_args(self) -> bool {
        matches!(self, ReportCommand::JobRuntimes)
    }

    pub async fn run(
        self,
        api: &dyn GalaxyApi,
        today: NaiveDate,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<()> {
        if !args.is_empty() && !self.consumes_args() {
            debug!("{} ignores extra arguments {:?}", self.name(), args);
        }
        match self {
            ReportCommand::UserEmails => user_emails::print_user_emails(api, out).await,
            ReportCommand::UsageReport => usage::print_usage_report(api, today, out).await,
            ReportCommand::JobRuntimes => {
                job_runtimes::print_job_runtimes(api, today, args, out).await
            }
        }
    }
}

pub async fn run_main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out).await?;
    out.flush()?;
    Ok(())
}

pub async fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    let credentials = args
        .credentials()
        .ok_or_else(|| anyhow!("either --api-key or --user-email with --password is required"))?;
    if !args.verify_tls() {
        print_warn("TLS certificate verification is disabled");
    }

    let client = GalaxyClient::connect(&args.galaxy, credentials, args.verify_tls())
        .await
        .with_context(|| format!("failed to connect to {}", args.galaxy))?;
    info!("running {} against {}", args.command.name(), client.base_url());

    let today = Local::now().date_naive();
    args.command.run(&client, today, &args.args, out).await
}
