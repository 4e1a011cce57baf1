//! Command-line argument definitions.

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};

use crate::core::galaxy::Credentials;

/// Administrative reports for a Galaxy server
#[derive(Parser, Debug)]
#[command(name = "galaxy-admin", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("auth")
        .required(true)
        .multiple(true)
        .args(["api_key", "user_email"])
))]
pub struct Args {
    /// The command to execute
    #[arg(value_enum)]
    pub command: ReportCommand,

    /// Extra arguments for the command (job-runtimes: days_ago, default 30)
    pub args: Vec<String>,

    /// URL of the galaxy instance
    #[arg(short = 'g', long, value_name = "URL")]
    pub galaxy: String,

    /// Admin API key for the galaxy instance
    #[arg(short = 'a', long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Email of an admin user, used together with --password
    #[arg(short = 'u', long, value_name = "EMAIL", requires = "password")]
    pub user_email: Option<String>,

    /// Password of the admin user
    #[arg(short = 'p', long, requires = "user_email")]
    pub password: Option<String>,

    /// Do not verify the server's TLS certificate
    #[arg(long)]
    pub skip_verify_tls: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// An API key takes precedence over an email/password pair.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(key) = &self.api_key {
            return Some(Credentials::ApiKey(key.clone()));
        }
        match (&self.user_email, &self.password) {
            (Some(email), Some(password)) => Some(Credentials::Password {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    pub fn verify_tls(&self) -> bool {
        !self.skip_verify_tls
    }
}

/// Available reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportCommand {
    /// Print the email address of every user
    #[value(alias = "user_emails")]
    UserEmails,
    /// Job and active-user counts for the last 1, 7, 30, 90, 180 and 365 days
    UsageReport,
    /// Per-tool runtime statistics for successful jobs
    JobRuntimes,
}
