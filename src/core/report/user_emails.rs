use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::galaxy::GalaxyApi;

/// Emails in the order Galaxy returns users; users without one are skipped.
pub async fn collect_emails(api: &dyn GalaxyApi) -> Result<Vec<String>> {
    let users = api.list_users().await.context("failed to fetch user list")?;
    info!("fetched {} users", users.len());
    Ok(users.into_iter().filter_map(|u| u.email).collect())
}

pub async fn print_user_emails(api: &dyn GalaxyApi, out: &mut dyn Write) -> Result<()> {
    for email in collect_emails(api).await? {
        writeln!(out, "{}", email)?;
    }
    Ok(())
}
