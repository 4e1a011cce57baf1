pub mod client;
pub mod error;
#[cfg(test)]
pub mod fake;
pub mod types;

use async_trait::async_trait;
use chrono::NaiveDate;

pub use client::{Credentials, GalaxyClient};
pub use error::{ApiError, ApiResult};
pub use types::{Job, JobDetail, User};

/// The read-only slice of the Galaxy admin API the reports need.
#[async_trait]
pub trait GalaxyApi: Send + Sync {
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    // Jobs submitted on or after `min_date`; `include_user_details` adds the submitter email
    async fn list_jobs(
        &self,
        min_date: NaiveDate,
        include_user_details: bool,
    ) -> ApiResult<Vec<Job>>;

    async fn get_job_detail(&self, job_id: &str) -> ApiResult<JobDetail>;
}
