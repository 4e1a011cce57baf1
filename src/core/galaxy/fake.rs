use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::{ApiError, ApiResult};
use super::types::{Job, JobDetail, JobMetric, User};
use super::GalaxyApi;

/// In-memory Galaxy used by report tests. Records every call it receives.
#[derive(Default)]
pub struct FakeGalaxy {
    pub users: Vec<User>,
    pub jobs: Vec<Job>,
    pub details: HashMap<String, JobDetail>,
    /// Job ids whose detail fetch fails as if the server went away.
    pub unreachable: Vec<String>,
    pub job_queries: Mutex<Vec<(NaiveDate, bool)>>,
    pub detail_requests: Mutex<Vec<String>>,
}

impl FakeGalaxy {
    pub fn with_users(emails: &[Option<&str>]) -> Self {
        Self {
            users: emails
                .iter()
                .map(|e| User {
                    email: e.map(str::to_string),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn push_job(&mut self, id: &str, state: &str, tool_id: &str, email: Option<&str>) {
        self.jobs.push(Job {
            id: id.to_string(),
            state: state.to_string(),
            tool_id: tool_id.to_string(),
            user_email: email.map(str::to_string),
        });
    }

    pub fn push_runtime(&mut self, id: &str, tool_id: &str, seconds: Option<f64>) {
        let mut job_metrics = vec![JobMetric {
            name: "galaxy_slots".to_string(),
            raw_value: serde_json::json!("1.0000000"),
        }];
        if let Some(seconds) = seconds {
            job_metrics.push(JobMetric {
                name: "runtime_seconds".to_string(),
                raw_value: serde_json::json!(format!("{:.7}", seconds)),
            });
        }
        self.details.insert(
            id.to_string(),
            JobDetail {
                id: id.to_string(),
                tool_id: tool_id.to_string(),
                job_metrics,
            },
        );
    }

    pub fn job_queries(&self) -> Vec<(NaiveDate, bool)> {
        self.job_queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.detail_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl GalaxyApi for FakeGalaxy {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn list_jobs(
        &self,
        min_date: NaiveDate,
        include_user_details: bool,
    ) -> ApiResult<Vec<Job>> {
        self.job_queries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((min_date, include_user_details));
        let jobs = self
            .jobs
            .iter()
            .cloned()
            .map(|mut job| {
                if !include_user_details {
                    job.user_email = None;
                }
                job
            })
            .collect();
        Ok(jobs)
    }

    async fn get_job_detail(&self, job_id: &str) -> ApiResult<JobDetail> {
        self.detail_requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(job_id.to_string());
        let url = format!("http://fake.galaxy/api/jobs/{}", job_id);
        if self.unreachable.iter().any(|id| id == job_id) {
            return Err(ApiError::Status {
                url,
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        self.details
            .get(job_id)
            .cloned()
            .ok_or(ApiError::Decode {
                url,
                message: "unknown job".to_string(),
            })
    }
}
