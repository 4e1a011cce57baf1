use serde::Deserialize;
use serde_json::Value;

pub const RUNTIME_METRIC: &str = "runtime_seconds";
pub const STATE_OK: &str = "ok";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tool_id: String,
    /// Only present when the job list was requested with user details.
    #[serde(default)]
    pub user_email: Option<String>,
}

impl Job {
    pub fn is_ok(&self) -> bool {
        self.state == STATE_OK
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobMetric {
    pub name: String,
    #[serde(default)]
    pub raw_value: Value,
}

impl JobMetric {
    /// Galaxy serialises metric values as numeric strings; older servers send
    /// plain JSON numbers.
    pub fn numeric_value(&self) -> Option<f64> {
        match &self.raw_value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct JobDetail {
    pub id: String,
    #[serde(default)]
    pub tool_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_metrics: Vec<JobMetric>,
}

impl JobDetail {
    pub fn metric(&self, name: &str) -> Option<&JobMetric> {
        self.job_metrics.iter().find(|m| m.name == name)
    }

    pub fn runtime_seconds(&self) -> Option<f64> {
        self.metric(RUNTIME_METRIC).and_then(JobMetric::numeric_value)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<JobMetric>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let metrics: Option<Vec<JobMetric>> = Option::deserialize(deserializer)?;
    Ok(metrics.unwrap_or_default())
}
