use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{ApiError, ApiResult};
use super::types::{Job, JobDetail, User};
use super::GalaxyApi;

const API_KEY_HEADER: &str = "x-api-key";
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    Password { email: String, password: String },
}

#[derive(Deserialize)]
struct BaseAuthResponse {
    api_key: Option<String>,
}

pub struct GalaxyClient {
    base: Url,
    api_key: String,
    http: Client,
}

impl GalaxyClient {
    /// Builds the client and, for email/password credentials, trades them for
    /// an API key once so every later request uses the same header.
    pub async fn connect(
        url: &str,
        credentials: Credentials,
        verify_tls: bool,
    ) -> ApiResult<Self> {
        let base = normalize_base(url)?;
        let http = Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .user_agent(concat!("galaxy-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Connection {
                url: base.to_string(),
                source,
            })?;

        let api_key = match credentials {
            Credentials::ApiKey(key) => key,
            Credentials::Password { email, password } => {
                fetch_api_key(&http, &base, &email, &password).await?
            }
        };

        Ok(Self {
            base,
            api_key,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        api_url(&self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!(method = "GET", url = %url, "galaxy request");
        let res = self
            .http
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await;
        read_json(url, res).await
    }
}

#[async_trait]
impl GalaxyApi for GalaxyClient {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let url = self.endpoint("users")?;
        self.get_json(url).await
    }

    async fn list_jobs(
        &self,
        min_date: NaiveDate,
        include_user_details: bool,
    ) -> ApiResult<Vec<Job>> {
        let mut url = self.endpoint("jobs")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("date_range_min", &min_date.format("%Y-%m-%d").to_string());
            if include_user_details {
                query.append_pair("user_details", "true");
            }
        }
        self.get_json(url).await
    }

    async fn get_job_detail(&self, job_id: &str) -> ApiResult<JobDetail> {
        let mut url = self.endpoint(&format!("jobs/{}", urlencoding::encode(job_id)))?;
        url.query_pairs_mut().append_pair("full", "true");
        self.get_json(url).await
    }
}

async fn fetch_api_key(
    http: &Client,
    base: &Url,
    email: &str,
    password: &str,
) -> ApiResult<String> {
    let url = api_url(base, "authenticate/baseauth")?;
    debug!(method = "GET", url = %url, user = email, "galaxy baseauth");
    let res = http
        .get(url.clone())
        .basic_auth(email, Some(password))
        .send()
        .await;

    let body: BaseAuthResponse = match read_json(url, res).await {
        Ok(body) => body,
        Err(ApiError::Status { status, body, .. }) => {
            return Err(ApiError::Authentication(format!(
                "HTTP {} for {}: {}",
                status, email, body
            )));
        }
        Err(e) => return Err(e),
    };

    body.api_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ApiError::Authentication(format!("no API key returned for {}", email)))
}

async fn read_json<T: DeserializeOwned>(
    url: Url,
    res: Result<reqwest::Response, reqwest::Error>,
) -> ApiResult<T> {
    let res = res.map_err(|source| ApiError::Connection {
        url: url.to_string(),
        source,
    })?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: truncate(body.trim()),
        });
    }

    let text = res.text().await.map_err(|source| ApiError::Connection {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Accepts `https://host`, `https://host/galaxy/` or `https://host/api` and
/// returns a base ending in `/` that API paths can be joined onto.
pub(crate) fn normalize_base(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    let url = Url::parse(&format!("{}/", trimmed))
        .map_err(|_| ApiError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

fn api_url(base: &Url, path: &str) -> ApiResult<Url> {
    base.join(&format!("api/{}", path))
        .map_err(|_| ApiError::InvalidUrl(base.to_string()))
}

fn truncate(body: &str) -> String {
    if body.chars().count() > MAX_ERROR_BODY {
        let cut: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
