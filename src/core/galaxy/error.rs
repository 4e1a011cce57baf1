use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid Galaxy URL '{0}'")]
    InvalidUrl(String),

    #[error("authentication failed: {0}")]
    Authentication(String),
}

impl ApiError {
    /// Transport failures and HTTP error responses both count, the way the
    /// Galaxy client libraries report them.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ApiError::Connection { .. } | ApiError::Status { .. })
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_connection_are_connection_errors() {
        let status = ApiError::Status {
            url: "http://galaxy/api/jobs/1".into(),
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(status.is_connection_error());

        let decode = ApiError::Decode {
            url: "http://galaxy/api/jobs/1".into(),
            message: "expected object".into(),
        };
        assert!(!decode.is_connection_error());
        assert!(!ApiError::InvalidUrl("nope".into()).is_connection_error());
        assert!(!ApiError::Authentication("no key".into()).is_connection_error());
    }

    #[test]
    fn status_message_names_url_and_code() {
        let err = ApiError::Status {
            url: "http://galaxy/api/users".into(),
            status: 403,
            body: "forbidden".into(),
        };
        assert_eq!(
            err.to_string(),
            "http://galaxy/api/users answered with HTTP 403: forbidden"
        );
    }
}
