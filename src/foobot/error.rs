use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("failed to reach the Foobot API")]
    Unreachable(#[source] reqwest::Error),
    #[error("rate limited by the Foobot API (HTTP 429)")]
    RateLimited,
    #[error("Foobot API server error (HTTP {0})")]
    Server(u16),
    #[error("Foobot API rejected the credentials (HTTP {0})")]
    Auth(u16),
    #[error("unexpected Foobot API response (HTTP {0})")]
    UnexpectedStatus(u16),
    #[error("failed to decode Foobot API response")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Retryable,
    Permanent,
}

impl ApiError {
    // `None` means the status is not an error.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }

        Some(match status {
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            s if s.is_server_error() => ApiError::Server(s.as_u16()),
            s @ (StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                ApiError::Auth(s.as_u16())
            }
            s => ApiError::UnexpectedStatus(s.as_u16()),
        })
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Unreachable(err)
        }
    }

    pub fn class(&self) -> FailureClass {
        match self {
            ApiError::Timeout
            | ApiError::Unreachable(_)
            | ApiError::RateLimited
            | ApiError::Server(_) => FailureClass::Retryable,
            ApiError::Auth(_) | ApiError::UnexpectedStatus(_) | ApiError::Decode(_) => {
                FailureClass::Permanent
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.class() == FailureClass::Retryable
    }
}
