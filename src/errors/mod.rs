//! Error handling for the funding ledger pipeline
//!
//! Every failure the pipeline can hit collapses into [`FundingError`]. Fetch
//! and transport failures are never recovered locally: they travel up through
//! `fetch_all` and abort the run, and the caller shows one message.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundingError {
    /// The fills endpoint answered with a non-success status
    #[error("Failed to fetch funding data: HTTP {status} from {endpoint}")]
    Fetch {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// No response was obtained (connect, TLS, timeout, body read)
    #[error("Transport error while contacting {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// A response arrived but its body was not a valid fills page
    #[error("Failed to decode fills response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FundingError {
    /// HTTP status for `Fetch` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            FundingError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a transport error from a reqwest failure, keeping timeouts readable
    pub fn from_reqwest(endpoint: &str, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };

        FundingError::Transport {
            endpoint: endpoint.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_carries_status() {
        let err = FundingError::Fetch {
            endpoint: "completeFills".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };

        assert_eq!(err.status(), Some(503));
        assert_eq!(
            err.to_string(),
            "Failed to fetch funding data: HTTP 503 from completeFills"
        );
    }

    #[test]
    fn test_non_fetch_errors_have_no_status() {
        let err = FundingError::Transport {
            endpoint: "completeFills".to_string(),
            message: "connection reset".to_string(),
        };
        assert_eq!(err.status(), None);

        let err = FundingError::Config("page_size must be > 0".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: page_size must be > 0");
    }
}
