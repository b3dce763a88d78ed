use thiserror::Error;

/// Failure of a call to the employee or report service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{url} responded with status {status}")]
    Status { status: u16, url: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}
