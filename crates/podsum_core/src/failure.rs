use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the podcast";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: Unable to connect to the server. Please check if the backend is running.";
pub const HISTORY_LOAD_FAILED_MESSAGE: &str = "Failed to load summaries";

/// Rejected before any state transition; no request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("podcast URL must not be empty")]
    EmptyUrl,
}

/// Trim the submitted URL and refuse whitespace-only input.
pub fn validate_submission(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    Ok(url.to_string())
}

/// Why a submission or single-summary fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The server answered with a non-success status.
    Server { status: u16, detail: Option<String> },
    /// The request went out but no response came back.
    Network,
    /// The request could not be built or its answer could not be read.
    Client(String),
}

impl FetchFailure {
    pub fn user_message(&self) -> String {
        match self {
            FetchFailure::Server {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            FetchFailure::Server { status, .. } => format!("Server error: {status}"),
            FetchFailure::Network => NETWORK_ERROR_MESSAGE.to_string(),
            FetchFailure::Client(message) if message.trim().is_empty() => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            FetchFailure::Client(message) => message.clone(),
        }
    }
}
