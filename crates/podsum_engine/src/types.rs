use std::fmt;

use crate::wire::SummaryRecord;

pub type RequestId = u64;
pub type SummaryId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A submission or single-summary fetch finished.
    RecordFetched {
        request: RequestId,
        result: Result<SummaryRecord, ApiError>,
    },
    SummariesListed {
        request: RequestId,
        result: Result<Vec<SummaryRecord>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not be built (bad base URL, client setup).
    InvalidRequest,
    /// The server answered with a non-success status.
    HttpStatus { status: u16, detail: Option<String> },
    Timeout,
    /// Sent, but no response arrived.
    Network,
    /// A success response whose body was not the expected JSON.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unreadable response"),
        }
    }
}
