use crate::{ExportKind, FetchFailure, HistoryEntry, RequestId, ResultRecord, SummaryId, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the podcast URL form (untrimmed input).
    UrlSubmitted(String),
    /// A submission or single-summary fetch resolved.
    RecordLoaded {
        request: RequestId,
        record: ResultRecord,
    },
    /// A submission or single-summary fetch failed.
    RecordFailed {
        request: RequestId,
        failure: FetchFailure,
    },
    /// User navigated to the history screen.
    HistoryOpened,
    /// User clicked Refresh on the history screen.
    HistoryRefreshClicked,
    HistoryLoaded {
        request: RequestId,
        entries: Vec<HistoryEntry>,
    },
    HistoryFailed { request: RequestId },
    /// User picked one history row.
    HistoryItemSelected { id: SummaryId },
    /// User switched result tabs.
    TabSelected(Tab),
    ExportClicked(ExportKind),
    /// The export file was written (or not).
    ExportFinished(ExportOutcome),
    /// "New Podcast" / "Try Again".
    ResetClicked,
    /// Leaves the state untouched, e.g. for a blank input line.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: String },
    Failed { message: String },
}
