use crate::{ExportKind, RequestId, SummaryId};

/// Work the shell must perform on behalf of [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitPodcast { request: RequestId, url: String },
    ListSummaries { request: RequestId },
    FetchSummary { request: RequestId, id: SummaryId },
    /// Save `contents` byte-for-byte under a timestamped name for `kind`.
    ExportText { kind: ExportKind, contents: String },
}
