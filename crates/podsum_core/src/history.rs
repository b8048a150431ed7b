//! History list: past results fetched read-only from the server.

use crate::record::{Metadata, SummaryId};
use crate::RequestId;

pub const UNTITLED_PODCAST: &str = "Untitled Podcast";
/// Characters of the primary summary shown per history row.
pub const PREVIEW_CHARS: usize = 150;
const PREVIEW_SUFFIX: &str = "...";

/// One row of the history collection, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: SummaryId,
    pub podcast_title: Option<String>,
    pub created_at: String,
    pub summary_primary: String,
    pub has_secondary: bool,
    pub metadata: Option<Metadata>,
}

/// Fetch status of the history collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryList {
    Loading { request: RequestId },
    Loaded(Vec<HistoryEntry>),
    Failed,
}

/// Held while the history screen (or a selection made from it) is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub list: HistoryList,
    /// Failure of the last item selection; shown above the list.
    pub selection_error: Option<String>,
}

impl HistoryState {
    pub(crate) fn loading(request: RequestId) -> Self {
        Self {
            list: HistoryList::Loading { request },
            selection_error: None,
        }
    }

    pub fn entries(&self) -> Option<&[HistoryEntry]> {
        match &self.list {
            HistoryList::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self.list {
            HistoryList::Loading { request } => Some(request),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: SummaryId,
    pub title: String,
    pub preview: String,
    pub created_at: String,
    pub duration: Option<String>,
    pub has_structured_summary: bool,
}

impl From<&HistoryEntry> for HistoryRowView {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            title: entry
                .podcast_title
                .clone()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| UNTITLED_PODCAST.to_string()),
            preview: summary_preview(&entry.summary_primary),
            created_at: entry.created_at.clone(),
            duration: entry.metadata.as_ref().and_then(Metadata::duration_label),
            has_structured_summary: entry.has_secondary,
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of a summary followed by `...`.
pub fn summary_preview(summary: &str) -> String {
    let end = summary
        .char_indices()
        .nth(PREVIEW_CHARS)
        .map_or(summary.len(), |(idx, _)| idx);
    format!("{}{PREVIEW_SUFFIX}", &summary[..end])
}
