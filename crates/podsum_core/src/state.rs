use crate::history::HistoryState;
use crate::panel::ResultPanel;
use crate::record::ResultRecord;
use crate::view_model::{build_view, AppViewModel};

/// Identifies one issued fetch so late answers can be recognised as stale.
pub type RequestId = u64;

/// Where a pending fetch was started from, and what to return to on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    Submission,
    /// The history list stays underneath so a failure can show it again.
    HistoryItem(HistoryState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsState {
    pub record: ResultRecord,
    pub panel: ResultPanel,
    /// Transient outcome of the last export.
    pub notice: Option<String>,
}

impl ResultsState {
    pub(crate) fn new(record: ResultRecord) -> Self {
        let panel = ResultPanel::new(&record);
        Self {
            record,
            panel,
            notice: None,
        }
    }
}

/// The screen currently shown. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Form { error: Option<String> },
    Loading { request: RequestId, origin: LoadOrigin },
    Results(Box<ResultsState>),
    History(HistoryState),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Form { error: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    view: ViewState,
    next_request: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            next_request: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn view(&self) -> AppViewModel {
        build_view(&self.view)
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub(crate) fn set_view(&mut self, view: ViewState) {
        self.view = view;
        self.dirty = true;
    }

    pub(crate) fn take_view(&mut self) -> ViewState {
        std::mem::take(&mut self.view)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        let request = self.next_request;
        self.next_request += 1;
        request
    }
}
