use crate::history::{HistoryList, HistoryRowView, HistoryState};
use crate::panel::{panel_view, ResultPanelView};
use crate::state::{LoadOrigin, ViewState};

pub const SUBMISSION_STEPS: [&str; 3] = [
    "Extracting audio from podcast URL",
    "Transcribing audio content",
    "Generating AI summary",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    NewPodcast,
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub active_nav: NavTarget,
    /// History navigation is unavailable while a fetch is pending.
    pub history_enabled: bool,
    pub screen: Screen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Form { error: Option<String> },
    Loading(LoadingView),
    Results(ResultPanelView),
    History(HistoryView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub headline: &'static str,
    pub steps: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Loading,
    /// Carries the generic message; the screen offers Retry.
    Failed { message: &'static str },
    Empty,
    Listed {
        rows: Vec<HistoryRowView>,
        selection_error: Option<String>,
    },
}

pub(crate) fn build_view(view: &ViewState) -> AppViewModel {
    let (active_nav, screen) = match view {
        ViewState::Form { error } => (
            NavTarget::NewPodcast,
            Screen::Form {
                error: error.clone(),
            },
        ),
        ViewState::Loading { origin, .. } => match origin {
            LoadOrigin::Submission => (
                NavTarget::NewPodcast,
                Screen::Loading(LoadingView {
                    headline: "Processing Podcast...",
                    steps: SUBMISSION_STEPS.to_vec(),
                }),
            ),
            LoadOrigin::HistoryItem(_) => (
                NavTarget::History,
                Screen::Loading(LoadingView {
                    headline: "Loading summary...",
                    steps: Vec::new(),
                }),
            ),
        },
        ViewState::Results(results) => (
            NavTarget::NewPodcast,
            Screen::Results(panel_view(
                &results.record,
                &results.panel,
                results.notice.as_deref(),
            )),
        ),
        ViewState::History(history) => (NavTarget::History, Screen::History(history_view(history))),
    };

    AppViewModel {
        active_nav,
        history_enabled: !matches!(view, ViewState::Loading { .. }),
        screen,
    }
}

fn history_view(history: &HistoryState) -> HistoryView {
    match &history.list {
        HistoryList::Loading { .. } => HistoryView::Loading,
        HistoryList::Failed => HistoryView::Failed {
            message: crate::failure::HISTORY_LOAD_FAILED_MESSAGE,
        },
        HistoryList::Loaded(entries) if entries.is_empty() => HistoryView::Empty,
        HistoryList::Loaded(entries) => HistoryView::Listed {
            rows: entries.iter().map(HistoryRowView::from).collect(),
            selection_error: history.selection_error.clone(),
        },
    }
}
