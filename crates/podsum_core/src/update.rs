use crate::failure::validate_submission;
use crate::history::{HistoryEntry, HistoryList, HistoryState};
use crate::msg::ExportOutcome;
use crate::state::{LoadOrigin, ResultsState, ViewState};
use crate::{AppState, Effect, FetchFailure, Msg, RequestId, ResultRecord, SummaryId};

/// Pure update function: applies a message to state and returns any effects.
///
/// Each transition is gated on the state it starts from. Fetch answers carry
/// the [`RequestId`] they were issued under and are dropped unless the state
/// is still waiting for exactly that request.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlSubmitted(raw) => submit(&mut state, &raw),
        Msg::RecordLoaded { request, record } => {
            record_loaded(&mut state, request, record);
            Vec::new()
        }
        Msg::RecordFailed { request, failure } => {
            record_failed(&mut state, request, &failure);
            Vec::new()
        }
        Msg::HistoryOpened => open_history(&mut state),
        Msg::HistoryRefreshClicked => refresh_history(&mut state),
        Msg::HistoryLoaded { request, entries } => {
            settle_history(&mut state, request, HistoryList::Loaded(entries));
            Vec::new()
        }
        Msg::HistoryFailed { request } => {
            settle_history(&mut state, request, HistoryList::Failed);
            Vec::new()
        }
        Msg::HistoryItemSelected { id } => select_history_item(&mut state, id),
        Msg::TabSelected(tab) => {
            let changed = match state.view_mut() {
                ViewState::Results(results) => results.panel.select(tab),
                _ => false,
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ExportClicked(kind) => match state.view_state() {
            ViewState::Results(results) => {
                let contents = kind.contents(&results.record);
                if contents.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::ExportText {
                        kind,
                        contents: contents.to_string(),
                    }]
                }
            }
            _ => Vec::new(),
        },
        Msg::ExportFinished(outcome) => {
            let applied = match state.view_mut() {
                ViewState::Results(results) => {
                    results.notice = Some(match outcome {
                        ExportOutcome::Written { path } => format!("Saved {path}"),
                        ExportOutcome::Failed { message } => format!("Export failed: {message}"),
                    });
                    true
                }
                _ => false,
            };
            if applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ResetClicked => {
            if *state.view_state() != ViewState::default() {
                state.set_view(ViewState::default());
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, raw: &str) -> Vec<Effect> {
    if !matches!(state.view_state(), ViewState::Form { .. }) {
        return Vec::new();
    }
    let Ok(url) = validate_submission(raw) else {
        return Vec::new();
    };

    let request = state.issue_request();
    state.set_view(ViewState::Loading {
        request,
        origin: LoadOrigin::Submission,
    });
    vec![Effect::SubmitPodcast { request, url }]
}

fn record_loaded(state: &mut AppState, request: RequestId, record: ResultRecord) {
    match state.take_view() {
        ViewState::Loading {
            request: pending, ..
        } if pending == request => {
            state.set_view(ViewState::Results(Box::new(ResultsState::new(record))));
        }
        other => *state.view_mut() = other,
    }
}

fn record_failed(state: &mut AppState, request: RequestId, failure: &FetchFailure) {
    match state.take_view() {
        ViewState::Loading {
            request: pending,
            origin,
        } if pending == request => {
            let message = failure.user_message();
            let next = match origin {
                LoadOrigin::Submission => ViewState::Form {
                    error: Some(message),
                },
                LoadOrigin::HistoryItem(mut history) => {
                    history.selection_error = Some(message);
                    ViewState::History(history)
                }
            };
            state.set_view(next);
        }
        other => *state.view_mut() = other,
    }
}

fn open_history(state: &mut AppState) -> Vec<Effect> {
    match state.view_state() {
        ViewState::Form { .. } | ViewState::Results(_) => {}
        // One primary fetch at a time; an open history screen uses Refresh.
        ViewState::Loading { .. } | ViewState::History(_) => return Vec::new(),
    }

    let request = state.issue_request();
    state.set_view(ViewState::History(HistoryState::loading(request)));
    vec![Effect::ListSummaries { request }]
}

fn refresh_history(state: &mut AppState) -> Vec<Effect> {
    let idle = matches!(
        state.view_state(),
        ViewState::History(history) if history.pending_request().is_none()
    );
    if !idle {
        return Vec::new();
    }

    let request = state.issue_request();
    if let ViewState::History(history) = state.view_mut() {
        history.list = HistoryList::Loading { request };
    }
    state.mark_dirty();
    vec![Effect::ListSummaries { request }]
}

fn settle_history(state: &mut AppState, request: RequestId, list: HistoryList) {
    let applied = match state.view_mut() {
        ViewState::History(history) if history.pending_request() == Some(request) => {
            history.list = list;
            true
        }
        _ => false,
    };
    if applied {
        state.mark_dirty();
    }
}

fn select_history_item(state: &mut AppState, id: SummaryId) -> Vec<Effect> {
    let listed = matches!(
        state.view_state(),
        ViewState::History(history)
            if history.entries().is_some_and(|entries| contains_id(entries, id))
    );
    if !listed {
        return Vec::new();
    }

    let request = state.issue_request();
    match state.take_view() {
        ViewState::History(mut history) => {
            history.selection_error = None;
            state.set_view(ViewState::Loading {
                request,
                origin: LoadOrigin::HistoryItem(history),
            });
            vec![Effect::FetchSummary { request, id }]
        }
        other => {
            *state.view_mut() = other;
            Vec::new()
        }
    }
}

fn contains_id(entries: &[HistoryEntry], id: SummaryId) -> bool {
    entries.iter().any(|entry| entry.id == id)
}
