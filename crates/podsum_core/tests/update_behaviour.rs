use std::sync::Once;

use podsum_core::{
    update, AppState, Effect, ExportKind, ExportOutcome, FetchFailure, LoadOrigin, Metadata, Msg,
    PanelBody, ResultRecord, Screen, Tab, ViewState, NETWORK_ERROR_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(podsum_logging::initialize_for_tests);
}

fn record() -> ResultRecord {
    ResultRecord {
        transcript: "T".to_string(),
        summary_primary: "S1".to_string(),
        summary_secondary: Some("## Title\n- a\n  - b".to_string()),
        metadata: Some(Metadata {
            duration_secs: Some(125),
            uploader: Some("X".to_string()),
            title: None,
        }),
        ..ResultRecord::default()
    }
}

fn submitted(url: &str) -> (AppState, u64) {
    let (state, effects) = update(AppState::new(), Msg::UrlSubmitted(url.to_string()));
    let request = match effects.as_slice() {
        [Effect::SubmitPodcast { request, .. }] => *request,
        other => panic!("expected one submit effect, got {other:?}"),
    };
    (state, request)
}

#[test]
fn app_starts_on_empty_form() {
    init_logging();
    assert_eq!(
        *AppState::new().view_state(),
        ViewState::Form { error: None }
    );
}

#[test]
fn empty_submission_is_refused_without_state_change() {
    init_logging();
    for input in ["", "   ", "\t\n"] {
        let state = AppState::new();
        let (mut next, effects) = update(state.clone(), Msg::UrlSubmitted(input.to_string()));
        assert_eq!(next, state);
        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
    }
}

#[test]
fn submission_trims_url_and_enters_loading() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::UrlSubmitted("  https://x  ".to_string()),
    );
    assert_eq!(
        effects,
        vec![Effect::SubmitPodcast {
            request: 1,
            url: "https://x".to_string(),
        }]
    );
    assert_eq!(
        *state.view_state(),
        ViewState::Loading {
            request: 1,
            origin: LoadOrigin::Submission,
        }
    );
    assert!(matches!(state.view().screen, Screen::Loading(_)));
    assert!(!state.view().history_enabled);
}

#[test]
fn second_submission_while_loading_is_ignored() {
    init_logging();
    let (state, _) = submitted("https://a");
    let (next, effects) = update(state.clone(), Msg::UrlSubmitted("https://b".to_string()));
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn success_moves_to_results() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (mut state, effects) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    match state.view().screen {
        Screen::Results(panel) => {
            assert_eq!(panel.selected, Tab::Primary);
            assert_eq!(panel.body, PanelBody::Plain("S1".to_string()));
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn failure_returns_to_form_with_message() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(
        state,
        Msg::RecordFailed {
            request,
            failure: FetchFailure::Network,
        },
    );
    assert_eq!(
        *state.view_state(),
        ViewState::Form {
            error: Some(NETWORK_ERROR_MESSAGE.to_string()),
        }
    );
}

#[test]
fn resubmitting_from_error_clears_it() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(
        state,
        Msg::RecordFailed {
            request,
            failure: FetchFailure::Server {
                status: 500,
                detail: None,
            },
        },
    );
    let (state, effects) = update(state, Msg::UrlSubmitted("https://y".to_string()));
    assert_eq!(effects.len(), 1);
    assert!(matches!(state.view_state(), ViewState::Loading { .. }));
}

#[test]
fn late_failure_after_reset_is_ignored() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (mut state, _) = update(state, Msg::ResetClicked);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::RecordFailed {
            request,
            failure: FetchFailure::Network,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(*state.view_state(), ViewState::Form { error: None });
    assert!(!state.consume_dirty());
}

#[test]
fn late_result_after_reset_is_ignored() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(state, Msg::ResetClicked);
    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    assert_eq!(*state.view_state(), ViewState::Form { error: None });
}

#[test]
fn stale_result_does_not_satisfy_newer_request() {
    init_logging();
    let (state, first) = submitted("https://x");
    let (state, _) = update(state, Msg::ResetClicked);
    let (state, effects) = update(state, Msg::UrlSubmitted("https://y".to_string()));
    assert_eq!(
        effects,
        vec![Effect::SubmitPodcast {
            request: 2,
            url: "https://y".to_string(),
        }]
    );

    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request: first,
            record: record(),
        },
    );
    assert_eq!(
        *state.view_state(),
        ViewState::Loading {
            request: 2,
            origin: LoadOrigin::Submission,
        }
    );
}

#[test]
fn reset_clears_results() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    let (state, _) = update(state, Msg::ResetClicked);
    assert_eq!(*state.view_state(), ViewState::Form { error: None });
}

#[test]
fn tab_selection_is_local_and_replaced_with_result() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    let (mut state, effects) = update(state, Msg::TabSelected(Tab::Transcript));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    match state.view().screen {
        Screen::Results(panel) => assert_eq!(panel.body, PanelBody::Plain("T".to_string())),
        other => panic!("expected results, got {other:?}"),
    }

    // A new result starts on the primary tab again.
    let (state, _) = update(state, Msg::ResetClicked);
    let (state, effects) = update(state, Msg::UrlSubmitted("https://y".to_string()));
    let request = match effects.as_slice() {
        [Effect::SubmitPodcast { request, .. }] => *request,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    match state.view().screen {
        Screen::Results(panel) => assert_eq!(panel.selected, Tab::Primary),
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn secondary_tab_refused_without_structured_summary() {
    init_logging();
    let (state, request) = submitted("https://x");
    let plain = ResultRecord {
        summary_secondary: None,
        ..record()
    };
    let (state, _) = update(state, Msg::RecordLoaded { request, record: plain });
    let (mut state, _) = update(state, Msg::TabSelected(Tab::Secondary));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::TabSelected(Tab::Secondary));
    assert!(!state.consume_dirty());
    match state.view().screen {
        Screen::Results(panel) => assert_eq!(panel.selected, Tab::Primary),
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn export_emits_raw_field_text() {
    init_logging();
    let (state, request) = submitted("https://x");
    let (state, _) = update(
        state,
        Msg::RecordLoaded {
            request,
            record: record(),
        },
    );
    let before = state.clone();

    let (state, effects) = update(state, Msg::ExportClicked(ExportKind::Summary));
    assert_eq!(state, before);
    assert_eq!(
        effects,
        vec![Effect::ExportText {
            kind: ExportKind::Summary,
            contents: "S1".to_string(),
        }]
    );

    let (state, _) = update(
        state,
        Msg::ExportFinished(ExportOutcome::Written {
            path: "out/summary-1.txt".to_string(),
        }),
    );
    match state.view().screen {
        Screen::Results(panel) => {
            assert_eq!(panel.notice.as_deref(), Some("Saved out/summary-1.txt"))
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn export_outside_results_does_nothing() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExportClicked(ExportKind::Transcript));
    assert_eq!(state, AppState::new());
    assert!(effects.is_empty());
}
