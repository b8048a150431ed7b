use podsum_core::{
    update, AppState, Block, Depth, DisplayUnit, Effect, ListIndent, Metadata, MetadataRow, Msg,
    PanelBody, ResultRecord, Screen, Tab, ViewState,
};
use pretty_assertions::assert_eq;

#[test]
fn submission_to_structured_tab() {
    podsum_logging::initialize_for_tests();

    let (state, effects) = update(
        AppState::new(),
        Msg::UrlSubmitted("https://podcasts.example.com/ep/1".to_string()),
    );
    let request = match effects.as_slice() {
        [Effect::SubmitPodcast { request, url }] => {
            assert_eq!(url, "https://podcasts.example.com/ep/1");
            *request
        }
        other => panic!("expected submit effect, got {other:?}"),
    };
    assert!(matches!(state.view_state(), ViewState::Loading { .. }));

    let secondary = "## Title\n- a\n  - b";
    let record = ResultRecord {
        transcript: "T".to_string(),
        summary_primary: "S1".to_string(),
        summary_secondary: Some(secondary.to_string()),
        metadata: Some(Metadata {
            duration_secs: Some(125),
            uploader: Some("X".to_string()),
            title: None,
        }),
        ..ResultRecord::default()
    };
    let (state, _) = update(state, Msg::RecordLoaded { request, record });
    assert!(matches!(state.view_state(), ViewState::Results(_)));

    assert_eq!(
        podsum_core::parse(secondary),
        vec![
            Block::Title {
                text: "Title".to_string()
            },
            Block::BulletItem {
                text: "a".to_string(),
                depth: Depth::TopLevel,
            },
            Block::BulletItem {
                text: "b".to_string(),
                depth: Depth::Nested,
            },
        ]
    );

    let (state, _) = update(state, Msg::TabSelected(Tab::Secondary));
    let panel = match state.view().screen {
        Screen::Results(panel) => panel,
        other => panic!("expected results, got {other:?}"),
    };
    assert_eq!(
        panel.body,
        PanelBody::Structured(vec![
            DisplayUnit::LargeHeading("Title".to_string()),
            DisplayUnit::ListItem {
                text: "a".to_string(),
                indent: ListIndent::TopLevel,
            },
            DisplayUnit::ListItem {
                text: "b".to_string(),
                indent: ListIndent::Indented,
            },
        ])
    );
    assert_eq!(
        panel.metadata,
        vec![
            MetadataRow {
                label: "Duration",
                value: "2:05".to_string(),
            },
            MetadataRow {
                label: "Author",
                value: "X".to_string(),
            },
            MetadataRow {
                label: "Transcript Length",
                value: "1 characters".to_string(),
            },
        ]
    );
    let labels: Vec<_> = panel.tabs.iter().map(|tab| tab.label).collect();
    assert_eq!(labels, vec!["Summary", "Structured Summary", "Full Transcript"]);
}
