//! Podsum core: structured-summary parsing, rendering, and the pure view state machine.
mod blocks;
mod effect;
mod failure;
mod history;
mod msg;
mod panel;
mod record;
mod render;
mod state;
mod update;
mod view_model;

pub use blocks::{parse, Block, Depth, HeadingLevel, Span};
pub use effect::Effect;
pub use failure::{
    validate_submission, FetchFailure, ValidationError, GENERIC_ERROR_MESSAGE,
    HISTORY_LOAD_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE,
};
pub use history::{
    summary_preview, HistoryEntry, HistoryList, HistoryRowView, HistoryState, PREVIEW_CHARS,
    UNTITLED_PODCAST,
};
pub use msg::{ExportOutcome, Msg};
pub use panel::{
    export_filename, format_with_commas, panel_view, ExportKind, MetadataRow, PanelBody,
    ResultPanel, ResultPanelView, Tab, TabView,
};
pub use record::{format_duration, Metadata, ResultRecord, SummaryId};
pub use render::{render, render_structured, DisplayUnit, ListIndent, TextRun};
pub use state::{AppState, LoadOrigin, RequestId, ResultsState, ViewState};
pub use update::update;
pub use view_model::{AppViewModel, HistoryView, LoadingView, NavTarget, Screen, SUBMISSION_STEPS};
