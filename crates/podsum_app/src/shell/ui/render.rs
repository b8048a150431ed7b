use chrono::{DateTime, NaiveDateTime};
use podsum_core::{
    AppViewModel, DisplayUnit, HistoryRowView, HistoryView, ListIndent, LoadingView, NavTarget,
    PanelBody, ResultPanelView, Screen, TextRun,
};

use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
}

impl RenderStyle {
    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(self, text: &str) -> String {
        self.paint(ANSI_BOLD, text)
    }
}

/// Full screen as printable lines. Called whenever the state reports dirty.
pub fn render(view: &AppViewModel, style: RenderStyle) -> Vec<String> {
    let mut lines = vec![nav_bar(view, style), "=".repeat(RULE_WIDTH)];
    match &view.screen {
        Screen::Form { error } => render_form(&mut lines, error.as_deref(), style),
        Screen::Loading(loading) => render_loading(&mut lines, loading, style),
        Screen::Results(panel) => render_results(&mut lines, panel, style),
        Screen::History(history) => render_history(&mut lines, history, style),
    }
    lines
}

pub fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  submit <url>        summarize a podcast (a bare URL works too)",
        "  history             list past summaries",
        "  refresh             reload the history list",
        "  open <n> | #<id>    open the n-th history row or a summary id",
        "  tab <summary|structured|transcript>",
        "  export <transcript|summary>",
        "  reset               back to the URL form",
        "  help, quit",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

fn nav_bar(view: &AppViewModel, style: RenderStyle) -> String {
    let item = |label: &str, target: NavTarget, enabled: bool| {
        if view.active_nav == target {
            style.bold(&format!("[{label}]"))
        } else if enabled {
            format!(" {label} ")
        } else {
            style.paint(ANSI_DIM, &format!(" {label} "))
        }
    };
    format!(
        "{}   {} {}",
        style.bold(APP_TITLE),
        item(NAV_NEW_PODCAST, NavTarget::NewPodcast, true),
        item(NAV_HISTORY, NavTarget::History, view.history_enabled),
    )
}

fn render_form(lines: &mut Vec<String>, error: Option<&str>, style: RenderStyle) {
    lines.push("Enter a podcast URL to transcribe and summarize.".to_string());
    lines.push("Type: submit <url>".to_string());
    if let Some(error) = error {
        lines.push(String::new());
        lines.push(style.paint(ANSI_RED, &format!("Error: {error}")));
    }
}

fn render_loading(lines: &mut Vec<String>, loading: &LoadingView, style: RenderStyle) {
    lines.push(style.bold(loading.headline));
    for (idx, step) in loading.steps.iter().enumerate() {
        lines.push(format!("  {}. {step}", idx + 1));
    }
}

fn render_results(lines: &mut Vec<String>, panel: &ResultPanelView, style: RenderStyle) {
    if let Some(title) = &panel.title {
        lines.push(style.bold(title));
    }
    for row in &panel.metadata {
        lines.push(format!("{}: {}", row.label, row.value));
    }
    lines.push(String::new());

    let tabs: Vec<String> = panel
        .tabs
        .iter()
        .map(|tab| {
            if tab.selected {
                style.bold(&format!("[{}]", tab.label))
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect();
    lines.push(tabs.join(" "));
    lines.push("-".repeat(RULE_WIDTH));

    match &panel.body {
        PanelBody::Plain(text) => lines.extend(text.lines().map(ToOwned::to_owned)),
        PanelBody::Structured(units) => lines.extend(render_units(units, style)),
    }

    lines.push("-".repeat(RULE_WIDTH));
    if let Some(notice) = &panel.notice {
        lines.push(style.paint(ANSI_GREEN, notice));
    }
    lines.push("tab <name> | export <transcript|summary> | reset".to_string());
}

/// One output line per display unit.
fn render_units(units: &[DisplayUnit], style: RenderStyle) -> Vec<String> {
    units
        .iter()
        .map(|unit| match unit {
            DisplayUnit::LargeHeading(text) => style.bold(&text.to_uppercase()),
            DisplayUnit::MediumHeading(text) => style.bold(text),
            DisplayUnit::SmallHeading(text) => style.paint(ANSI_DIM, &style.bold(text)),
            DisplayUnit::ListItem {
                text,
                indent: ListIndent::TopLevel,
            } => format!("{BULLET}{text}"),
            DisplayUnit::ListItem {
                text,
                indent: ListIndent::Indented,
            } => format!("{NESTED_BULLET}{text}"),
            DisplayUnit::InlineRun(runs) => inline_runs(runs, style),
            DisplayUnit::VerticalSpace => String::new(),
        })
        .collect()
}

fn inline_runs(runs: &[TextRun], style: RenderStyle) -> String {
    runs.iter()
        .map(|run| {
            if run.emphasized {
                style.bold(&run.text)
            } else {
                run.text.clone()
            }
        })
        .collect()
}

fn render_history(lines: &mut Vec<String>, history: &HistoryView, style: RenderStyle) {
    lines.push(style.bold("Previous Summaries"));
    lines.push(String::new());
    match history {
        HistoryView::Loading => lines.push("Loading summaries...".to_string()),
        HistoryView::Failed { message } => {
            lines.push(style.paint(ANSI_RED, message));
            lines.push("Type 'retry' to try again.".to_string());
        }
        HistoryView::Empty => {
            lines.push("No summaries yet. Submit a podcast to get started.".to_string());
        }
        HistoryView::Listed {
            rows,
            selection_error,
        } => {
            if let Some(error) = selection_error {
                lines.push(style.paint(ANSI_RED, &format!("Error: {error}")));
                lines.push(String::new());
            }
            for (idx, row) in rows.iter().enumerate() {
                history_row(lines, idx + 1, row, style);
            }
            lines.push("open <n> | refresh | reset".to_string());
        }
    }
}

fn history_row(lines: &mut Vec<String>, position: usize, row: &HistoryRowView, style: RenderStyle) {
    lines.push(format!(
        "{position:>3}. {} {}",
        style.bold(&row.title),
        style.paint(ANSI_DIM, &format!("#{}", row.id))
    ));

    let mut details = vec![format_created_at(&row.created_at)];
    if let Some(duration) = &row.duration {
        details.push(duration.clone());
    }
    if row.has_structured_summary {
        details.push("Structured Summary".to_string());
    }
    details.retain(|detail| !detail.is_empty());
    if !details.is_empty() {
        lines.push(format!("     {}", details.join(" · ")));
    }
    lines.push(format!("     {}", row.preview));
    lines.push(String::new());
}

/// Reformat a server timestamp for display; unparseable input is shown raw.
fn format_created_at(raw: &str) -> String {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string();
    }
    SERVER_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map_or_else(
            || raw.to_string(),
            |stamp| stamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        )
}
