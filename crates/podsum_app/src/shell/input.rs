//! Turns typed lines into core messages.

use podsum_core::{AppViewModel, ExportKind, HistoryView, Msg, Screen, SummaryId, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Help,
    Quit,
    /// Shown to the user as-is; nothing is dispatched.
    Invalid(String),
}

pub fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Msg(Msg::NoOp),
        "submit" if rest.is_empty() => Command::Invalid("Usage: submit <podcast url>".to_string()),
        "submit" => Command::Msg(Msg::UrlSubmitted(rest.to_string())),
        "history" if !view.history_enabled => {
            Command::Invalid("History is unavailable while a request is pending".to_string())
        }
        "history" => Command::Msg(Msg::HistoryOpened),
        "refresh" | "retry" => Command::Msg(Msg::HistoryRefreshClicked),
        "open" => parse_open(rest, view),
        "tab" => match parse_tab(rest) {
            Some(tab) => Command::Msg(Msg::TabSelected(tab)),
            None => Command::Invalid("Usage: tab <summary|structured|transcript>".to_string()),
        },
        "export" => match rest.to_ascii_lowercase().as_str() {
            "transcript" => Command::Msg(Msg::ExportClicked(ExportKind::Transcript)),
            "summary" => Command::Msg(Msg::ExportClicked(ExportKind::Summary)),
            _ => Command::Invalid("Usage: export <transcript|summary>".to_string()),
        },
        "reset" | "new" => Command::Msg(Msg::ResetClicked),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ if looks_like_url(line) && matches!(view.screen, Screen::Form { .. }) => {
            Command::Msg(Msg::UrlSubmitted(line.to_string()))
        }
        _ => Command::Invalid(format!("Unknown command '{word}'. Type 'help' for commands.")),
    }
}

fn parse_tab(arg: &str) -> Option<Tab> {
    match arg.to_ascii_lowercase().as_str() {
        "primary" | "summary" => Some(Tab::Primary),
        "structured" | "secondary" => Some(Tab::Secondary),
        "transcript" => Some(Tab::Transcript),
        _ => None,
    }
}

/// `open <n>` picks the n-th listed row; `open #<id>` names a summary id directly.
fn parse_open(arg: &str, view: &AppViewModel) -> Command {
    let usage = || Command::Invalid("Usage: open <row number> or open #<id>".to_string());

    if let Some(id) = arg.strip_prefix('#') {
        return match id.parse::<SummaryId>() {
            Ok(id) => Command::Msg(Msg::HistoryItemSelected { id }),
            Err(_) => usage(),
        };
    }
    let Ok(position) = arg.parse::<usize>() else {
        return usage();
    };
    let Screen::History(HistoryView::Listed { rows, .. }) = &view.screen else {
        return Command::Invalid("No history list is shown".to_string());
    };
    match position.checked_sub(1).and_then(|idx| rows.get(idx)) {
        Some(row) => Command::Msg(Msg::HistoryItemSelected { id: row.id }),
        None => Command::Invalid(format!("No row {position}; the list has {}", rows.len())),
    }
}

fn looks_like_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}
