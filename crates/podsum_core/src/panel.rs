//! Result panel: tabbed view over one result plus its export actions.

use crate::record::ResultRecord;
use crate::render::{render_structured, DisplayUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Primary,
    /// Only selectable when the result carries a structured summary.
    Secondary,
    Transcript,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Primary => "Summary",
            Tab::Secondary => "Structured Summary",
            Tab::Transcript => "Full Transcript",
        }
    }
}

/// Raw fields that can be saved as a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Transcript,
    Summary,
}

impl ExportKind {
    pub fn prefix(self) -> &'static str {
        match self {
            ExportKind::Transcript => "transcript",
            ExportKind::Summary => "summary",
        }
    }

    /// The unmodified field text. Never derived from parsed blocks.
    pub fn contents(self, record: &ResultRecord) -> &str {
        match self {
            ExportKind::Transcript => &record.transcript,
            ExportKind::Summary => &record.summary_primary,
        }
    }
}

/// `<kind>-<unix-ms>.txt`
pub fn export_filename(kind: ExportKind, unix_ms: i64) -> String {
    format!("{}-{unix_ms}.txt", kind.prefix())
}

/// Local tab selection. Created fresh for every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPanel {
    selected: Tab,
    has_secondary: bool,
}

impl ResultPanel {
    pub fn new(record: &ResultRecord) -> Self {
        Self {
            selected: Tab::Primary,
            has_secondary: record.structured_summary().is_some(),
        }
    }

    pub fn selected(&self) -> Tab {
        self.selected
    }

    pub fn tabs(&self) -> Vec<Tab> {
        if self.has_secondary {
            vec![Tab::Primary, Tab::Secondary, Tab::Transcript]
        } else {
            vec![Tab::Primary, Tab::Transcript]
        }
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if tab == Tab::Secondary && !self.has_secondary {
            return false;
        }
        if tab == self.selected {
            return false;
        }
        self.selected = tab;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    Plain(String),
    Structured(Vec<DisplayUnit>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanelView {
    pub title: Option<String>,
    pub metadata: Vec<MetadataRow>,
    pub tabs: Vec<TabView>,
    pub selected: Tab,
    pub body: PanelBody,
    pub notice: Option<String>,
}

/// Build the panel view. Structured blocks are re-derived on every call.
pub fn panel_view(
    record: &ResultRecord,
    panel: &ResultPanel,
    notice: Option<&str>,
) -> ResultPanelView {
    let selected = panel.selected();
    let body = match selected {
        Tab::Primary => PanelBody::Plain(record.summary_primary.clone()),
        Tab::Secondary => {
            PanelBody::Structured(render_structured(record.structured_summary().unwrap_or("")))
        }
        Tab::Transcript => PanelBody::Plain(record.transcript.clone()),
    };

    ResultPanelView {
        title: record.display_title().map(ToOwned::to_owned),
        metadata: metadata_rows(record),
        tabs: panel
            .tabs()
            .into_iter()
            .map(|tab| TabView {
                tab,
                label: tab.label(),
                selected: tab == selected,
            })
            .collect(),
        selected,
        body,
        notice: notice.map(ToOwned::to_owned),
    }
}

fn metadata_rows(record: &ResultRecord) -> Vec<MetadataRow> {
    let mut rows = Vec::new();
    if let Some(meta) = &record.metadata {
        if let Some(duration) = meta.duration_label() {
            rows.push(MetadataRow {
                label: "Duration",
                value: duration,
            });
        }
        if let Some(uploader) = meta.uploader.as_deref().filter(|u| !u.is_empty()) {
            rows.push(MetadataRow {
                label: "Author",
                value: uploader.to_string(),
            });
        }
    }
    let chars = record.transcript.chars().count() as u64;
    rows.push(MetadataRow {
        label: "Transcript Length",
        value: format!("{} characters", format_with_commas(chars)),
    });
    rows
}

pub fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
