pub type SummaryId = i64;

/// A processed podcast as handed to the core. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultRecord {
    /// Absent for records that come straight from a submission.
    pub id: Option<SummaryId>,
    pub podcast_title: Option<String>,
    pub created_at: Option<String>,
    pub transcript: String,
    pub summary_primary: String,
    /// The structured (pseudo-markdown) summary.
    pub summary_secondary: Option<String>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    pub duration_secs: Option<u64>,
    pub uploader: Option<String>,
    pub title: Option<String>,
}

impl Metadata {
    /// `M:SS`, or `None` when the duration is missing or zero.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_secs
            .filter(|secs| *secs > 0)
            .map(format_duration)
    }
}

impl ResultRecord {
    /// The secondary summary, if one is present and not blank.
    pub fn structured_summary(&self) -> Option<&str> {
        self.summary_secondary
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn display_title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.title.as_deref())
            .or(self.podcast_title.as_deref())
    }
}

/// Format whole seconds as minutes and zero-padded seconds.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
