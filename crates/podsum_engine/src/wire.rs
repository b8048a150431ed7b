//! JSON shapes exchanged with the summarization backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct ProcessPodcastRequest<'a> {
    pub url: &'a str,
}

/// One stored or freshly produced summary.
///
/// Submissions answer with `summary`; stored records use `summary_type_1`.
/// List entries carry no transcript.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SummaryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub podcast_url: Option<String>,
    #[serde(default)]
    pub podcast_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub summary_type_1: Option<String>,
    #[serde(default)]
    pub summary_type_2: Option<String>,
    #[serde(default)]
    pub metadata: Option<RecordMetadata>,
}

impl SummaryRecord {
    pub fn primary_summary(&self) -> &str {
        self.summary
            .as_deref()
            .or(self.summary_type_1.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecordMetadata {
    /// Whole seconds; fractional values are truncated.
    #[serde(default, deserialize_with = "whole_seconds")]
    pub duration: Option<u64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryListResponse {
    #[serde(default)]
    pub summaries: Vec<SummaryRecord>,
}

fn whole_seconds<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(|secs| secs.trunc() as u64)
        }),
        _ => None,
    })
}

/// Pull a human-readable message out of an error body: `detail` (string, or the
/// first validation entry's `msg`), else `message`.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
            {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}
