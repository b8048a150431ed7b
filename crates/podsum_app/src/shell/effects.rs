use chrono::Utc;
use podsum_core::{
    export_filename, Effect, ExportKind, ExportOutcome, FetchFailure, HistoryEntry, Metadata, Msg,
    ResultRecord,
};
use podsum_engine::{
    ApiError, EngineEvent, EngineHandle, ExportWriter, FailureKind, RecordMetadata, SummaryRecord,
};
use podsum_logging::{podsum_error, podsum_info, podsum_warn};

/// Executes core effects: fetches go to the engine, exports are written inline.
pub struct EffectRunner {
    engine: EngineHandle,
    exports: ExportWriter,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, exports: ExportWriter) -> Self {
        Self { engine, exports }
    }

    /// Returns messages that resolved synchronously.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut resolved = Vec::new();
        for effect in effects {
            match effect {
                Effect::SubmitPodcast { request, url } => {
                    podsum_info!("SubmitPodcast request={} url={}", request, url);
                    self.engine.submit(request, url);
                }
                Effect::ListSummaries { request } => {
                    podsum_info!("ListSummaries request={}", request);
                    self.engine.list_summaries(request);
                }
                Effect::FetchSummary { request, id } => {
                    podsum_info!("FetchSummary request={} id={}", request, id);
                    self.engine.fetch_summary(request, id);
                }
                Effect::ExportText { kind, contents } => {
                    let unix_ms = Utc::now().timestamp_millis();
                    resolved.push(Msg::ExportFinished(self.export(kind, &contents, unix_ms)));
                }
            }
        }
        resolved
    }

    fn export(&self, kind: ExportKind, contents: &str, unix_ms: i64) -> ExportOutcome {
        let filename = export_filename(kind, unix_ms);
        match self.exports.write(&filename, contents) {
            Ok(path) => {
                podsum_info!("Exported {} bytes to {:?}", contents.len(), path);
                ExportOutcome::Written {
                    path: path.display().to_string(),
                }
            }
            Err(err) => {
                podsum_error!(
                    "Export {} into {:?} failed: {}",
                    filename,
                    self.exports.dir(),
                    err
                );
                ExportOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }
}

pub fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecordFetched { request, result } => match result {
            Ok(record) => Msg::RecordLoaded {
                request,
                record: map_record(record),
            },
            Err(err) => Msg::RecordFailed {
                request,
                failure: map_failure(err),
            },
        },
        EngineEvent::SummariesListed { request, result } => match result {
            Ok(records) => Msg::HistoryLoaded {
                request,
                entries: records.into_iter().filter_map(map_entry).collect(),
            },
            Err(_) => Msg::HistoryFailed { request },
        },
    }
}

fn map_record(record: SummaryRecord) -> ResultRecord {
    ResultRecord {
        summary_primary: record.primary_summary().to_string(),
        id: record.id,
        podcast_title: record.podcast_title,
        created_at: record.created_at,
        transcript: record.transcript.unwrap_or_default(),
        summary_secondary: record.summary_type_2,
        metadata: record.metadata.map(map_metadata),
    }
}

fn map_entry(record: SummaryRecord) -> Option<HistoryEntry> {
    let Some(id) = record.id else {
        podsum_warn!("Skipping history entry without id");
        return None;
    };
    Some(HistoryEntry {
        id,
        summary_primary: record.primary_summary().to_string(),
        has_secondary: record
            .summary_type_2
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty()),
        podcast_title: record.podcast_title,
        created_at: record.created_at.unwrap_or_default(),
        metadata: record.metadata.map(map_metadata),
    })
}

fn map_metadata(metadata: RecordMetadata) -> Metadata {
    Metadata {
        duration_secs: metadata.duration,
        uploader: metadata.uploader,
        title: metadata.title,
    }
}

pub fn map_failure(err: ApiError) -> FetchFailure {
    match err.kind {
        FailureKind::HttpStatus { status, detail } => FetchFailure::Server { status, detail },
        FailureKind::Timeout | FailureKind::Network => FetchFailure::Network,
        FailureKind::InvalidRequest | FailureKind::Decode => FetchFailure::Client(err.message),
    }
}
