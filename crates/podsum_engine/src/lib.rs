//! Podsum engine: the summarization backend client and file exports.
mod client;
mod engine;
mod export;
mod types;
mod wire;

pub use client::{ClientSettings, ReqwestSummaryApi, SummaryApi, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use export::{ensure_output_dir, ExportError, ExportWriter};
pub use types::{ApiError, EngineEvent, FailureKind, RequestId, SummaryId};
pub use wire::{RecordMetadata, SummaryRecord};
