use std::sync::{mpsc, Arc};
use std::thread;

use podsum_logging::{podsum_error, podsum_warn};

use crate::client::{ClientSettings, ReqwestSummaryApi, SummaryApi};
use crate::{ApiError, EngineEvent, FailureKind, RequestId, SummaryId};

enum EngineCommand {
    Submit { request: RequestId, url: String },
    Fetch { request: RequestId, id: SummaryId },
    List { request: RequestId },
}

/// Sends commands to a background thread that runs them on a tokio runtime.
/// Results come back on the receiver returned by [`EngineHandle::spawn`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<(Self, mpsc::Receiver<EngineEvent>), ApiError> {
        let api = ReqwestSummaryApi::new(settings)?;
        Ok(Self::spawn(Arc::new(api)))
    }

    pub fn spawn(api: Arc<dyn SummaryApi>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    podsum_error!("Failed to start async runtime: {}", err);
                    let message = format!("async runtime unavailable: {err}");
                    while let Ok(command) = cmd_rx.recv() {
                        let _ = event_tx.send(refuse(command, &message));
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = Arc::clone(&api);
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, request: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request,
            url: url.into(),
        });
    }

    pub fn fetch_summary(&self, request: RequestId, id: SummaryId) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { request, id });
    }

    pub fn list_summaries(&self, request: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::List { request });
    }
}

async fn handle_command(
    api: &dyn SummaryApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Submit { request, url } => {
            let result = api.submit_podcast(&url).await;
            if let Err(err) = &result {
                podsum_warn!("Submission request={} failed: {}", request, err);
            }
            EngineEvent::RecordFetched { request, result }
        }
        EngineCommand::Fetch { request, id } => {
            let result = api.get_summary(id).await;
            if let Err(err) = &result {
                podsum_warn!("Fetching summary {} request={} failed: {}", id, request, err);
            }
            EngineEvent::RecordFetched { request, result }
        }
        EngineCommand::List { request } => {
            let result = api.list_summaries().await;
            // Only the generic message reaches the screen; keep the cause here.
            if let Err(err) = &result {
                podsum_warn!("Listing summaries request={} failed: {:?}", request, err);
            }
            EngineEvent::SummariesListed { request, result }
        }
    };
    let _ = event_tx.send(event);
}

fn refuse(command: EngineCommand, message: &str) -> EngineEvent {
    let error = ApiError::new(FailureKind::InvalidRequest, message);
    match command {
        EngineCommand::Submit { request, .. } | EngineCommand::Fetch { request, .. } => {
            EngineEvent::RecordFetched {
                request,
                result: Err(error),
            }
        }
        EngineCommand::List { request } => EngineEvent::SummariesListed {
            request,
            result: Err(error),
        },
    }
}
