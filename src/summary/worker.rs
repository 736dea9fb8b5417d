//! Background worker owning the HTTP client
//!
//! Runs a current-thread tokio runtime on its own std thread and answers
//! one `SummaryRequest` at a time over std channels.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::gemini::{GeminiClient, SummaryError};
use super::summary_state::{SummaryRequest, SummaryResponse};

pub fn spawn_worker(
    client: GeminiClient,
    request_rx: Receiver<SummaryRequest>,
    response_tx: Sender<SummaryResponse>,
) {
    std::thread::spawn(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to start summary runtime: {}", e);
                    return;
                }
            };
            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = e
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| e.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown panic".to_string());
            log::error!("Summary worker panicked: {}", panic_msg);
        }
    });
}

async fn worker_loop(
    client: GeminiClient,
    request_rx: Receiver<SummaryRequest>,
    response_tx: Sender<SummaryResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SummaryRequest::Generate {
                prompt,
                request_id,
                cancel_token,
            } => {
                let response = match client.generate_with_cancel(&prompt, &cancel_token).await {
                    Ok(text) => SummaryResponse::Complete { request_id, text },
                    Err(SummaryError::Cancelled) => SummaryResponse::Cancelled { request_id },
                    Err(e) => SummaryResponse::Failed {
                        request_id,
                        message: e.to_string(),
                    },
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        }
    }
    log::debug!("Summary worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_cancelled_request_reports_cancelled() {
        let (req_tx, req_rx) = channel();
        let (resp_tx, resp_rx) = channel();
        spawn_worker(
            GeminiClient::new("k".to_string(), "m".to_string()),
            req_rx,
            resp_tx,
        );

        let token = CancellationToken::new();
        token.cancel();
        req_tx
            .send(SummaryRequest::Generate {
                prompt: "p".to_string(),
                request_id: 7,
                cancel_token: token,
            })
            .unwrap();

        let response = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(response, SummaryResponse::Cancelled { request_id: 7 });
    }

    #[test]
    fn test_worker_stops_when_sender_dropped() {
        let (req_tx, req_rx) = channel::<SummaryRequest>();
        let (resp_tx, resp_rx) = channel();
        spawn_worker(
            GeminiClient::new("k".to_string(), "m".to_string()),
            req_rx,
            resp_tx,
        );
        drop(req_tx);
        assert!(resp_rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
