use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

use super::{FAILURE_MESSAGE, NO_INSIGHTS};
use crate::scroll::ScrollState;

/// Messages from the UI thread to the worker
#[derive(Debug)]
pub enum SummaryRequest {
    Generate {
        prompt: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Messages from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResponse {
    /// `text` is `None` when the model answered with nothing
    Complete {
        request_id: u64,
        text: Option<String>,
    },
    Failed {
        request_id: u64,
        message: String,
    },
    Cancelled {
        request_id: u64,
    },
}

impl SummaryResponse {
    fn request_id(&self) -> u64 {
        match self {
            SummaryResponse::Complete { request_id, .. }
            | SummaryResponse::Failed { request_id, .. }
            | SummaryResponse::Cancelled { request_id } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryStatus {
    #[default]
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SummaryState {
    pub visible: bool,
    pub status: SummaryStatus,
    pub scroll: ScrollState,
    pub model: String,
    request_tx: Option<Sender<SummaryRequest>>,
    response_rx: Option<Receiver<SummaryResponse>>,
    request_id: u64,
    in_flight: Option<(u64, CancellationToken)>,
}

impl SummaryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<SummaryRequest>,
        response_rx: Receiver<SummaryResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// True once a worker is attached
    pub fn is_configured(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Open the popup and send `prompt`, cancelling any earlier request
    pub fn request(&mut self, prompt: String) -> bool {
        self.cancel_in_flight();

        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        let cancel_token = CancellationToken::new();

        let sent = tx
            .send(SummaryRequest::Generate {
                prompt,
                request_id,
                cancel_token: cancel_token.clone(),
            })
            .is_ok();

        self.visible = true;
        self.scroll.reset();
        if sent {
            log::debug!("Summary request {} sent", request_id);
            self.in_flight = Some((request_id, cancel_token));
            self.status = SummaryStatus::Pending;
        } else {
            log::error!("Summary worker is gone, request {} not sent", request_id);
            self.status = SummaryStatus::Failed(FAILURE_MESSAGE.to_string());
        }
        sent
    }

    pub fn cancel_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some((request_id, token)) => {
                token.cancel();
                log::debug!("Summary request {} cancelled", request_id);
                if self.status == SummaryStatus::Pending {
                    self.status = SummaryStatus::Idle;
                }
                true
            }
            None => false,
        }
    }

    /// Hide the popup and drop any request still running
    pub fn close(&mut self) {
        self.cancel_in_flight();
        self.visible = false;
    }

    /// Drain worker responses. Returns true when the status changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(rx) = &self.response_rx else {
                return changed;
            };

            let response = match rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    if self.in_flight.take().is_some() {
                        log::error!("Summary worker disconnected");
                        self.status = SummaryStatus::Failed(FAILURE_MESSAGE.to_string());
                        changed = true;
                    }
                    return changed;
                }
            };

            let current = self.in_flight.as_ref().map(|(id, _)| *id);
            if current != Some(response.request_id()) {
                continue;
            }

            self.in_flight = None;
            self.status = match response {
                SummaryResponse::Complete { text, .. } => {
                    SummaryStatus::Ready(text.unwrap_or_else(|| NO_INSIGHTS.to_string()))
                }
                SummaryResponse::Failed { message, .. } => {
                    log::error!("Summary failed: {}", message);
                    SummaryStatus::Failed(FAILURE_MESSAGE.to_string())
                }
                SummaryResponse::Cancelled { .. } => SummaryStatus::Idle,
            };
            changed = true;
        }
    }
}
