use std::time::Instant;

use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite;

use super::types::FeedMessage;
use crate::capture::{CaptureBuffer, CaptureOutcome, CaptureSettings};
use crate::error::AppError;
use crate::model::tick::Tick;

/// How many accepted ticks get an individual log line before the loop
/// goes quiet.
const TICK_LOG_PREVIEW: u64 = 5;

pub struct FeedWsClient {
    url: String,
}

impl FeedWsClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    /// Connect once and capture ticks until the settings' targets are met,
    /// the session deadline passes, or `shutdown` fires. A failed connect is
    /// fatal with no retry; the audit is a one-shot probe, not a resident
    /// client. The socket is dropped (and closed) on every exit path.
    pub async fn capture(
        &self,
        settings: &CaptureSettings,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<CaptureOutcome, AppError> {
        tracing::info!(url = %self.url, "connecting to quote feed");

        let (ws_stream, _resp) = tokio_tungstenite::connect_async(&self.url)
            .await
            .map_err(|e| AppError::WebSocket(format!("connect failed: {e}")))?;

        tracing::info!("connected, capturing ticks");

        let (_write, mut read) = ws_stream.split();
        let mut buffer = CaptureBuffer::new(settings.ticks_per_symbol);
        let deadline = Instant::now() + settings.session_deadline;

        loop {
            if Instant::now() >= deadline {
                tracing::warn!(
                    buffered = buffer.total_buffered(),
                    "session deadline reached, analyzing what was captured"
                );
                break;
            }

            tokio::select! {
                res = tokio::time::timeout(settings.read_timeout, read.next()) => {
                    let msg = match res {
                        // Inactivity window elapsed without a frame; re-check
                        // the deadline and keep waiting.
                        Err(_) => continue,
                        Ok(None) => {
                            return Err(AppError::WebSocket("stream ended".to_string()));
                        }
                        Ok(Some(Err(e))) => {
                            return Err(AppError::WebSocket(format!("read error: {e}")));
                        }
                        Ok(Some(Ok(msg))) => msg,
                    };

                    match msg {
                        tungstenite::Message::Text(text) => {
                            match serde_json::from_str::<FeedMessage>(&text) {
                                Ok(FeedMessage::Tick(wire)) => {
                                    let tick: Tick = wire.into();
                                    if buffer.total_received() < TICK_LOG_PREVIEW {
                                        log_tick_preview(&tick, buffer.total_received() + 1);
                                    }
                                    buffer.record(tick);
                                    if buffer.targets_met(settings.min_symbols) {
                                        break;
                                    }
                                }
                                // Heartbeats and other frame types carry no
                                // quote data.
                                Ok(FeedMessage::Other) => {}
                                Err(e) => {
                                    tracing::debug!(error = %e, "skipping unparseable frame");
                                }
                            }
                        }
                        tungstenite::Message::Ping(_) => {
                            // tokio-tungstenite answers pings automatically
                        }
                        _ => {}
                    }
                }
                _ = shutdown.changed() => {
                    tracing::warn!("capture interrupted");
                    return Ok(CaptureOutcome::Interrupted);
                }
            }
        }

        if buffer.is_empty() {
            return Err(AppError::EmptyCapture);
        }

        tracing::info!(
            received = buffer.total_received(),
            buffered = buffer.total_buffered(),
            symbols = buffer.symbols().len(),
            "capture finished"
        );
        Ok(CaptureOutcome::Complete(buffer))
    }
}

fn log_tick_preview(tick: &Tick, seq: u64) {
    let when = DateTime::<Utc>::from_timestamp_millis((tick.timestamp * 1000.0) as i64)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| format!("{:.3}", tick.timestamp));
    tracing::info!(
        seq,
        symbol = %tick.symbol,
        bid = tick.bid,
        ask = tick.ask,
        lp = %tick.source,
        time = %when,
        "tick"
    );
}
