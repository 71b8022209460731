use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("no ticks captured before the session ended")]
    EmptyCapture,
}
