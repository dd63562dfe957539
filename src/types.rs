use thiserror::Error;

/// Errors surfaced while polling the rclone rc daemon.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rclone error: {0}")]
    Rclone(String),

    #[error("configuration error: {0}")]
    Config(String),
}
