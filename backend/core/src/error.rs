use thiserror::Error;

/// Top-level error type for the Aria runtime.
#[derive(Debug, Error)]
pub enum AriaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("relay request failed: {0}")]
    Relay(String),

    #[error("stream interrupted: {0}")]
    Stream(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
