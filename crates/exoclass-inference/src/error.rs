use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference endpoint not configured: {0}")]
    Config(String),

    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to run model: {status} {status_text}: {body}")]
    RequestFailed {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("model error: {message}")]
    Model { message: String },

    #[error("response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Coarse classification of an [`InferenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Io,
    Transport,
    RequestFailed,
    Model,
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Io => "io",
            Self::Transport => "transport",
            Self::RequestFailed => "request_failed",
            Self::Model => "model",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

impl InferenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
            Self::Transport(_) => ErrorKind::Transport,
            Self::RequestFailed { .. } => ErrorKind::RequestFailed,
            Self::Model { .. } => ErrorKind::Model,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }
}
