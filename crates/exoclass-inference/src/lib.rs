//! Inference layer: submits datasets to the remote classifier and decodes its verdicts.

mod client;
mod config;
mod error;

pub use client::{Dataset, InferenceClient, decode_response};
pub use config::{ENDPOINT_ENV, InferenceConfig, endpoint_url, service_root};
pub use error::{ErrorKind, InferenceError};
