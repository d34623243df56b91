//! HTTP client for the classification service's `/predict` endpoint.

use std::path::Path;

use exoclass_core::ResultSet;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{InferenceConfig, InferenceError, service_root};

const DATASET_MIME: &str = "text/csv";

/// A dataset to classify, forwarded to the service as opaque bytes.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Dataset {
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a dataset file from disk without inspecting its contents.
    pub async fn from_path(path: &Path) -> Result<Self, InferenceError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| InferenceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset.csv".to_string());
        Ok(Self { file_name, bytes })
    }
}

/// Client for one configured inference service.
///
/// Cloning is cheap and clones share a connection pool. Every
/// [`submit`](Self::submit) is an independent request with no retry.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        if config.base_url.trim().is_empty() {
            return Err(InferenceError::Config("base URL is empty".into()));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Upload `dataset` for classification.
    ///
    /// `id_column` names the dataset column the service should echo back as
    /// each row's `user_id`; blank names are not sent.
    pub async fn submit(
        &self,
        dataset: &Dataset,
        id_column: Option<&str>,
    ) -> Result<ResultSet, InferenceError> {
        let url = self.config.endpoint();

        let file = Part::bytes(dataset.bytes.clone())
            .file_name(dataset.file_name.clone())
            .mime_str(DATASET_MIME)?;
        let mut form = Form::new().part("file", file);
        if let Some(column) = id_column.map(str::trim).filter(|c| !c.is_empty()) {
            form = form.text("id_column", column.to_string());
        }

        info!(
            url = %url,
            file = %dataset.file_name,
            bytes = dataset.bytes.len(),
            id_column = id_column.unwrap_or(""),
            "submitting dataset for classification"
        );
        let resp = self.client.post(&url).multipart(form).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "inference service rejected request");
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::RequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = resp.text().await?;
        let results = decode_response(&body)?;
        info!(
            total = results.total_samples,
            candidates = results.candidate_count,
            confirmed = results.confirmed_count,
            runtime_seconds = results.runtime_seconds,
            "classification complete"
        );
        Ok(results)
    }

    /// Probe the service root. Any 2xx counts as healthy.
    pub async fn health(&self) -> Result<(), InferenceError> {
        let url = format!("{}/", service_root(&self.config.base_url));
        debug!(url = %url, "checking inference service health");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::RequestFailed {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }
        Ok(())
    }
}

/// Interpret a successful response body.
///
/// The service reports logical failures inside a 200 envelope, so a
/// non-null `error` field wins over everything else. Bodies that are not
/// JSON at all are [`InferenceError::MalformedResponse`]; JSON that does not
/// describe a consistent [`ResultSet`] is an [`InferenceError::Model`].
pub fn decode_response(body: &str) -> Result<ResultSet, InferenceError> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(InferenceError::Model { message });
    }

    let results: ResultSet =
        serde_json::from_value(value).map_err(|e| InferenceError::Model {
            message: format!("unexpected response shape: {e}"),
        })?;
    results.validate().map_err(|e| InferenceError::Model {
        message: e.to_string(),
    })?;
    Ok(results)
}
