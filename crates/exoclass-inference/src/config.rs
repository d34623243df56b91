//! Endpoint configuration for the inference service.

use std::time::Duration;

use crate::InferenceError;

/// Environment variable holding the service base URL.
pub const ENDPOINT_ENV: &str = "EXOCLASS_INFERENCE_URL";

const PREDICT_PATH: &str = "/predict";

/// Where and how to reach the inference service.
///
/// There is no built-in default URL: a deployment must supply one, either
/// explicitly or through [`ENDPOINT_ENV`].
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceConfig {
    /// Service base URL, or a full URL already ending in `/predict`.
    pub base_url: String,
    /// Whole-request timeout. `None` waits for as long as the service takes.
    pub timeout: Option<Duration>,
}

impl InferenceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the base URL from [`ENDPOINT_ENV`].
    pub fn from_env() -> Result<Self, InferenceError> {
        Self::from_value(std::env::var(ENDPOINT_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, InferenceError> {
        match value {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(InferenceError::Config(format!("{ENDPOINT_ENV} is not set"))),
        }
    }

    /// URL that datasets are posted to.
    pub fn endpoint(&self) -> String {
        endpoint_url(&self.base_url)
    }
}

/// Build the prediction URL from a configured base.
///
/// `https://x.test` becomes `https://x.test/predict`; a base that already
/// ends with `/predict` is used as-is so proxies and pre-routed URLs are not
/// double-suffixed.
pub fn endpoint_url(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.ends_with(PREDICT_PATH) {
        base.to_string()
    } else {
        format!("{base}{PREDICT_PATH}")
    }
}

/// Root URL of the service (the base with any `/predict` suffix removed).
pub fn service_root(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    base.strip_suffix(PREDICT_PATH)
        .unwrap_or(base)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_predict() {
        assert_eq!(endpoint_url("https://x.test"), "https://x.test/predict");
    }

    #[test]
    fn keeps_existing_predict() {
        assert_eq!(endpoint_url("https://x.test/predict"), "https://x.test/predict");
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(endpoint_url("https://x.test/"), "https://x.test/predict");
        assert_eq!(endpoint_url("https://x.test/predict/"), "https://x.test/predict");
    }

    #[test]
    fn proxy_prefix_is_preserved() {
        assert_eq!(
            endpoint_url("https://proxy.test/api/exo"),
            "https://proxy.test/api/exo/predict"
        );
    }

    #[test]
    fn service_root_strips_predict() {
        assert_eq!(service_root("https://x.test/predict"), "https://x.test");
        assert_eq!(service_root("https://x.test/"), "https://x.test");
    }

    #[test]
    fn missing_value_fails_closed() {
        assert!(matches!(
            InferenceConfig::from_value(None),
            Err(InferenceError::Config(_))
        ));
        assert!(matches!(
            InferenceConfig::from_value(Some("   ".into())),
            Err(InferenceError::Config(_))
        ));
    }

    #[test]
    fn value_is_trimmed() {
        let config = InferenceConfig::from_value(Some(" https://x.test ".into())).unwrap();
        assert_eq!(config.base_url, "https://x.test");
        assert_eq!(config.endpoint(), "https://x.test/predict");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn with_timeout_sets_duration() {
        let config = InferenceConfig::new("https://x.test").with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
