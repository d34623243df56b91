//! Wire model for classification results returned by the inference service.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Binary outcome reported by the remote model.
///
/// Encoded on the wire as the integer codes `0` (confirmed planet) and
/// `1` (planet candidate). Any other code fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PredictedClass {
    Confirmed,
    Candidate,
}

impl PredictedClass {
    pub fn code(&self) -> u8 {
        match self {
            Self::Confirmed => 0,
            Self::Candidate => 1,
        }
    }

    /// Label used when the service omits `prediction_label`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Candidate => "CANDIDATE",
        }
    }
}

impl TryFrom<u8> for PredictedClass {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Confirmed),
            1 => Ok(Self::Candidate),
            other => Err(format!("predicted class must be 0 or 1, got {other}")),
        }
    }
}

impl From<PredictedClass> for u8 {
    fn from(class: PredictedClass) -> Self {
        class.code()
    }
}

/// One classified row of the submitted dataset.
///
/// The four identifier fields are all optional; see
/// [`resolve_identifier`](crate::resolve_identifier) for how a display
/// identifier is chosen among them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Catalog designation, e.g. a KOI name such as `K00752.01`.
    #[serde(default, alias = "kepoi_name", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u64>,
    #[serde(rename = "prediction", alias = "predicted_class")]
    pub predicted_class: PredictedClass,
    pub confidence: f64,
    #[serde(rename = "prediction_label", alias = "predicted_label")]
    pub predicted_label: String,
}

impl PredictionRecord {
    /// Label to show for this record, falling back to the class name.
    pub fn label(&self) -> &str {
        if self.predicted_label.trim().is_empty() {
            self.predicted_class.as_str()
        } else {
            &self.predicted_label
        }
    }
}

/// Complete outcome of one inference run.
///
/// Only `model_info` and `error` may be absent from the response body;
/// [`validate`](Self::validate) then rejects anything inconsistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub predictions: Vec<PredictionRecord>,
    pub total_samples: usize,
    pub candidate_count: usize,
    pub confirmed_count: usize,
    pub runtime_seconds: f64,
    /// Opaque descriptive metadata about the remote model.
    #[serde(default)]
    pub model_info: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultSet {
    /// Records eligible for display. Empty when the run reported an error.
    pub fn displayable(&self) -> &[PredictionRecord] {
        if self.error.is_some() {
            &[]
        } else {
            &self.predictions
        }
    }

    /// Check the invariants the display and export logic rely on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(message) = &self.error {
            return Err(ValidationError::Reported(message.clone()));
        }
        if self.total_samples != self.predictions.len() {
            return Err(ValidationError::LengthMismatch {
                total_samples: self.total_samples,
                predictions: self.predictions.len(),
            });
        }
        let counted = self.candidate_count.checked_add(self.confirmed_count);
        if counted != Some(self.total_samples) {
            return Err(ValidationError::CountMismatch {
                candidate_count: self.candidate_count,
                confirmed_count: self.confirmed_count,
                total_samples: self.total_samples,
            });
        }
        if !self.runtime_seconds.is_finite() || self.runtime_seconds < 0.0 {
            return Err(ValidationError::InvalidRuntime(self.runtime_seconds));
        }
        for (index, record) in self.predictions.iter().enumerate() {
            if !(0.0..=1.0).contains(&record.confidence) {
                return Err(ValidationError::ConfidenceOutOfRange {
                    index,
                    confidence: record.confidence,
                });
            }
        }
        Ok(())
    }
}
