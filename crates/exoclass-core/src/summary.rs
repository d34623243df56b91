use crate::record::{PredictedClass, PredictionRecord};

/// Aggregate counts over a list of predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub candidates: usize,
    pub confirmed: usize,
    /// Mean confidence, `None` for an empty list.
    pub mean_confidence: Option<f64>,
}

impl Summary {
    pub fn of(records: &[PredictionRecord]) -> Self {
        let candidates = records
            .iter()
            .filter(|r| r.predicted_class == PredictedClass::Candidate)
            .count();
        let mean_confidence = if records.is_empty() {
            None
        } else {
            Some(records.iter().map(|r| r.confidence).sum::<f64>() / records.len() as f64)
        };
        Self {
            total: records.len(),
            candidates,
            confirmed: records.len() - candidates,
            mean_confidence,
        }
    }

    /// Share of candidates in `[0, 1]`; zero when empty.
    pub fn candidate_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.candidates as f64 / self.total as f64
        }
    }
}
