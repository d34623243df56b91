//! Holder for the most recent inference run and the active view selection.

use tracing::{debug, info};

use crate::record::{PredictionRecord, ResultSet};
use crate::summary::Summary;
use crate::transform::ViewState;

/// Owns at most one [`ResultSet`] plus the current [`ViewState`].
///
/// A new run replaces the previous one wholesale; a failed run leaves it in
/// place.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<ResultSet>,
    pub view: ViewState,
}

impl Session {
    pub fn new(view: ViewState) -> Self {
        Self {
            current: None,
            view,
        }
    }

    pub fn current(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    /// Install the outcome of a submission.
    ///
    /// On `Ok` the result set replaces the previous one. On `Err` the
    /// session is left unchanged and the error is handed back.
    pub fn apply<E>(&mut self, outcome: Result<ResultSet, E>) -> Result<&ResultSet, E> {
        let set = outcome?;
        info!(
            total = set.total_samples,
            candidates = set.candidate_count,
            confirmed = set.confirmed_count,
            replaced = self.current.is_some(),
            "installed result set"
        );
        Ok(self.current.insert(set))
    }

    /// Records for display under the current view state.
    pub fn view(&self) -> Vec<PredictionRecord> {
        let records = self.current.as_ref().map(ResultSet::displayable).unwrap_or(&[]);
        let view = self.view.apply(records);
        debug!(
            filter = %self.view.filter,
            sort = %self.view.sort,
            shown = view.len(),
            of = records.len(),
            "recomputed view"
        );
        view
    }

    /// Aggregates over the current view.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PredictedClass;
    use crate::transform::{ClassFilter, ConfidenceSort};

    fn run(confidences: &[(PredictedClass, f64)]) -> ResultSet {
        let predictions: Vec<PredictionRecord> = confidences
            .iter()
            .enumerate()
            .map(|(i, &(class, confidence))| PredictionRecord {
                user_id: None,
                source_id: None,
                alt_id: None,
                row_index: Some(i as u64),
                predicted_class: class,
                confidence,
                predicted_label: class.as_str().into(),
            })
            .collect();
        let candidate_count = predictions
            .iter()
            .filter(|r| r.predicted_class == PredictedClass::Candidate)
            .count();
        ResultSet {
            total_samples: predictions.len(),
            confirmed_count: predictions.len() - candidate_count,
            candidate_count,
            predictions,
            ..Default::default()
        }
    }

    #[test]
    fn success_replaces_previous_run() {
        let mut session = Session::default();
        session
            .apply::<String>(Ok(run(&[(PredictedClass::Candidate, 0.4)])))
            .unwrap();
        session
            .apply::<String>(Ok(run(&[
                (PredictedClass::Confirmed, 0.1),
                (PredictedClass::Confirmed, 0.2),
            ])))
            .unwrap();
        assert_eq!(session.current().unwrap().total_samples, 2);
    }

    #[test]
    fn failure_keeps_previous_run() {
        let mut session = Session::default();
        session
            .apply::<String>(Ok(run(&[(PredictedClass::Candidate, 0.4)])))
            .unwrap();
        let err = session.apply(Err("transport failed".to_string())).unwrap_err();
        assert_eq!(err, "transport failed");
        assert_eq!(session.current().unwrap().total_samples, 1);
    }

    #[test]
    fn view_follows_view_state() {
        let mut session = Session::new(ViewState::new(
            ClassFilter::Candidate,
            ConfidenceSort::Descending,
        ));
        session
            .apply::<String>(Ok(run(&[
                (PredictedClass::Candidate, 0.3),
                (PredictedClass::Confirmed, 0.99),
                (PredictedClass::Candidate, 0.8),
            ])))
            .unwrap();
        let rows: Vec<Option<u64>> = session.view().iter().map(|r| r.row_index).collect();
        assert_eq!(rows, vec![Some(2), Some(0)]);

        session.view.filter = ClassFilter::All;
        session.view.sort = ConfidenceSort::None;
        assert_eq!(session.view().len(), 3);
        assert_eq!(session.summary().candidates, 2);
        assert_eq!(session.current().unwrap().predictions.len(), 3);
    }

    #[test]
    fn empty_session_has_empty_view() {
        let session = Session::default();
        assert!(session.current().is_none());
        assert!(session.view().is_empty());
        assert_eq!(session.summary().total, 0);
    }
}
