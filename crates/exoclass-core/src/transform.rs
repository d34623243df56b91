//! Derived views over a result set: classification filter, then confidence sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;
use crate::record::{PredictedClass, PredictionRecord};

/// Which classification outcomes to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassFilter {
    #[default]
    All,
    Candidate,
    Confirmed,
}

impl ClassFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Candidate => "candidate",
            Self::Confirmed => "confirmed",
        }
    }

    pub fn matches(&self, record: &PredictionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Candidate => record.predicted_class == PredictedClass::Candidate,
            Self::Confirmed => record.predicted_class == PredictedClass::Confirmed,
        }
    }
}

impl fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "candidate" | "candidates" => Ok(Self::Candidate),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(ParseOptionError {
                what: "filter",
                value: s.to_string(),
                expected: "all, candidate, confirmed",
            }),
        }
    }
}

/// Ordering applied to the filtered records by confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfidenceSort {
    #[default]
    None,
    Ascending,
    Descending,
}

impl ConfidenceSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for ConfidenceSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceSort {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParseOptionError {
                what: "sort",
                value: s.to_string(),
                expected: "none, asc, desc",
            }),
        }
    }
}

/// Current filter and sort selection. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: ClassFilter,
    pub sort: ConfidenceSort,
}

impl ViewState {
    pub fn new(filter: ClassFilter, sort: ConfidenceSort) -> Self {
        Self { filter, sort }
    }

    pub fn apply(&self, records: &[PredictionRecord]) -> Vec<PredictionRecord> {
        transform(records, self.filter, self.sort)
    }
}

/// Filter `records` by class, then sort by confidence.
///
/// Filtering keeps relative order. Sorting is stable, so records with equal
/// confidence stay in their filtered order. The input is never modified.
pub fn transform(
    records: &[PredictionRecord],
    filter: ClassFilter,
    sort: ConfidenceSort,
) -> Vec<PredictionRecord> {
    let mut view: Vec<PredictionRecord> = records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();

    match sort {
        ConfidenceSort::None => {}
        ConfidenceSort::Ascending => view.sort_by(|a, b| by_confidence(a, b)),
        ConfidenceSort::Descending => view.sort_by(|a, b| by_confidence(b, a)),
    }

    view
}

/// Numeric order: `-0.0` and `0.0` tie. Incomparable values also tie.
fn by_confidence(a: &PredictionRecord, b: &PredictionRecord) -> Ordering {
    a.confidence
        .partial_cmp(&b.confidence)
        .unwrap_or(Ordering::Equal)
}
