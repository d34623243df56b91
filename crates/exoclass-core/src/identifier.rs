//! Display identifiers for prediction rows.
//!
//! The service may echo back any of several identifier fields depending on
//! what the uploaded dataset contained. The first non-blank field in
//! `PRIORITY` wins; a record with none of them falls back to its row
//! position, so resolution never fails.

use crate::record::PredictionRecord;

/// Where a resolved identifier comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierSource {
    /// Value of the user-selected `id_column`.
    User,
    /// Catalog designation (e.g. KOI name).
    Source,
    Alt,
    /// Synthesized `row_<n>` label.
    Row,
}

/// Resolution order, highest priority first.
const PRIORITY: [IdentifierSource; 4] = [
    IdentifierSource::User,
    IdentifierSource::Source,
    IdentifierSource::Alt,
    IdentifierSource::Row,
];

impl IdentifierSource {
    /// The identifier this source yields for `record`, if any.
    fn extract(self, record: &PredictionRecord) -> Option<String> {
        let field = match self {
            Self::User => record.user_id.as_deref(),
            Self::Source => record.source_id.as_deref(),
            Self::Alt => record.alt_id.as_deref(),
            Self::Row => return Some(format!("row_{}", record.row_index.unwrap_or(0))),
        };
        field
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    }
}

/// Resolve the display identifier for a record.
///
/// `user_id` → `source_id` → `alt_id` → `"row_<row_index>"` (index 0 if absent).
pub fn resolve_identifier(record: &PredictionRecord) -> String {
    PRIORITY
        .into_iter()
        .find_map(|source| source.extract(record))
        .unwrap_or_else(|| "row_0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PredictedClass;

    fn bare() -> PredictionRecord {
        PredictionRecord {
            user_id: None,
            source_id: None,
            alt_id: None,
            row_index: None,
            predicted_class: PredictedClass::Candidate,
            confidence: 0.5,
            predicted_label: "CANDIDATE".into(),
        }
    }

    #[test]
    fn row_index_only() {
        let r = PredictionRecord {
            row_index: Some(7),
            ..bare()
        };
        assert_eq!(resolve_identifier(&r), "row_7");
    }

    #[test]
    fn user_id_wins_over_everything() {
        let r = PredictionRecord {
            user_id: Some("X".into()),
            source_id: Some("K00752.01".into()),
            alt_id: Some("alt".into()),
            row_index: Some(3),
            ..bare()
        };
        assert_eq!(resolve_identifier(&r), "X");
    }

    #[test]
    fn source_before_alt() {
        let r = PredictionRecord {
            source_id: Some("K00752.01".into()),
            alt_id: Some("alt".into()),
            ..bare()
        };
        assert_eq!(resolve_identifier(&r), "K00752.01");
    }

    #[test]
    fn alt_before_row() {
        let r = PredictionRecord {
            alt_id: Some("EPIC 201".into()),
            row_index: Some(4),
            ..bare()
        };
        assert_eq!(resolve_identifier(&r), "EPIC 201");
    }

    #[test]
    fn blank_fields_are_skipped() {
        let r = PredictionRecord {
            user_id: Some("".into()),
            source_id: Some("   ".into()),
            alt_id: Some("A-1".into()),
            ..bare()
        };
        assert_eq!(resolve_identifier(&r), "A-1");
    }

    #[test]
    fn nothing_set_defaults_to_row_zero() {
        assert_eq!(resolve_identifier(&bare()), "row_0");
    }
}
