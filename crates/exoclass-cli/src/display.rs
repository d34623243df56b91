//! Terminal rendering of a classification run.

use exoclass_core::{ClassFilter, PredictionRecord, ResultSet, Summary, ViewState, resolve_identifier};
use serde_json::Value;

const ID_WIDTH: usize = 30;

/// Print run metadata and aggregate counts.
pub fn print_run_header(results: &ResultSet, summary: &Summary) {
    println!("=== Classification run ===");
    println!("  {:<26} {:.2}s", "runtime", results.runtime_seconds);
    println!("  {:<26} {}", "samples", results.total_samples);
    println!("  {:<26} {}", "candidates", results.candidate_count);
    println!("  {:<26} {}", "confirmed", results.confirmed_count);
    if summary.total > 0 {
        println!(
            "  {:<26} {}",
            "candidate share (view)",
            percent(summary.candidate_ratio())
        );
    }
    if let Some(mean) = summary.mean_confidence {
        println!("  {:<26} {}", "mean confidence (view)", percent(mean));
    }
    println!();

    match &results.model_info {
        Value::Null => {}
        Value::Object(fields) if fields.is_empty() => {}
        Value::Object(fields) => {
            println!("Model");
            for (key, value) in fields {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("  {:<26} {}", key, text);
            }
            println!();
        }
        other => {
            println!("Model");
            println!("  {}", other);
            println!();
        }
    }
}

/// Print the derived view, at most `limit` rows.
pub fn print_predictions(
    view: &[PredictionRecord],
    total: usize,
    state: &ViewState,
    limit: Option<usize>,
) {
    println!(
        "Showing {} of {} total classifications (filter: {}, sort: {})",
        view.len(),
        total,
        state.filter,
        state.sort
    );
    if view.is_empty() {
        match filter_word(state) {
            "" => println!("  No predictions found."),
            word => println!("  No {word} predictions found."),
        }
        return;
    }

    println!("  {:<ID_WIDTH$}  {:<10}  {:>10}", "IDENTIFIER", "PREDICTION", "CONFIDENCE");
    let show = limit.unwrap_or(view.len()).min(view.len());
    for record in &view[..show] {
        println!("  {}", format_row(record));
    }
    if view.len() > show {
        println!("  ... and {} more", view.len() - show);
    }
}

fn format_row(record: &PredictionRecord) -> String {
    let id = resolve_identifier(record);
    let id = if id.chars().count() > ID_WIDTH {
        let head: String = id.chars().take(ID_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        id
    };
    format!(
        "{:<ID_WIDTH$}  {:<10}  {:>10}",
        id,
        record.label(),
        percent(record.confidence)
    )
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn filter_word(state: &ViewState) -> &'static str {
    match state.filter {
        ClassFilter::All => "",
        ClassFilter::Candidate => "candidate",
        ClassFilter::Confirmed => "confirmed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exoclass_core::PredictedClass;

    fn rec(source_id: &str, confidence: f64) -> PredictionRecord {
        PredictionRecord {
            user_id: None,
            source_id: Some(source_id.into()),
            alt_id: None,
            row_index: None,
            predicted_class: PredictedClass::Candidate,
            confidence,
            predicted_label: "CANDIDATE".into(),
        }
    }

    #[test]
    fn row_shows_identifier_label_and_percent() {
        let row = format_row(&rec("K00752.01", 0.8234));
        assert!(row.starts_with("K00752.01 "));
        assert!(row.contains("CANDIDATE"));
        assert!(row.ends_with("82.34%"));
    }

    #[test]
    fn long_identifiers_are_truncated() {
        let long = "x".repeat(50);
        let row = format_row(&rec(&long, 0.5));
        assert!(row.starts_with(&format!("{}...", "x".repeat(ID_WIDTH - 3))));
        assert!(!row.contains(&long));
    }

    #[test]
    fn percent_two_decimals() {
        assert_eq!(percent(0.5), "50.00%");
        assert_eq!(percent(1.0), "100.00%");
    }
}
