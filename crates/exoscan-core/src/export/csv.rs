//! CSV export: fixed header row, one always-quoted row per card.

use super::card_lines;
use crate::predict::PredictionResult;

/// Fixed header row of the CSV artifact.
pub const CSV_HEADER: &str =
    r#""Planet","Prediction","Confidence","Orbital","Radius","Star Temp","Habitable""#;

/// Serializes the results to CSV text.
///
/// Every value is double-quoted, with embedded quotes doubled. The column
/// order mirrors the card's detail lines.
pub fn results_to_csv(results: &[PredictionResult]) -> String {
    let mut out = String::with_capacity(64 * (results.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for result in results {
        let mut fields = vec![quote(&result.name)];
        fields.extend(
            card_lines(result)
                .into_iter()
                .map(|(_, value)| quote(&value)),
        );
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
