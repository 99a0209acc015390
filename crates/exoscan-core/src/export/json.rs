//! JSON export: one object per card, keyed by the card's detail labels.

use serde_json::{Map, Value};

use super::card_lines;
use crate::error::ExportError;
use crate::predict::PredictionResult;

/// Serializes the results to pretty-printed JSON.
///
/// Each card becomes one object: a `name` key plus one key per detail line,
/// with the displayed strings as values. Key order follows the card.
pub fn results_to_json(results: &[PredictionResult]) -> Result<String, ExportError> {
    let cards: Vec<Value> = results
        .iter()
        .map(|result| {
            let mut card = Map::new();
            card.insert("name".to_string(), Value::String(result.name.clone()));
            for (label, value) in card_lines(result) {
                card.insert(label.to_string(), Value::String(value));
            }
            Value::Object(card)
        })
        .collect();

    serde_json::to_string_pretty(&cards).map_err(|e| ExportError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_result;
    use super::*;

    #[test]
    fn test_json_round_trips_names_in_order() {
        let results = vec![
            sample_result("Kepler-22b", "CONFIRMED"),
            sample_result("TRAPPIST-1e", "CANDIDATE"),
            sample_result("K2-18b", "FALSE POSITIVE"),
        ];
        let json = results_to_json(&results).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 3);
        let names: Vec<&str> = parsed.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Kepler-22b", "TRAPPIST-1e", "K2-18b"]);
    }

    #[test]
    fn test_json_values_are_display_strings() {
        let json = results_to_json(&[sample_result("Kepler-22b", "CONFIRMED")]).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["Prediction"], "CONFIRMED");
        assert_eq!(parsed[0]["Confidence"], "97.3%");
        assert_eq!(parsed[0]["Habitable"], "Yes");
    }

    #[test]
    fn test_json_of_no_results_is_empty_array() {
        let json = results_to_json(&[]).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_empty());
    }
}
