//! Export artifacts built from the rendered results.
//!
//! Each exporter is a pure, idempotent transform over the original
//! [`PredictionResult`] sequence — the same values the renderer displays —
//! so the artifacts always match the cards without scraping text back out
//! of the page. [`card_lines`] is the single source of the per-card detail
//! lines; the renderer and all three exporters share it.

pub mod csv;
pub mod json;
pub mod pdf;

use crate::predict::PredictionResult;

/// Detail lines shown on one rendered card, as `(label, value)` pairs in
/// display order. The value strings are exactly what the card shows (the
/// confidence carries its `%` suffix).
pub fn card_lines(result: &PredictionResult) -> Vec<(&'static str, String)> {
    vec![
        ("Prediction", result.prediction.clone()),
        ("Confidence", format!("{}%", result.confidence)),
        ("Orbital", result.features.orbital_period.to_string()),
        ("Radius", result.features.planet_radius.to_string()),
        ("Star Temp", result.features.star_temp.to_string()),
        ("Habitable", result.habitable.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CandidateRecord;

    pub(crate) fn sample_result(name: &str, prediction: &str) -> PredictionResult {
        PredictionResult {
            name: name.to_string(),
            prediction: prediction.to_string(),
            confidence: 97.3,
            features: CandidateRecord {
                name: name.to_string(),
                orbital_period: 289.9,
                planet_radius: 2.4,
                star_temp: 5518.0,
                ..Default::default()
            },
            habitable: "Yes".to_string(),
        }
    }

    #[test]
    fn test_card_lines_order_and_formatting() {
        let lines = card_lines(&sample_result("Kepler-22b", "CONFIRMED"));
        let labels: Vec<&str> = lines.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["Prediction", "Confidence", "Orbital", "Radius", "Star Temp", "Habitable"]
        );
        assert_eq!(lines[1].1, "97.3%");
        // Whole numbers display without a trailing ".0".
        assert_eq!(lines[4].1, "5518");
    }
}
