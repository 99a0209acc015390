//! End-to-end tests for the collect → normalize → (decode) → export pipeline.
//!
//! These tests exercise the full offline workflow: building a Row Set from
//! each input source, normalizing it into candidate records, decoding a
//! canned prediction response, and producing each export artifact. The
//! network round trip itself is exercised only at the envelope level; the
//! prediction service is an external collaborator.

use exoscan_core::export::{csv::results_to_csv, json::results_to_json, pdf::results_to_pdf};
use exoscan_core::ingest::RowSet;
use exoscan_core::predict::{analysis_from_response, PredictResponse};
use exoscan_core::record::normalize_rows;

const SAMPLE_CSV: &str = "\
name,orbital_period,planet_radius,star_temp,star_radius,transit_depth,transit_duration,equilibrium_temp,star_logg,star_mass,star_metallicity,signal_to_noise,insolation_flux,planet_mass_earth
Kepler-22b,289.9,2.4,5518,0.98,492,7.4,262,4.44,0.97,-0.29,35.5,1.1,9.1

TRAPPIST-1e,6.1,0.92,2566,0.12,7277,0.9,,2.6,0.09,0.04,broken,0.6,0.69
,33,2.6";

fn canned_response(names: &[&str], predictions: &[&str]) -> PredictResponse {
    let results: Vec<serde_json::Value> = names
        .iter()
        .zip(predictions)
        .map(|(name, prediction)| {
            serde_json::json!({
                "name": name,
                "prediction": prediction,
                "confidence": 88.8,
                "features": {
                    "name": name, "orbital_period": 289.9, "planet_radius": 2.4,
                    "star_temp": 5518, "star_radius": 0, "transit_depth": 0,
                    "transit_duration": 0, "equilibrium_temp": 0, "star_logg": 0,
                    "star_mass": 0, "star_metallicity": 0, "signal_to_noise": 0,
                    "insolation_flux": 0, "planet_mass_earth": 0
                },
                "habitable": if *prediction == "CONFIRMED" { "Yes" } else { "No" },
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "success": true,
        "results": results,
        "metrics": { "test_accuracy": 0.912, "test_f1": 0.894, "cv_mean": 0.905 },
    }))
    .unwrap()
}

#[test]
fn csv_file_flows_into_a_clean_batch() {
    let rows = RowSet::from_csv(SAMPLE_CSV);
    // Blank line dropped: header + 3 data rows.
    assert_eq!(rows.data_len(), 3);

    let records = normalize_rows(&rows);
    assert_eq!(records.len(), 3);

    // Row 2 has an empty and a non-numeric cell; both coerce to 0.
    assert_eq!(records[1].equilibrium_temp, 0.0);
    assert_eq!(records[1].signal_to_noise, 0.0);

    // Row 3 is short and nameless: placeholder name, zero-filled tail.
    assert_eq!(records[2].name, "Planet 3");
    assert_eq!(records[2].orbital_period, 33.0);
    assert_eq!(records[2].star_temp, 0.0);
}

#[test]
fn json_file_flows_through_the_same_row_shape() {
    let text = r#"[
        {"name": "name", "orbital_period": "orbital_period"},
        {"name": "Kepler-22b", "orbital_period": 289.9},
        {"name": "K2-18b", "orbital_period": 33}
    ]"#;
    let rows = RowSet::from_json(text).unwrap();
    let records = normalize_rows(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Kepler-22b");
    assert_eq!(records[0].orbital_period, 289.9);
    assert_eq!(records[1].name, "K2-18b");
}

#[test]
fn manual_table_rows_normalize_in_order() {
    let headers = ["Name", "Orbital Period", "Planet Radius"];
    let body = vec![
        vec!["Kepler-22b".into(), "289.9".into(), "2.4".into()],
        vec!["".into(), "6.1".into(), "0.92".into()],
    ];
    let rows = RowSet::from_table(&headers, &body);
    let records = normalize_rows(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Kepler-22b");
    assert_eq!(records[1].name, "Planet 2");
    assert_eq!(records[1].planet_radius, 0.92);
}

#[test]
fn rendered_results_export_to_matching_artifacts() {
    let response = canned_response(
        &["Kepler-22b", "TRAPPIST-1e", "K2-18b"],
        &["CONFIRMED", "CANDIDATE", "FALSE POSITIVE"],
    );
    let analysis = analysis_from_response(response).unwrap();
    assert!(analysis.any_confirmed());

    // CSV: one row per card plus the fixed header.
    let csv = results_to_csv(&analysis.results);
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().contains("\"Kepler-22b\""));

    // JSON: re-parsing yields one object per card with matching names.
    let json = results_to_json(&analysis.results).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    let names: Vec<&str> = parsed.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Kepler-22b", "TRAPPIST-1e", "K2-18b"]);

    // PDF: every card's line is present.
    let pdf = results_to_pdf(&analysis.results).unwrap();
    let pdf_text = String::from_utf8_lossy(&pdf);
    for name in names {
        assert!(pdf_text.contains(&format!("{name}: Prediction:")));
    }
}

#[test]
fn failed_response_renders_nothing() {
    let response: PredictResponse = serde_json::from_value(serde_json::json!({
        "success": false,
        "message": "Batch size limit exceeded. Maximum is 100 records.",
    }))
    .unwrap();
    let err = analysis_from_response(response).unwrap_err();
    assert!(err.to_string().contains("Batch size limit exceeded"));
}
