//! Shared configuration constants.
//!
//! These values define the candidate schema and the endpoint contract, and
//! are used by the UI, the exporters, and the tests to stay consistent.

/// Number of numeric features in a candidate record.
///
/// The prediction service expects exactly this many features per record;
/// the normalizer zero-fills missing columns to keep the batch valid.
pub const FEATURE_COUNT: usize = 13;

/// Column labels in schema order: name first, then the 13 numeric features.
///
/// The manual-entry table renders these as its header row, and uploaded
/// files are assumed to follow the same positional order. Column index maps
/// directly to a record field; there is no header-based reordering.
pub const COLUMN_LABELS: [&str; FEATURE_COUNT + 1] = [
    "Name",
    "Orbital Period",
    "Planet Radius",
    "Star Temp",
    "Star Radius",
    "Transit Depth",
    "Transit Duration",
    "Equilibrium Temp",
    "Star Logg",
    "Star Mass",
    "Star Metallicity",
    "Signal To Noise",
    "Insolation Flux",
    "Planet Mass (Earth)",
];

/// Prediction label that triggers the celebration overlay.
pub const CONFIRMED_LABEL: &str = "CONFIRMED";

/// How long the celebration overlay stays visible, in milliseconds.
pub const CELEBRATION_MS: u64 = 3000;

/// Path of the prediction endpoint, relative to the API base URL.
pub const PREDICT_PATH: &str = "/api/predict";

/// Path of the model-upload endpoint, relative to the API base URL.
pub const UPLOAD_MODEL_PATH: &str = "/api/upload_model";

/// Fixed filenames for the three export artifacts.
pub const PDF_FILENAME: &str = "exoplanet_results.pdf";
pub const CSV_FILENAME: &str = "exoplanet_results.csv";
pub const JSON_FILENAME: &str = "exoplanet_results.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels_cover_name_plus_features() {
        assert_eq!(COLUMN_LABELS.len(), FEATURE_COUNT + 1);
        assert_eq!(COLUMN_LABELS[0], "Name");
    }

    #[test]
    fn test_endpoint_paths_are_rooted() {
        assert!(PREDICT_PATH.starts_with('/'));
        assert!(UPLOAD_MODEL_PATH.starts_with('/'));
    }
}
