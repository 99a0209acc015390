//! Candidate record schema and row normalization.
//!
//! Normalization is lenient by design: every numeric parse failure defaults
//! to 0 rather than rejecting the row. This is an ingestion policy, not
//! validation — the prediction service receives a full batch even when the
//! input is partially garbage, and the user sees the coercion reflected in
//! the preview table rather than an error.

use serde::{Deserialize, Serialize};

use crate::ingest::RowSet;

/// Feature field names in positional column order (columns 1..=13; column 0
/// is the name). This order is the wire contract with the prediction
/// service and must not be reordered.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "orbital_period",
    "planet_radius",
    "star_temp",
    "star_radius",
    "transit_depth",
    "transit_duration",
    "equilibrium_temp",
    "star_logg",
    "star_mass",
    "star_metallicity",
    "signal_to_noise",
    "insolation_flux",
    "planet_mass_earth",
];

/// One normalized exoplanet candidate.
///
/// All numeric fields are finite after normalization; absent or unparsable
/// values coerce to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub orbital_period: f64,
    pub planet_radius: f64,
    pub star_temp: f64,
    pub star_radius: f64,
    pub transit_depth: f64,
    pub transit_duration: f64,
    pub equilibrium_temp: f64,
    pub star_logg: f64,
    pub star_mass: f64,
    pub star_metallicity: f64,
    pub signal_to_noise: f64,
    pub insolation_flux: f64,
    pub planet_mass_earth: f64,
}

impl CandidateRecord {
    /// Builds one record from a comma-joined data row.
    ///
    /// `index` is the 0-based position of the row among the data rows; it
    /// only feeds the `"Planet N"` placeholder used when the name cell is
    /// missing or empty.
    pub fn from_row(row: &str, index: usize) -> CandidateRecord {
        let cells: Vec<&str> = row.split(',').collect();

        let name = cells
            .first()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Planet {}", index + 1));

        CandidateRecord {
            name,
            orbital_period: numeric_cell(&cells, 1),
            planet_radius: numeric_cell(&cells, 2),
            star_temp: numeric_cell(&cells, 3),
            star_radius: numeric_cell(&cells, 4),
            transit_depth: numeric_cell(&cells, 5),
            transit_duration: numeric_cell(&cells, 6),
            equilibrium_temp: numeric_cell(&cells, 7),
            star_logg: numeric_cell(&cells, 8),
            star_mass: numeric_cell(&cells, 9),
            star_metallicity: numeric_cell(&cells, 10),
            signal_to_noise: numeric_cell(&cells, 11),
            insolation_flux: numeric_cell(&cells, 12),
            planet_mass_earth: numeric_cell(&cells, 13),
        }
    }
}

/// Normalizes a Row Set into candidate records, order-preserved.
///
/// Exactly one record per data row; the header row is skipped.
pub fn normalize_rows(rows: &RowSet) -> Vec<CandidateRecord> {
    rows.data_rows()
        .iter()
        .enumerate()
        .map(|(index, row)| CandidateRecord::from_row(row, index))
        .collect()
}

/// Parses one positional cell as a finite number, defaulting to 0 when the
/// cell is missing, unparsable, or non-finite.
fn numeric_cell(cells: &[&str], index: usize) -> f64 {
    cells
        .get(index)
        .and_then(|cell| cell.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_set(lines: &[&str]) -> RowSet {
        RowSet::from_csv(&lines.join("\n"))
    }

    #[test]
    fn test_normalize_produces_one_record_per_data_row_in_order() {
        let rows = row_set(&[
            "name,period",
            "Kepler-22b,289.9",
            "TRAPPIST-1e,6.1",
            "K2-18b,33",
        ]);
        let records = normalize_rows(&rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Kepler-22b");
        assert_eq!(records[1].name, "TRAPPIST-1e");
        assert_eq!(records[2].name, "K2-18b");
    }

    #[test]
    fn test_columns_map_positionally_to_fields() {
        let rows = row_set(&[
            "header",
            "Kepler-22b,289.9,2.4,5518,0.98,492,7.4,262,4.44,0.97,-0.29,35.5,1.1,9.1",
        ]);
        let record = &normalize_rows(&rows)[0];
        assert_eq!(record.orbital_period, 289.9);
        assert_eq!(record.planet_radius, 2.4);
        assert_eq!(record.star_temp, 5518.0);
        assert_eq!(record.star_radius, 0.98);
        assert_eq!(record.transit_depth, 492.0);
        assert_eq!(record.transit_duration, 7.4);
        assert_eq!(record.equilibrium_temp, 262.0);
        assert_eq!(record.star_logg, 4.44);
        assert_eq!(record.star_mass, 0.97);
        assert_eq!(record.star_metallicity, -0.29);
        assert_eq!(record.signal_to_noise, 35.5);
        assert_eq!(record.insolation_flux, 1.1);
        assert_eq!(record.planet_mass_earth, 9.1);
    }

    #[test]
    fn test_non_numeric_cells_coerce_to_zero() {
        let rows = row_set(&["header", "Kepler-22b,not-a-number,2.4"]);
        let record = &normalize_rows(&rows)[0];
        assert_eq!(record.orbital_period, 0.0);
        assert_eq!(record.planet_radius, 2.4);
    }

    #[test]
    fn test_missing_trailing_columns_coerce_to_zero() {
        let rows = row_set(&["header", "Kepler-22b,289.9"]);
        let record = &normalize_rows(&rows)[0];
        assert_eq!(record.planet_radius, 0.0);
        assert_eq!(record.planet_mass_earth, 0.0);
    }

    #[test]
    fn test_missing_name_gets_one_based_placeholder() {
        let rows = row_set(&["header", ",1.0", ",2.0"]);
        let records = normalize_rows(&rows);
        assert_eq!(records[0].name, "Planet 1");
        assert_eq!(records[1].name, "Planet 2");
    }

    #[test]
    fn test_non_finite_values_coerce_to_zero() {
        let rows = row_set(&["header", "X,inf,NaN,1e400"]);
        let record = &normalize_rows(&rows)[0];
        assert_eq!(record.orbital_period, 0.0);
        assert_eq!(record.planet_radius, 0.0);
        assert_eq!(record.star_temp, 0.0);
    }

    #[test]
    fn test_all_fields_finite_after_normalization() {
        let rows = row_set(&["header", "X,garbage,,1.5,-inf,1e9"]);
        let record = &normalize_rows(&rows)[0];
        for value in [
            record.orbital_period,
            record.planet_radius,
            record.star_temp,
            record.star_radius,
            record.transit_depth,
            record.transit_duration,
            record.equilibrium_temp,
            record.star_logg,
            record.star_mass,
            record.star_metallicity,
            record.signal_to_noise,
            record.insolation_flux,
            record.planet_mass_earth,
        ] {
            assert!(value.is_finite());
        }
    }

    #[test]
    fn test_header_only_row_set_yields_no_records() {
        let rows = row_set(&["name,period"]);
        assert!(normalize_rows(&rows).is_empty());
    }

    #[test]
    fn test_record_serializes_with_schema_field_names() {
        let record = CandidateRecord {
            name: "Kepler-22b".to_string(),
            orbital_period: 289.9,
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Kepler-22b");
        for field in FEATURE_COLUMNS {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
