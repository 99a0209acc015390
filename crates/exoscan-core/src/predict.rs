//! Prediction endpoint client and wire types.
//!
//! This module wraps reqwest to talk to the remote prediction service.
//! reqwest works on both native and WASM platforms:
//! - Native: uses hyper with rustls-tls for HTTPS
//! - WASM: uses the browser fetch() API internally
//!
//! The analysis call is a single best-effort round trip: no retry, no
//! backoff, no cancellation. Everything downstream of it (rendering,
//! enabling the exporters) is sequenced strictly after the response.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::{CONFIRMED_LABEL, PREDICT_PATH, UPLOAD_MODEL_PATH};
use crate::error::AnalysisError;
use crate::record::CandidateRecord;

/// Global HTTP client for connection reuse.
///
/// reqwest::Client pools connections internally, so one shared client is
/// cheaper than building one per request. On native builds it carries a
/// 30 second timeout so a dead endpoint fails the analysis instead of
/// leaving the UI pending forever; reqwest does not expose client timeouts
/// on WASM, where the browser's own fetch limits apply.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent("Exoscan/0.1.0 (exoplanet candidate analysis)")
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
});

/// Request body for the prediction endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub data: Vec<CandidateRecord>,
}

/// One classification returned by the prediction service.
///
/// Owned by the renderer once received; the exporters read it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub name: String,
    /// Classification label; `"CONFIRMED"` triggers the celebration.
    pub prediction: String,
    /// Confidence in percent (0-100).
    pub confidence: f64,
    /// The submitted features, echoed back by the server.
    pub features: CandidateRecord,
    /// Habitability label, e.g. "Yes" / "No".
    pub habitable: String,
}

impl PredictionResult {
    pub fn is_confirmed(&self) -> bool {
        self.prediction == CONFIRMED_LABEL
    }
}

/// Aggregate model performance, attached once per analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub test_accuracy: f64,
    pub test_f1: f64,
    pub cv_mean: f64,
}

/// Raw response envelope from the prediction endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Option<Vec<PredictionResult>>,
    #[serde(default)]
    pub metrics: Option<ModelMetrics>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope from the model-upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
}

/// A successfully decoded analysis: results plus run metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub results: Vec<PredictionResult>,
    pub metrics: ModelMetrics,
}

impl Analysis {
    /// Whether any result carries the CONFIRMED label.
    pub fn any_confirmed(&self) -> bool {
        self.results.iter().any(PredictionResult::is_confirmed)
    }
}

/// Converts a decoded response envelope into an [`Analysis`].
///
/// `success: false` surfaces the server's message; a success envelope with
/// the payload missing is a decode error, not an empty analysis.
pub fn analysis_from_response(response: PredictResponse) -> Result<Analysis, AnalysisError> {
    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "Analysis failed".to_string());
        return Err(AnalysisError::Server(message));
    }
    let results = response
        .results
        .ok_or_else(|| AnalysisError::Decode("response missing results".to_string()))?;
    let metrics = response
        .metrics
        .ok_or_else(|| AnalysisError::Decode("response missing metrics".to_string()))?;
    Ok(Analysis { results, metrics })
}

/// Client for the prediction service.
///
/// Holds only the base URL; the underlying HTTP client is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionClient {
    base_url: String,
}

impl PredictionClient {
    /// Creates a client against `base_url` (scheme + host, no trailing
    /// path). An empty base is valid on platforms that resolve relative
    /// URLs, but callers normally pass the page origin or a configured
    /// server address.
    pub fn new(base_url: impl Into<String>) -> PredictionClient {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        PredictionClient { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits one batch of candidate records and awaits the classification.
    ///
    /// This is the pipeline's only suspension point. Errors are terminal to
    /// the current attempt; the caller surfaces them and the user retries.
    pub async fn analyze(&self, records: &[CandidateRecord]) -> Result<Analysis, AnalysisError> {
        let request = PredictRequest {
            data: records.to_vec(),
        };

        let response = HTTP_CLIENT
            .post(format!("{}{}", self.base_url, PREDICT_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let decoded: PredictResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;

        analysis_from_response(decoded)
    }

    /// Uploads a user-supplied model artifact as a multipart form with a
    /// single `file` field. The artifact's format and validation are owned
    /// by the server; this client only relays its verdict.
    pub async fn upload_model(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AnalysisError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = HTTP_CLIENT
            .post(format!("{}{}", self.base_url, UPLOAD_MODEL_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, prediction: &str) -> PredictionResult {
        PredictionResult {
            name: name.to_string(),
            prediction: prediction.to_string(),
            confidence: 91.2,
            features: CandidateRecord {
                name: name.to_string(),
                ..Default::default()
            },
            habitable: "No".to_string(),
        }
    }

    #[test]
    fn test_request_body_wraps_records_in_data() {
        let request = PredictRequest {
            data: vec![CandidateRecord::from_row("Kepler-22b,289.9", 0)],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["data"][0]["name"], "Kepler-22b");
        assert_eq!(json["data"][0]["orbital_period"], 289.9);
    }

    #[test]
    fn test_success_response_decodes_into_analysis() {
        let envelope: PredictResponse = serde_json::from_str(
            r#"{
                "success": true,
                "results": [{
                    "name": "Kepler-22b",
                    "prediction": "CONFIRMED",
                    "confidence": 97.3,
                    "features": {"name": "Kepler-22b", "orbital_period": 289.9,
                        "planet_radius": 0, "star_temp": 0, "star_radius": 0,
                        "transit_depth": 0, "transit_duration": 0,
                        "equilibrium_temp": 0, "star_logg": 0, "star_mass": 0,
                        "star_metallicity": 0, "signal_to_noise": 0,
                        "insolation_flux": 0, "planet_mass_earth": 0},
                    "habitable": "Yes"
                }],
                "metrics": {"test_accuracy": 0.91, "test_f1": 0.89, "cv_mean": 0.9}
            }"#,
        )
        .unwrap();

        let analysis = analysis_from_response(envelope).unwrap();
        assert_eq!(analysis.results.len(), 1);
        assert!(analysis.any_confirmed());
        assert_eq!(analysis.metrics.test_accuracy, 0.91);
    }

    #[test]
    fn test_failure_response_surfaces_server_message() {
        let envelope: PredictResponse =
            serde_json::from_str(r#"{"success": false, "message": "Input list is empty."}"#)
                .unwrap();
        let err = analysis_from_response(envelope).unwrap_err();
        assert_eq!(err, AnalysisError::Server("Input list is empty.".into()));
    }

    #[test]
    fn test_failure_response_without_message_gets_fallback() {
        let envelope: PredictResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = analysis_from_response(envelope).unwrap_err();
        assert_eq!(err, AnalysisError::Server("Analysis failed".into()));
    }

    #[test]
    fn test_success_without_payload_is_decode_error() {
        let envelope: PredictResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = analysis_from_response(envelope).unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
    }

    #[test]
    fn test_any_confirmed_requires_exact_label() {
        let analysis = Analysis {
            results: vec![result("A", "FALSE POSITIVE"), result("B", "confirmed")],
            metrics: ModelMetrics {
                test_accuracy: 0.9,
                test_f1: 0.9,
                cv_mean: 0.9,
            },
        };
        assert!(!analysis.any_confirmed());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PredictionClient::new("http://127.0.0.1:5000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
