//! Error types for exoscan-core.
//!
//! Every error here is terminal to the current analysis attempt but never
//! fatal to the application: the UI surfaces the message once and the user
//! retries by re-selecting input and re-submitting.

use thiserror::Error;

/// Errors raised while collecting rows from user input.
///
/// Individual malformed numeric fields are NOT errors; the normalizer
/// coerces them to 0 by design. These variants cover the two cases the UI
/// must distinguish: nothing was provided, or a file could not be parsed at
/// all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// File mode was selected but no file has been chosen.
    #[error("Select a file first")]
    MissingInput,
    /// The uploaded file could not be parsed as its declared format.
    #[error("Could not parse input file: {0}")]
    MalformedInput(String),
}

/// Errors raised while running an analysis against the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input collection failed before any request was made.
    #[error(transparent)]
    Input(#[from] IngestError),
    /// The request could not be sent or no response arrived.
    #[error("Request failed: {0}")]
    Request(String),
    /// The response arrived but was not the expected shape.
    #[error("Unexpected server response: {0}")]
    Decode(String),
    /// The server answered `success: false`; the message is its own.
    #[error("{0}")]
    Server(String),
}

/// Errors raised while building an export artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Serializing results to the artifact format failed.
    #[error("Failed to serialize results: {0}")]
    Serialize(String),
    /// Assembling the PDF document failed.
    #[error("Failed to build PDF: {0}")]
    Pdf(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_error_messages_distinguish_cases() {
        assert_eq!(IngestError::MissingInput.to_string(), "Select a file first");
        assert!(IngestError::MalformedInput("bad".into())
            .to_string()
            .contains("bad"));
    }

    #[test]
    fn test_server_error_surfaces_message_verbatim() {
        let err = AnalysisError::Server("Batch size limit exceeded".into());
        assert_eq!(err.to_string(), "Batch size limit exceeded");
    }

    #[test]
    fn test_ingest_error_converts_into_analysis_error() {
        let err: AnalysisError = IngestError::MissingInput.into();
        assert_eq!(err, AnalysisError::Input(IngestError::MissingInput));
    }
}
