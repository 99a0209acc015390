//! # Exoscan Core
//!
//! Platform-independent library for exoplanet-candidate analysis.
//!
//! This crate provides the data pipeline used by the Exoscan front end,
//! designed to be reusable across platforms (web/WASM and desktop):
//!
//! - [`ingest`] - Row Set collection from manual tables, CSV, and JSON
//! - [`record`] - Candidate record schema and lenient row normalization
//! - [`predict`] - Prediction endpoint client and wire types
//! - [`export`] - PDF/CSV/JSON exporters over rendered results
//! - [`config`] - Schema and endpoint constants
//! - [`error`] - Error types for ingestion, analysis, and export
//!
//! The pipeline is strictly sequential: collect a [`ingest::RowSet`],
//! normalize it into [`record::CandidateRecord`]s, submit the batch with
//! [`predict::PredictionClient::analyze`], and hand the returned results to
//! the renderer and the exporters.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod predict;
pub mod record;
