//! Exoscan - exoplanet candidate analysis front end.
//!
//! A cross-platform Dioxus application that collects tabular
//! exoplanet-candidate data (typed into an editable table or uploaded as
//! CSV/JSON), submits it to a remote prediction service, renders the
//! returned classifications as cards with aggregate model metrics, and
//! exports the results as PDF/CSV/JSON.
//!
//! # Architecture
//!
//! - **Collection/normalization/export**: [`exoscan_core`], shared with any
//!   future frontend
//! - **Components**: Dioxus component tree under [`components`]
//! - **Platform plumbing**: file pickers and artifact downloads under
//!   [`utils`], with web (WASM) and desktop implementations
//!
//! # Platform Support
//!
//! - **Web (WASM)**: runs in the browser against the page origin's API
//! - **Desktop**: macOS/Windows/Linux against a configured API base URL

#![forbid(unsafe_code)]

pub mod components;
pub mod utils;
