use dioxus::prelude::*;

use exoscan_core::config::{CSV_FILENAME, JSON_FILENAME, PDF_FILENAME};
use exoscan_core::export::{csv::results_to_csv, json::results_to_json, pdf::results_to_pdf};

use crate::components::use_analysis_results;
use crate::utils::download::deliver_bytes;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

/// Export actions over the rendered results.
///
/// Only mounted once a run has rendered cards, so no artifact can be
/// produced before the first successful analysis. Each exporter reads the
/// original result sequence, not the page.
#[component]
pub fn ExportPanel() -> Element {
    let results = use_analysis_results();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("xs-export-feedback".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "xs-export-feedback xs-export-feedback--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "xs-export-feedback xs-export-feedback--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let pdf_handler = {
        let results = results;
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing PDF"));
            let export_results = results.read().clone();
            spawn(async move {
                let outcome = match results_to_pdf(&export_results) {
                    Ok(bytes) => deliver_bytes(PDF_FILENAME, "application/pdf", bytes).await,
                    Err(err) => Err(err.to_string()),
                };
                match outcome {
                    Ok(Some(path)) => {
                        status_signal.set(ExportStatus::Done(format!("PDF saved to {path}")))
                    }
                    Ok(None) => {
                        status_signal.set(ExportStatus::Done("PDF download started".to_string()))
                    }
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            });
        }
    };

    let csv_handler = {
        let results = results;
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing CSV"));
            let export_results = results.read().clone();
            spawn(async move {
                let csv = results_to_csv(&export_results);
                let outcome = deliver_bytes(CSV_FILENAME, "text/csv", csv.into_bytes()).await;
                match outcome {
                    Ok(Some(path)) => {
                        status_signal.set(ExportStatus::Done(format!("CSV saved to {path}")))
                    }
                    Ok(None) => {
                        status_signal.set(ExportStatus::Done("CSV download started".to_string()))
                    }
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            });
        }
    };

    let json_handler = {
        let results = results;
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("Preparing JSON"));
            let export_results = results.read().clone();
            spawn(async move {
                let outcome = match results_to_json(&export_results) {
                    Ok(json) => {
                        deliver_bytes(JSON_FILENAME, "application/json", json.into_bytes()).await
                    }
                    Err(err) => Err(err.to_string()),
                };
                match outcome {
                    Ok(Some(path)) => {
                        status_signal.set(ExportStatus::Done(format!("JSON saved to {path}")))
                    }
                    Ok(None) => {
                        status_signal.set(ExportStatus::Done("JSON download started".to_string()))
                    }
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "xs-export",
            h3 { class: "xs-section-title", "Export" }
            p { class: "xs-export-hint",
                "Artifacts contain exactly what the cards show."
            }
            div { class: "xs-export-actions",
                button {
                    class: "xs-btn xs-btn--primary",
                    disabled: busy(),
                    onclick: pdf_handler,
                    "Export PDF"
                }
                button {
                    class: "xs-btn",
                    disabled: busy(),
                    onclick: csv_handler,
                    "Export CSV"
                }
                button {
                    class: "xs-btn xs-btn--ghost",
                    disabled: busy(),
                    onclick: json_handler,
                    "Export JSON"
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}
