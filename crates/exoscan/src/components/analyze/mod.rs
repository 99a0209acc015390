//! Analyze view: import → normalize → predict → render → export.
//!
//! The pipeline is one coroutine with the UI event handlers as thin
//! adapters. Collection and normalization are synchronous; the prediction
//! request is the only suspension point, and everything downstream
//! (rendering, export availability, the celebration) is sequenced strictly
//! after its response.

mod celebration;
mod export_panel;
mod import_card;
mod manual_table;
mod metrics_block;
mod preview_table;
mod result_card;

pub use celebration::Celebration;
pub use export_panel::ExportPanel;
pub use import_card::{ImportCard, LoadedFile};
pub use manual_table::{default_manual_rows, ManualTable};
pub use metrics_block::MetricsBlock;
pub use preview_table::PreviewTable;
pub use result_card::ResultCard;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use instant::Instant;

use exoscan_core::config::{CELEBRATION_MS, COLUMN_LABELS};
use exoscan_core::error::IngestError;
use exoscan_core::ingest::{FileFormat, ImportMethod, ImportSelection, RowSet};
use exoscan_core::record::normalize_rows;

use crate::components::{
    use_analysis_phase, use_analysis_results, use_celebration, use_model_metrics,
    use_prediction_client, AnalysisPhase, ModelUploadCard, View,
};

// Messages for the analysis coroutine
enum AnalysisMessage {
    Analyze(RowSet),
}

/// Collects a Row Set according to the import-session selection.
///
/// Manual mode reads the editable table unconditionally; file mode requires
/// a loaded file and dispatches on the declared format.
fn collect_rows(
    selection: ImportSelection,
    manual_rows: &[Vec<String>],
    loaded: Option<&LoadedFile>,
) -> Result<RowSet, IngestError> {
    match selection.method {
        Some(ImportMethod::File) => {
            let file = loaded.ok_or(IngestError::MissingInput)?;
            match selection.format {
                Some(FileFormat::Json) => RowSet::from_json(&file.contents),
                _ => Ok(RowSet::from_csv(&file.contents)),
            }
        }
        _ => Ok(RowSet::from_table(&COLUMN_LABELS, manual_rows)),
    }
}

/// Main analysis view: import card, preview, result cards, metrics, exports
#[component]
pub fn AnalyzeView(on_navigate: EventHandler<View>) -> Element {
    let selection = use_signal(ImportSelection::default);
    let manual_rows = use_signal(default_manual_rows);
    let loaded_file = use_signal(|| None::<LoadedFile>);
    let mut preview = use_signal(|| None::<RowSet>);
    let mut status = use_signal(String::new);

    let results = use_analysis_results();
    let metrics = use_model_metrics();
    let phase = use_analysis_phase();
    let celebration = use_celebration();
    let client = use_prediction_client();

    // Analysis coroutine - one best-effort round trip per message
    let analysis_task = use_coroutine({
        let mut results = results;
        let mut metrics = metrics;
        let mut phase = phase;
        let mut status = status;
        let celebration = celebration;

        move |mut rx: UnboundedReceiver<AnalysisMessage>| {
            let client = client.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    let AnalysisMessage::Analyze(rows) = msg;

                    let records = normalize_rows(&rows);
                    info!("🔭 Analyzing {} candidate(s)", records.len());
                    phase.set(AnalysisPhase::Running);
                    status.set(format!("Analyzing {} candidate(s)…", records.len()));

                    let started = Instant::now();
                    match client.analyze(&records).await {
                        Ok(analysis) => {
                            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                            let count = analysis.results.len();
                            info!(
                                "✅ Analysis completed: {} result(s) in {:.0} ms",
                                count, elapsed_ms
                            );

                            let confirmed = analysis.any_confirmed();
                            results.set(analysis.results);
                            metrics.set(Some(analysis.metrics));
                            phase.set(AnalysisPhase::Complete);

                            let result_word = if count == 1 { "result" } else { "results" };
                            status.set(format!("{count} {result_word} in {elapsed_ms:.0} ms"));

                            if confirmed {
                                let mut celebration_signal = celebration;
                                celebration_signal.set(true);
                                spawn(async move {
                                    #[cfg(target_arch = "wasm32")]
                                    gloo_timers::future::TimeoutFuture::new(CELEBRATION_MS as u32)
                                        .await;
                                    #[cfg(not(target_arch = "wasm32"))]
                                    tokio::time::sleep(std::time::Duration::from_millis(
                                        CELEBRATION_MS,
                                    ))
                                    .await;
                                    celebration_signal.set(false);
                                });
                            }
                        }
                        Err(e) => {
                            error!("❌ Analysis failed: {}", e);
                            status.set(e.to_string());
                            phase.set(AnalysisPhase::Failed(e.to_string()));
                        }
                    }
                }
            }
        }
    });

    let handle_analyze = move |_| {
        let collected = collect_rows(
            selection(),
            &manual_rows.read(),
            loaded_file.read().as_ref(),
        );
        match collected {
            Ok(rows) => {
                preview.set(Some(rows.clone()));
                analysis_task.send(AnalysisMessage::Analyze(rows));
            }
            Err(e) => {
                // Missing vs malformed input already carry distinct messages.
                status.set(e.to_string());
            }
        }
    };

    let has_results = !results.read().is_empty();
    let status_class = if matches!(phase.read().clone(), AnalysisPhase::Failed(_)) {
        "xs-status-line xs-status-line--error"
    } else {
        "xs-status-line"
    };

    rsx! {
        section { class: "xs-view xs-view--analyze",
            header { class: "xs-view-header",
                h2 { class: "xs-view-title", "Candidate Analysis" }
                button {
                    class: "xs-btn xs-btn--ghost",
                    onclick: move |_| on_navigate.call(View::Home),
                    "← Back to Home"
                }
            }

            ImportCard {
                selection,
                manual_rows,
                loaded_file,
                on_analyze: handle_analyze,
            }

            if let Some(rows) = preview() {
                PreviewTable { rows }
            }

            if !status.read().is_empty() {
                p { class: status_class, "{status}" }
            }

            if has_results {
                section { class: "xs-results-section",
                    h2 { class: "xs-section-title", "Analysis Results" }
                    div { class: "xs-results-grid",
                        for (idx, result) in results.read().iter().enumerate() {
                            ResultCard {
                                key: "{idx}",
                                result: result.clone(),
                            }
                        }
                    }

                    if let Some(run_metrics) = metrics() {
                        MetricsBlock { metrics: run_metrics }
                    }

                    ExportPanel {}
                }
            }

            ModelUploadCard {}

            Celebration {}
        }
    }
}
