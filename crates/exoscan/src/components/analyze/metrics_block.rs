use dioxus::prelude::*;

use exoscan_core::predict::ModelMetrics;

/// Aggregate model-performance block, one per analysis run
#[component]
pub fn MetricsBlock(metrics: ModelMetrics) -> Element {
    rsx! {
        section { class: "xs-metrics",
            h3 { class: "xs-metrics-title", "📊 Model Performance" }
            div { class: "xs-metrics-grid",
                div { class: "xs-metric-card",
                    div { class: "xs-metric-label", "Test Accuracy" }
                    div { class: "xs-metric-value", "{metrics.test_accuracy}" }
                }
                div { class: "xs-metric-card",
                    div { class: "xs-metric-label", "Test F1 Score" }
                    div { class: "xs-metric-value", "{metrics.test_f1}" }
                }
                div { class: "xs-metric-card",
                    div { class: "xs-metric-label", "CV Mean" }
                    div { class: "xs-metric-value", "{metrics.cv_mean}" }
                }
            }
        }
    }
}
