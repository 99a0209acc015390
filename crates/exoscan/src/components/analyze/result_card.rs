use dioxus::prelude::*;

use exoscan_core::export::card_lines;
use exoscan_core::predict::PredictionResult;

/// One classification card.
///
/// The detail lines come from the same `card_lines` helper the exporters
/// use, so what the user sees is exactly what gets exported.
#[component]
pub fn ResultCard(result: PredictionResult) -> Element {
    let card_class = if result.is_confirmed() {
        "xs-result-card xs-result-card--confirmed"
    } else {
        "xs-result-card"
    };

    let lines = card_lines(&result);

    rsx! {
        article { class: card_class,
            h3 { class: "xs-result-name", "{result.name}" }
            for (label, value) in lines {
                p { class: "xs-result-line", "{label}: {value}" }
            }
        }
    }
}
