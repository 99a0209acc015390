use dioxus::prelude::*;

use crate::components::use_celebration;

/// Transient celebration overlay, shown when a run contains a CONFIRMED
/// result and auto-hidden by the analysis coroutine after a fixed delay.
#[component]
pub fn Celebration() -> Element {
    let visible = use_celebration();

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "xs-celebration", aria_live: "polite",
            div { class: "xs-celebration-banner",
                "🎉 Confirmed exoplanet detected! 🎉"
            }
        }
    }
}
