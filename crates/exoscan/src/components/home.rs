use dioxus::prelude::*;

use crate::components::View;

/// Landing hero with the "Get Started" action
#[component]
pub fn HomeView(on_navigate: EventHandler<View>) -> Element {
    rsx! {
        section { class: "xs-view xs-view--home",
            div { class: "xs-hero",
                h1 { class: "xs-hero-title", "Discover New Worlds" }
                p { class: "xs-hero-subtitle",
                    "Upload transit survey candidates or type them in by hand, and let a "
                    "trained classifier tell you which ones are real exoplanets."
                }
                button {
                    class: "xs-btn xs-btn--primary xs-hero-cta",
                    onclick: move |_| on_navigate.call(View::Analyze),
                    "Get Started"
                }
            }

            div { class: "xs-feature-row",
                div { class: "xs-feature-card",
                    div { class: "xs-feature-icon", "📄" }
                    div { class: "xs-feature-title", "Bring your data" }
                    div { class: "xs-feature-text",
                        "CSV and JSON uploads, or a manual table with the standard "
                        "13-feature candidate schema."
                    }
                }
                div { class: "xs-feature-card",
                    div { class: "xs-feature-icon", "🔭" }
                    div { class: "xs-feature-title", "One-shot analysis" }
                    div { class: "xs-feature-text",
                        "Each run submits the whole batch at once and renders a card "
                        "per candidate with the model's confidence."
                    }
                }
                div { class: "xs-feature-card",
                    div { class: "xs-feature-icon", "📦" }
                    div { class: "xs-feature-title", "Take the results with you" }
                    div { class: "xs-feature-text",
                        "Export any run as PDF, CSV, or JSON — exactly what the "
                        "cards show."
                    }
                }
            }
        }
    }
}
