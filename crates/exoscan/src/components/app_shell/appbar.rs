use dioxus::prelude::*;

use crate::components::{use_analysis_phase, AnalysisPhase};

/// View selection enum for navigation
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Home,
    Analyze,
}

/// Global app bar with brand, navigation, and an analysis status pill
#[component]
pub fn AppBar(current_view: ReadSignal<View>, on_view_change: EventHandler<View>) -> Element {
    let phase = use_analysis_phase();

    // Status pill reflecting the current analysis attempt
    let status_pill = match phase.read().clone() {
        AnalysisPhase::Idle => rsx! {
            span { class: "xs-status-pill xs-status-pill--muted",
                span { class: "xs-status-dot xs-status-dot--muted" }
                "Ready"
            }
        },
        AnalysisPhase::Running => rsx! {
            span { class: "xs-status-pill xs-status-pill--warn",
                span { class: "xs-status-dot xs-status-dot--warn" }
                "Analyzing…"
            }
        },
        AnalysisPhase::Failed(_) => rsx! {
            span { class: "xs-status-pill xs-status-pill--warn",
                span { class: "xs-status-dot xs-status-dot--warn" }
                "Last run failed"
            }
        },
        AnalysisPhase::Complete => rsx! {
            span { class: "xs-status-pill xs-status-pill--ok",
                span { class: "xs-status-dot xs-status-dot--ok" }
                "Results ready"
            }
        },
    };

    let nav_class = |view: View| {
        if current_view() == view {
            "xs-nav-link xs-nav-link--active"
        } else {
            "xs-nav-link"
        }
    };

    rsx! {
        header { class: "xs-appbar",
            div { class: "xs-appbar-brand",
                span { class: "xs-appbar-logo", "🪐" }
                span { class: "xs-appbar-title", "Exoscan" }
            }
            nav { class: "xs-appbar-nav",
                button {
                    class: nav_class(View::Home),
                    onclick: move |_| on_view_change.call(View::Home),
                    "Home"
                }
                button {
                    class: nav_class(View::Analyze),
                    onclick: move |_| on_view_change.call(View::Analyze),
                    "Analyze"
                }
            }
            div { class: "xs-appbar-status",
                {status_pill}
            }
        }
    }
}
