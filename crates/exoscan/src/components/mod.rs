//! UI components for the Exoscan application.
//!
//! # Architecture
//!
//! - `app_shell`: AppBar, Footer, Starfield backdrop, `View` navigation
//! - `home`: landing hero with the "Get Started" action
//! - `analyze`: the import → normalize → predict → render → export pipeline
//! - `model_upload`: custom-model upload card
//!
//! # Context Providers
//!
//! Components use Dioxus context for the per-session analysis state:
//!
//! ```ignore
//! // Rendered results (cleared and replaced by each successful run)
//! let results = use_analysis_results();
//!
//! // Pipeline phase for the analyze view
//! match use_analysis_phase().read().clone() {
//!     AnalysisPhase::Complete => { /* cards + exports visible */ }
//!     AnalysisPhase::Failed(message) => { /* status line */ }
//!     _ => {}
//! }
//! ```

mod app_shell;
mod analyze;
mod home;
mod model_upload;

pub use analyze::AnalyzeView;
pub use app_shell::{AppBar, Footer, Starfield, View};
pub use home::HomeView;
pub use model_upload::ModelUploadCard;

use dioxus::prelude::*;
use exoscan_core::predict::{ModelMetrics, PredictionClient, PredictionResult};

/// Pipeline state for the current analysis attempt.
///
/// Errors are terminal to the attempt but never to the app; the user
/// retries by re-selecting input and re-submitting.
#[derive(Clone, PartialEq)]
pub enum AnalysisPhase {
    /// No analysis has been requested yet.
    Idle,
    /// The prediction request is in flight.
    Running,
    /// The attempt failed; the message is already user-readable.
    Failed(String),
    /// Results and metrics are rendered.
    Complete,
}

/// Rendered prediction results (one card each), newest run only.
pub fn use_analysis_results() -> Signal<Vec<PredictionResult>> {
    use_context::<Signal<Vec<PredictionResult>>>()
}

/// Metrics of the newest completed run, if any.
pub fn use_model_metrics() -> Signal<Option<ModelMetrics>> {
    use_context::<Signal<Option<ModelMetrics>>>()
}

/// Phase of the current analysis attempt.
pub fn use_analysis_phase() -> Signal<AnalysisPhase> {
    use_context::<Signal<AnalysisPhase>>()
}

/// Whether the celebration overlay is currently visible.
pub fn use_celebration() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Shared prediction-service client.
pub fn use_prediction_client() -> PredictionClient {
    use_context::<PredictionClient>()
}

/// Resolves the API base URL for the current platform.
///
/// - Web: the page origin, so the service that served the app answers its
///   own API paths (same shape as a relative fetch).
/// - Desktop: `EXOSCAN_API_URL`, defaulting to a local development server.
fn default_api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var("EXOSCAN_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
    }
}

#[component]
pub fn App() -> Element {
    // Per-session analysis state, shared across views so navigating away
    // and back does not lose the rendered cards.
    let results = use_signal(Vec::<PredictionResult>::new);
    use_context_provider(|| results);

    let metrics = use_signal(|| None::<ModelMetrics>);
    use_context_provider(|| metrics);

    let phase = use_signal(|| AnalysisPhase::Idle);
    use_context_provider(|| phase);

    let celebration = use_signal(|| false);
    use_context_provider(|| celebration);

    use_context_provider(|| PredictionClient::new(default_api_base()));

    // View state management
    let mut current_view = use_signal(|| View::Home);

    rsx! {
        div { class: "xs-app",
            Starfield {}

            AppBar {
                current_view,
                on_view_change: move |view| current_view.set(view),
            }

            main { class: "xs-main",
                if current_view() == View::Home {
                    HomeView {
                        on_navigate: move |view| current_view.set(view)
                    }
                } else {
                    AnalyzeView {
                        on_navigate: move |view| current_view.set(view)
                    }
                }
            }

            Footer {}
        }
    }
}
