use dioxus::prelude::*;

/// Footer with a one-line description of where the data goes
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "xs-footer",
            span { class: "xs-footer-text",
                "Candidate data is sent only to the configured prediction service."
            }
        }
    }
}
