use dioxus::prelude::*;

/// Decorative starfield backdrop.
///
/// Purely cosmetic: three CSS-animated layers behind the content, with no
/// data dependencies and no event handlers.
#[component]
pub fn Starfield() -> Element {
    rsx! {
        div { class: "xs-starfield", aria_hidden: "true",
            div { class: "xs-starfield-layer xs-starfield-layer--far" }
            div { class: "xs-starfield-layer xs-starfield-layer--mid" }
            div { class: "xs-starfield-layer xs-starfield-layer--near" }
        }
    }
}
