use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::components::use_prediction_client;

/// Custom-model upload card.
///
/// Sends the picked artifact to the model-upload endpoint as a multipart
/// form and relays the server's verdict inline. The artifact's format and
/// validation are entirely the server's business.
#[component]
pub fn ModelUploadCard() -> Element {
    let mut picked = use_signal(|| None::<(String, Vec<u8>)>);
    let mut message = use_signal(|| None::<(bool, String)>);
    let mut uploading = use_signal(|| false);
    let client = use_prediction_client();

    let handle_upload = move |_| {
        if uploading() {
            return;
        }
        let Some((name, bytes)) = picked() else {
            message.set(Some((false, "Select a .pkl model file first.".to_string())));
            return;
        };
        uploading.set(true);
        message.set(None);
        let client = client.clone();
        spawn(async move {
            match client.upload_model(&name, bytes).await {
                Ok(response) => {
                    message.set(Some((response.success, response.message)));
                }
                Err(e) => {
                    error!("❌ Model upload failed: {}", e);
                    message.set(Some((false, e.to_string())));
                }
            }
            uploading.set(false);
        });
    };

    let picked_label = picked()
        .map(|(name, _)| name)
        .unwrap_or_else(|| "No model selected".to_string());

    rsx! {
        section { class: "xs-model-upload",
            h3 { class: "xs-section-title", "Use Your Own Model" }
            p { class: "xs-import-hint",
                "Upload a trained .pkl model and subsequent analyses will run "
                "against it instead of the built-in one."
            }
            div { class: "xs-model-upload-row",
                ModelFilePicker {
                    on_file: move |file: (String, Vec<u8>)| picked.set(Some(file)),
                }
                span { class: "xs-file-chip", "{picked_label}" }
                button {
                    class: "xs-btn",
                    disabled: uploading(),
                    onclick: handle_upload,
                    if uploading() { "Uploading…" } else { "Upload Model" }
                }
            }
            if let Some((success, text)) = message() {
                p {
                    class: if success {
                        "xs-export-feedback xs-export-feedback--success"
                    } else {
                        "xs-export-feedback xs-export-feedback--error"
                    },
                    "{text}"
                }
            }
        }
    }
}

/// Platform-specific picker for the model artifact (bytes, not text).
#[component]
fn ModelFilePicker(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    if cfg!(target_arch = "wasm32") {
        rsx! { WebModelPicker { on_file } }
    } else {
        rsx! { DesktopModelPicker { on_file } }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn DesktopModelPicker(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    let handle_pick = move |_| {
        spawn(async move {
            use rfd::AsyncFileDialog;

            let picked = AsyncFileDialog::new()
                .set_title("Select a trained model")
                .add_filter("Pickled model", &["pkl"])
                .pick_file()
                .await;

            if let Some(handle) = picked {
                let path = handle.path().to_path_buf();
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("model.pkl")
                    .to_string();

                match tokio::fs::read(&path).await {
                    Ok(bytes) => on_file.call((file_name, bytes)),
                    Err(e) => error!("Failed to read {}: {}", file_name, e),
                }
            }
        });
    };

    rsx! {
        button { class: "xs-btn xs-btn--choice", onclick: handle_pick, "Choose model" }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
fn DesktopModelPicker(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    let _ = on_file;
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
fn WebModelPicker(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    use wasm_bindgen::JsCast;

    let trigger_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("xs-model-input") {
                    if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                        el.click();
                    }
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| {
        spawn(async move {
            let files = evt.files();
            if let Some(file) = files.into_iter().next() {
                let file_name = file.name().to_string();
                match file.read_bytes().await {
                    Ok(bytes) => on_file.call((file_name, bytes.to_vec())),
                    Err(e) => error!("Failed to read {}: {}", file_name, e),
                }
            }
        });
    };

    rsx! {
        input {
            id: "xs-model-input",
            r#type: "file",
            class: "xs-hidden-input",
            accept: ".pkl",
            onchange: handle_files,
        }
        button { class: "xs-btn xs-btn--choice", onclick: trigger_input, "Choose model" }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn WebModelPicker(on_file: EventHandler<(String, Vec<u8>)>) -> Element {
    let _ = on_file;
    rsx! {}
}
