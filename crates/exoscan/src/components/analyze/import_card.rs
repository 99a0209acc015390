use dioxus::prelude::*;

use exoscan_core::ingest::{FileFormat, ImportMethod, ImportSelection};

use super::ManualTable;

/// One file read into memory, ready for collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFile {
    pub name: String,
    pub contents: String,
}

/// Import card: method selection, file acquisition, and the analyze action.
/// Uses native rfd dialogs on desktop, a hidden file input on web.
#[component]
pub fn ImportCard(
    selection: Signal<ImportSelection>,
    manual_rows: Signal<Vec<Vec<String>>>,
    loaded_file: Signal<Option<LoadedFile>>,
    on_analyze: EventHandler<()>,
) -> Element {
    let mut selection_signal = selection;
    let mut loaded_signal = loaded_file;

    let current = selection();
    let method_class = |method: ImportMethod| {
        if current.method == Some(method) {
            "xs-btn xs-btn--choice xs-btn--choice-active"
        } else {
            "xs-btn xs-btn--choice"
        }
    };

    // The analyze action appears once the selection is complete: manual mode
    // immediately, file mode after a format is chosen.
    let analyze_ready = match current.method {
        Some(ImportMethod::Manual) => true,
        Some(ImportMethod::File) => current.format.is_some(),
        None => false,
    };

    let handle_file_loaded = move |file: LoadedFile| {
        loaded_signal.set(Some(file));
    };

    rsx! {
        section { class: "xs-import-card",
            h3 { class: "xs-section-title", "Import Candidate Data" }
            p { class: "xs-import-hint",
                "Columns are positional: name first, then the 13 numeric features "
                "in schema order. Unparsable numbers are treated as 0."
            }

            div { class: "xs-import-methods",
                button {
                    class: method_class(ImportMethod::Manual),
                    onclick: move |_| {
                        selection_signal.write().method = Some(ImportMethod::Manual);
                    },
                    "Manual Entry"
                }
                button {
                    class: method_class(ImportMethod::File),
                    onclick: move |_| {
                        selection_signal.write().method = Some(ImportMethod::File);
                    },
                    "Upload File"
                }
            }

            if current.method == Some(ImportMethod::Manual) {
                ManualTable { rows: manual_rows }
            }

            if current.method == Some(ImportMethod::File) {
                FilePicker {
                    selection,
                    on_file: handle_file_loaded,
                }
                if let Some(file) = loaded_file() {
                    p { class: "xs-file-chip", "📄 {file.name}" }
                }
            }

            if analyze_ready {
                div { class: "xs-import-actions",
                    button {
                        class: "xs-btn xs-btn--primary",
                        onclick: move |_| on_analyze.call(()),
                        "Analyze"
                    }
                }
            }
        }
    }
}

/// Format buttons plus platform-specific file acquisition.
#[component]
fn FilePicker(selection: Signal<ImportSelection>, on_file: EventHandler<LoadedFile>) -> Element {
    if cfg!(target_arch = "wasm32") {
        rsx! { WebFilePicker { selection, on_file } }
    } else {
        rsx! { DesktopFilePicker { selection, on_file } }
    }
}

// =============================================================================
// Desktop implementation (native rfd dialogs)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn DesktopFilePicker(
    selection: Signal<ImportSelection>,
    on_file: EventHandler<LoadedFile>,
) -> Element {
    let mut selection_signal = selection;

    let mut pick_file = move |format: FileFormat| {
        selection_signal.write().format = Some(format);
        spawn(async move {
            use dioxus::logger::tracing::error;
            use rfd::AsyncFileDialog;

            let (filter_label, extension) = match format {
                FileFormat::Csv => ("CSV", "csv"),
                FileFormat::Json => ("JSON", "json"),
            };

            let picked = AsyncFileDialog::new()
                .set_title("Select a candidate data file")
                .add_filter(filter_label, &[extension])
                .pick_file()
                .await;

            if let Some(handle) = picked {
                let path = handle.path().to_path_buf();
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown")
                    .to_string();

                match tokio::fs::read_to_string(&path).await {
                    Ok(contents) => {
                        on_file.call(LoadedFile {
                            name: file_name,
                            contents,
                        });
                    }
                    Err(e) => {
                        error!("Failed to read {}: {}", file_name, e);
                    }
                }
            }
        });
    };

    rsx! {
        div { class: "xs-format-row",
            button {
                class: "xs-btn xs-btn--choice",
                onclick: move |_| pick_file(FileFormat::Csv),
                "Choose CSV file"
            }
            button {
                class: "xs-btn xs-btn--choice",
                onclick: move |_| pick_file(FileFormat::Json),
                "Choose JSON file"
            }
        }
    }
}

// Stub for WASM compilation (never actually called)
#[cfg(target_arch = "wasm32")]
#[component]
fn DesktopFilePicker(
    selection: Signal<ImportSelection>,
    on_file: EventHandler<LoadedFile>,
) -> Element {
    let _ = (selection, on_file);
    rsx! {}
}

// =============================================================================
// Web implementation (hidden file input triggered by the format buttons)
// =============================================================================

#[cfg(target_arch = "wasm32")]
#[component]
fn WebFilePicker(selection: Signal<ImportSelection>, on_file: EventHandler<LoadedFile>) -> Element {
    use dioxus::logger::tracing::error;
    use wasm_bindgen::JsCast;

    let mut selection_signal = selection;

    // Set the accept filter imperatively before opening the picker; waiting
    // for a re-render would race the click.
    let trigger_file_input = move |format: FileFormat| {
        selection_signal.write().format = Some(format);
        let accept = match format {
            FileFormat::Csv => ".csv",
            FileFormat::Json => ".json",
        };
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("xs-file-input") {
                    if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                        let _ = el.set_attribute("accept", accept);
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
                match file.read_string().await {
                    Ok(contents) => {
                        on_file.call(LoadedFile {
                            name: file_name,
                            contents,
                        });
                    }
                    Err(e) => {
                        error!("Failed to read {}: {}", file_name, e);
                    }
                }
            }
        });
    };

    rsx! {
        input {
            id: "xs-file-input",
            r#type: "file",
            class: "xs-hidden-input",
            onchange: handle_files,
        }
        div { class: "xs-format-row",
            button {
                class: "xs-btn xs-btn--choice",
                onclick: move |_| trigger_file_input(FileFormat::Csv),
                "Choose CSV file"
            }
            button {
                class: "xs-btn xs-btn--choice",
                onclick: move |_| trigger_file_input(FileFormat::Json),
                "Choose JSON file"
            }
        }
    }
}

// Stub for non-WASM compilation
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn WebFilePicker(selection: Signal<ImportSelection>, on_file: EventHandler<LoadedFile>) -> Element {
    let _ = (selection, on_file);
    rsx! {}
}
