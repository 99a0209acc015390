use dioxus::prelude::*;

use exoscan_core::config::COLUMN_LABELS;

/// Starting contents of the manual-entry table: three empty rows.
pub fn default_manual_rows() -> Vec<Vec<String>> {
    (0..3).map(|_| empty_row()).collect()
}

fn empty_row() -> Vec<String> {
    vec![String::new(); COLUMN_LABELS.len()]
}

/// Editable candidate table with the fixed schema header.
///
/// Cell edits write straight into the shared rows signal; the collector
/// reads the whole table when the user hits Analyze.
#[component]
pub fn ManualTable(rows: Signal<Vec<Vec<String>>>) -> Element {
    let mut rows_signal = rows;

    let add_row = move |_| {
        rows_signal.write().push(empty_row());
    };

    let remove_row = move |_| {
        let mut table = rows_signal.write();
        if table.len() > 1 {
            table.pop();
        }
    };

    rsx! {
        div { class: "xs-manual-table-wrap",
            table { class: "xs-table xs-table--manual",
                thead {
                    tr {
                        for label in COLUMN_LABELS {
                            th { "{label}" }
                        }
                    }
                }
                tbody {
                    for (r, row) in rows.read().iter().enumerate() {
                        tr { key: "{r}",
                            for (c, cell) in row.iter().enumerate() {
                                td { key: "{c}",
                                    input {
                                        class: "xs-cell-input",
                                        r#type: "text",
                                        value: "{cell}",
                                        oninput: move |evt| {
                                            rows_signal.write()[r][c] = evt.value();
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "xs-manual-actions",
                button { class: "xs-btn xs-btn--ghost", onclick: add_row, "Add row" }
                button { class: "xs-btn xs-btn--ghost", onclick: remove_row, "Remove row" }
            }
        }
    }
}
