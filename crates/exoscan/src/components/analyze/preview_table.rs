use dioxus::prelude::*;

use exoscan_core::ingest::RowSet;

/// Read-only preview of the collected Row Set, shown before the prediction
/// request returns so the user can spot mismapped columns.
#[component]
pub fn PreviewTable(rows: RowSet) -> Element {
    let headers: Vec<String> = rows
        .header_cells()
        .iter()
        .map(|h| h.to_string())
        .collect();
    let body: Vec<Vec<String>> = rows
        .data_rows()
        .iter()
        .map(|row| row.split(',').map(str::to_string).collect())
        .collect();

    rsx! {
        section { class: "xs-preview",
            h3 { class: "xs-section-title", "Data Preview" }
            div { class: "xs-table-scroll",
                table { class: "xs-table xs-table--preview",
                    thead {
                        tr {
                            for (i, header) in headers.iter().enumerate() {
                                th { key: "{i}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (r, row) in body.iter().enumerate() {
                            tr { key: "{r}",
                                for (c, cell) in row.iter().enumerate() {
                                    td { key: "{c}", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
