use dioxus::prelude::*;

use crate::icons::{FaFloppyDisk, FaPen, FaPlus, FaTrash, FaXmark};
use crate::rows::{Row, RowEvent, RowMode, RowSet};
use crate::Icon;

/// Toolbar above the grid; emits [`RowEvent::AddDraft`].
#[component]
pub fn EditToolbar(on_event: EventHandler<RowEvent>) -> Element {
    rsx! {
        div {
            class: "grid-toolbar",
            button {
                class: "toolbar-add",
                onclick: move |_| on_event.call(RowEvent::AddDraft),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "Add Item To Shopping List"
            }
        }
    }
}

/// The editable item grid.
///
/// Pure render surface: every interaction is forwarded as a [`RowEvent`]
/// and all state lives in the [`RowSet`] the caller owns.
#[component]
pub fn ItemGrid(rows: RowSet, on_event: EventHandler<RowEvent>) -> Element {
    rsx! {
        table {
            class: "item-grid",
            thead {
                tr {
                    th { class: "col-actions", "Actions" }
                    th { class: "col-name", "Item Name" }
                }
            }
            tbody {
                for row in rows.rows().iter().cloned() {
                    ItemRow { key: "{row.id}", row, on_event }
                }
            }
        }
    }
}

#[component]
fn ItemRow(row: Row, on_event: EventHandler<RowEvent>) -> Element {
    let save_id = row.id.clone();
    let cancel_id = row.id.clone();
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();
    let input_id = row.id.clone();
    let row_class = if row.editing() { "item-row editing" } else { "item-row" };

    rsx! {
        tr {
            class: "{row_class}",
            td {
                class: "col-actions",
                if row.editing() {
                    button {
                        class: "row-action primary",
                        title: "Save",
                        onclick: move |_| on_event.call(RowEvent::Save(save_id.clone())),
                        Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    }
                    button {
                        class: "row-action",
                        title: "Cancel",
                        onclick: move |_| on_event.call(RowEvent::Cancel(cancel_id.clone())),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                } else {
                    button {
                        class: "row-action",
                        title: "Edit",
                        onclick: move |_| on_event.call(RowEvent::StartEdit(edit_id.clone())),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "row-action",
                        title: "Delete",
                        onclick: move |_| on_event.call(RowEvent::Delete(delete_id.clone())),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
            td {
                class: "col-name",
                if row.editing() {
                    input {
                        class: "row-editor",
                        r#type: "text",
                        placeholder: "Item name",
                        value: row.item_name.clone(),
                        autofocus: row.mode == RowMode::NewEdit,
                        oninput: move |evt: FormEvent| {
                            on_event.call(RowEvent::Input(input_id.clone(), evt.value()))
                        },
                    }
                } else {
                    "{row.item_name}"
                }
            }
        }
    }
}
