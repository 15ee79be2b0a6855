//! Peer Comparison Card
//!
//! Editable peer table: user-added columns and rows, per-cell type-aware
//! formatting, ticker suffixes on known names, and a default-column
//! snapshot.

use leptos::*;

use crate::components::dialog::Dialog;
use crate::state::peers::{self, ColumnKind, PeerTable, NAME_COLUMN};

/// Peer comparison table component
#[component]
pub fn PeerComparison() -> impl IntoView {
    let table = create_rw_signal(PeerTable::seed());

    let add_column_open = create_rw_signal(false);
    let add_peer_open = create_rw_signal(false);

    // Pending add-column form fields
    let (new_col_id, set_new_col_id) = create_signal(String::new());
    let (new_col_label, set_new_col_label) = create_signal(String::new());
    let (new_col_kind, set_new_col_kind) = create_signal("text".to_string());

    // Pending add-peer form field
    let (new_peer_name, set_new_peer_name) = create_signal(String::new());

    let on_add_column = move |_| {
        let id = new_col_id.get();
        let label = new_col_label.get();
        let kind = ColumnKind::from_key(&new_col_kind.get()).unwrap_or(ColumnKind::Text);

        let mut added = false;
        table.update(|t| added = t.add_column(&id, &label, kind));

        // Empty id or label leaves the dialog open with state untouched
        if added {
            set_new_col_id.set(String::new());
            set_new_col_label.set(String::new());
            set_new_col_kind.set("text".to_string());
            add_column_open.set(false);
        }
    };

    let on_add_peer = move |_| {
        let name = new_peer_name.get();

        let mut added = false;
        table.update(|t| added = t.add_row(&name));

        if added {
            set_new_peer_name.set(String::new());
            add_peer_open.set(false);
        }
    };

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-bold text-gray-900">"Peer Comparison"</h2>
                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| add_column_open.set(true)
                        class="px-3 py-1.5 rounded-lg border border-blue-600 text-blue-600 text-sm font-semibold hover:bg-blue-50 transition-colors"
                    >
                        "+ Add Column"
                    </button>
                    <button
                        on:click=move |_| add_peer_open.set(true)
                        class="px-3 py-1.5 rounded-lg border border-green-600 text-green-600 text-sm font-semibold hover:bg-green-50 transition-colors"
                    >
                        "+ Add Peer"
                    </button>
                    <button
                        on:click=move |_| table.update(|t| t.save_default_columns())
                        class="px-3 py-1.5 rounded-lg bg-indigo-700 text-white text-sm font-semibold hover:bg-indigo-800 transition-colors"
                    >
                        "Save as Default"
                    </button>
                </div>
            </div>

            <div class="overflow-x-auto rounded-lg border border-gray-200 max-h-96">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="bg-gray-100">
                            {move || {
                                table.get().columns().iter().map(|column| {
                                    let id = column.id.clone();
                                    let removable = id != NAME_COLUMN;
                                    view! {
                                        <th class="text-center font-bold text-gray-900 px-3 py-2 whitespace-nowrap">
                                            {column.label.clone()}
                                            {removable.then(|| {
                                                let id = id.clone();
                                                view! {
                                                    <button
                                                        on:click=move |_| table.update(|t| t.remove_column(&id))
                                                        class="ml-1 text-gray-400 hover:text-red-600"
                                                    >
                                                        "🗑"
                                                    </button>
                                                }
                                            })}
                                        </th>
                                    }
                                }).collect_view()
                            }}
                            <th class="text-center font-bold text-gray-900 px-3 py-2">"Delete?"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let current = table.get();
                            current.rows().iter().enumerate().map(|(index, row)| {
                                let cells = current.columns().iter().map(|column| {
                                    let raw = row.get(&column.id).map(String::as_str).unwrap_or("");
                                    if column.id == NAME_COLUMN {
                                        view! {
                                            <td class="text-center font-bold text-gray-900 px-3 py-1.5 whitespace-nowrap">
                                                {peers::display_name(raw)}
                                            </td>
                                        }
                                    } else {
                                        let class = if raw.is_empty() {
                                            "text-center text-gray-400 px-3 py-1.5"
                                        } else {
                                            "text-center text-gray-900 px-3 py-1.5"
                                        };
                                        view! {
                                            <td class=class>
                                                {peers::format_cell(raw, column.kind)}
                                            </td>
                                        }
                                    }
                                }).collect_view();

                                view! {
                                    <tr class="border-t border-gray-100 hover:bg-gray-50">
                                        {cells}
                                        <td class="text-center px-3 py-1.5">
                                            <button
                                                on:click=move |_| table.update(|t| t.remove_row(index))
                                                class="text-red-500 hover:text-red-700"
                                            >
                                                "🗑"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            // Add Column dialog
            <Dialog
                title="Add New Column"
                open=add_column_open
                on_close=Callback::new(move |_| add_column_open.set(false))
            >
                <div class="space-y-3">
                    <div>
                        <label class="block text-xs text-gray-500 font-medium mb-1">"Column ID"</label>
                        <input
                            type="text"
                            placeholder="e.g., revenue, margin"
                            prop:value=move || new_col_id.get()
                            on:input=move |ev| set_new_col_id.set(event_target_value(&ev))
                            class="w-full rounded-lg px-3 py-2 text-sm border border-gray-300 focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-xs text-gray-500 font-medium mb-1">"Column Label"</label>
                        <input
                            type="text"
                            placeholder="e.g., Revenue, Operating Margin"
                            prop:value=move || new_col_label.get()
                            on:input=move |ev| set_new_col_label.set(event_target_value(&ev))
                            class="w-full rounded-lg px-3 py-2 text-sm border border-gray-300 focus:border-blue-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-xs text-gray-500 font-medium mb-1">"Data Type"</label>
                        <select
                            on:change=move |ev| set_new_col_kind.set(event_target_value(&ev))
                            prop:value=move || new_col_kind.get()
                            class="w-full bg-white rounded-lg px-3 py-2 text-sm border border-gray-300 focus:border-blue-500 focus:outline-none"
                        >
                            {ColumnKind::ALL.into_iter().map(|kind| view! {
                                <option value=kind.key()>{kind.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>
                <div class="flex justify-end space-x-2 mt-4">
                    <button
                        on:click=move |_| add_column_open.set(false)
                        class="px-4 py-2 rounded-lg text-sm text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=on_add_column
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700 transition-colors"
                    >
                        "Add Column"
                    </button>
                </div>
            </Dialog>

            // Add Peer dialog
            <Dialog
                title="Add New Peer"
                open=add_peer_open
                on_close=Callback::new(move |_| add_peer_open.set(false))
            >
                <div>
                    <label class="block text-xs text-gray-500 font-medium mb-1">"Peer Name"</label>
                    <input
                        type="text"
                        placeholder="e.g., Amazon.com Inc."
                        prop:value=move || new_peer_name.get()
                        on:input=move |ev| set_new_peer_name.set(event_target_value(&ev))
                        class="w-full rounded-lg px-3 py-2 text-sm border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                </div>
                <div class="flex justify-end space-x-2 mt-4">
                    <button
                        on:click=move |_| add_peer_open.set(false)
                        class="px-4 py-2 rounded-lg text-sm text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=on_add_peer
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700 transition-colors"
                    >
                        "Add Peer"
                    </button>
                </div>
            </Dialog>
        </div>
    }
}
