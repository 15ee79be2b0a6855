//! Financial Statements Card
//!
//! Mock statement grid with estimate highlighting, an estimate detail
//! popover, and tab-separated clipboard export ("Copy to Excel").

use leptos::*;
use wasm_bindgen_futures::JsFuture;

use crate::components::dialog::Dialog;
use crate::state::global::GlobalState;
use crate::state::statements::{self, Cell, ROWS, YEARS};

/// Fiscal years rendered as estimates (blue, clickable)
fn is_estimate(year_key: &str) -> bool {
    matches!(year_key, "2025E" | "2026E")
}

/// Financial statements card component
#[component]
pub fn Statements() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Formatted value shown in the estimate popover, None while closed
    let selected_estimate = create_rw_signal(None::<String>);

    let on_copy = move |_| {
        let text = statements::to_tsv();
        spawn_local(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => state.show_success("Copied to clipboard!"),
                Err(err) => web_sys::console::error_1(&err),
            }
        });
    };

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            <a
                href="#"
                class="inline-block mb-3 px-3 py-1 rounded-lg border border-blue-600 text-blue-600 text-sm font-semibold hover:bg-blue-50 transition-colors"
            >
                "Use our valuation tool"
            </a>

            <div class="flex items-center justify-between mb-2">
                <div>
                    <h2 class="text-lg font-bold text-gray-900">"Financial Statements"</h2>
                    <span class="text-xs text-gray-500">"FYE-Dec, $m"</span>
                </div>
                <button
                    on:click=on_copy
                    class="px-3 py-1.5 rounded-lg bg-gray-100 border border-gray-200 text-blue-600 text-sm font-semibold hover:bg-gray-200 transition-colors"
                >
                    "⧉ Copy to Excel"
                </button>
            </div>

            // Actual vs estimate legend
            <div class="flex items-center space-x-4 mb-2">
                <span class="flex items-center space-x-1">
                    <span class="w-3 h-3 bg-black rounded-full" />
                    <span class="text-xs text-gray-700">"Actual"</span>
                </span>
                <span class="flex items-center space-x-1">
                    <span class="w-3 h-3 bg-blue-600 rounded-full" />
                    <span class="text-xs text-blue-600">"Estimate"</span>
                </span>
            </div>

            <div class="overflow-x-auto rounded-lg border border-gray-200">
                <table class="w-full text-sm">
                    <thead>
                        <tr class="bg-gray-100">
                            <th class="text-left font-bold text-gray-900 px-3 py-2">"Metric"</th>
                            {YEARS.into_iter().map(|(_, label)| view! {
                                <th class="text-center font-bold text-gray-900 px-2 py-2">{label}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {ROWS.into_iter().map(|row| {
                            let ratio = statements::is_ratio_metric(row.metric);
                            let name_class = if ratio {
                                "text-left font-bold italic text-gray-800 pl-8 pr-3 py-1.5"
                            } else {
                                "text-left font-bold text-gray-800 px-3 py-1.5"
                            };

                            view! {
                                <tr class="border-t border-gray-100 hover:bg-gray-50">
                                    <td class=name_class>{row.metric}</td>
                                    {YEARS.into_iter().zip(row.cells).map(|((key, _), cell)| {
                                        view! {
                                            <StatementCell
                                                metric=row.metric
                                                year_key=key
                                                cell=cell
                                                selected=selected_estimate
                                            />
                                        }
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Estimate detail popover
            <Dialog
                title="Estimate"
                open=Signal::derive(move || selected_estimate.get().is_some())
                on_close=Callback::new(move |_| selected_estimate.set(None))
            >
                <p class="text-sm text-gray-700 mb-4">
                    "Value: "
                    <b>{move || selected_estimate.get().unwrap_or_default()}</b>
                </p>
                <button
                    on:click=move |_| selected_estimate.set(None)
                    class="px-3 py-1.5 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-100 transition-colors"
                >
                    "Chart estimates over time"
                </button>
            </Dialog>
        </div>
    }
}

#[component]
fn StatementCell(
    metric: &'static str,
    year_key: &'static str,
    cell: Cell,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let formatted = statements::format_value(cell, metric);
    let estimate = is_estimate(year_key);
    let ratio = statements::is_ratio_metric(metric);

    let mut class = String::from("text-center px-2 py-1.5");
    if estimate {
        class.push_str(" text-blue-600 cursor-pointer hover:bg-blue-50");
    } else {
        class.push_str(" text-gray-900");
    }
    if ratio {
        class.push_str(" italic");
    }

    let formatted_for_click = formatted.clone();
    let on_click = move |_| {
        if estimate {
            selected.set(Some(formatted_for_click.clone()));
        }
    };

    view! {
        <td class=class on:click=on_click>{formatted}</td>
    }
}

/// Write `text` to the host clipboard. The returned future resolves once the
/// browser accepts or rejects the write.
async fn copy_to_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
