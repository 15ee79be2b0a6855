//! Snackbar Component
//!
//! Transient confirmation shown after the clipboard export, styled like the
//! dashboard cards.

use leptos::*;

use crate::state::global::GlobalState;

/// Snackbar container; renders the shared success message while one is set
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            {move || {
                state.success.get().map(|message| view! {
                    <div class="flex items-center space-x-2 bg-white border border-gray-200
                                border-l-4 border-l-green-600 rounded-lg shadow-md px-4 py-3">
                        <span class="text-green-600 font-bold">"✓"</span>
                        <span class="text-sm font-medium text-gray-800">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
