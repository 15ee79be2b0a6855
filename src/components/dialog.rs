//! Modal Dialog Component
//!
//! Shared overlay dialog used by the chart customizer, the peer table
//! editors, and the estimate popover.

use leptos::*;

/// Modal dialog; renders nothing while closed. Clicking the backdrop closes
/// it, clicks inside the panel do not.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                let title = title.clone();
                view! {
                    <div
                        class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-40"
                        on:click=move |_| on_close.call(())
                    >
                        <div
                            class="bg-white rounded-xl shadow-xl w-full max-w-md mx-4 p-6"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <h3 class="text-lg font-semibold text-gray-900 mb-4">{title}</h3>
                            {children()}
                        </div>
                    </div>
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
