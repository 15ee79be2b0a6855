//! News / Documents Card
//!
//! Tabbed document lists with a selected-tab index. Links are placeholders.

use leptos::*;

struct DocumentItem {
    title: &'static str,
    date: &'static str,
    link: &'static str,
}

const DOC_TYPES: [&str; 4] = ["10-K", "Press Releases", "Transcripts", "News"];

fn documents_for(tab: usize) -> Vec<DocumentItem> {
    let entries: &[(&str, &str)] = match DOC_TYPES[tab] {
        "10-K" => &[
            ("Apple Inc. 2023 10-K", "2023-10-27"),
            ("Apple Inc. 2022 10-K", "2022-10-28"),
        ],
        "Press Releases" => &[
            ("Apple Reports Second Quarter Results", "2024-05-02"),
            ("Apple Unveils New MacBook Pro", "2024-04-15"),
        ],
        "Transcripts" => &[
            ("Q2 2024 Earnings Call Transcript", "2024-05-02"),
            ("Q1 2024 Earnings Call Transcript", "2024-02-01"),
        ],
        _ => &[
            ("Apple Stock Hits New High", "2024-05-10"),
            ("Apple Expands Services in Europe", "2024-05-08"),
        ],
    };

    entries
        .iter()
        .map(|&(title, date)| DocumentItem {
            title,
            date,
            link: "#",
        })
        .collect()
}

/// News and documents card component
#[component]
pub fn Documents() -> impl IntoView {
    let (selected, set_selected) = create_signal(0usize);

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            <h2 class="text-lg font-bold text-gray-900 mb-3">"News / Documents"</h2>

            // Tab bar
            <div class="flex space-x-1 border-b border-gray-200 mb-3">
                {DOC_TYPES.into_iter().enumerate().map(|(index, doc_type)| {
                    view! {
                        <button
                            on:click=move |_| set_selected.set(index)
                            class=move || {
                                let base = "px-4 py-2 text-sm font-medium transition-colors";
                                if selected.get() == index {
                                    format!("{} text-blue-600 border-b-2 border-blue-600", base)
                                } else {
                                    format!("{} text-gray-500 hover:text-gray-800", base)
                                }
                            }
                        >
                            {doc_type}
                        </button>
                    }
                }).collect_view()}
            </div>

            // Document list for the selected tab
            <ul class="space-y-2">
                {move || {
                    documents_for(selected.get()).into_iter().map(|item| view! {
                        <li>
                            <a href=item.link class="block rounded-lg px-2 py-1.5 hover:bg-gray-50">
                                <div class="text-sm font-medium text-gray-900">{item.title}</div>
                                <div class="text-xs text-gray-500">{item.date}</div>
                            </a>
                        </li>
                    }).collect_view()
                }}
            </ul>
        </div>
    }
}
