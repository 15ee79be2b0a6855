//! Bull vs Bear Card
//!
//! Static argument lists with an explainer dialog for the AI-generated
//! badge.

use leptos::*;

use crate::components::dialog::Dialog;

const BULL_ARGUMENTS: [&str; 5] = [
    "Apple's premium valuation (NTM P/E 28x vs. 5yr avg 24x) reflects the strength and resilience of its ecosystem, with high customer loyalty and recurring revenue streams.",
    "Services and wearables are driving margin expansion and diversifying revenue beyond hardware, supporting long-term growth.",
    "$100B+ annual FCF enables significant buybacks and dividend growth, returning value to shareholders.",
    "iPhone, Mac, and Services segments continue to outperform peers in both growth and profitability.",
    "Net cash position remains strong, supporting flexibility for M&A and continued innovation.",
];

const BEAR_ARGUMENTS: [&str; 5] = [
    "Valuation multiples (NTM P/E 28x) are 17% above 5yr avg (24x), raising risk of mean reversion if growth disappoints.",
    "Revenue growth has slowed to low single digits, with 2023 revenue -2.8% y/y, and consensus expects only modest acceleration.",
    "China exposure and regulatory risks could pressure both top-line and margins, especially in Services.",
    "Competition in wearables and services is intensifying, potentially capping further margin expansion.",
    "Buyback pace may slow as net cash position declines and interest rates remain elevated.",
];

/// Bull vs bear debate card component
#[component]
pub fn Debate() -> impl IntoView {
    let explainer_open = create_rw_signal(false);

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            <div class="flex items-center mb-4">
                <h2 class="text-lg font-bold text-gray-900 flex-1">"Bull vs Bear Debate"</h2>
                <button
                    on:click=move |_| explainer_open.set(true)
                    class="px-3 py-1 rounded-full border border-blue-600 text-blue-600 text-xs font-semibold hover:bg-blue-50 transition-colors"
                >
                    "🧠 AI-Generated"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <ArgumentList
                    title="Bull Case"
                    icon="📈"
                    accent="border-green-500"
                    title_class="text-green-700"
                    arguments=&BULL_ARGUMENTS
                />
                <ArgumentList
                    title="Bear Case"
                    icon="📉"
                    accent="border-red-500"
                    title_class="text-red-700"
                    arguments=&BEAR_ARGUMENTS
                />
            </div>

            <div class="mt-4 p-3 bg-gray-50 rounded-lg text-sm text-gray-600">
                "ℹ This analysis is generated using AI algorithms that analyze financial data, \
                 market trends, and company fundamentals. Click the AI-Generated badge above \
                 for more information."
            </div>

            <Dialog
                title="AI-Generated Analysis"
                open=explainer_open
                on_close=Callback::new(move |_| explainer_open.set(false))
            >
                <p class="text-sm text-gray-700 mb-3">
                    "This bull vs bear analysis is generated using advanced artificial \
                     intelligence algorithms that process:"
                </p>
                <ul class="list-disc pl-5 text-sm text-gray-700 space-y-1">
                    <li>"Historical financial performance data"</li>
                    <li>"Industry trends and competitive analysis"</li>
                    <li>"Market sentiment and analyst reports"</li>
                    <li>"Economic indicators and macro factors"</li>
                    <li>"Company-specific news and developments"</li>
                </ul>
                <p class="text-xs text-gray-500 mt-3">
                    "The analysis is updated regularly and should be used as one of many \
                     tools in your investment decision-making process."
                </p>
                <div class="flex justify-end mt-4">
                    <button
                        on:click=move |_| explainer_open.set(false)
                        class="px-4 py-2 rounded-lg text-sm text-blue-600 hover:bg-blue-50 transition-colors"
                    >
                        "Close"
                    </button>
                </div>
            </Dialog>
        </div>
    }
}

#[component]
fn ArgumentList(
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    title_class: &'static str,
    arguments: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border border-gray-200 border-l-4 {} p-4", accent)>
            <div class="flex items-center mb-2">
                <span class="text-xl mr-2">{icon}</span>
                <span class=format!("font-bold {}", title_class)>{title}</span>
            </div>
            <ul class="list-disc pl-5 space-y-1">
                {arguments.iter().map(|argument| view! {
                    <li class="text-sm text-gray-700 leading-relaxed">{*argument}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}
