//! Company Info Card
//!
//! Static company summary with valuation snapshot and the computed
//! upside against the average sell-side target.

use leptos::*;

const SHARE_PRICE: f64 = 195.50;
const TARGET_PRICE: f64 = 210.00;

/// Company summary card
#[component]
pub fn CompanyInfo() -> impl IntoView {
    let upside = (TARGET_PRICE - SHARE_PRICE) / SHARE_PRICE * 100.0;
    let upside_text = if upside >= 0.0 {
        format!("+{:.1}%", upside)
    } else {
        format!("{:.1}%", upside)
    };
    let upside_class = if upside >= 0.0 {
        "text-green-600"
    } else {
        "text-red-600"
    };

    let last_update = chrono::Local::now().format("%b %d, %Y").to_string();

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            // Header with name and tags
            <div class="flex items-center mb-4">
                <span class="text-3xl mr-3">"🍎"</span>
                <div>
                    <h2 class="text-lg font-bold text-gray-900">"Apple Inc."</h2>
                    <div class="flex items-center space-x-2 mt-1">
                        <span class="px-2 py-0.5 rounded bg-blue-600 text-white text-xs font-medium">"AAPL"</span>
                        <span class="px-2 py-0.5 rounded bg-gray-100 border border-gray-200 text-gray-700 text-xs font-medium">"Technology"</span>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-x-6 gap-y-2">
                // Price and trading fields
                <div class="space-y-2">
                    <InfoField label="Share Price" value="$195.50" />
                    <InfoField label="Market Cap" value="$2.8T" />
                    <InfoField label="ADV" value="$10.2B" />
                    <InfoField label="Shareholder Yield (Dividends + Buybacks)" value="2.3%" />
                    <div>
                        <div class="text-xs text-gray-500 font-medium">"Avg. Sell-side Target"</div>
                        <div class="flex items-center space-x-2">
                            <span class="text-sm font-semibold text-gray-800">
                                "$210/shr. (78% of Sell-side buys)"
                            </span>
                            <span class=format!("text-sm font-semibold {}", upside_class)>
                                {upside_text}
                            </span>
                        </div>
                    </div>
                    <InfoField label="Sector" value="Technology" />
                </div>

                // Valuation multiples
                <div class="space-y-2">
                    <InfoField label="NTM P/E" value="28.1" />
                    <InfoField label="NTM EV/Sales" value="7.2x" />
                    <InfoField label="NTM EV/EBITDA" value="21.5x" />
                    <InfoField label="LTM ROE" value="148%" />
                    <div>
                        <div class="text-xs text-gray-500 font-medium">"Operating Margin"</div>
                        <div class="text-sm font-semibold text-gray-800">
                            "30% "
                            <span class="text-gray-500 font-normal">"(avg 29% last 5y)"</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="text-xs text-gray-500 text-right mt-3">
                {format!("Last update: {}", last_update)}
            </div>
        </div>
    }
}

#[component]
fn InfoField(
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="text-xs text-gray-500 font-medium">{label}</div>
            <div class="text-sm font-semibold text-gray-800">{value}</div>
        </div>
    }
}
