//! App Root Component
//!
//! Single-page dashboard layout with global providers.

use leptos::*;

use crate::components::{
    ChartSection, CompanyInfo, Debate, Documents, PeerComparison, Statements, Toast,
};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide shared state to all components
    provide_global_state();

    view! {
        <div class="min-h-screen bg-white text-gray-900 flex flex-col">
            // Header bar
            <header class="bg-white border-b border-gray-200">
                <div class="container mx-auto px-4 h-16 flex items-center">
                    <span class="text-xl font-bold tracking-wide">"Apple Dashboard Prototype"</span>
                </div>
            </header>

            // Dashboard sections
            <main class="flex-1 container mx-auto px-4 py-6 space-y-6">
                <div class="grid lg:grid-cols-12 gap-6 items-start">
                    <div class="lg:col-span-7 space-y-6">
                        <CompanyInfo />
                        <Statements />
                    </div>
                    <div class="lg:col-span-5">
                        <Debate />
                    </div>
                </div>

                <ChartSection />
                <PeerComparison />
                <Documents />
            </main>

            // Toast notifications
            <Toast />
        </div>
    }
}
