//! Equity Research Dashboard
//!
//! Single-page financial dashboard prototype built with Leptos (WASM).
//!
//! # Features
//!
//! - Mock company summary and financial statements with clipboard export
//! - Interactive multi-axis weekly chart with customizable metric bindings
//! - Editable peer comparison table with dynamic columns and rows
//! - Tabbed news and document lists
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is hardcoded in component source; there is no
//! backend and no persistence.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
