//! Shared Application State
//!
//! Reactive state provided through context. Each dashboard section owns its
//! view state exclusively; the only cross-section concern is the transient
//! success toast shown after a clipboard copy. Boundary failures are logged
//! to the console, not toasted.

use leptos::*;

/// State shared by all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide shared state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(2000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}
