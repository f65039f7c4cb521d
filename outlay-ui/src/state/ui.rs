//! Transient UI state
//!
//! Toast messages and the last-refresh marker, shared via Leptos context.

use leptos::*;

/// UI state provided to all components
#[derive(Clone, Copy)]
pub struct UiState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// When page data last refreshed successfully (unix millis)
    pub last_refresh: RwSignal<Option<i64>>,
}

impl UiState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Record a completed refresh for the footer
    pub fn mark_refreshed(&self) {
        self.last_refresh.set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

/// Provide UI state to the component tree
pub fn provide_ui_state() {
    provide_context(UiState {
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        last_refresh: create_rw_signal(None),
    });
}
