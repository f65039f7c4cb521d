//! Toast Notification Component
//!
//! Shows the transient success and error messages from [`UiState`].

use leptos::*;

use crate::state::UiState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || ui.success.get().map(|msg| toast_card("✓", "bg-green-600", msg))}
            {move || ui.error.get().map(|msg| toast_card("✕", "bg-red-600", msg))}
        </div>
    }
}

/// One toast card
fn toast_card(icon: &'static str, bg_class: &'static str, message: String) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
