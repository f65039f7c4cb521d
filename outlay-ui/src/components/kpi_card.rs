//! KPI Card Component
//!
//! Displays a single budget figure, formatted upstream of the card.

use leptos::*;

/// KPI card component
#[component]
pub fn KpiCard(
    /// Card title
    label: &'static str,
    /// Decorative glyph shown next to the label
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Formatted value; the placeholder dash until data arrives
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {icon.map(|glyph| view! { <span class="text-lg">{glyph}</span> })}
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
