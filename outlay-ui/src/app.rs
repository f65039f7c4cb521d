//! App Root Component
//!
//! Main application component with routing and global providers; the
//! composition root where the budget resources are constructed.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::BudgetPage;
use crate::state::{provide_budget_resources, provide_ui_state, UiState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Construct the resource singletons and shared UI state once for the
    // whole session; everything below reads them from context.
    provide_budget_resources();
    provide_ui_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=BudgetPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing when page data last refreshed
#[component]
fn Footer() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-gray-500">"Outlay · personal budget intelligence"</span>

                <span class="text-gray-400">
                    {move || {
                        ui.last_refresh
                            .get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|ts| {
                                format!(
                                    "Last refreshed {}",
                                    ts.with_timezone(&chrono::Local).format("%H:%M:%S")
                                )
                            })
                            .unwrap_or_else(|| "Not refreshed yet".to_string())
                    }}
                </span>
            </div>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🧾"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the budget"
            </A>
        </div>
    }
}
