//! Budget Page
//!
//! The dashboard view: KPI cards, the new-entry call-to-action, and the
//! paginated history table. The page subscribes to both budget resources on
//! mount, kicks off a refresh, and tears the subscriptions down on unmount.

use leptos::*;

use outlay::format::{format_percent_opt, format_usd_opt};
use outlay::model::{BudgetEntry, BudgetKpis};
use outlay::pagination::PerPage;

use crate::components::{BudgetForm, EntriesTable, KpiCard};
use crate::state::{BudgetResources, UiState};

/// Budget dashboard page component
#[component]
pub fn BudgetPage() -> impl IntoView {
    let resources = use_context::<BudgetResources>().expect("BudgetResources not found");
    let ui = use_context::<UiState>().expect("UiState not found");

    let (entries, set_entries) = create_signal(Vec::<BudgetEntry>::new());
    let (kpis, set_kpis) = create_signal(None::<BudgetKpis>);
    let per_page = create_rw_signal(PerPage::default());
    let (show_form, set_show_form) = create_signal(false);

    // Mirror resource snapshots into page signals. Rows and KPIs are
    // replaced verbatim whenever a snapshot carries data, so a failed
    // refresh leaves the last good values on screen.
    let entries_sub = resources.entries.subscribe(move |snapshot| {
        if let Some(list) = &snapshot.data {
            set_entries.set(list.items.clone());
        }
    });
    let kpis_sub = resources.kpis.subscribe(move |snapshot| {
        if let Some(k) = &snapshot.data {
            set_kpis.set(Some(k.clone()));
        }
    });
    on_cleanup(move || {
        entries_sub.dispose();
        kpis_sub.dispose();
    });

    // Hydrate on mount. Refresh failures only reach the console; the page
    // keeps whatever cached data the resources already hold.
    let mount_resources = resources.clone();
    create_effect(move |_| {
        let resources = mount_resources.clone();
        spawn_local(async move {
            let (entries, kpis) = resources.refresh_all(ui).await;
            if let Err(e) = entries {
                web_sys::console::error_1(&format!("Failed to refresh entries: {}", e).into());
            }
            if let Err(e) = kpis {
                web_sys::console::error_1(&format!("Failed to refresh KPIs: {}", e).into());
            }
        });
    });

    let total = Signal::derive(move || format_usd_opt(kpis.get().map(|k| k.total_annual_usd)));
    let used = Signal::derive(move || format_usd_opt(kpis.get().map(|k| k.used_usd)));
    let balance = Signal::derive(move || format_usd_opt(kpis.get().map(|k| k.balance_usd)));
    let percent = Signal::derive(move || format_percent_opt(kpis.get().map(|k| k.percent_used)));

    view! {
        <div class="space-y-8">
            // Page header with the creation call-to-action
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Budget"</h1>
                    <p class="text-gray-400 mt-1">"Your spending plan at a glance"</p>
                </div>

                <button
                    on:click=move |_| set_show_form.update(|v| *v = !*v)
                    class="px-5 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    {move || if show_form.get() { "Close" } else { "+ New Entry" }}
                </button>
            </div>

            // KPI summary row
            <section>
                <h2 class="text-lg font-semibold mb-4">"Plan Snapshot"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <KpiCard label="Total Annual Budget" icon="🏦" value=total />
                    <KpiCard label="Used" icon="💸" value=used />
                    <KpiCard label="Balance" icon="🪙" value=balance />
                    <KpiCard label="Used %" icon="📊" value=percent />
                </div>
            </section>

            // Creation form, toggled by the header button
            {move || {
                show_form.get().then(|| {
                    view! {
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"New Budget Entry"</h2>
                            <BudgetForm on_saved=move |_| set_show_form.set(false) />
                        </section>
                    }
                })
            }}

            // History table
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Budget History"</h2>
                    <span class="text-sm text-gray-400">
                        {move || format!("{} entries", entries.get().len())}
                    </span>
                </div>

                <EntriesTable entries=entries per_page=per_page />
            </section>
        </div>
    }
}
