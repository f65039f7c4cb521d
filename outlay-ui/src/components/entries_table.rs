//! Entries Table Component
//!
//! The paginated budget history. Pagination is a client-side slice of the
//! cached rows; the page-size selector re-slices without refetching.

use leptos::*;

use outlay::format::{format_entry_date, format_row_index, format_usd, PLACEHOLDER};
use outlay::model::BudgetEntry;
use outlay::pagination::{visible_rows, PerPage};

/// Paginated history table
#[component]
pub fn EntriesTable(
    /// Cached rows, rendered in resource order
    #[prop(into)]
    entries: Signal<Vec<BudgetEntry>>,
    /// Page-size selection owned by the page
    per_page: RwSignal<PerPage>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-end space-x-2">
                <label class="text-sm text-gray-400">"Rows"</label>
                <select
                    on:change=move |ev| {
                        let choice = event_target_value(&ev)
                            .parse::<usize>()
                            .ok()
                            .and_then(PerPage::from_rows)
                            .unwrap_or_default();
                        per_page.set(choice);
                    }
                    prop:value=move || per_page.get().rows().to_string()
                    class="bg-gray-700 text-white rounded-lg px-3 py-2 border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {PerPage::CHOICES
                        .iter()
                        .map(|choice| {
                            view! {
                                <option value=choice.rows().to_string()>
                                    {choice.rows().to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <table class="w-full text-left">
                <thead>
                    <tr class="text-sm text-gray-400 border-b border-gray-700">
                        <th class="py-2 pr-4">"#"</th>
                        <th class="py-2 pr-4">"Budget No."</th>
                        <th class="py-2 pr-4">"Description"</th>
                        <th class="py-2 pr-4">"Date"</th>
                        <th class="py-2 text-right">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = entries.get();
                        let visible = visible_rows(&rows, per_page.get());

                        if visible.is_empty() {
                            // No data yet (or never): a placeholder dash,
                            // never an error state.
                            return view! {
                                <tr>
                                    <td colspan="5" class="py-6 text-center text-gray-500">
                                        {PLACEHOLDER}
                                    </td>
                                </tr>
                            }
                            .into_view();
                        }

                        visible
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                // Row numbers are positional, not id-derived.
                                let index = format_row_index(i + 1);
                                view! {
                                    <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-700 transition-colors">
                                        <td class="py-3 pr-4 text-gray-400">{index}</td>
                                        <td class="py-3 pr-4 font-medium">{entry.budget_no.clone()}</td>
                                        <td class="py-3 pr-4 text-gray-300">{entry.description.clone()}</td>
                                        <td class="py-3 pr-4 text-gray-400">{format_entry_date(&entry.date)}</td>
                                        <td class="py-3 text-right font-semibold">{format_usd(entry.amount_usd)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
