//! Budget Form Component
//!
//! Inline form for recording a new budget entry. On success the
//! authoritative list and KPIs are pulled back in through the shared
//! resources rather than patched locally.

use leptos::*;

use crate::api;
use crate::state::{BudgetResources, UiState};

/// Budget entry creation form
#[component]
pub fn BudgetForm(
    /// Invoked after a successful save
    #[prop(into)]
    on_saved: Callback<()>,
) -> impl IntoView {
    let resources = use_context::<BudgetResources>().expect("BudgetResources not found");
    let ui = use_context::<UiState>().expect("UiState not found");

    let (budget_no, set_budget_no) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entry = match validate(&budget_no.get(), &description.get(), &amount.get(), &date.get())
        {
            Ok(entry) => entry,
            Err(reason) => {
                ui.show_error(reason);
                return;
            }
        };

        set_submitting.set(true);

        let resources = resources.clone();
        spawn_local(async move {
            match api::create_entry(&entry).await {
                Ok(created) => {
                    ui.show_success(&format!("Saved {}", created.budget_no));

                    set_budget_no.set(String::new());
                    set_description.set(String::new());
                    set_amount.set(String::new());
                    set_date.set(String::new());

                    // Refresh failures are non-fatal here, same as at mount.
                    let (entries, kpis) = resources.refresh_all(ui).await;
                    if let Err(e) = entries {
                        web_sys::console::error_1(
                            &format!("Failed to refresh entries: {}", e).into(),
                        );
                    }
                    if let Err(e) = kpis {
                        web_sys::console::error_1(
                            &format!("Failed to refresh KPIs: {}", e).into(),
                        );
                    }

                    on_saved.call(());
                }
                Err(e) => {
                    ui.show_error(e.message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Budget No."</label>
                    <input
                        type="text"
                        placeholder="BGT-2025-014"
                        prop:value=move || budget_no.get()
                        on:input=move |ev| set_budget_no.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                <input
                    type="text"
                    placeholder="What is this budget for?"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Amount (USD)"</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Saving..." } else { "Save Entry" }}
            </button>
        </form>
    }
}

/// Validate raw form input into a request body. Returns a user-facing
/// reason when the input is rejected.
fn validate(
    budget_no: &str,
    description: &str,
    amount: &str,
    date: &str,
) -> Result<api::NewEntry, &'static str> {
    let budget_no = budget_no.trim();
    let description = description.trim();
    let date = date.trim();

    if budget_no.is_empty() || description.is_empty() || date.is_empty() {
        return Err("All fields are required");
    }

    let amount_usd: f64 = amount
        .trim()
        .parse()
        .map_err(|_| "Amount must be a number")?;
    if !amount_usd.is_finite() || amount_usd < 0.0 {
        return Err("Amount must be zero or more");
    }

    Ok(api::NewEntry {
        budget_no: budget_no.to_string(),
        description: description.to_string(),
        amount_usd,
        date: date.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_input() {
        let entry = validate("BGT-2025-001", "Team offsite", "1250.50", "2025-03-05").unwrap();
        assert_eq!(entry.budget_no, "BGT-2025-001");
        assert_eq!(entry.description, "Team offsite");
        assert_eq!(entry.amount_usd, 1250.5);
        assert_eq!(entry.date, "2025-03-05");
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let entry = validate("  BGT-1  ", " lunch ", "10", "2025-01-02").unwrap();
        assert_eq!(entry.budget_no, "BGT-1");
        assert_eq!(entry.description, "lunch");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(validate("", "desc", "10", "2025-03-05").is_err());
        assert!(validate("BGT-1", "   ", "10", "2025-03-05").is_err());
        assert!(validate("BGT-1", "desc", "10", "").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_amounts() {
        assert!(validate("BGT-1", "desc", "ten dollars", "2025-03-05").is_err());
        assert!(validate("BGT-1", "desc", "-5", "2025-03-05").is_err());
        assert!(validate("BGT-1", "desc", "NaN", "2025-03-05").is_err());
        assert!(validate("BGT-1", "desc", "", "2025-03-05").is_err());
    }
}
