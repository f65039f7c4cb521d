//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod budget_form;
pub mod entries_table;
pub mod kpi_card;
pub mod nav;
pub mod toast;

pub use budget_form::BudgetForm;
pub use entries_table::EntriesTable;
pub use kpi_card::KpiCard;
pub use nav::Nav;
pub use toast::Toast;
