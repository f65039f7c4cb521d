//! State Management
//!
//! Resource singletons and transient UI state, shared through Leptos
//! context.

pub mod resources;
pub mod ui;

pub use resources::{provide_budget_resources, BudgetResources};
pub use ui::{provide_ui_state, UiState};
