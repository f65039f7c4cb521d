//! Pages
//!
//! Top-level page components for each route.

pub mod budget;

pub use budget::BudgetPage;
