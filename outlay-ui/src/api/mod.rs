//! API client module
//!
//! HTTP communication with the Outlay backend; the fetch collaborators
//! behind the observable resources.

pub mod client;

pub use client::{create_entry, fetch_entries, fetch_kpis, NewEntry};
