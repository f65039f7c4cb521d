//! Outlay Dashboard
//!
//! Budget-tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Budget KPI cards hydrated from shared observable resources
//! - Paginated history of budget entries
//! - Inline entry creation with toast feedback
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Page data flows through `outlay`'s observable resources, which wrap the
//! REST client in this crate; components subscribe to snapshots and mirror
//! them into Leptos signals.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
