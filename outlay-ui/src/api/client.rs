//! HTTP API Client
//!
//! Functions for communicating with the Outlay REST API. Each endpoint maps
//! transport and decode failures into [`FetchError`] so the observable
//! resources can carry them in their snapshots.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use outlay::model::{BudgetEntry, BudgetKpis, EntryList};
use outlay::store::{FetchError, FetchResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8084/api/v1";

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("outlay_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Request/Response Types ============

/// Body for creating a budget entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub budget_no: String,
    pub description: String,
    pub amount_usd: f64,
    pub date: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Decode the backend's error body, falling back to the HTTP status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    }
}

// ============ API Functions ============

/// Fetch the budget entry history
pub async fn fetch_entries() -> FetchResult<EntryList> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/budget/entries", api_base))
        .send()
        .await
        .map_err(|e| FetchError::new(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::new(error_message(response).await));
    }

    response
        .json::<EntryList>()
        .await
        .map_err(|e| FetchError::new(format!("Parse error: {}", e)))
}

/// Fetch the derived budget KPIs
pub async fn fetch_kpis() -> FetchResult<BudgetKpis> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/budget/kpis", api_base))
        .send()
        .await
        .map_err(|e| FetchError::new(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::new(error_message(response).await));
    }

    response
        .json::<BudgetKpis>()
        .await
        .map_err(|e| FetchError::new(format!("Parse error: {}", e)))
}

/// Create a budget entry, returning the stored record
pub async fn create_entry(entry: &NewEntry) -> FetchResult<BudgetEntry> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/budget/entries", api_base))
        .json(entry)
        .map_err(|e| FetchError::new(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| FetchError::new(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::new(error_message(response).await));
    }

    response
        .json::<BudgetEntry>()
        .await
        .map_err(|e| FetchError::new(format!("Parse error: {}", e)))
}
