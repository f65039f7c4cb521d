//! Budget resources
//!
//! The two observable resources behind the dashboard, constructed once at
//! the composition root. Every component that reads them from context gets
//! the same underlying cells, so concurrent refreshes coalesce app-wide.

use leptos::*;

use outlay::model::{BudgetKpis, EntryList};
use outlay::store::ObservableResource;
use outlay::FetchResult;

use super::ui::UiState;
use crate::api;

/// The page's resource singletons. Cloning shares the underlying cells.
#[derive(Clone)]
pub struct BudgetResources {
    /// Budget entry history, in the order the backend returns it
    pub entries: ObservableResource<EntryList>,
    /// Derived KPI figures, computed upstream
    pub kpis: ObservableResource<BudgetKpis>,
}

impl BudgetResources {
    /// Wire both resources to the REST client
    pub fn new() -> Self {
        Self {
            entries: ObservableResource::new("budget_entries", api::fetch_entries),
            kpis: ObservableResource::new("budget_kpis", api::fetch_kpis),
        }
    }

    /// Refresh both resources, advancing the footer's last-refresh marker
    /// after each success. Either resource landing counts as a refresh, so
    /// a KPI failure never hides a successful entries pull. Failures are
    /// handed back for the caller to report.
    pub async fn refresh_all(&self, ui: UiState) -> (FetchResult<()>, FetchResult<()>) {
        let entries = self.entries.refresh().await;
        if entries.is_ok() {
            ui.mark_refreshed();
        }

        let kpis = self.kpis.refresh().await;
        if kpis.is_ok() {
            ui.mark_refreshed();
        }

        (entries, kpis)
    }
}

/// Construct the resource singletons and provide them to the component tree
pub fn provide_budget_resources() {
    provide_context(BudgetResources::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures::executor::block_on;
    use outlay::FetchError;

    fn scripted(
        entries: FetchResult<EntryList>,
        kpis: FetchResult<BudgetKpis>,
    ) -> BudgetResources {
        BudgetResources {
            entries: ObservableResource::new("entries", move || {
                let next = entries.clone();
                async move { next }
            }),
            kpis: ObservableResource::new("kpis", move || {
                let next = kpis.clone();
                async move { next }
            }),
        }
    }

    fn test_ui() -> UiState {
        UiState {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
            last_refresh: create_rw_signal(None),
        }
    }

    #[test]
    fn test_refresh_all_marks_footer_when_only_entries_succeed() {
        let runtime = create_runtime();
        let ui = test_ui();
        let resources = scripted(
            Ok(EntryList::default()),
            Err(FetchError::new("backend down")),
        );

        let (entries, kpis) = block_on(resources.refresh_all(ui));

        assert!(entries.is_ok());
        assert_eq!(kpis, Err(FetchError::new("backend down")));
        assert!(ui.last_refresh.get_untracked().is_some());
        runtime.dispose();
    }

    #[test]
    fn test_refresh_all_leaves_footer_unset_when_both_fail() {
        let runtime = create_runtime();
        let ui = test_ui();
        let resources = scripted(
            Err(FetchError::new("backend down")),
            Err(FetchError::new("backend down")),
        );

        let (entries, kpis) = block_on(resources.refresh_all(ui));

        assert!(entries.is_err());
        assert!(kpis.is_err());
        assert!(ui.last_refresh.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_refresh_all_returns_both_outcomes() {
        let runtime = create_runtime();
        let ui = test_ui();
        let resources = scripted(
            Ok(EntryList::default()),
            Ok(BudgetKpis {
                total_annual_usd: 120_000.0,
                used_usd: 45_000.0,
                balance_usd: 75_000.0,
                percent_used: 37.5,
            }),
        );

        let (entries, kpis) = block_on(resources.refresh_all(ui));

        assert!(entries.is_ok());
        assert!(kpis.is_ok());
        assert!(ui.last_refresh.get_untracked().is_some());
        runtime.dispose();
    }
}
