use std::sync::Arc;

use tracing::{debug, info, warn};

use gd_core::gif::search::{displayable, is_blank_query, local_fallback, merge_search_results};
use gd_core::gif::stamp;
use gd_core::ports::{CatalogPort, IdentityPort};
use gd_core::{GifEntry, Provenance};

use super::internal::RequestSequence;
use crate::state::SharedPickerState;

/// The search cascade: decides which entries are visible for the current query.
///
/// - Blank query: every aggregated entry not marked invalid.
/// - Remote search succeeds: remote results, then matching local and caller
///   entries.
/// - Remote search fails: the aggregated collection filtered client-side.
///
/// 搜索级联：远程优先，失败时本地过滤。
pub struct ResolveVisibleGifs {
    catalog: Arc<dyn CatalogPort>,
    identity: Arc<dyn IdentityPort>,
    state: SharedPickerState,
    sequence: RequestSequence,
}

impl ResolveVisibleGifs {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        identity: Arc<dyn IdentityPort>,
        state: SharedPickerState,
    ) -> Self {
        Self {
            catalog,
            identity,
            state,
            sequence: RequestSequence::new(),
        }
    }

    /// Recomputes `visible` and returns it.
    ///
    /// `None` when a later run started before this one finished; the later
    /// run owns `visible`.
    #[tracing::instrument(name = "usecase.resolve_visible_gifs.execute", skip(self))]
    pub async fn execute(&self) -> Option<Vec<GifEntry>> {
        let ticket = self.sequence.issue();

        let query = {
            let mut state = self.state.lock().await;
            if is_blank_query(&state.query) {
                let visible = displayable(&state.aggregated());
                state.visible = visible.clone();
                return Some(visible);
            }
            state.query.clone()
        };

        let user = self.identity.current_user();
        let result = self.catalog.search(&query, user.as_ref()).await;

        let mut state = self.state.lock().await;
        if !self.sequence.is_latest(ticket) {
            debug!(ticket, %query, "Discarding superseded search response");
            return None;
        }

        let visible = match result.accepted() {
            Some(results) => {
                let remote_results = stamp(results, Provenance::Remote);
                info!(%query, remote = remote_results.len(), "Remote search succeeded");
                merge_search_results(&remote_results, &state.local, &state.caller, &query)
            }
            None => {
                warn!(%query, "Remote search failed, filtering locally");
                local_fallback(&state.aggregated(), &query)
            }
        };

        state.visible = visible.clone();
        Some(visible)
    }
}
