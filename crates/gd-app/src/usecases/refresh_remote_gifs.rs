use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use gd_core::gif::stamp;
use gd_core::ports::{CatalogPort, IdentityPort};
use gd_core::Provenance;

use super::internal::RequestSequence;
use crate::state::SharedPickerState;

/// Error shown when the catalog fails without saying why.
pub const DEFAULT_LIST_ERROR: &str = "failed to load GIF list";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    Refreshed { count: usize },
    Failed { message: String },
    /// A newer refresh started while this one was in flight.
    Superseded,
}

/// Replaces the remote group with the catalog's current list.
///
/// 刷新远程 GIF 列表。失败时保留旧数据并记录错误信息。
pub struct RefreshRemoteGifs {
    catalog: Arc<dyn CatalogPort>,
    identity: Arc<dyn IdentityPort>,
    state: SharedPickerState,
    sequence: RequestSequence,
}

impl RefreshRemoteGifs {
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

    #[tracing::instrument(name = "usecase.refresh_remote_gifs.execute", skip(self))]
    pub async fn execute(&self) -> RefreshOutcome {
        let ticket = self.sequence.issue();
        {
            let mut state = self.state.lock().await;
            state.status.loading = true;
            state.status.error = None;
        }

        let user = self.identity.current_user();
        let result = self.catalog.list(user.as_ref()).await;

        let mut state = self.state.lock().await;
        if !self.sequence.is_latest(ticket) {
            debug!(ticket, "Discarding superseded GIF list response");
            return RefreshOutcome::Superseded;
        }
        state.status.loading = false;

        let message = result.message_or(DEFAULT_LIST_ERROR);
        match result.accepted() {
            Some(entries) => {
                let count = entries.len();
                state.remote = stamp(entries, Provenance::Remote);
                state.status.error = None;
                info!(count, "Loaded remote GIF list");
                RefreshOutcome::Refreshed { count }
            }
            None => {
                warn!(error = %message, "Failed to load remote GIF list, keeping previous entries");
                state.status.error = Some(message.clone());
                RefreshOutcome::Failed { message }
            }
        }
    }
}
