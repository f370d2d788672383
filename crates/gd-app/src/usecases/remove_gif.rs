use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use gd_core::ports::{CatalogPort, IdentityPort};
use gd_core::{GifEntry, Provenance};

use super::internal::LocalStore;
use crate::state::SharedPickerState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemoveReport {
    Removed { from: Provenance },
    Failed { message: String },
}

/// Routes a removal to the group that owns the entry.
///
/// 根据条目来源（远程 / 本地）分派删除操作。
pub struct RemoveGif {
    catalog: Arc<dyn CatalogPort>,
    identity: Arc<dyn IdentityPort>,
    local_store: LocalStore,
    state: SharedPickerState,
}

impl RemoveGif {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        identity: Arc<dyn IdentityPort>,
        local_store: LocalStore,
        state: SharedPickerState,
    ) -> Self {
        Self {
            catalog,
            identity,
            local_store,
            state,
        }
    }

    #[tracing::instrument(
        name = "usecase.remove_gif.execute",
        skip(self, entry),
        fields(gif_id = %entry.id, provenance = %entry.provenance)
    )]
    pub async fn execute(&self, entry: &GifEntry) -> RemoveReport {
        match entry.provenance {
            Provenance::Remote => self.remove_remote(entry).await,
            Provenance::Local | Provenance::Caller => self.remove_local(entry).await,
        }
    }

    async fn remove_remote(&self, entry: &GifEntry) -> RemoveReport {
        let user = self.identity.current_user();
        let result = self.catalog.remove(&entry.id, user.as_ref()).await;

        if !result.succeeded {
            let message = result.message_or("failed to delete GIF");
            warn!(error = %message, "Catalog refused GIF removal");
            return RemoveReport::Failed { message };
        }

        self.state
            .lock()
            .await
            .remote
            .retain(|existing| existing.id != entry.id);
        info!("Removed GIF from catalog");
        RemoveReport::Removed {
            from: Provenance::Remote,
        }
    }

    async fn remove_local(&self, entry: &GifEntry) -> RemoveReport {
        if entry.provenance == Provenance::Caller {
            debug!("Caller entries are not stored locally; removing from local cache only");
        }

        self.local_store
            .update(|local| local.retain(|existing| existing.id != entry.id))
            .await;

        info!("Removed GIF from local upload cache");
        RemoveReport::Removed {
            from: Provenance::Local,
        }
    }
}
