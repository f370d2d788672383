//! # GifPicker / GIF 选择器
//!
//! The façade an embedding application drives. It owns the shared state,
//! sequences the use cases, and reruns the search cascade after every change
//! that can alter what is visible.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use gd_core::layout::grid_width;
use gd_core::ports::{
    FilterChangePort, InsertionSinkPort, RootMeasurePort, UploadCachePort, UploadObserverPort,
};
use gd_core::{GifEntry, GifId, Provenance, UploadFile};

use crate::deps::AppDeps;
use crate::state::{PickerState, RemoteStatus, SharedPickerState};
use crate::usecases::internal::LocalStore;
use crate::usecases::{
    PickGif, PickRejection, RefreshOutcome, RefreshRemoteGifs, RemoveGif, RemoveReport,
    ResolveVisibleGifs, UploadGifs, UploadReport,
};

/// Optional callbacks into the embedding application.
#[derive(Default)]
pub struct PickerHost {
    pub insertion_sink: Option<Arc<dyn InsertionSinkPort>>,
    pub upload_observer: Option<Arc<dyn UploadObserverPort>>,
    pub filter_change: Option<Arc<dyn FilterChangePort>>,
    pub root_measure: Option<Arc<dyn RootMeasurePort>>,
}

/// What the host should render right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PickerView {
    Loading,
    Empty {
        server_error: Option<String>,
    },
    Grid {
        entries: Vec<GifEntry>,
        server_error: Option<String>,
    },
}

pub struct GifPicker {
    state: SharedPickerState,
    upload_cache: Arc<dyn UploadCachePort>,
    refresh: RefreshRemoteGifs,
    resolve: ResolveVisibleGifs,
    upload: UploadGifs,
    pick: PickGif,
    remove: RemoveGif,
    filter_change: Option<Arc<dyn FilterChangePort>>,
    root_measure: Option<Arc<dyn RootMeasurePort>>,
}

impl GifPicker {
    /// `caller_entries` are the host's static GIFs; they are stamped `Caller`.
    pub fn new(deps: AppDeps, host: PickerHost, caller_entries: Vec<GifEntry>) -> Self {
        let state: SharedPickerState = Arc::new(Mutex::new(PickerState {
            caller: gd_core::gif::stamp(caller_entries, Provenance::Caller),
            ..Default::default()
        }));

        let AppDeps {
            catalog,
            transport,
            upload_cache,
            encoder,
            identity,
            clock,
        } = deps;
        let local_store = LocalStore::new(upload_cache.clone(), state.clone());

        Self {
            refresh: RefreshRemoteGifs::new(catalog.clone(), identity.clone(), state.clone()),
            resolve: ResolveVisibleGifs::new(catalog.clone(), identity.clone(), state.clone()),
            upload: UploadGifs::new(
                catalog.clone(),
                identity.clone(),
                encoder,
                local_store.clone(),
                clock,
                host.upload_observer,
                state.clone(),
            ),
            pick: PickGif::new(catalog.clone(), transport, host.insertion_sink, state.clone()),
            remove: RemoveGif::new(catalog, identity, local_store, state.clone()),
            upload_cache,
            state,
            filter_change: host.filter_change,
            root_measure: host.root_measure,
        }
    }

    /// Loads the upload cache (first call only), then refreshes.
    #[tracing::instrument(name = "picker.activate", skip(self))]
    pub async fn activate(&self) -> RefreshOutcome {
        if !self.state.lock().await.local_loaded {
            let stored = self.upload_cache.load().await;
            let mut state = self.state.lock().await;
            if !state.local_loaded {
                debug!(count = stored.len(), "Restored local uploads");
                let mut local = stored;
                local.append(&mut state.local);
                state.local = local;
                state.local_loaded = true;
            }
        }

        self.refresh().await
    }

    /// Reloads the remote list and reruns the search cascade.
    pub async fn refresh(&self) -> RefreshOutcome {
        let outcome = self.refresh.execute().await;
        self.resolve.execute().await;
        outcome
    }

    /// Host-facing filter setter: notifies the host, then searches.
    pub async fn update_filter(&self, text: &str) -> Option<Vec<GifEntry>> {
        if let Some(listener) = &self.filter_change {
            listener.filter_changed(text);
        }
        self.set_filter(text).await
    }

    /// Sets the query and reruns the cascade. `None` when a newer search
    /// superseded this one.
    pub async fn set_filter(&self, text: &str) -> Option<Vec<GifEntry>> {
        self.state.lock().await.query = text.to_string();
        self.resolve.execute().await
    }

    pub async fn set_caller_entries(&self, entries: Vec<GifEntry>) {
        self.state.lock().await.caller = gd_core::gif::stamp(entries, Provenance::Caller);
        self.resolve.execute().await;
    }

    pub async fn upload_files(&self, files: Vec<UploadFile>) -> Vec<UploadReport> {
        let reports = self.upload.execute(files).await;
        self.resolve.execute().await;
        reports
    }

    pub async fn pick(&self, entry: &GifEntry) -> Result<String, PickRejection> {
        self.pick.execute(entry).await
    }

    pub async fn remove(&self, entry: &GifEntry) -> RemoveReport {
        let report = self.remove.execute(entry).await;
        if matches!(report, RemoveReport::Removed { .. }) {
            self.resolve.execute().await;
        }
        report
    }

    /// Records an entry whose image failed from both render sources.
    pub async fn mark_render_failed(&self, id: GifId) {
        info!(gif_id = %id, "GIF failed to render");
        self.state.lock().await.render_failures.insert(id);
    }

    pub async fn view(&self) -> PickerView {
        let state = self.state.lock().await;
        if state.status.loading {
            return PickerView::Loading;
        }

        let server_error = state.status.error.clone();
        if state.visible.is_empty() {
            PickerView::Empty { server_error }
        } else {
            PickerView::Grid {
                entries: state.visible.clone(),
                server_error,
            }
        }
    }

    pub fn grid_width(&self) -> f64 {
        grid_width(self.root_measure.as_ref().and_then(|m| m.root_width()))
    }

    pub async fn find(&self, id: &GifId) -> Option<GifEntry> {
        self.state
            .lock()
            .await
            .aggregated()
            .into_iter()
            .find(|entry| &entry.id == id)
    }

    pub async fn aggregated(&self) -> Vec<GifEntry> {
        self.state.lock().await.aggregated()
    }

    pub async fn visible(&self) -> Vec<GifEntry> {
        self.state.lock().await.visible.clone()
    }

    pub async fn local(&self) -> Vec<GifEntry> {
        self.state.lock().await.local.clone()
    }

    pub async fn status(&self) -> RemoteStatus {
        self.state.lock().await.status.clone()
    }

    pub async fn is_uploading(&self) -> bool {
        self.state.lock().await.uploading
    }
}
