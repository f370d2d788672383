use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tracing::{error, info, warn};

use gd_core::gif::limits::{LOCAL_FALLBACK_TAGS, UPLOAD_TAGS};
use gd_core::ports::{
    CatalogPort, ClockPort, IdentityPort, InlineEncoderPort, UploadObserverPort,
};
use gd_core::{GifEntry, GifId, Provenance, UploadFile, ValidationFailure};

use super::internal::LocalStore;
use crate::state::SharedPickerState;

const LOCAL_ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Per-file result of an upload batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UploadReport {
    /// Created in the remote catalog.
    Uploaded { entry: GifEntry },
    /// The catalog refused or was unreachable. The GIF exists only in the
    /// local upload cache on this machine.
    StoredLocally { entry: GifEntry, reason: String },
    /// Never sent anywhere.
    Rejected {
        #[serde(serialize_with = "display")]
        reason: ValidationFailure,
    },
    /// Neither the catalog nor the local fallback could take the file.
    Failed { name: String, message: String },
}

fn display<S: serde::Serializer>(value: &ValidationFailure, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

/// Upload cascade: remote first, local cache as fallback.
///
/// 上传级联：优先上传到远程目录，失败则以内联 data URL 保存到本地缓存。
pub struct UploadGifs {
    catalog: Arc<dyn CatalogPort>,
    identity: Arc<dyn IdentityPort>,
    encoder: Arc<dyn InlineEncoderPort>,
    local_store: LocalStore,
    clock: Arc<dyn ClockPort>,
    observer: Option<Arc<dyn UploadObserverPort>>,
    state: SharedPickerState,
}

impl UploadGifs {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        identity: Arc<dyn IdentityPort>,
        encoder: Arc<dyn InlineEncoderPort>,
        local_store: LocalStore,
        clock: Arc<dyn ClockPort>,
        observer: Option<Arc<dyn UploadObserverPort>>,
        state: SharedPickerState,
    ) -> Self {
        Self {
            catalog,
            identity,
            encoder,
            local_store,
            clock,
            observer,
            state,
        }
    }

    /// Processes `files` one after another; a failing file never stops the batch.
    #[tracing::instrument(
        name = "usecase.upload_gifs.execute",
        skip(self, files),
        fields(files = files.len())
    )]
    pub async fn execute(&self, files: Vec<UploadFile>) -> Vec<UploadReport> {
        self.state.lock().await.uploading = true;

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.upload_one(file).await);
        }

        self.state.lock().await.uploading = false;
        reports
    }

    async fn upload_one(&self, file: &UploadFile) -> UploadReport {
        if let Err(reason) = file.validate() {
            warn!(file = %file.name, %reason, "Rejected GIF before upload");
            return UploadReport::Rejected { reason };
        }

        let title = file.title();
        let tags: Vec<String> = UPLOAD_TAGS.iter().map(|t| t.to_string()).collect();
        let user = self.identity.current_user();

        let result = self
            .catalog
            .upload(&title, &tags, &file.bytes, user.as_ref())
            .await;
        let failure = result.message_or("upload returned no entry");

        match result.accepted() {
            Some(entry) => {
                let entry = entry.with_provenance(Provenance::Remote);
                self.state.lock().await.remote.push(entry.clone());
                self.notify(&entry);
                info!(gif_id = %entry.id, file = %file.name, "Uploaded GIF to catalog");
                UploadReport::Uploaded { entry }
            }
            None => {
                warn!(file = %file.name, reason = %failure, "Catalog upload failed, storing GIF locally");
                self.store_locally(file, title, failure).await
            }
        }
    }

    async fn store_locally(&self, file: &UploadFile, title: String, reason: String) -> UploadReport {
        let data_url = match self.encoder.encode_data_url(&file.mime_type, &file.bytes).await {
            Ok(url) => url,
            Err(e) => {
                error!(file = %file.name, error = %e, "Failed to encode GIF for local storage");
                return UploadReport::Failed {
                    name: file.name.clone(),
                    message: format!("failed to encode {}: {e}", file.name),
                };
            }
        };

        let id = GifId::local_upload(self.clock.now_ms(), &random_suffix());
        let mut entry = GifEntry::new(id, title, data_url.clone())
            .with_provenance(Provenance::Local)
            .with_tags(LOCAL_FALLBACK_TAGS)
            .with_validity(true);
        entry.thumbnail_url = Some(data_url);
        entry.file_size = Some(file.size());

        let stored = entry.clone();
        self.local_store.update(|local| local.push(stored)).await;

        self.notify(&entry);
        info!(gif_id = %entry.id, file = %file.name, "Stored GIF in local upload cache");
        UploadReport::StoredLocally { entry, reason }
    }

    fn notify(&self, entry: &GifEntry) {
        if let Some(observer) = &self.observer {
            observer.gif_uploaded(entry);
        }
    }
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..LOCAL_ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}
