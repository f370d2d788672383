use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use gd_core::gif::limits::MAX_GIF_BYTES;
use gd_core::gif::url::insertion_markdown;
use gd_core::ports::{CatalogPort, HttpRequest, HttpTransportPort, InsertionSinkPort};
use gd_core::{GifEntry, GifId};

use crate::state::SharedPickerState;

/// Why an entry cannot be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickRejection {
    #[error("GIF {0} could not be displayed")]
    RenderFailed(GifId),

    #[error("GIF is too large ({size} bytes, max {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("GIF is no longer available (HTTP {status})")]
    NotFound { status: u16 },

    #[error("could not check GIF: {0}")]
    ProbeFailed(String),
}

/// Validates an entry and produces its insertion string.
///
/// Remote entries are probed with a `HEAD` request first; inline entries
/// carry their own bytes and skip the probe.
pub struct PickGif {
    catalog: Arc<dyn CatalogPort>,
    transport: Arc<dyn HttpTransportPort>,
    sink: Option<Arc<dyn InsertionSinkPort>>,
    state: SharedPickerState,
}

impl PickGif {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        transport: Arc<dyn HttpTransportPort>,
        sink: Option<Arc<dyn InsertionSinkPort>>,
        state: SharedPickerState,
    ) -> Self {
        Self {
            catalog,
            transport,
            sink,
            state,
        }
    }

    #[tracing::instrument(
        name = "usecase.pick_gif.execute",
        skip(self, entry),
        fields(gif_id = %entry.id)
    )]
    pub async fn execute(&self, entry: &GifEntry) -> Result<String, PickRejection> {
        if self.state.lock().await.render_failures.contains(&entry.id) {
            warn!("Refusing to insert a GIF that failed to render");
            return Err(PickRejection::RenderFailed(entry.id.clone()));
        }

        if !entry.is_inline() {
            self.probe(entry).await?;
        }

        let text = insertion_markdown(entry);
        if let Some(sink) = &self.sink {
            sink.insert(&text);
        }
        info!("Picked GIF");
        Ok(text)
    }

    async fn probe(&self, entry: &GifEntry) -> Result<(), PickRejection> {
        let url = self.catalog.resolve_url(&entry.url);
        let response = self
            .transport
            .execute(HttpRequest::head(&url))
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "GIF size probe failed");
                PickRejection::ProbeFailed(e.to_string())
            })?;

        if let Some(size) = response.content_length {
            if size > MAX_GIF_BYTES {
                warn!(%url, size, "GIF exceeds size limit");
                return Err(PickRejection::TooLarge {
                    size,
                    limit: MAX_GIF_BYTES,
                });
            }
        }

        if !response.is_success() {
            warn!(%url, status = response.status, "GIF resource is missing");
            return Err(PickRejection::NotFound {
                status: response.status,
            });
        }

        Ok(())
    }
}
