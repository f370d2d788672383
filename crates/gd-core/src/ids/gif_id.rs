use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Prefix of ids synthesized for uploads that only exist in the local cache.
pub const LOCAL_UPLOAD_PREFIX: &str = "local-uploaded-";

/// Prefix the catalog historically used for uploaded entries.
pub const REMOTE_UPLOAD_PREFIX: &str = "uploaded-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GifId(String);

impl_id!(GifId);

impl GifId {
    /// Builds the id of a locally stored upload: `local-uploaded-{now_ms}-{suffix}`.
    pub fn local_upload(now_ms: i64, suffix: &str) -> Self {
        Self(format!("{LOCAL_UPLOAD_PREFIX}{now_ms}-{suffix}"))
    }

    /// Legacy naming check only. Ownership is decided by
    /// [`Provenance`](crate::gif::Provenance), never by this prefix.
    pub fn is_local_upload(&self) -> bool {
        self.0.starts_with(LOCAL_UPLOAD_PREFIX)
    }

    pub fn is_remote_upload(&self) -> bool {
        self.0.starts_with(REMOTE_UPLOAD_PREFIX)
    }
}
