//! Shared picker state.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use gd_core::gif::search::aggregate;
use gd_core::{GifEntry, GifId};

/// Outcome of the most recent remote list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoteStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Everything the use cases read and write.
///
/// Lives behind a `tokio::sync::Mutex`; the lock is taken for short
/// read-modify-write sections and never held across a port call.
#[derive(Debug, Default)]
pub struct PickerState {
    pub remote: Vec<GifEntry>,
    pub caller: Vec<GifEntry>,
    pub local: Vec<GifEntry>,
    pub query: String,
    pub visible: Vec<GifEntry>,
    pub status: RemoteStatus,
    pub uploading: bool,
    pub render_failures: HashSet<GifId>,
    /// Set once the upload cache has been read into `local`.
    pub local_loaded: bool,
}

impl PickerState {
    pub fn aggregated(&self) -> Vec<GifEntry> {
        aggregate(&self.remote, &self.caller, &self.local)
    }
}

pub type SharedPickerState = Arc<Mutex<PickerState>>;
