//! Embedding-application contract.
//!
//! The host owns the search box, the rendered grid and the message composer.
//! The picker talks back to it through these optional callbacks.

use crate::gif::GifEntry;

/// Receives the formatted insertion string when an entry is picked.
pub trait InsertionSinkPort: Send + Sync {
    fn insert(&self, text: &str);
}

/// Receives every newly created entry, remote or local fallback.
pub trait UploadObserverPort: Send + Sync {
    fn gif_uploaded(&self, entry: &GifEntry);
}

/// Notified when the picker's search text changes.
pub trait FilterChangePort: Send + Sync {
    fn filter_changed(&self, filter: &str);
}

/// Measures the host's picker root node. Used only to size the grid.
pub trait RootMeasurePort: Send + Sync {
    fn root_width(&self) -> Option<f64>;
}
