//! gifdock application layer
//!
//! Use cases over the `gd-core` ports, the shared picker state they mutate,
//! and the [`GifPicker`] façade the embedding application drives.

pub mod app_paths;
pub mod deps;
pub mod picker;
pub mod state;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use picker::{GifPicker, PickerHost, PickerView};
pub use state::{PickerState, RemoteStatus};
pub use usecases::{PickRejection, RefreshOutcome, RemoveReport, UploadReport};
