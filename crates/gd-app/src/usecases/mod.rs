//! Picker use cases.
//!
//! Each use case owns the ports it needs plus a handle to the shared
//! [`PickerState`](crate::state::PickerState). The [`GifPicker`](crate::GifPicker)
//! façade sequences them (for example refresh, then the search cascade).

pub mod internal;
mod pick_gif;
mod refresh_remote_gifs;
mod remove_gif;
mod resolve_visible_gifs;
mod upload_gifs;

pub use pick_gif::{PickGif, PickRejection};
pub use refresh_remote_gifs::{RefreshOutcome, RefreshRemoteGifs, DEFAULT_LIST_ERROR};
pub use remove_gif::{RemoveGif, RemoveReport};
pub use resolve_visible_gifs::ResolveVisibleGifs;
pub use upload_gifs::{UploadGifs, UploadReport};
