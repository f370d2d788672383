//! ID type wrappers for type safety.

mod gif_id;
mod id_macro;
mod user_id;

pub use gif_id::{GifId, LOCAL_UPLOAD_PREFIX, REMOTE_UPLOAD_PREFIX};
pub use user_id::UserId;
