//! GIF domain models.

mod catalog_result;
mod entry;
pub mod limits;
mod provenance;
pub mod search;
mod upload;
pub mod url;

pub use catalog_result::CatalogResult;
pub use entry::{stamp, GifEntry};
pub use provenance::Provenance;
pub use search::QueryMatcher;
pub use upload::{title_from_file_name, UploadFile};
