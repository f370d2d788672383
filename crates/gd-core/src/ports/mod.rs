//! Port interfaces for the application layer
//!
//! Ports define the contract between the picker use cases and the
//! infrastructure implementations (HTTP, file storage, encoding) as well as
//! the embedding application. Use cases only ever see these traits, so every
//! one of them can be replaced by a test double.

mod catalog;
mod clock;
mod encoder;
pub mod host;
pub mod http;
mod identity;
mod storage;
mod upload_cache;

pub use catalog::CatalogPort;
pub use clock::ClockPort;
pub use encoder::InlineEncoderPort;
pub use host::{FilterChangePort, InsertionSinkPort, RootMeasurePort, UploadObserverPort};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransportPort};
pub use identity::IdentityPort;
pub use storage::KeyValueStorePort;
pub use upload_cache::UploadCachePort;
