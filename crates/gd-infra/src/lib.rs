pub mod catalog;
pub mod codec;
pub mod http;
pub mod identity;
pub mod storage;
pub mod time;

pub use catalog::HttpCatalogClient;
pub use codec::Base64InlineEncoder;
pub use http::ReqwestTransport;
pub use identity::StaticIdentity;
pub use storage::{FileKeyValueStore, UploadCacheRepository};
pub use time::SystemClock;
