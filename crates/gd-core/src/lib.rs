//! # gd-core
//!
//! Core domain models and ports for gifdock.
//!
//! This crate contains pure GIF catalog logic without any infrastructure
//! dependencies: entry model, provenance, the search predicate, aggregation
//! of the three entry sources, and the port traits implemented by `gd-infra`.

// Public module exports
pub mod config;
pub mod error;
pub mod gif;
pub mod ids;
pub mod layout;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error::{KeyValueStoreError, TransportError, ValidationFailure};
pub use gif::{CatalogResult, GifEntry, Provenance, UploadFile};
pub use ids::{GifId, UserId};
