//! HTTP catalog client.

mod client;
mod wire;

pub use client::HttpCatalogClient;
