//! Fixed limits and labels of the picker.

/// Largest GIF accepted for upload or insertion (10 MiB).
pub const MAX_GIF_BYTES: u64 = 10 * 1024 * 1024;

/// Number of locally stored uploads kept across sessions.
pub const UPLOAD_CACHE_CAPACITY: usize = 20;

/// Durable storage key of the upload cache.
pub const UPLOAD_CACHE_KEY: &str = "uploadedGifs";

pub const GIF_MIME_PREFIX: &str = "image/gif";

/// Tags sent with every catalog upload.
pub const UPLOAD_TAGS: [&str; 2] = ["uploaded", "custom"];

/// Tags given to entries synthesized when the catalog upload fails.
pub const LOCAL_FALLBACK_TAGS: [&str; 2] = ["uploaded", "local"];
