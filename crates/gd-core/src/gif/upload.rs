use super::limits::{GIF_MIME_PREFIX, MAX_GIF_BYTES};
use crate::error::ValidationFailure;

/// A file handed to the picker for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn title(&self) -> String {
        title_from_file_name(&self.name)
    }

    /// Type and size checks performed before any network call.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if !self.mime_type.starts_with(GIF_MIME_PREFIX) {
            return Err(ValidationFailure::NotGif {
                name: self.name.clone(),
                mime: self.mime_type.clone(),
            });
        }

        if self.size() > MAX_GIF_BYTES {
            return Err(ValidationFailure::TooLarge {
                name: self.name.clone(),
                size: self.size(),
                limit: MAX_GIF_BYTES,
            });
        }

        Ok(())
    }
}

/// Strips the last extension: `party.cat.gif` → `party.cat`.
///
/// A dot inside a directory component is not an extension.
pub fn title_from_file_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') => stem.to_string(),
        _ => name.to_string(),
    }
}
