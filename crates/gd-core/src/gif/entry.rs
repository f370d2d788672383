use serde::{Deserialize, Serialize};

use super::provenance::Provenance;
use super::url::is_inline_url;
use crate::ids::GifId;

/// The unit of data throughout the picker.
///
/// Field names follow the catalog's camelCase JSON so the same type is used
/// on the wire, in the upload cache, and for caller-supplied entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifEntry {
    pub id: GifId,
    pub title: String,
    /// Remote URL (absolute or catalog-relative) or an inline `data:` URL.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Explicit `false` hides the entry from the default display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    /// Owner echoed back by the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub provenance: Provenance,
}

impl GifEntry {
    pub fn new(id: impl Into<GifId>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            thumbnail_url: None,
            tags: None,
            file_size: None,
            width: None,
            height: None,
            is_valid: None,
            user_id: None,
            provenance: Provenance::default(),
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_validity(mut self, is_valid: bool) -> Self {
        self.is_valid = Some(is_valid);
        self
    }

    /// Hidden from default display only when explicitly marked invalid.
    pub fn is_displayable(&self) -> bool {
        self.is_valid != Some(false)
    }

    pub fn is_inline(&self) -> bool {
        is_inline_url(&self.url)
    }

    /// Caller entries belong to the embedding application.
    pub fn is_removable(&self) -> bool {
        matches!(self.provenance, Provenance::Remote | Provenance::Local)
    }

    /// Preferred render source: a non-empty thumbnail, else the full url.
    pub fn render_source(&self) -> &str {
        self.thumbnail_url
            .as_deref()
            .filter(|thumb| !thumb.is_empty())
            .unwrap_or(&self.url)
    }

    /// Source to retry with after the render source failed to load.
    /// `None` once the full url itself has failed.
    pub fn fallback_source(&self) -> Option<&str> {
        let current = self.render_source();
        (current != self.url).then_some(self.url.as_str())
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

/// Re-stamps every entry with the provenance of the group it enters.
pub fn stamp(entries: Vec<GifEntry>, provenance: Provenance) -> Vec<GifEntry> {
    entries
        .into_iter()
        .map(|entry| entry.with_provenance(provenance))
        .collect()
}
