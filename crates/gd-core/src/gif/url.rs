//! URL helpers for entries whose `url` may be catalog-relative or inline.

use super::entry::GifEntry;

pub fn is_inline_url(url: &str) -> bool {
    url.starts_with("data:")
}

/// Resolves a catalog-relative url (`/static/gifs/x.gif`) against `base`.
/// Absolute and inline urls are returned unchanged.
pub fn resolve_url(base: &str, url: &str) -> String {
    if is_inline_url(url) || url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}

/// Builds an inline payload: `data:{mime};base64,{payload}`.
pub fn data_url(mime: &str, base64_payload: &str) -> String {
    format!("data:{mime};base64,{base64_payload}")
}

/// The string handed to the host when an entry is picked.
pub fn insertion_markdown(entry: &GifEntry) -> String {
    format!("![{}]({})", entry.title, entry.url)
}
