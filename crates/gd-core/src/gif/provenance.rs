use serde::{Deserialize, Serialize};

/// Which source an entry belongs to. Decides which operations may mutate it.
///
/// 条目来源：远程目录、调用方提供、本地缓存。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Owned by the catalog service. Catalog payloads carry no provenance,
    /// so this is also the deserialization default.
    #[default]
    Remote,
    /// Supplied by the embedding application; never mutated by the picker.
    Caller,
    /// Stored in the local upload cache.
    Local,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Remote => "remote",
            Provenance::Caller => "caller",
            Provenance::Local => "local",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
