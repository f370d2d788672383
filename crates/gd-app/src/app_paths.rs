use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub storage_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            storage_dir: data_dir.join("storage"),
            logs_dir: data_dir.join("logs"),
        }
    }
}
