//! Filesystem-based asset source for loading piece SVGs.

use gpui::{AssetSource, SharedString};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Filesystem-based asset source that looks next to the executable first,
/// then relative to the working directory
pub struct FileAssets {
    search_paths: Vec<PathBuf>,
}

impl FileAssets {
    pub fn new() -> Self {
        let mut search_paths = Vec::new();
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        {
            search_paths.push(dir);
        }
        if let Ok(cwd) = std::env::current_dir() {
            search_paths.push(cwd);
        }
        Self { search_paths }
    }

    fn candidates(&self, path: &str) -> impl Iterator<Item = PathBuf> + '_ {
        let path = path.to_string();
        self.search_paths
            .iter()
            .map(move |base| base.join(&path))
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        for p in self.candidates(path).chain(std::iter::once(PathBuf::from(path))) {
            if let Ok(data) = fs::read(&p) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        log::warn!("asset not found: {}", path);
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        for dir_path in self.candidates(path) {
            if let Ok(entries) = fs::read_dir(&dir_path) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        results.push(SharedString::from(name.to_string()));
                    }
                }
                break;
            }
        }
        Ok(results)
    }
}
