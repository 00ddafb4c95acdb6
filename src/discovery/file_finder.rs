use crate::config::ScanConfig;
use crate::error::{Result, StringsError};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// A file eligible for the usage scan. Either reference spelling counts in
/// any eligible file, so files are not told apart by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Whole file contents. Invalid UTF-8 is replaced rather than rejected,
    /// references are plain ASCII.
    pub fn read_contents(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| StringsError::io(&self.path, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                trace!("Non UTF-8 content in {}", self.path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}

/// Finds the files that may reference string resources
pub struct FileFinder<'a> {
    config: &'a ScanConfig,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Walk `root` bottom-up (directory contents before the directory
    /// itself) and collect eligible files in walk order.
    ///
    /// Every directory is descended into; build output is dropped per file by
    /// [`is_excluded`](Self::is_excluded). Symlinked directories are not
    /// followed, symlinks to regular files are read like files.
    pub fn find_files(&self, root: &Path) -> Result<Vec<SourceFile>> {
        debug!("Scanning for files in: {}", root.display());

        let walker = WalkDir::new(root)
            .contents_first(true)
            .follow_links(false)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                StringsError::io(path, e.into())
            })?;

            let file_type = entry.file_type();
            let is_file = file_type.is_file()
                || (file_type.is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let path = entry.path();
            if self.is_eligible(root, path) {
                trace!("Found: {}", path.display());
                files.push(SourceFile::new(path.to_path_buf()));
            }
        }

        debug!("Found {} files", files.len());
        Ok(files)
    }

    /// Apply the exclusion policy, then the eligibility policy
    pub fn is_eligible(&self, root: &Path, path: &Path) -> bool {
        if self.is_excluded(root, path) {
            trace!("Excluding: {}", path.display());
            return false;
        }

        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        // strings.xml and merger.xml never carry a source suffix, so
        // excluding them up front matches checking them on the markup
        // branch only
        if self.config.is_excluded_markup(file_name) {
            return false;
        }

        self.config
            .source_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
            || file_name.ends_with(self.config.markup_extension.as_str())
    }

    /// Build output, dot files and reserved suffixes are never opened
    pub fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return true,
        };

        if file_name.starts_with('.') || self.config.has_reserved_extension(file_name) {
            return true;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .parent()
            .map(|dir| {
                dir.components().any(|c| {
                    matches!(c, Component::Normal(name) if name == self.config.build_dir.as_str())
                })
            })
            .unwrap_or(false)
    }
}
