//! Unused string detection
//!
//! A declared string counts as used when any eligible file contains
//! `R.string.<name>` or `@string/<name>`. Matching is plain substring
//! containment: `R.string.ok` is found inside `R.string.okay_button`.

use crate::config::ScanConfig;
use crate::discovery::{FileFinder, SourceFile};
use crate::error::Result;
use crate::parser::StringEntry;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// Receives scan progress; every method defaults to doing nothing
pub trait ScanObserver {
    /// Called after `file` has been searched. `index` is 1-based.
    fn on_file_scanned(&mut self, _file: &Path, _index: usize, _total: usize) {}

    /// Called once per key, for the first file that references it
    fn on_key_used(&mut self, _key: &str, _file: &Path) {}

    /// Called once when the scan is over, also after an early stop
    fn on_scan_finished(&mut self) {}
}

/// Observer that ignores everything
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Outcome of a usage scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsageAnalysis {
    /// Names referenced nowhere, in declaration order
    pub unused: Vec<String>,
    /// Number of declared strings
    pub declared: usize,
    /// Files actually read before the scan finished
    pub files_scanned: usize,
    /// Eligible files found in the project
    pub files_found: usize,
}

/// The two spellings that reference a string resource
struct KeyPatterns {
    name: String,
    code: String,
    markup: String,
}

impl KeyPatterns {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            code: format!("R.string.{}", name),
            markup: format!("@string/{}", name),
        }
    }

    fn is_referenced_in(&self, contents: &str) -> bool {
        contents.contains(&self.code) || contents.contains(&self.markup)
    }
}

/// Finds declared strings with no reference in the project
pub struct UsageScanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> UsageScanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Walk `project_root` and return the declared strings referenced nowhere
    pub fn scan(
        &self,
        declared: &[StringEntry],
        project_root: &Path,
        observer: &mut dyn ScanObserver,
    ) -> Result<UsageAnalysis> {
        let files = FileFinder::new(self.config).find_files(project_root)?;
        self.scan_files(declared, &files, observer)
    }

    /// Search already discovered files. Reading errors abort the scan.
    pub fn scan_files(
        &self,
        declared: &[StringEntry],
        files: &[SourceFile],
        observer: &mut dyn ScanObserver,
    ) -> Result<UsageAnalysis> {
        let mut remaining: Vec<KeyPatterns> =
            declared.iter().map(|e| KeyPatterns::new(&e.name)).collect();
        // a repeated name would otherwise be reported twice
        let mut seen = HashSet::new();
        remaining.retain(|k| seen.insert(k.name.clone()));

        let total = files.len();
        let mut files_scanned = 0;

        for (index, file) in files.iter().enumerate() {
            if remaining.is_empty() {
                debug!("Every string is referenced, stopping after {} files", files_scanned);
                break;
            }

            let contents = file.read_contents()?;
            files_scanned += 1;

            remaining.retain(|key| {
                if key.is_referenced_in(&contents) {
                    trace!("'{}' used in {}", key.name, file.path.display());
                    observer.on_key_used(&key.name, &file.path);
                    false
                } else {
                    true
                }
            });

            observer.on_file_scanned(&file.path, index + 1, total);
        }

        observer.on_scan_finished();

        let unused: Vec<String> = remaining.into_iter().map(|k| k.name).collect();
        debug!(
            "{} of {} strings unused ({} files read)",
            unused.len(),
            declared.len(),
            files_scanned
        );

        Ok(UsageAnalysis {
            unused,
            declared: declared.len(),
            files_scanned,
            files_found: total,
        })
    }
}
