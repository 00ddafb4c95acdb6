use crate::error::{Result, StringsError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of pruning one resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    pub path: PathBuf,
    /// Number of lines dropped
    pub removed: usize,
}

/// Removes the lines of unused strings from resource files
pub struct StringPruner;

impl StringPruner {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `path` without every line that contains one of `unused`.
    ///
    /// Matching is by substring, so a line mentioning an unused name anywhere
    /// goes too. The file is left untouched when no line matches. An empty
    /// name is skipped, it would match every line.
    pub fn prune(&self, path: &Path, unused: &[String]) -> Result<PruneOutcome> {
        if !path.is_file() {
            return Err(StringsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let names: Vec<&str> = unused
            .iter()
            .map(String::as_str)
            .filter(|name| {
                if name.is_empty() {
                    warn!("Skipping string with an empty name in {}", path.display());
                }
                !name.is_empty()
            })
            .collect();

        let contents = std::fs::read_to_string(path).map_err(|e| StringsError::io(path, e))?;
        let (new_contents, removed) = prune_lines(&contents, &names);

        if removed > 0 {
            std::fs::write(path, new_contents).map_err(|e| StringsError::io(path, e))?;
        }

        debug!("Removed {} lines from {}", removed, path.display());
        Ok(PruneOutcome {
            path: path.to_path_buf(),
            removed,
        })
    }
}

impl Default for StringPruner {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop matching lines and join the rest with `\n`, keeping a final newline
/// if the input had one
fn prune_lines(contents: &str, unused: &[&str]) -> (String, usize) {
    let mut removed = 0;
    let kept: Vec<&str> = contents
        .lines()
        .filter(|line| {
            let matched = unused.iter().any(|name| line.contains(name));
            if matched {
                removed += 1;
            }
            !matched
        })
        .collect();

    let mut new_contents = kept.join("\n");
    if contents.ends_with('\n') && !new_contents.is_empty() {
        new_contents.push('\n');
    }
    (new_contents, removed)
}
