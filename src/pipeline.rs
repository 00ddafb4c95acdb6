//! Find-then-prune run over one Android project

use crate::analysis::{ScanObserver, UsageScanner};
use crate::config::Config;
use crate::error::{Result, StringsError};
use crate::parser::StringsParser;
use crate::refactor::{LocaleMirror, PruneOutcome, StringPruner};
use crate::report::TerminalReporter;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Project root with a trailing separator, from the positional arguments
pub fn project_root_from_args(args: &[String]) -> Result<String> {
    match args {
        [] => Err(StringsError::TooFewArguments),
        [path] => Ok(normalize_root(path)),
        _ => Err(StringsError::TooManyArguments),
    }
}

fn normalize_root(path: &str) -> String {
    if path.ends_with('/') || path.ends_with(MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", path, MAIN_SEPARATOR)
    }
}

/// Locations a run works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    /// Default-locale strings file
    pub strings: PathBuf,
}

impl ProjectPaths {
    /// Resolve the strings file under `root`; the project is rejected when it
    /// does not exist
    pub fn locate(root: &str, config: &Config) -> Result<Self> {
        let root_path = PathBuf::from(root);
        let strings = root_path.join(&config.strings_path);

        if !strings.is_file() {
            return Err(StringsError::InvalidProject {
                root: root.to_string(),
                expected: strings.display().to_string(),
            });
        }

        Ok(Self {
            root: root_path,
            strings,
        })
    }
}

/// Load the project's config file and resolve its paths.
///
/// A root that is not a project is reported as such even when it also holds
/// an unreadable config file.
pub fn load_project(root: &str) -> Result<(ProjectPaths, Config)> {
    match Config::from_default_locations(Path::new(root)) {
        Ok(config) => {
            let paths = ProjectPaths::locate(root, &config)?;
            Ok((paths, config))
        }
        Err(err) => {
            ProjectPaths::locate(root, &Config::default())?;
            Err(err)
        }
    }
}

/// What a run found and changed
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub declared: usize,
    pub unused: Vec<String>,
    pub pruned: Vec<PruneOutcome>,
    /// Mirrored locale files that did not exist
    pub skipped: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Parse, scan, report, then prune the default and mirrored locale files
pub fn run(
    paths: &ProjectPaths,
    config: &Config,
    reporter: &TerminalReporter,
    observer: &mut dyn ScanObserver,
) -> Result<RunSummary> {
    let start = Instant::now();

    reporter.finding_strings(&paths.strings);
    let declared = StringsParser::new().parse_file(&paths.strings)?;
    reporter.found_strings(declared.len());

    reporter.searching();
    let analysis = UsageScanner::new(&config.scan).scan(&declared, &paths.root, observer)?;
    info!(
        "{} of {} strings unused after reading {} files",
        analysis.unused.len(),
        declared.len(),
        analysis.files_scanned
    );

    reporter.unused(&analysis.unused, &declared);
    let elapsed = start.elapsed();
    reporter.summary(analysis.unused.len(), elapsed);

    let mut summary = RunSummary {
        declared: declared.len(),
        unused: analysis.unused,
        pruned: Vec::new(),
        skipped: Vec::new(),
        elapsed,
    };

    if summary.unused.is_empty() {
        return Ok(summary);
    }

    let (mirrors, missing): (Vec<PathBuf>, Vec<PathBuf>) = LocaleMirror::new(&config.secondary_locales)
        .paths(&paths.strings)
        .into_iter()
        .partition(|p| p.is_file());

    // nothing is modified when a required mirror is absent
    if config.require_secondary_locales {
        if let Some(path) = missing.first() {
            return Err(StringsError::FileNotFound { path: path.clone() });
        }
    }

    let pruner = StringPruner::new();
    let outcome = pruner.prune(&paths.strings, &summary.unused)?;
    reporter.pruned(&outcome);
    summary.pruned.push(outcome);

    for mirror in &mirrors {
        let outcome = pruner.prune(mirror, &summary.unused)?;
        reporter.pruned(&outcome);
        summary.pruned.push(outcome);
    }

    for path in missing {
        warn!("Locale file {} not found, not mirroring deletions", path.display());
        reporter.missing_mirror(&path);
        summary.skipped.push(path);
    }

    Ok(summary)
}
