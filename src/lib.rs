//! unusedstrings - Find and remove unused string resources in Android projects
//!
//! # Architecture
//!
//! A run is a single pass:
//! 1. **Parsing** - Read the declared `<string>` entries from `values/strings.xml`
//! 2. **File Discovery** - Walk the project bottom-up for .kt, .java and .xml files
//! 3. **Usage Scan** - Search each file for `R.string.name` / `@string/name`
//! 4. **Pruning** - Drop the lines of unused strings, mirrored into other locales

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod refactor;
pub mod report;

pub use analysis::{NoopObserver, ScanObserver, UsageAnalysis, UsageScanner};
pub use config::Config;
pub use discovery::FileFinder;
pub use error::{Result, StringsError};
pub use parser::{StringEntry, StringsParser};
pub use pipeline::{load_project, project_root_from_args, run, ProjectPaths, RunSummary};
pub use refactor::{LocaleMirror, PruneOutcome, StringPruner};
pub use report::{ProgressObserver, TerminalReporter};
