use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating, scanning or pruning string resources
#[derive(Error, Diagnostic, Debug)]
pub enum StringsError {
    #[error("Error: too few arguments. Please add the path to your android project")]
    #[diagnostic(code(unusedstrings::args::too_few), help("usage: unusedstrings <path-to-project>"))]
    TooFewArguments,

    #[error("Error: too many arguments. Please add the path to your android project")]
    #[diagnostic(code(unusedstrings::args::too_many), help("usage: unusedstrings <path-to-project>"))]
    TooManyArguments,

    #[error("Error: {root} doesn't seem to be a valid android project.")]
    #[diagnostic(
        code(unusedstrings::project::invalid),
        help("expected a strings file at {expected}")
    )]
    InvalidProject { root: String, expected: String },

    #[error("Failed to parse {} at byte {position}: {message}", path.display())]
    #[diagnostic(code(unusedstrings::parse))]
    Parse {
        path: PathBuf,
        position: usize,
        message: String,
    },

    #[error("<string> element without a name attribute in {} at byte {position}", path.display())]
    #[diagnostic(code(unusedstrings::parse::missing_name))]
    MissingName { path: PathBuf, position: usize },

    #[error("Failed to access {}", path.display())]
    #[diagnostic(code(unusedstrings::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File does not exist: {}", path.display())]
    #[diagnostic(code(unusedstrings::prune::not_found))]
    FileNotFound { path: PathBuf },

    #[error("Invalid config file {}: {message}", path.display())]
    #[diagnostic(code(unusedstrings::config))]
    Config { path: PathBuf, message: String },
}

impl StringsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StringsError>;
