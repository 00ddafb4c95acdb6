use crate::error::{Result, StringsError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional location of the default-locale strings file
pub const DEFAULT_STRINGS_PATH: &str = "app/src/main/res/values/strings.xml";

/// Configuration for an unused strings run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strings file, relative to the project root
    pub strings_path: PathBuf,

    /// Locale qualifiers whose strings files mirror every deletion
    /// (e.g. "de" for `values-de/strings.xml`)
    pub secondary_locales: Vec<String>,

    /// Fail before pruning when a mirrored locale file is missing
    pub require_secondary_locales: bool,

    /// Scan policy
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Build output directory name; files beneath it are never read
    pub build_dir: String,

    /// File suffixes that are never read (case-insensitive)
    pub reserved_extensions: Vec<String>,

    /// Source code suffixes (Java and Kotlin)
    pub source_extensions: Vec<String>,

    /// Markup suffix for layouts, menus, manifests and other resources
    pub markup_extension: String,

    /// Markup file names excluded from scanning
    pub excluded_markup_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strings_path: PathBuf::from(DEFAULT_STRINGS_PATH),
            secondary_locales: vec!["de".to_string()],
            require_secondary_locales: false,
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            build_dir: "build".to_string(),
            reserved_extensions: vec![".mg".to_string()],
            source_extensions: vec![".java".to_string(), ".kt".to_string()],
            markup_extension: ".xml".to_string(),
            excluded_markup_files: vec!["strings.xml".to_string(), "merger.xml".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| StringsError::io(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let invalid = |message: String| StringsError::Config {
            path: path.to_path_buf(),
            message,
        };

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents).map_err(|e| invalid(e.to_string())),
            "toml" => toml::from_str(&contents).map_err(|e| invalid(e.to_string())),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents).map_err(|e| invalid(e.to_string()))
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".unusedstrings.yml",
            ".unusedstrings.yaml",
            ".unusedstrings.toml",
            "unusedstrings.yml",
            "unusedstrings.yaml",
            "unusedstrings.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.is_file() {
                debug!("Loading config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }
}

impl ScanConfig {
    /// Exact, case-sensitive file name match
    pub fn is_excluded_markup(&self, file_name: &str) -> bool {
        self.excluded_markup_files.iter().any(|n| n == file_name)
    }

    pub fn has_reserved_extension(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        self.reserved_extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_ascii_lowercase()))
    }
}
