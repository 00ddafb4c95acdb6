mod loader;

pub use loader::{Config, ScanConfig, DEFAULT_STRINGS_PATH};
