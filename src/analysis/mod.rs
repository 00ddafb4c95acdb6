mod usage;

pub use usage::{NoopObserver, ScanObserver, UsageAnalysis, UsageScanner};
