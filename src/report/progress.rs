use crate::analysis::ScanObserver;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Shows the usage scan as a percentage of eligible files read
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent:>3}% {pos}/{len}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
        bar.set_style(style);
        Self { bar }
    }

    /// Observer that tracks progress without drawing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ProgressObserver {
    fn on_file_scanned(&mut self, _file: &Path, index: usize, total: usize) {
        if self.bar.length() != Some(total as u64) {
            self.bar.set_length(total as u64);
        }
        self.bar.set_position(index as u64);
    }

    fn on_scan_finished(&mut self) {
        self.finish();
    }
}
