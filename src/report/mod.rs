mod progress;
mod terminal;

pub use progress::ProgressObserver;
pub use terminal::TerminalReporter;
