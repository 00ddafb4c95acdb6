mod locale;
mod pruner;

pub use locale::{mirror_path, LocaleMirror};
pub use pruner::{PruneOutcome, StringPruner};
