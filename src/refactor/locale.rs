use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Directory holding the default-locale resources
const VALUES_DIR: &str = "values";

/// Derives the strings files of other locales from the default one
pub struct LocaleMirror<'a> {
    qualifiers: &'a [String],
}

impl<'a> LocaleMirror<'a> {
    pub fn new(qualifiers: &'a [String]) -> Self {
        Self { qualifiers }
    }

    /// Mirror paths for every configured qualifier, in configuration order.
    /// Qualifiers are skipped when `primary` has no `values` directory.
    pub fn paths(&self, primary: &Path) -> Vec<PathBuf> {
        self.qualifiers
            .iter()
            .filter_map(|q| mirror_path(primary, q))
            .collect()
    }
}

/// Replace the innermost `values` directory of `primary` with `values-<qualifier>`
pub fn mirror_path(primary: &Path, qualifier: &str) -> Option<PathBuf> {
    let components: Vec<Component<'_>> = primary.components().collect();
    let index = components
        .iter()
        .rposition(|c| matches!(c, Component::Normal(name) if *name == VALUES_DIR))?;

    let mut mirrored = PathBuf::new();
    for (i, component) in components.iter().enumerate() {
        if i == index {
            mirrored.push(OsString::from(format!("{}-{}", VALUES_DIR, qualifier)));
        } else {
            mirrored.push(component.as_os_str());
        }
    }
    Some(mirrored)
}
