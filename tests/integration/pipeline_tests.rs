//! End-to-end tests for the find-then-prune pipeline
//!
//! Each test lays out a small Android project in a temp dir and runs the
//! library entry points the binary uses.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use unusedstrings::{
    pipeline, Config, NoopObserver, ProjectPaths, StringsError, TerminalReporter,
};

const STRINGS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_title">My App</string>
    <string name="unused_label">Unused</string>
</resources>
"#;

const STRINGS_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_title">Meine App</string>
    <string name="unused_label">Unbenutzt</string>
</resources>
"#;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn project(strings: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "app/src/main/res/values/strings.xml", strings);
    temp
}

fn run_with(root: &Path, config: &Config) -> unusedstrings::Result<pipeline::RunSummary> {
    let root = format!("{}/", root.display());
    let paths = ProjectPaths::locate(&root, config)?;
    pipeline::run(&paths, config, &TerminalReporter::new(), &mut NoopObserver)
}

fn run_project(root: &Path) -> pipeline::RunSummary {
    run_with(root, &Config::default()).unwrap()
}

#[test]
fn test_unused_string_is_found_and_pruned() {
    let temp = project(STRINGS);
    write(
        temp.path(),
        "app/src/main/java/com/example/MainActivity.kt",
        "setTitle(R.string.app_title)",
    );

    let summary = run_project(temp.path());

    assert_eq!(summary.declared, 2);
    assert_eq!(summary.unused, vec!["unused_label"]);

    let strings = read(temp.path(), "app/src/main/res/values/strings.xml");
    assert!(strings.contains(r#"<string name="app_title">My App</string>"#));
    assert!(!strings.contains("unused_label"));
    assert!(strings.contains("<resources>"));
    assert!(strings.contains("</resources>"));
}

#[test]
fn test_layout_reference_keeps_string() {
    let temp = project(STRINGS);
    write(
        temp.path(),
        "app/src/main/res/layout/activity_main.xml",
        r#"<TextView android:text="@string/unused_label" />"#,
    );
    write(temp.path(), "app/src/main/java/Main.java", "int id = R.string.app_title;");

    let summary = run_project(temp.path());

    assert!(summary.unused.is_empty());
    assert!(summary.pruned.is_empty());
    assert_eq!(read(temp.path(), "app/src/main/res/values/strings.xml"), STRINGS);
}

#[test]
fn test_reference_only_in_build_output_is_unused() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");
    write(
        temp.path(),
        "app/build/intermediates/merged/Generated.java",
        "R.string.unused_label",
    );

    let summary = run_project(temp.path());
    assert_eq!(summary.unused, vec!["unused_label"]);
}

#[test]
fn test_sources_next_to_build_output_are_scanned() {
    let temp = project(STRINGS);
    write(temp.path(), "app/build/generated/source/r/R.java", "int unused = 0;");
    write(temp.path(), "app/build/intermediates/merged.xml", "<merged/>");
    write(
        temp.path(),
        "app/src/main/java/com/example/MainActivity.kt",
        "setTitle(R.string.app_title)",
    );

    let summary = run_project(temp.path());

    assert_eq!(summary.unused, vec!["unused_label"]);
    let strings = read(temp.path(), "app/src/main/res/values/strings.xml");
    assert!(strings.contains(r#"<string name="app_title">My App</string>"#));
    assert!(!strings.contains("unused_label"));
}

#[test]
fn test_empty_name_does_not_wipe_strings_file() {
    let temp = project(
        r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="">Nameless</string>
    <string name="app_title">My App</string>
    <string name="unused_label">Unused</string>
</resources>
"#,
    );

    let summary = run_project(temp.path());

    assert!(summary.unused.contains(&String::new()));
    let strings = read(temp.path(), "app/src/main/res/values/strings.xml");
    assert!(strings.starts_with("<?xml"));
    assert!(strings.contains("<resources>"));
    assert!(strings.contains("Nameless"));
    assert!(!strings.contains("unused_label"));
}

#[test]
fn test_deletions_are_mirrored_into_german_strings() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/res/values-de/strings.xml", STRINGS_DE);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");

    let summary = run_project(temp.path());

    assert_eq!(summary.pruned.len(), 2);
    assert!(summary.skipped.is_empty());
    let german = read(temp.path(), "app/src/main/res/values-de/strings.xml");
    assert!(german.contains("Meine App"));
    assert!(!german.contains("unused_label"));
}

#[test]
fn test_missing_mirror_is_skipped_by_default() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");

    let summary = run_project(temp.path());

    assert_eq!(summary.pruned.len(), 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(summary.skipped[0].ends_with("values-de/strings.xml"));
    assert!(!read(temp.path(), "app/src/main/res/values/strings.xml").contains("unused_label"));
}

#[test]
fn test_required_mirror_missing_fails_before_pruning() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");
    let config = Config {
        require_secondary_locales: true,
        ..Config::default()
    };

    let err = run_with(temp.path(), &config).unwrap_err();

    assert!(matches!(err, StringsError::FileNotFound { .. }));
    assert_eq!(read(temp.path(), "app/src/main/res/values/strings.xml"), STRINGS);
}

#[test]
fn test_second_run_leaves_file_unchanged() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");

    run_project(temp.path());
    let after_first = read(temp.path(), "app/src/main/res/values/strings.xml");

    let summary = run_project(temp.path());

    assert!(summary.unused.is_empty());
    assert_eq!(read(temp.path(), "app/src/main/res/values/strings.xml"), after_first);
}

#[test]
fn test_config_file_in_project_root() {
    let temp = project(STRINGS);
    write(temp.path(), "app/src/main/res/values-fr/strings.xml", STRINGS_DE);
    write(temp.path(), "app/src/main/java/Main.kt", "R.string.app_title");
    write(temp.path(), ".unusedstrings.yml", "secondary_locales: [fr]\n");

    let root = format!("{}/", temp.path().display());
    let (paths, config) = pipeline::load_project(&root).unwrap();
    let summary =
        pipeline::run(&paths, &config, &TerminalReporter::new(), &mut NoopObserver).unwrap();

    assert!(summary.skipped.is_empty());
    assert!(!read(temp.path(), "app/src/main/res/values-fr/strings.xml").contains("unused_label"));
}

#[test]
fn test_malformed_strings_file_is_parse_error() {
    let temp = project("<resources><string name=\"a\">x</resources>");

    let err = run_with(temp.path(), &Config::default()).unwrap_err();
    assert!(matches!(err, StringsError::Parse { .. }));
}
