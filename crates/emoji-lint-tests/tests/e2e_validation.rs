//! End-to-end validation tests over real directories.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p emoji-lint-tests --test e2e_validation
//! ```

use emoji_lint::{validate_directory, LintReport, RuleRegistry, ScanError};
use emoji_lint_tests::EmojiDirFixture;
use pretty_assertions::assert_eq;

fn issues_for<'a>(report: &'a LintReport, file_name: &str) -> Vec<&'a str> {
    report
        .issues
        .iter()
        .filter(|i| i.file_name == file_name)
        .map(|i| i.rule_id.as_str())
        .collect()
}

#[test]
fn test_canonical_directory_passes() {
    let fixture = EmojiDirFixture::with_files(&[
        "U+1F600.png",
        "U+2764.png",
        "U+1F44D_U+1F3FD.png",
        "U+1F3F3_U+200D_U+1F308.png",
        "U+1F1FA_U+1F1F8.png",
    ]);

    let report = validate_directory(fixture.path()).unwrap();
    assert!(report.ok, "unexpected issues: {:?}", report.issues);
    assert_eq!(report.files_scanned, 5);
}

#[test]
fn test_documented_examples() {
    let fixture = EmojiDirFixture::with_files(&[
        "1F600.png",
        "U+0041.png",
        "U+41+U+42.png",
        "U+110000.png",
        "readme.txt",
        "U+1F600_U+FE0F.png",
    ]);

    let report = validate_directory(fixture.path()).unwrap();

    assert!(issues_for(&report, "1F600.png").contains(&"codepoint/invalid"));
    assert_eq!(issues_for(&report, "U+0041.png"), vec!["codepoint/leading-zero"]);
    assert!(issues_for(&report, "U+41+U+42.png").contains(&"filename/plus-separator"));
    assert_eq!(
        issues_for(&report, "U+110000.png"),
        vec!["codepoint/out-of-range"]
    );
    assert_eq!(issues_for(&report, "readme.txt"), vec!["filename/non-png"]);
    assert_eq!(
        issues_for(&report, "U+1F600_U+FE0F.png"),
        vec!["codepoint/presentation-selector"]
    );
    assert!(report.has_problems());
}

#[test]
fn test_diagnostics_accumulate_per_rule() {
    // invalid characters, +U separator, missing underscore, missing plus, invalid token
    let fixture = EmojiDirFixture::with_files(&["U+1f+U42.png"]);

    let report = validate_directory(fixture.path()).unwrap();
    assert_eq!(
        issues_for(&report, "U+1f+U42.png"),
        vec![
            "filename/invalid-characters",
            "filename/plus-separator",
            "filename/missing-underscore",
            "filename/missing-plus",
            "codepoint/invalid",
        ]
    );
}

#[test]
fn test_diagnostic_text_names_the_file() {
    let fixture = EmojiDirFixture::with_files(&["readme.txt", "U+0041.png"]);

    let report = validate_directory(fixture.path()).unwrap();
    let lines: Vec<String> = report.issues.iter().map(|i| i.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Filename U+0041.png contains codepoint(s) with leading zeros. \
             Leading zeros should be removed from codepoint(s).",
            "Non-png file readme.txt does not belong in the emoji directory. \
             Only .png files should be placed here.",
        ]
    );
}

#[test]
fn test_subdirectories_are_entries() {
    let fixture = EmojiDirFixture::new();
    fixture.add_file("U+1F600.png");
    fixture.add_dir("extra");

    let report = validate_directory(fixture.path()).unwrap();
    assert_eq!(issues_for(&report, "extra"), vec!["filename/non-png"]);
    assert_eq!(report.files_scanned, 2);
}

#[test]
fn test_scan_is_idempotent() {
    let fixture = EmojiDirFixture::with_files(&["U+41+U+42.png", "notes.md", "U+1F600.png"]);

    let first = validate_directory(fixture.path()).unwrap();
    let second = validate_directory(fixture.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_directory_is_fatal() {
    let fixture = EmojiDirFixture::new();
    let missing = fixture.missing_path();

    match validate_directory(&missing) {
        Err(ScanError::ReadDir { path, .. }) => assert_eq!(path, missing),
        Ok(report) => panic!("expected an error, got {:?}", report),
    }
}

#[test]
fn test_disabled_rules_are_skipped_in_directory_scan() {
    let fixture = EmojiDirFixture::with_files(&["U+1F600_U+FE0F.png", "readme.txt"]);

    let mut registry = RuleRegistry::default_rules();
    registry.disable_rule("codepoint/presentation-selector");
    let report = registry.lint_directory(fixture.path()).unwrap();

    let ids: Vec<&str> = report.issues.iter().map(|i| i.rule_id.as_str()).collect();
    assert_eq!(ids, vec!["filename/non-png"]);
}
