#![no_main]

use emoji_lint::RuleRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    let report = RuleRegistry::default_rules().lint_filename(name);
    assert_eq!(report.ok, report.issues.is_empty());
    assert_eq!(report.files_scanned, 1);
});
