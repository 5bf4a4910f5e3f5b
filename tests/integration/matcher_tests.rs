use std::fs;

use cull_glob::{glob_match, glob_match_with, MatchOptions};
use cull_rules::{MatcherManager, RuleSet, IGNORE_FILE};

fn make_root(rules: &str) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(IGNORE_FILE), rules).unwrap();
    tmp
}

fn manager_for(tmp: &tempfile::TempDir) -> MatcherManager {
    MatcherManager::new(tmp.path().to_str().unwrap())
}

// === Basename matching: patterns without a separator match the last segment ===
#[test]
fn basename_matching_end_to_end() {
    let tmp = make_root("*.txt\n");
    let manager = manager_for(&tmp);
    assert!(manager.found_match());
    assert!(manager.matches("a/b/c.txt"));
    assert!(manager.matches("c.txt"));
    assert!(!manager.matches("a/b/c.md"));
}

// === Recursive wildcard ===
#[test]
fn recursive_wildcard() {
    assert!(glob_match("foo", "**/foo"));
    assert!(glob_match("a/foo", "**/foo"));
    assert!(glob_match("a/b/foo", "**/foo"));

    let tmp = make_root("**/node_modules\n");
    let manager = manager_for(&tmp);
    assert!(manager.matches("node_modules"));
    assert!(manager.matches("packages/app/node_modules"));
    assert!(!manager.matches("node_modules_backup"));
}

// === Trailing double-star requires a segment after the slash ===
#[test]
fn trailing_double_star() {
    assert!(glob_match("a/x", "a/**"));
    assert!(!glob_match("a", "a/**"));

    let tmp = make_root("build/**\n");
    let manager = manager_for(&tmp);
    assert!(manager.matches("build/out.o"));
    assert!(manager.matches("build/deep/out.o"));
}

// === Negation precedence is forward-only ===
#[test]
fn negation_precedence() {
    let tmp = make_root("*.log\n!important.log\n");
    let manager = manager_for(&tmp);
    assert!(manager.matches("debug.log"));
    assert!(!manager.matches("important.log"));
}

#[test]
fn negation_before_blanket_is_not_retroactive() {
    let tmp = make_root("!keep.txt\n*.txt\n");
    let manager = manager_for(&tmp);
    // the leading negation is itself the first match and nothing negated
    // follows it, so the path stays excluded
    assert!(manager.matches("keep.txt"));
    assert!(manager.matches("other.txt"));
}

// === The implicit /.git rule is anchored to the root ===
#[test]
fn implicit_git_exclusion() {
    let tmp = make_root("*.log\n");
    let manager = manager_for(&tmp);
    assert!(manager.matches(".git"));
    assert!(!manager.matches("sub/.git"));

    // present even with an empty rule file
    let tmp = make_root("");
    let manager = manager_for(&tmp);
    assert!(manager.matches(".git"));
}

// === Case sensitivity ===
#[test]
fn case_sensitivity_default_and_flag() {
    assert!(!glob_match("FILE.TXT", "file.txt"));
    let opts = MatchOptions {
        case_insensitive: true,
        ..MatchOptions::default()
    };
    assert!(glob_match_with("FILE.TXT", "file.txt", opts));
}

// === Parsing the same content twice yields identical verdicts ===
#[test]
fn parsing_is_deterministic() {
    let content = "# comment\n*.log\n!keep.log\n/dist\ntarget/\n**/cache\n";
    let a = RuleSet::parse("/repo", content);
    let b = RuleSet::parse("/repo", content);
    let probes = [
        "debug.log",
        "keep.log",
        "dist",
        "nested/dist",
        "target",
        "a/target",
        "x/cache",
        ".git",
        "src/main.rs",
    ];
    for path in probes {
        assert_eq!(a.matches(path), b.matches(path), "diverged on {path}");
    }
}

// === Manager lifecycle ===
#[test]
fn absent_rule_file_is_not_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let manager = manager_for(&tmp);
    assert!(!manager.found_match());
}

#[test]
fn manager_path_is_normalized() {
    let tmp = make_root("*.log\n");
    let root = tmp.path().to_str().unwrap();
    let manager = MatcherManager::new(root);
    assert!(manager.path().ends_with('/'));
    assert!(!manager.path().ends_with("//"));
}

#[test]
fn two_managers_are_independent() {
    let logs = make_root("*.log\n");
    let texts = make_root("*.txt\n");
    let m1 = manager_for(&logs);
    let m2 = manager_for(&texts);
    assert!(m1.matches("a.log"));
    assert!(!m1.matches("a.txt"));
    assert!(m2.matches("a.txt"));
    assert!(!m2.matches("a.log"));
}

// === A realistic rule file ===
#[test]
fn realistic_rule_file() {
    let tmp = make_root(
        "# build output\n\
         /target\n\
         *.o\n\
         *.log\n\
         !build.log\n\
         .env\n\
         docs/**/draft-*\n",
    );
    let manager = manager_for(&tmp);

    assert!(manager.matches("target"));
    assert!(!manager.matches("vendor/target"));
    assert!(manager.matches("src/lib.o"));
    assert!(manager.matches("trace.log"));
    assert!(!manager.matches("build.log"));
    assert!(manager.matches(".env"));
    assert!(manager.matches("docs/rfc/draft-001.md"));
    assert!(!manager.matches("docs/rfc/final-001.md"));
    assert!(!manager.matches("src/main.rs"));
    assert!(manager.matches(".git"));
}

// === Malformed rules are tolerated, never fatal ===
#[test]
fn malformed_rules_are_tolerated() {
    let tmp = make_root("file[0-9\n*.log\n");
    let manager = manager_for(&tmp);
    assert!(!manager.matches("file1"));
    assert!(manager.matches("debug.log"));
}
