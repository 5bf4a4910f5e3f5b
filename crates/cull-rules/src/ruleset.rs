use std::path::Path;

use cull_glob::glob_match;

use crate::pattern::Pattern;
use crate::RulesError;

/// Name of the per-directory rule file.
pub const IGNORE_FILE: &str = ".gitignore";

/// Normalize a directory path to end with exactly one separator.
pub(crate) fn normalize_root(root: &str) -> String {
    format!("{}/", root.trim_end_matches('/'))
}

/// The ordered rules loaded from one ignore file.
///
/// Immutable after construction; file order is preserved and an implicit
/// `/.git` rule is appended last so version-control metadata is always
/// excluded.
#[derive(Debug, Clone)]
pub struct RuleSet {
    patterns: Vec<Pattern>,
    has_negates: bool,
    root: String,
}

impl RuleSet {
    /// Parse rule-file content for the directory `root`.
    pub fn parse(root: &str, content: &str) -> RuleSet {
        let mut patterns = Vec::new();
        let mut has_negates = false;
        for line in content.lines() {
            if let Some(pattern) = Pattern::parse(line) {
                has_negates |= pattern.negated();
                patterns.push(pattern);
            }
        }
        patterns.push(Pattern::verbatim("/.git", false));
        RuleSet {
            patterns,
            has_negates,
            root: normalize_root(root),
        }
    }

    /// Read and parse `<root>/.gitignore`.
    pub fn from_file(root: &str) -> Result<RuleSet, RulesError> {
        let root = normalize_root(root);
        let content = std::fs::read_to_string(Path::new(&root).join(IGNORE_FILE))?;
        Ok(RuleSet::parse(&root, &content))
    }

    /// Whether `path` (relative to the root, forward slashes) is excluded.
    ///
    /// Rules are scanned in file order. The first match tentatively excludes
    /// the path; only a negated rule *after* that match can rescue it. A
    /// negation that precedes a later matching rule does not suppress it.
    pub fn matches(&self, path: &str) -> bool {
        for (idx, pattern) in self.patterns.iter().enumerate() {
            if glob_match(path, pattern.text()) {
                if self.has_negates {
                    for later in &self.patterns[idx + 1..] {
                        if later.negated() && glob_match(path, later.text()) {
                            return false;
                        }
                    }
                }
                return true;
            }
        }
        false
    }

    /// The root directory, always ending with one separator.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// All rules in file order, the implicit `/.git` rule included.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn has_negates(&self) -> bool {
        self.has_negates
    }
}
