use crate::ruleset::{normalize_root, RuleSet};

/// Probes a directory for an ignore file and owns the resulting [`RuleSet`].
///
/// The state is decided once, at construction: either the directory has a
/// readable ignore file (`found_match()` is true) or it does not. An absent
/// or unreadable file is a normal condition, not an error.
pub struct MatcherManager {
    rules: Option<RuleSet>,
}

impl MatcherManager {
    pub fn new(root_dir: &str) -> MatcherManager {
        let root = normalize_root(root_dir);
        let rules = match RuleSet::from_file(&root) {
            Ok(rules) => {
                tracing::debug!(root = %root, rules = rules.patterns().len(), "loaded ignore file");
                Some(rules)
            }
            Err(_) => {
                tracing::debug!(root = %root, "no readable ignore file");
                None
            }
        };
        MatcherManager { rules }
    }

    pub fn found_match(&self) -> bool {
        self.rules.is_some()
    }

    /// Whether `path` (relative to the root, forward slashes) is excluded.
    ///
    /// # Panics
    ///
    /// Panics if `found_match()` is false; callers must check it first.
    pub fn matches(&self, path: &str) -> bool {
        self.rules().matches(path)
    }

    /// The normalized root directory, ending with one separator.
    ///
    /// # Panics
    ///
    /// Panics if `found_match()` is false; callers must check it first.
    pub fn path(&self) -> &str {
        self.rules().root()
    }

    fn rules(&self) -> &RuleSet {
        self.rules
            .as_ref()
            .expect("MatcherManager used without a rule file; check found_match() first")
    }
}
