pub mod error;
pub mod manager;
pub mod pattern;
pub mod ruleset;

pub use error::RulesError;
pub use manager::MatcherManager;
pub use pattern::Pattern;
pub use ruleset::{RuleSet, IGNORE_FILE};
