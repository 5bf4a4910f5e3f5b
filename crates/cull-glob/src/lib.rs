pub mod matcher;

pub use matcher::{glob_match, glob_match_with, MatchOptions};
