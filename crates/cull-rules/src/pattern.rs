/// One parsed rule line: the glob text plus its negation flag.
///
/// Anchoring is not stored; the matcher re-derives it from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    negated: bool,
}

impl Pattern {
    /// Parse one rule-file line. Returns `None` for blank lines and `#`
    /// comments. A leading `!` marks negation and is stripped; trailing `/`
    /// characters are stripped unconditionally.
    pub fn parse(line: &str) -> Option<Pattern> {
        if line.trim().is_empty() || line.starts_with('#') {
            return None;
        }
        let mut rest = line.trim_end_matches(' ');
        let negated = rest.starts_with('!');
        if negated {
            rest = rest.trim_start_matches('!');
        }
        Some(Pattern {
            text: rest.trim_end_matches('/').to_string(),
            negated,
        })
    }

    pub(crate) fn verbatim(text: &str, negated: bool) -> Pattern {
        Pattern {
            text: text.to_string(),
            negated,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn negated(&self) -> bool {
        self.negated
    }
}
