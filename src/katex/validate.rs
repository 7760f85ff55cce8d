//! Authoring checks for the rule table.
//!
//! The engine never fails at conversion time, so mistakes in the table
//! have to be caught when the table changes. These checks enforce the
//! conventions documented in [`table`](super::table) and are exercised by
//! the test suite over the whole of [`RULES`](super::table::RULES).

use regex::Regex;
use std::fmt;

use super::table::Rule;

/// A rule that breaks an authoring convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Index of the offending rule in the table.
    pub index: usize,
    /// The offending pattern text.
    pub pattern: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The pattern is not valid regex syntax.
    InvalidPattern(String),
    /// A `.*` wildcard without the lazy `?`, which would swallow text
    /// between two delimited groups.
    GreedyWildcard,
    /// A bare command-name pattern without a trailing `\b`, which would
    /// corrupt longer commands sharing the prefix.
    UnanchoredName,
    /// A replacement containing a `$` that is not a capture reference.
    StrayDollar,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::InvalidPattern(msg) => {
                write!(f, "rule {}: pattern {:?} is invalid: {}", self.index, self.pattern, msg)
            }
            ViolationKind::GreedyWildcard => {
                write!(f, "rule {}: pattern {:?} uses a greedy .* wildcard", self.index, self.pattern)
            }
            ViolationKind::UnanchoredName => {
                write!(f, "rule {}: bare command pattern {:?} lacks a trailing \\b", self.index, self.pattern)
            }
            ViolationKind::StrayDollar => {
                write!(f, "rule {}: replacement for {:?} has a stray $", self.index, self.pattern)
            }
        }
    }
}

/// Check every rule against the authoring conventions.
///
/// Returns all violations found; an empty vec means the table is clean.
pub fn check_table(rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        let mut push = |kind| {
            violations.push(Violation {
                index,
                pattern: rule.pattern.to_string(),
                kind,
            })
        };
        if let Err(e) = Regex::new(rule.pattern) {
            push(ViolationKind::InvalidPattern(e.to_string()));
        }
        if has_greedy_wildcard(rule.pattern) {
            push(ViolationKind::GreedyWildcard);
        }
        if is_bare_command(rule.pattern) && !rule.pattern.ends_with(r"\b") {
            push(ViolationKind::UnanchoredName);
        }
        if has_stray_dollar(rule.replacement) {
            push(ViolationKind::StrayDollar);
        }
    }
    violations
}

/// True if the pattern contains `.*` not immediately followed by `?`.
fn has_greedy_wildcard(pattern: &str) -> bool {
    pattern
        .match_indices(".*")
        .any(|(i, _)| pattern.as_bytes().get(i + 2) != Some(&b'?'))
}

/// True if the pattern matches nothing but a literal backslash command
/// name: `\\` followed by ASCII letters, optionally ending in `\b`.
fn is_bare_command(pattern: &str) -> bool {
    let Some(rest) = pattern.strip_prefix(r"\\") else {
        return false;
    };
    let rest = rest.strip_suffix(r"\b").unwrap_or(rest);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_alphabetic())
}

/// True if the replacement uses `$` other than as a capture reference.
fn has_stray_dollar(replacement: &str) -> bool {
    let bytes = replacement.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'$'
            && !matches!(bytes.get(i + 1), Some(c) if c.is_ascii_digit() || *c == b'{' || *c == b'$')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::katex::table::{Rule, RULES};

    #[test]
    fn test_shipped_table_is_clean() {
        let violations = check_table(RULES);
        assert!(
            violations.is_empty(),
            "table violations:\n{}",
            violations
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let table = [Rule::del(r"(\\oops")];
        let violations = check_table(&table);
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0].kind, ViolationKind::InvalidPattern(_)));
    }

    #[test]
    fn test_greedy_wildcard_is_reported() {
        let table = [Rule::del(r"\\cmd\{.*\}")];
        let violations = check_table(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::GreedyWildcard);
    }

    #[test]
    fn test_lazy_wildcard_is_accepted() {
        assert!(check_table(&[Rule::del(r"\\cmd\{.*?\}")]).is_empty());
    }

    #[test]
    fn test_unanchored_name_is_reported() {
        let table = [Rule::del(r"\\up")];
        let violations = check_table(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::UnanchoredName);
    }

    #[test]
    fn test_anchored_name_is_accepted() {
        assert!(check_table(&[Rule::del(r"\\up\b")]).is_empty());
    }

    #[test]
    fn test_stray_dollar_is_reported() {
        let table = [Rule::sub(r"\\price\b", "$ 5")];
        let violations = check_table(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::StrayDollar);
    }

    #[test]
    fn test_capture_reference_is_accepted() {
        assert!(check_table(&[Rule::sub(r"\\x\{(.*?)\}", "${1}")]).is_empty());
    }
}
