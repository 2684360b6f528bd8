//! Pattern system module - typed name patterns for search-and-mutate flows.

pub mod error;

pub use error::PatternError;

use regex::Regex;

/// Name pattern representation (literal or regex)
///
/// Literal patterns match as substrings anywhere in a name; the empty
/// literal therefore matches every name. Regex patterns match anchored at
/// the start of the name, the same way the naming-convention decoders read
/// identifiers; a pattern that only matches in the middle of a name selects
/// nothing.
#[derive(Debug, Clone)]
pub enum NamePattern {
    Literal(String),
    Regex { original: String, compiled: Regex },
}

impl NamePattern {
    /// Construct a literal (substring) pattern.
    #[must_use]
    pub fn literal(s: &str) -> Self {
        Self::Literal(s.to_string())
    }

    /// Construct a regex pattern, matched from the start of each candidate.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidRegex` naming the offending pattern if
    /// it fails to compile.
    pub fn regex(p: &str) -> Result<Self, PatternError> {
        Regex::new(p)
            .map(|r| Self::Regex { original: p.to_string(), compiled: r })
            .map_err(|e| PatternError::regex_compile(p, &e.to_string()))
    }

    /// Construct from a raw pattern string and a regex flag.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidRegex` when `regex` is set and the
    /// pattern does not compile.
    pub fn from_flag(pattern: &str, regex: bool) -> Result<Self, PatternError> {
        if regex {
            Self::regex(pattern)
        } else {
            Ok(Self::literal(pattern))
        }
    }

    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    #[must_use]
    pub const fn original(&self) -> &str {
        match self {
            Self::Literal(s) => s.as_str(),
            Self::Regex { original, .. } => original.as_str(),
        }
    }

    /// Check a single candidate name against this pattern.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(s) => name.contains(s.as_str()),
            // Leftmost-match semantics: if any match starts at 0, the
            // leftmost one does.
            Self::Regex { compiled, .. } => {
                compiled.find(name).is_some_and(|m| m.start() == 0)
            }
        }
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b))
            | (Self::Regex { original: a, .. }, Self::Regex { original: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for NamePattern {}

/// Return the subset of `names` matched by `pattern`, in input order.
#[must_use]
pub fn match_names(names: &[String], pattern: &NamePattern) -> Vec<String> {
    let matched: Vec<String> = names
        .iter()
        .filter(|name| pattern.matches(name))
        .cloned()
        .collect();
    log::debug!(
        "names matching pattern '{}': {}",
        pattern.original(),
        crate::fmt::bracketed(&matched)
    );
    matched
}
