//! Hidden-path rules applied while a tree is built.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// Patterns hidden by every store unless configured otherwise.
pub const DEFAULT_HIDDEN_PATTERNS: &[&str] = &[r"/node_modules/", r"/\.next", r"/\.astro"];

/// A single hiding rule.
#[derive(Clone)]
pub enum HiddenRule {
    /// Matches when the final path segment equals the name.
    Exact(String),
    /// Matches when the regex finds a match anywhere in the full path.
    Pattern(Regex),
}

impl HiddenRule {
    pub fn exact(name: impl Into<String>) -> Self {
        HiddenRule::Exact(name.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(HiddenRule::Pattern)
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, path: &str, name: &str) -> bool {
        match self {
            HiddenRule::Exact(exact) => exact == name,
            HiddenRule::Pattern(re) => re.is_match(path),
        }
    }
}

impl fmt::Debug for HiddenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiddenRule::Exact(name) => f.debug_tuple("Exact").field(name).finish(),
            HiddenRule::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}

impl PartialEq for HiddenRule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HiddenRule::Exact(a), HiddenRule::Exact(b)) => a == b,
            (HiddenRule::Pattern(a), HiddenRule::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

/// The built-in rules, in order.
pub fn default_hidden_rules() -> Vec<HiddenRule> {
    DEFAULT_HIDDEN_PATTERNS
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .map(HiddenRule::Pattern)
        .collect()
}

/// Whether any rule hides `path`, whose last segment is `name`.
pub fn is_hidden(path: &str, name: &str, rules: &[HiddenRule]) -> bool {
    rules.iter().any(|rule| rule.matches(path, name))
}
