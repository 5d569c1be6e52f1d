use std::fmt;
use std::str::FromStr;

use crate::classify::table::{self, Category};
use crate::foundation::error::{ProjscaleError, ProjscaleResult};
use crate::tree::path::PropertyPath;

/// Caller-supplied opt-out from bare-key classification.
///
/// `key` excludes the key everywhere; `ancestor.key` excludes it only below an ancestor key of
/// that name. Excluded fields pass through untouched together with their whole subtree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExclusionRule {
    key: String,
    within: Option<String>,
}

impl ExclusionRule {
    /// Exclude `key` wherever it appears.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            within: None,
        }
    }

    /// Exclude `key` only below an ancestor named `ancestor`.
    pub fn within(ancestor: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            within: Some(ancestor.into()),
        }
    }

    /// True when this rule applies to `key` inside the object at `path`.
    pub fn matches(&self, key: &str, path: &PropertyPath<'_>) -> bool {
        self.key == key
            && self
                .within
                .as_deref()
                .is_none_or(|ancestor| path.contains_key(ancestor))
    }
}

impl FromStr for ExclusionRule {
    type Err = ProjscaleError;

    fn from_str(s: &str) -> ProjscaleResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProjscaleError::validation("exclusion rule must be non-empty"));
        }
        match s.split_once('.') {
            None => Ok(Self::key(s)),
            Some((ancestor, key)) if !ancestor.is_empty() && !key.is_empty() => {
                Ok(Self::within(ancestor, key))
            }
            Some(_) => Err(ProjscaleError::validation(format!(
                "exclusion rule '{s}' must be 'key' or 'ancestor.key'"
            ))),
        }
    }
}

impl fmt::Display for ExclusionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.within {
            Some(ancestor) => write!(f, "{ancestor}.{}", self.key),
            None => f.write_str(&self.key),
        }
    }
}

/// Built-in classification tables plus caller exclusions.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    rules: Vec<ExclusionRule>,
}

impl Classifier {
    /// Classifier using only the built-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclusion rule.
    pub fn with_rule(mut self, rule: ExclusionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Active exclusion rules.
    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }

    /// True when the field must be left untouched, subtree included.
    pub fn is_excluded(&self, key: &str, path: &PropertyPath<'_>) -> bool {
        table::is_excluded(key) || self.rules.iter().any(|r| r.matches(key, path))
    }

    /// Category of `key` inside the object at `path`.
    pub fn classify(&self, key: &str, path: &PropertyPath<'_>) -> Category {
        if self.is_excluded(key, path) {
            return Category::PassThrough;
        }
        table::classify(key, path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/rules.rs"]
mod tests;
