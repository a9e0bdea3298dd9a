//! Comparison options.
//!
//! Options are plain data: an ignore list of simple field names plus the
//! traversal guards. They deserialize from TOML or YAML so that test
//! suites and the CLI can keep them next to their fixtures:
//!
//! ```toml
//! ignore_fields = ["id", "created_at"]
//! max_depth = 64
//! cycle_policy = "reject"
//! ```

use crate::errors::{DeepEqError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Simple field names excluded from comparison at every depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet(BTreeSet<String>);

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.0.insert(field.into())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for IgnoreSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

/// What to do when a composite pair is reached again while it is still
/// being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Treat the revisited pair as equal; cyclic graphs compare equal when
    /// they are isomorphic.
    #[default]
    AssumeEqual,
    /// Treat the revisit as a guard violation.
    Reject,
}

/// Options for a comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// Fields to ignore when comparing (e.g., timestamps, IDs)
    pub ignore_fields: IgnoreSet,
    /// Maximum nesting depth before the walk gives up; unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    pub cycle_policy: CyclePolicy,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignore_fields: IgnoreSet::new(),
            max_depth: None,
            cycle_policy: CyclePolicy::default(),
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_field(mut self, field: &str) -> Self {
        self.ignore_fields.insert(field);
        self
    }

    pub fn ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_fields.extend(fields);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Check invariants that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// `InvalidOptions` when `max_depth` is zero or an ignored name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(DeepEqError::InvalidOptions {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        if self.ignore_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(DeepEqError::InvalidOptions {
                reason: "ignore_fields must not contain blank names".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate options from TOML.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed TOML or unknown keys, `InvalidOptions` when
    /// validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self = toml::from_str(text).map_err(|e| DeepEqError::Parse {
            format: "toml".to_string(),
            reason: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from YAML.
    ///
    /// # Errors
    ///
    /// `Parse` for malformed YAML or unknown keys, `InvalidOptions` when
    /// validation fails.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(text).map_err(|e| DeepEqError::Parse {
            format: "yaml".to_string(),
            reason: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }
}
