//! # Reducer Configuration
//!
//! Settings a caller can fix once and reuse across calls: which strategy
//! `Reducer::dot` uses and how deep an input tree may be nested.
//! Deserializable with `serde`, so the CLI loads it from YAML:
//!
//! ```yaml
//! strategy: recursive
//! max_depth: 64
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use nestdot_core::ConfigError;

/// How two trees are paired when computing a dot product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Positional product over the top level with no recovery. Fails on the
    /// first Sequence operand.
    Naive,
    /// Flatten both trees fully, then zip and multiply.
    Flatten,
    /// Recurse into matching Sequences; flatten only at ragged positions.
    #[default]
    Recursive,
}

impl Strategy {
    /// All strategies, in the order the failure case and its remedies are
    /// usually presented.
    pub fn all() -> &'static [Strategy] {
        &[Strategy::Naive, Strategy::Flatten, Strategy::Recursive]
    }

    /// The snake_case name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Flatten => "flatten",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::all()
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "unknown strategy {s:?}; expected one of naive, flatten, recursive"
                ))
            })
    }
}

/// Reducer settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReducerConfig {
    /// Pairing strategy for `Reducer::dot`.
    #[serde(default)]
    pub strategy: Strategy,

    /// Deepest nesting accepted in either operand. `None` means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl ReducerConfig {
    /// Reject settings that cannot be honored.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` when `max_depth` is zero: every sequence has
    /// depth at least one, so such a reducer could only accept bare scalars.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_recursive_and_unbounded() {
        let config = ReducerConfig::default();
        assert_eq!(config.strategy, Strategy::Recursive);
        assert_eq!(config.max_depth, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = ReducerConfig {
            max_depth: Some(0),
            ..ReducerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn strategy_from_str_roundtrips_display() {
        for strategy in Strategy::all() {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, *strategy);
        }
        assert!("numpy".parse::<Strategy>().is_err());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ReducerConfig = serde_json::from_str(r#"{"max_depth": 12}"#).unwrap();
        assert_eq!(config.max_depth, Some(12));
        assert_eq!(config.strategy, Strategy::Recursive);

        let config: ReducerConfig = serde_json::from_str(r#"{"strategy": "flatten"}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Flatten);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ReducerConfig, _> = serde_json::from_str(r#"{"fill": 0}"#);
        assert!(result.is_err());
    }
}
