//! # Error Hierarchy
//!
//! Structured error types for the whole workspace, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Ragged nesting is deliberately absent from this hierarchy: a Sequence
//! paired with a Scalar is recovered by flattening, never reported. The
//! variants below cover malformed input and explicit limits only.
//!
//! `NestdotError` joins the failures of parsing and reducing, the two steps
//! a caller chains with `?`. `ConfigError` stands alone: it is raised once,
//! when a reducer is built, before any operand is seen. File and YAML
//! failures belong to the CLI, which reports them through `anyhow`.

use thiserror::Error;

/// Top-level error type for nestdot.
#[derive(Error, Debug)]
pub enum NestdotError {
    /// A literal could not be interpreted as a nested numeric value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A reduction over two trees could not be completed.
    #[error("reduce error: {0}")]
    Reduce(#[from] ReduceError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while building a [`NestedValue`](crate::NestedValue) from
/// untyped input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A node is neither a number nor an array.
    #[error("expected number or array at {path}, found {found}")]
    TypeMismatch {
        /// Pointer-style path of the offending node, e.g. `/2/0`.
        path: String,
        /// JSON kind that was found instead.
        found: &'static str,
    },

    /// A JSON number that fits neither `i64` nor `f64`.
    #[error("number at {path} is not representable as i64 or f64")]
    UnrepresentableNumber {
        /// Pointer-style path of the offending node.
        path: String,
    },
}

/// Errors from the pairwise reducers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// The naive positional product met a Sequence where it needed a Scalar.
    #[error("cannot multiply a sequence at position {index}: operand is not a scalar")]
    NonScalarOperand {
        /// Top-level position of the first non-scalar pair.
        index: usize,
    },

    /// Input trees are nested deeper than the configured limit.
    #[error("nesting depth exceeds configured limit of {limit}")]
    DepthExceeded {
        /// The configured `max_depth`.
        limit: usize,
    },
}

/// Errors in reducer configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration field holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_display_names_path_and_kind() {
        let err = ValueError::TypeMismatch {
            path: "/2/0".into(),
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "expected number or array at /2/0, found string"
        );
    }

    #[test]
    fn reduce_error_converts_into_top_level() {
        let err: NestdotError = ReduceError::DepthExceeded { limit: 8 }.into();
        assert!(matches!(
            err,
            NestdotError::Reduce(ReduceError::DepthExceeded { limit: 8 })
        ));
        assert!(err.to_string().contains("limit of 8"));
    }

    #[test]
    fn parse_failures_convert_into_top_level() {
        let err: NestdotError = ValueError::UnrepresentableNumber { path: "/0".into() }.into();
        assert_eq!(
            err.to_string(),
            "value error: number at /0 is not representable as i64 or f64"
        );
        let json = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: NestdotError = json.into();
        assert!(matches!(err, NestdotError::Json(_)));
    }

    #[test]
    fn non_scalar_operand_reports_index() {
        let err = ReduceError::NonScalarOperand { index: 2 };
        assert!(err.to_string().contains("position 2"));
    }
}
