//! # Nested Vector Reducer
//!
//! Sums a binary combining function (by default multiplication, giving the
//! dot product) over the paired leaves of two nested trees.
//!
//! ## Pairing Rules
//!
//! Children are paired positionally with zip semantics: pairing stops at the
//! shorter sequence and the remainder of the longer one is ignored. For each
//! pair `(a_i, b_i)`:
//!
//! | a_i      | b_i      | contribution                                    |
//! |----------|----------|-------------------------------------------------|
//! | Scalar   | Scalar   | `combine(a_i, b_i)`                             |
//! | Sequence | Sequence | recurse into the pair                           |
//! | mixed    | mixed    | flatten both sides, zip-truncate, sum combined  |
//!
//! The mixed ("ragged") row is a recovery policy, not an error. A Scalar
//! flattens to a one-element sequence, so `5` against `[1, 2]` contributes
//! `5 * 1`. Truncation is silent.
//!
//! ## Traversal
//!
//! The walk keeps one zipped pair of slice iterators per open Sequence pair
//! on a heap-allocated stack. Native stack use is constant regardless of
//! input depth; `ReducerConfig::max_depth` bounds the heap stack instead.

use std::iter::Zip;
use std::slice;

use nestdot_core::{ConfigError, NestdotError, NestedValue, ReduceError, Scalar};

use crate::config::{ReducerConfig, Strategy};
use crate::flatten::leaves;

type PairFrame<'a> = Zip<slice::Iter<'a, NestedValue>, slice::Iter<'a, NestedValue>>;

/// Sum of `combine` over the paired leaves of `a` and `b`.
///
/// Never fails: ragged positions are recovered by flattening.
pub fn reduce_with<F>(a: &NestedValue, b: &NestedValue, combine: F) -> Scalar
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    let (xs, ys) = match (a, b) {
        (NestedValue::Sequence(xs), NestedValue::Sequence(ys)) => (xs, ys),
        _ => return combine_pair(a, b, &combine),
    };

    let mut total = Scalar::ZERO;
    let mut stack: Vec<PairFrame<'_>> = vec![xs.iter().zip(ys.iter())];
    while let Some(pairs) = stack.last_mut() {
        match pairs.next() {
            Some((NestedValue::Sequence(xs), NestedValue::Sequence(ys))) => {
                tracing::trace!(depth = stack.len() + 1, "descending into sequence pair");
                stack.push(xs.iter().zip(ys.iter()));
            }
            Some((x, y)) => total = total + combine_pair(x, y, &combine),
            None => {
                stack.pop();
            }
        }
    }
    total
}

/// Dot product of two nested trees with ragged recovery.
///
/// `dot_product([1, 2, [3, 4, 5]], [6, 7, [8, 9, 0]]) == 80`.
pub fn dot_product(a: &NestedValue, b: &NestedValue) -> Scalar {
    reduce_with(a, b, |x, y| x * y)
}

/// Flatten both trees fully, then zip-truncate and multiply.
///
/// Agrees with [`dot_product`] whenever the two trees have the same shape.
pub fn flat_dot(a: &NestedValue, b: &NestedValue) -> Scalar {
    leaves(a).zip(leaves(b)).map(|(x, y)| x * y).sum()
}

/// Positional product over the top-level pairs with no recovery.
///
/// This is the computation that breaks as soon as an element is itself a
/// sequence, since a sequence cannot be multiplied by a number.
///
/// # Errors
///
/// `ReduceError::NonScalarOperand` carrying the index of the first pair in
/// which either side is a Sequence.
pub fn naive_dot(a: &NestedValue, b: &NestedValue) -> Result<Scalar, ReduceError> {
    a.items()
        .iter()
        .zip(b.items())
        .enumerate()
        .try_fold(Scalar::ZERO, |total, (index, pair)| match pair {
            (NestedValue::Scalar(x), NestedValue::Scalar(y)) => Ok(total + *x * *y),
            _ => Err(ReduceError::NonScalarOperand { index }),
        })
}

fn combine_pair<F>(x: &NestedValue, y: &NestedValue, combine: &F) -> Scalar
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    match (x, y) {
        (NestedValue::Scalar(p), NestedValue::Scalar(q)) => combine(*p, *q),
        _ => {
            tracing::debug!(
                left_leaves = x.leaf_count(),
                right_leaves = y.leaf_count(),
                "ragged pair, flattening both sides"
            );
            leaves(x).zip(leaves(y)).map(|(p, q)| combine(p, q)).sum()
        }
    }
}

/// A reducer bound to a validated [`ReducerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: ReducerConfig,
}

impl Reducer {
    /// Build a reducer, validating the configuration.
    pub fn new(config: ReducerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this reducer was built with.
    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Dot product using the configured strategy.
    ///
    /// # Errors
    ///
    /// `ReduceError::DepthExceeded` when either operand is nested deeper
    /// than `max_depth`; `ReduceError::NonScalarOperand` from the naive
    /// strategy.
    pub fn dot(&self, a: &NestedValue, b: &NestedValue) -> Result<Scalar, ReduceError> {
        self.check_depth(a, b)?;
        tracing::debug!(strategy = %self.config.strategy, "computing dot product");
        match self.config.strategy {
            Strategy::Naive => naive_dot(a, b),
            Strategy::Flatten => Ok(flat_dot(a, b)),
            Strategy::Recursive => Ok(dot_product(a, b)),
        }
    }

    /// Parse two JSON literals and take their dot product.
    ///
    /// # Errors
    ///
    /// `NestdotError::Json` or `NestdotError::Value` when a literal is not a
    /// nested numeric tree, `NestdotError::Reduce` from [`Reducer::dot`].
    pub fn dot_json(&self, a: &str, b: &str) -> Result<Scalar, NestdotError> {
        let a = NestedValue::from_json_str(a)?;
        let b = NestedValue::from_json_str(b)?;
        Ok(self.dot(&a, &b)?)
    }

    /// [`reduce_with`] under the configured depth limit. The strategy does
    /// not apply; pairing is always recursive.
    pub fn reduce_with<F>(
        &self,
        a: &NestedValue,
        b: &NestedValue,
        combine: F,
    ) -> Result<Scalar, ReduceError>
    where
        F: Fn(Scalar, Scalar) -> Scalar,
    {
        self.check_depth(a, b)?;
        Ok(reduce_with(a, b, combine))
    }

    fn check_depth(&self, a: &NestedValue, b: &NestedValue) -> Result<(), ReduceError> {
        if let Some(limit) = self.config.max_depth {
            if a.depth() > limit || b.depth() > limit {
                return Err(ReduceError::DepthExceeded { limit });
            }
        }
        Ok(())
    }
}
