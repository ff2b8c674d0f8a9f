//! # Nested Value: The Tagged Tree
//!
//! `NestedValue` is the single representation of a nested numeric sequence:
//! either a [`Scalar`] leaf or an ordered `Sequence` of further values.
//! Depth and branching are unconstrained, and two trees handed to a reducer
//! may disagree in shape at any position.
//!
//! ## Parsing
//!
//! Untyped input arrives as JSON. Numbers become scalars, arrays become
//! sequences, and every other JSON kind is rejected with
//! [`ValueError::TypeMismatch`] naming the path of the offending node.
//! Serialization is the inverse untagged form, so `[1, 2, [3]]` round-trips
//! unchanged.
//!
//! ## Deep Trees
//!
//! Structural queries (`depth`, `leaf_count`) walk an explicit stack and do
//! not recurse on the native call stack. So do `Clone`, `PartialEq` and
//! `Drop`, which lets a tree of arbitrary depth be built, copied, compared
//! and released on a small thread. `Debug`, `Display` and `Serialize` still
//! recurse; parsing is bounded by serde_json's own recursion limit.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NestdotError, ValueError};
use crate::scalar::Scalar;

/// A numeric leaf or an ordered sequence of nested values.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged, try_from = "serde_json::Value")]
pub enum NestedValue {
    /// A numeric leaf.
    Scalar(Scalar),
    /// An ordered list of children.
    Sequence(Vec<NestedValue>),
}

impl NestedValue {
    /// Parse a JSON literal such as `[1, 2, [3, 4, 5]]`.
    ///
    /// # Errors
    ///
    /// Returns `NestdotError::Json` for syntactically invalid JSON and
    /// `NestdotError::Value` for JSON that is not a nested numeric tree.
    pub fn from_json_str(literal: &str) -> Result<Self, NestdotError> {
        let value: Value = serde_json::from_str(literal)?;
        Ok(Self::try_from(&value)?)
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        NestedValue::Sequence(Vec::new())
    }

    /// Returns `true` for a Scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, NestedValue::Scalar(_))
    }

    /// The leaf value, if this node is a Scalar.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            NestedValue::Scalar(s) => Some(*s),
            NestedValue::Sequence(_) => None,
        }
    }

    /// The children, if this node is a Sequence.
    pub fn as_sequence(&self) -> Option<&[NestedValue]> {
        match self {
            NestedValue::Scalar(_) => None,
            NestedValue::Sequence(items) => Some(items),
        }
    }

    /// Children when this node is treated as a list: a Sequence yields its
    /// items, a Scalar yields itself as a one-element slice.
    pub fn items(&self) -> &[NestedValue] {
        match self {
            NestedValue::Scalar(_) => std::slice::from_ref(self),
            NestedValue::Sequence(items) => items,
        }
    }

    /// Maximum nesting depth. A Scalar has depth 0; `[1]` and `[]` have depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            if let NestedValue::Sequence(items) = node {
                deepest = deepest.max(level + 1);
                stack.extend(items.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }

    /// Number of Scalar leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                NestedValue::Scalar(_) => count += 1,
                NestedValue::Sequence(items) => stack.extend(items.iter()),
            }
        }
        count
    }
}

impl Clone for NestedValue {
    fn clone(&self) -> Self {
        let items = match self {
            NestedValue::Scalar(s) => return NestedValue::Scalar(*s),
            NestedValue::Sequence(items) => items,
        };

        let mut stack: Vec<(slice::Iter<'_, NestedValue>, Vec<NestedValue>)> =
            vec![(items.iter(), Vec::with_capacity(items.len()))];
        while let Some((iter, out)) = stack.last_mut() {
            match iter.next() {
                Some(NestedValue::Scalar(s)) => out.push(NestedValue::Scalar(*s)),
                Some(NestedValue::Sequence(children)) => {
                    stack.push((children.iter(), Vec::with_capacity(children.len())));
                }
                None => {
                    let node = NestedValue::Sequence(std::mem::take(out));
                    stack.pop();
                    match stack.last_mut() {
                        Some((_, parent)) => parent.push(node),
                        None => return node,
                    }
                }
            }
        }
        NestedValue::empty()
    }
}

impl PartialEq for NestedValue {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (NestedValue::Scalar(x), NestedValue::Scalar(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (NestedValue::Sequence(xs), NestedValue::Sequence(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    stack.extend(xs.iter().zip(ys));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Drop for NestedValue {
    fn drop(&mut self) {
        let NestedValue::Sequence(items) = self else {
            return;
        };
        if items.iter().all(NestedValue::is_scalar) {
            return;
        }
        // Children are detached before each node is released, so the
        // compiler-generated drop of any single node never descends.
        let mut pending = std::mem::take(items);
        while let Some(mut node) = pending.pop() {
            if let NestedValue::Sequence(children) = &mut node {
                pending.append(children);
            }
        }
    }
}

impl From<Scalar> for NestedValue {
    fn from(s: Scalar) -> Self {
        NestedValue::Scalar(s)
    }
}

impl From<i64> for NestedValue {
    fn from(n: i64) -> Self {
        NestedValue::Scalar(Scalar::Int(n))
    }
}

impl From<i32> for NestedValue {
    fn from(n: i32) -> Self {
        NestedValue::Scalar(Scalar::from(n))
    }
}

impl From<f64> for NestedValue {
    fn from(f: f64) -> Self {
        NestedValue::Scalar(Scalar::Float(f))
    }
}

impl From<Vec<NestedValue>> for NestedValue {
    fn from(items: Vec<NestedValue>) -> Self {
        NestedValue::Sequence(items)
    }
}

impl FromIterator<Scalar> for NestedValue {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        NestedValue::Sequence(iter.into_iter().map(NestedValue::Scalar).collect())
    }
}

impl TryFrom<&Value> for NestedValue {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        convert(value, "/")
    }
}

impl TryFrom<Value> for NestedValue {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, ValueError> {
        Self::try_from(&value)
    }
}

fn convert(value: &Value, path: &str) -> Result<NestedValue, ValueError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(NestedValue::Scalar(Scalar::Int(i)))
            } else if let Some(f) = n.as_f64() {
                Ok(NestedValue::Scalar(Scalar::Float(f)))
            } else {
                Err(ValueError::UnrepresentableNumber {
                    path: path.to_string(),
                })
            }
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert(item, &child_path(path, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(NestedValue::Sequence),
        other => Err(ValueError::TypeMismatch {
            path: path.to_string(),
            found: json_kind(other),
        }),
    }
}

fn child_path(parent: &str, index: usize) -> String {
    if parent == "/" {
        format!("/{index}")
    } else {
        format!("{parent}/{index}")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for NestedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedValue::Scalar(s) => write!(f, "{s}"),
            NestedValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Build a [`NestedValue`] from a bracketed literal.
///
/// ```
/// use nestdot_core::{nested, NestedValue};
///
/// let v = nested!([1, 2, [3, 4, 5]]);
/// assert_eq!(v.leaf_count(), 5);
/// ```
#[macro_export]
macro_rules! nested {
    ([$($elem:tt),* $(,)?]) => {
        $crate::NestedValue::Sequence(vec![$($crate::nested!($elem)),*])
    };
    ($leaf:expr) => {
        $crate::NestedValue::from($leaf)
    };
}
