//! # Flatten
//!
//! Depth-first, left-to-right extraction of every Scalar leaf. A Scalar
//! contributes itself; a Sequence contributes its children's leaves in
//! order.
//!
//! [`Leaves`] is the lazy form and the primitive the ragged-pair recovery
//! in the reducer is built on. It keeps one slice iterator per open
//! Sequence, so arbitrarily deep trees never grow the native stack.

use std::slice;

use nestdot_core::{NestedValue, Scalar};

/// Lazy depth-first iterator over the Scalar leaves of a tree.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    root: Option<&'a NestedValue>,
    stack: Vec<slice::Iter<'a, NestedValue>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = Scalar;

    fn next(&mut self) -> Option<Scalar> {
        if let Some(root) = self.root.take() {
            match root {
                NestedValue::Scalar(s) => return Some(*s),
                NestedValue::Sequence(items) => self.stack.push(items.iter()),
            }
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(NestedValue::Scalar(s)) => return Some(*s),
                Some(NestedValue::Sequence(items)) => self.stack.push(items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Iterate the leaves of `tree` without allocating the flat sequence.
pub fn leaves(tree: &NestedValue) -> Leaves<'_> {
    Leaves {
        root: Some(tree),
        stack: Vec::new(),
    }
}

/// All Scalar leaves of `tree`, in depth-first order.
///
/// A lone Scalar flattens to a one-element vector. Flattening an
/// already-flat sequence returns its elements unchanged.
pub fn flatten(tree: &NestedValue) -> Vec<Scalar> {
    leaves(tree).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tree() -> impl Strategy<Value = NestedValue> {
        let leaf = (-1000i64..1000).prop_map(NestedValue::from);
        leaf.prop_recursive(5, 64, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(NestedValue::Sequence)
        })
    }

    proptest! {
        /// Flattening is idempotent once the result is a flat sequence.
        #[test]
        fn flatten_is_idempotent(t in tree()) {
            let once = flatten(&t);
            let twice = flatten(&once.iter().copied().collect::<NestedValue>());
            prop_assert_eq!(once, twice);
        }

        /// The flat sequence holds exactly one entry per leaf.
        #[test]
        fn flatten_preserves_leaf_count(t in tree()) {
            prop_assert_eq!(flatten(&t).len(), t.leaf_count());
        }
    }
}
