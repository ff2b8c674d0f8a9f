//! # Positional Pairing
//!
//! Zip-style operations over the top level of nested trees. A Scalar
//! operand is treated as a one-element list wherever a list is expected.
//!
//! - [`zip_pairs`] stops at the shorter operand.
//! - [`zip_longest`] runs to the longer operand, padding with a fill value.
//! - [`transpose`] regroups a matrix by column (`zip(*rows)`).
//! - [`zip_with`] combines two trees structurally, keeping their shape.

use std::iter;
use std::slice;

use nestdot_core::{NestedValue, Scalar};

use crate::flatten::leaves;

/// Pair the top-level children of `a` and `b`, truncating to the shorter.
pub fn zip_pairs<'a>(
    a: &'a NestedValue,
    b: &'a NestedValue,
) -> impl Iterator<Item = (&'a NestedValue, &'a NestedValue)> {
    a.items().iter().zip(b.items())
}

/// Pair the top-level children of `a` and `b` up to the longer operand.
/// Missing positions on the shorter side are filled with `fill`.
pub fn zip_longest<'a>(
    a: &'a NestedValue,
    b: &'a NestedValue,
    fill: &'a NestedValue,
) -> impl Iterator<Item = (&'a NestedValue, &'a NestedValue)> {
    let (xs, ys) = (a.items(), b.items());
    let len = xs.len().max(ys.len());
    (0..len).map(move |i| (xs.get(i).unwrap_or(fill), ys.get(i).unwrap_or(fill)))
}

/// Regroup the rows of `matrix` by column.
///
/// The result has as many rows as the shortest input row; longer rows are
/// truncated. Scalar rows count as one-element rows, and an empty matrix
/// transposes to an empty sequence.
pub fn transpose(matrix: &NestedValue) -> NestedValue {
    let rows = matrix.items();
    let width = rows.iter().map(|row| row.items().len()).min().unwrap_or(0);
    (0..width)
        .map(|col| {
            NestedValue::Sequence(rows.iter().map(|row| row.items()[col].clone()).collect())
        })
        .collect::<Vec<_>>()
        .into()
}

struct Frame<'a> {
    pairs: iter::Zip<slice::Iter<'a, NestedValue>, slice::Iter<'a, NestedValue>>,
    out: Vec<NestedValue>,
}

impl<'a> Frame<'a> {
    fn new(xs: &'a [NestedValue], ys: &'a [NestedValue]) -> Self {
        Self {
            pairs: xs.iter().zip(ys),
            out: Vec::with_capacity(xs.len().min(ys.len())),
        }
    }
}

/// Combine two trees elementwise, preserving the shape they share.
///
/// Matching Sequences are zipped (truncating) and combined recursively.
/// At a ragged position both sides are flattened and the combined values
/// become a flat Sequence in the output.
pub fn zip_with<F>(a: &NestedValue, b: &NestedValue, f: F) -> NestedValue
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    let (xs, ys) = match (a, b) {
        (NestedValue::Sequence(xs), NestedValue::Sequence(ys)) => (xs, ys),
        _ => return combine_leaf(a, b, &f),
    };

    let mut stack = vec![Frame::new(xs, ys)];
    while let Some(frame) = stack.last_mut() {
        match frame.pairs.next() {
            Some((NestedValue::Sequence(xs), NestedValue::Sequence(ys))) => {
                stack.push(Frame::new(xs, ys));
            }
            Some((x, y)) => frame.out.push(combine_leaf(x, y, &f)),
            None => {
                let node = NestedValue::Sequence(std::mem::take(&mut frame.out));
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => parent.out.push(node),
                    None => return node,
                }
            }
        }
    }
    NestedValue::empty()
}

fn combine_leaf<F>(x: &NestedValue, y: &NestedValue, f: &F) -> NestedValue
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    match (x, y) {
        (NestedValue::Scalar(p), NestedValue::Scalar(q)) => NestedValue::Scalar(f(*p, *q)),
        _ => leaves(x).zip(leaves(y)).map(|(p, q)| f(p, q)).collect(),
    }
}
