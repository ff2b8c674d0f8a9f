//! # Scalar: Numeric Leaf Values
//!
//! A leaf of a nested tree is either an integer or a float. Integer
//! arithmetic stays integral so that `[1, 2] · [3, 4]` prints `11`, not
//! `11.0`.
//!
//! ## Arithmetic Rules
//!
//! - `Int ∘ Int` stays `Int` unless the `i64` operation overflows, in which
//!   case the result is promoted to `Float`.
//! - Any operation involving a `Float` yields a `Float`.
//! - Equality is numeric: `Int(2) == Float(2.0)`. Mixed comparisons go
//!   through `f64`, so above 2^53 they are not transitive:
//!   `Int(2^53 + 1) == Float(2^53)` and `Float(2^53) == Int(2^53)`, while
//!   `Int(2^53 + 1) != Int(2^53)`. `Scalar` is therefore `PartialEq` only.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A single numeric leaf value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
}

impl Scalar {
    /// The additive identity (`Int(0)`).
    pub const ZERO: Scalar = Scalar::Int(0);

    /// Lossy conversion to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Int(n) => n as f64,
            Scalar::Float(f) => f,
        }
    }

    /// Returns `true` for the `Int` variant.
    pub fn is_int(self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    fn combine(
        self,
        rhs: Scalar,
        checked: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Scalar {
        match (self, rhs) {
            (Scalar::Int(a), Scalar::Int(b)) => match checked(a, b) {
                Some(n) => Scalar::Int(n),
                None => Scalar::Float(float(a as f64, b as f64)),
            },
            (a, b) => Scalar::Float(float(a.as_f64(), b.as_f64())),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::ZERO
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, Add::add)
    }
}

/// Two `Int`s compare exactly; any pair involving a `Float` compares as
/// `f64`. Integers beyond 2^53 round in that conversion, so mixed equality
/// is not transitive there.
impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(i64::from(n))
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_arithmetic_stays_integral() {
        let product = Scalar::Int(6) * Scalar::Int(7);
        assert!(product.is_int());
        assert_eq!(product, Scalar::Int(42));
        assert_eq!(Scalar::Int(40) + Scalar::Int(2), Scalar::Int(42));
    }

    #[test]
    fn mixed_arithmetic_is_float() {
        let product = Scalar::Int(3) * Scalar::Float(0.5);
        assert!(!product.is_int());
        assert_eq!(product, Scalar::Float(1.5));
    }

    #[test]
    fn overflow_promotes_to_float() {
        let product = Scalar::Int(i64::MAX) * Scalar::Int(2);
        assert!(!product.is_int());
        assert_eq!(product.as_f64(), i64::MAX as f64 * 2.0);

        let sum = Scalar::Int(i64::MAX) + Scalar::Int(1);
        assert!(!sum.is_int());
    }

    #[test]
    fn equality_is_numeric_across_variants() {
        assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
        assert_ne!(Scalar::Int(2), Scalar::Float(2.5));
    }

    #[test]
    fn mixed_equality_rounds_above_2_pow_53() {
        let exact = 1i64 << 53;
        let rounded = Scalar::Float(exact as f64);
        assert_eq!(Scalar::Int(exact + 1), rounded);
        assert_eq!(rounded, Scalar::Int(exact));
        assert_ne!(Scalar::Int(exact + 1), Scalar::Int(exact));
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: Scalar = std::iter::empty().sum();
        assert!(total.is_int());
        assert_eq!(total, Scalar::ZERO);
    }

    #[test]
    fn display_matches_json_number_form() {
        assert_eq!(Scalar::Int(80).to_string(), "80");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn serde_untagged_roundtrip_keeps_variant() {
        let int: Scalar = serde_json::from_str("7").unwrap();
        assert!(int.is_int());
        let float: Scalar = serde_json::from_str("7.25").unwrap();
        assert!(!float.is_int());
        assert_eq!(serde_json::to_string(&Scalar::Int(7)).unwrap(), "7");
    }
}
