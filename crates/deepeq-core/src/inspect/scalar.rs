//! Leaf values.
//!
//! A [`Scalar`] is the view the scalar comparator works on. Built-in
//! primitives map to dedicated variants so that numbers of different
//! representations can be ordered against each other. User types plug in
//! through [`DynOrd`] (natural ordering) or [`DynEq`] (equality only).

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

/// Object-safe natural ordering, implemented for every `Ord` type.
pub trait DynOrd: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// `None` when `other` is not the same concrete type.
    fn cmp_dyn(&self, other: &dyn Any) -> Option<Ordering>;
}

impl<T: Ord + Any + fmt::Debug> DynOrd for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn cmp_dyn(&self, other: &dyn Any) -> Option<Ordering> {
        other.downcast_ref::<T>().map(|other| self.cmp(other))
    }
}

/// Object-safe equality, implemented for every `PartialEq` type.
pub trait DynEq: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// `false` when `other` is not the same concrete type.
    fn eq_dyn(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any + fmt::Debug> DynEq for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// Borrowed view of a leaf value.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Bool(bool),
    Char(char),
    /// Every signed integer and every unsigned integer up to 64 bits.
    Int(i128),
    UInt(u128),
    Float(f64),
    Str(&'a str),
    /// A user type with a natural ordering.
    Ordered(&'a dyn DynOrd),
    /// A value type with equality only.
    Equatable(&'a dyn DynEq),
}

impl<'a> Scalar<'a> {
    /// Whether this value carries a "compare to" capability.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Scalar::Equatable(_))
    }

    /// Natural ordering against `other`.
    ///
    /// Numbers are ordered across representations (`1` and `1.0` compare
    /// equal). Two NaNs compare equal so that every value equals itself.
    /// Returns `None` when the two values live in different ordering
    /// domains.
    pub fn compare(&self, other: &Scalar<'_>) -> Option<Ordering> {
        match (*self, *other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(&b)),
            (Scalar::Char(a), Scalar::Char(b)) => Some(a.cmp(&b)),
            (Scalar::Str(a), Scalar::Str(b)) => Some(a.cmp(b)),
            (Scalar::Ordered(a), Scalar::Ordered(b)) => a.cmp_dyn(b.as_any()),
            (a, b) => numeric_cmp(a, b),
        }
    }

    /// Generic value equality, used when no ordering is available.
    pub fn equals(&self, other: &Scalar<'_>) -> bool {
        match (*self, *other) {
            (Scalar::Equatable(a), Scalar::Equatable(b)) => a.eq_dyn(b.as_any()),
            (Scalar::Equatable(_), _) | (_, Scalar::Equatable(_)) => false,
            (a, b) => a.compare(&b) == Some(Ordering::Equal),
        }
    }
}

/// Scalar equality with ordering taking precedence over generic equality.
pub fn scalars_equal(a: &Scalar<'_>, b: &Scalar<'_>) -> bool {
    if a.is_ordered() {
        a.compare(b) == Some(Ordering::Equal)
    } else {
        a.equals(b)
    }
}

fn numeric_cmp(a: Scalar<'_>, b: Scalar<'_>) -> Option<Ordering> {
    match (a, b) {
        (Scalar::Int(x), Scalar::Int(y)) => Some(x.cmp(&y)),
        (Scalar::UInt(x), Scalar::UInt(y)) => Some(x.cmp(&y)),
        (Scalar::Int(x), Scalar::UInt(y)) => Some(int_uint_cmp(x, y)),
        (Scalar::UInt(x), Scalar::Int(y)) => Some(int_uint_cmp(y, x).reverse()),
        (Scalar::Float(x), Scalar::Float(y)) => float_cmp(x, y),
        (Scalar::Int(x), Scalar::Float(y)) => int_float_cmp(x, y),
        (Scalar::Float(x), Scalar::Int(y)) => int_float_cmp(y, x).map(Ordering::reverse),
        (Scalar::UInt(x), Scalar::Float(y)) => uint_float_cmp(x, y),
        (Scalar::Float(x), Scalar::UInt(y)) => uint_float_cmp(y, x).map(Ordering::reverse),
        _ => None,
    }
}

fn int_uint_cmp(x: i128, y: u128) -> Ordering {
    u128::try_from(x).map_or(Ordering::Less, |x| x.cmp(&y))
}

fn float_cmp(x: f64, y: f64) -> Option<Ordering> {
    if x.is_nan() && y.is_nan() {
        Some(Ordering::Equal)
    } else {
        x.partial_cmp(&y)
    }
}

// Both bounds are powers of two and therefore exact as f64: 2^127 and 2^128.
const I128_BOUND: f64 = i128::MAX as f64;
const U128_BOUND: f64 = u128::MAX as f64;

// Exact: floats outside the integer range order directly, the rest are
// compared through their floor.
fn int_float_cmp(x: i128, y: f64) -> Option<Ordering> {
    if y.is_nan() {
        None
    } else if y >= I128_BOUND {
        Some(Ordering::Less)
    } else if y < -I128_BOUND {
        Some(Ordering::Greater)
    } else {
        let whole = y.floor();
        Some(below_fraction(x.cmp(&(whole as i128)), y != whole))
    }
}

fn uint_float_cmp(x: u128, y: f64) -> Option<Ordering> {
    if y.is_nan() {
        None
    } else if y >= U128_BOUND {
        Some(Ordering::Less)
    } else if y < 0.0 {
        Some(Ordering::Greater)
    } else {
        let whole = y.floor();
        Some(below_fraction(x.cmp(&(whole as u128)), y != whole))
    }
}

// An integer equal to floor(y) is below y when y has a fractional part.
fn below_fraction(floor_cmp: Ordering, fractional: bool) -> Ordering {
    match floor_cmp {
        Ordering::Equal if fractional => Ordering::Less,
        other => other,
    }
}
