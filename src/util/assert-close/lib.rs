/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!` for floats, and for arrays, slices and `Vec`s of them.
//!
//! Two values pass if they are within either the absolute or the relative
//! tolerance. By default `rel=1e-9` and `abs=0`; either can be overridden
//! in front of the operands.
//!
//! ```
//! #[macro_use] extern crate minimath_assert_close;
//! # fn main() {
//! assert_close!(0.1 + 0.2, 0.3);
//! assert_close!(abs=1e-6, [[1.0f32, 0.0], [0.0, 1.0]], [[1.0, 1e-7], [0.0, 1.0]]);
//! # }
//! ```
//!
//! When nested arrays differ, the panic message names the index path of
//! the first element that is out of tolerance.

use failure::Fail;

pub const DEFAULT_REL_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($arg:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances::default()] $($arg)*}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    (@opts [$tol:expr] abs=$abs:expr, $($rest:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances { abs: $abs, ..$tol }] $($rest)*}
    };
    (@opts [$tol:expr] rel=$rel:expr, $($rest:tt)*) => {
        $crate::__assert_close!{@opts [$crate::Tolerances { rel: $rel, ..$tol }] $($rest)*}
    };
    (@opts [$tol:expr] $a:expr, $b:expr $(,)*) => {
        $crate::__assert_close!{@check [$tol] [$a, $b] "not nearly equal!"}
    };
    (@opts [$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::__assert_close!{@check [$tol] [$a, $b] $($fmt)+}
    };
    (@check [$tol:expr] [$a:expr, $b:expr] $($fmt:tt)+) => {{
        let (a, b) = (&$a, &$b);
        let tol: $crate::Tolerances = $tol;
        if let Err(e) = $crate::CheckClose::check_close(a, b, tol) {
            panic!(
                "{} (rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format!($($fmt)+), tol.rel, tol.abs, a, b, e,
            );
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self { Tolerances { abs: 0.0, rel: DEFAULT_REL_TOL } }
}

impl Tolerances {
    /// Whether two scalars are close, comparing against the larger magnitude.
    ///
    /// Equal infinities are close. NaN is never close to anything.
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        assert!(self.abs >= 0.0 && self.rel >= 0.0, "negative tolerance: {:?}", self);

        if a == b {
            return true;
        }
        if !(a.is_finite() && b.is_finite()) {
            return false;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.abs.max(self.rel * scale)
    }
}

/// The first pair of elements found out of tolerance.
#[derive(Debug, Clone, Fail)]
#[fail(display = "at index {:?}: {} vs {}", index, left, right)]
pub struct NotClose {
    /// Outermost index first; empty for a scalar.
    pub index: Vec<usize>,
    pub left: f64,
    pub right: f64,
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), NotClose>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), NotClose> {
        match tol.accepts(*self, *other) {
            true => Ok(()),
            false => Err(NotClose { index: vec![], left: *self, right: *other }),
        }
    }
}

// Widened to f64 first, so tolerances finer than f32::EPSILON only pass
// values that are exactly equal.
impl CheckClose for f32 {
    fn check_close(&self, other: &f32, tol: Tolerances) -> Result<(), NotClose>
    { f64::from(*self).check_close(&f64::from(*other), tol) }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), NotClose>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), NotClose> {
        assert_eq!(self.len(), other.len(), "length mismatch");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|mut e| {
                e.index.insert(0, i);
                e
            })?;
        }
        Ok(())
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), NotClose>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), NotClose>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_forms_parse() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0, "with {}", "a message");

        // method chains are operands, not options
        let v = vec![1.0, 2.0];
        assert_close!(v.clone().into_iter().rev().collect::<Vec<_>>(), vec![2.0, 1.0]);
    }

    #[test]
    fn tolerance_rules() {
        let rel = Tolerances { abs: 0.0, rel: 1e-3 };
        assert!(rel.accepts(1000.0, 1000.9));
        assert!(!rel.accepts(1000.0, 1002.0));
        // relative tolerance alone never accepts a nonzero value near zero
        assert!(!rel.accepts(0.0, 1e-300));

        let abs = Tolerances { abs: 1e-6, rel: 0.0 };
        assert!(abs.accepts(0.0, 1e-7));

        assert!(rel.accepts(std::f64::INFINITY, std::f64::INFINITY));
        assert!(!rel.accepts(std::f64::INFINITY, std::f64::NEG_INFINITY));
        assert!(!abs.accepts(std::f64::NAN, std::f64::NAN));
    }

    #[test]
    fn nested_index_is_reported() {
        let tol = Tolerances { abs: 1e-3, rel: 0.0 };
        let a = [[1.0, 0.0], [0.0, 1.0]];
        let b = [[1.0, 0.0], [0.1, 1.0]];
        let e = a.check_close(&b, tol).unwrap_err();
        assert_eq!(e.index, vec![1, 0]);
        assert_eq!((e.left, e.right), (0.0, 0.1));
        assert_eq!(e.to_string(), "at index [1, 0]: 0 vs 0.1");
    }

    #[test]
    fn single_precision() {
        assert_close!(abs=1e-6, 0.1f32 + 0.2f32, 0.3f32);
        assert_close!(abs=1e-6, [1.0f32, 2.0], [1.0, 2.0000001]);
    }

    #[test]
    #[should_panic(expected = "custom message")]
    fn message_is_used() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1, "custom {}", "message");
    }

    #[test]
    #[should_panic(expected = "at index [2]")]
    fn slices_compare_every_element() {
        let a: &[f64] = &[1.0, 2.0, 3.0];
        assert_close!(a, &[1.0, 2.0, 3.5][..]);
    }
}
