/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Mul, Sub};

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};

use super::types::*;

use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The length of the vector will be inferred solely from how it is used.
#[inline]
pub fn from_fn<V: FromFn<Elem=B>, B, F>(f: F) -> V
where F: FnMut(usize) -> B,
{ FromFn::from_fn(f) }

/// Construct a zero vector (using type inference).
#[inline(always)]
pub fn zero<V: Zero + IsV>() -> V
{ Zero::zero() }

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:expr}
    ) => {
        impl<X> $Vn<X> {
            /// Get a zero vector.
            ///
            /// This is also available as the free function `vee::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a fixed-size vector from a function on indices.
            ///
            /// This is also available as the free function `vee::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { from_fn(f) }

            /// Get the inner product of two vectors.
            ///
            /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
            #[inline(always)]
            pub fn dot(&self, other: &Self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, other) }

            /// Get the vector's squared length.
            #[inline(always)]
            pub fn length2(&self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, self) }

            /// Get the vector's length.
            #[inline(always)]
            pub fn length(&self) -> ScalarT<Self>
            where Self: Dot, ScalarT<Self>: PrimitiveFloat,
            { self.length2().sqrt() }

            /// Scale the vector to unit length.
            ///
            /// Unlike the free function `normalize`, this divides by the length.
            #[inline(always)]
            pub fn unit(&self) -> Self
            where X: Field + PrimitiveFloat,
            { self / self.length() }
        }
    }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        cross(self, other)
    }
}

/// Inner product of vectors.
///
/// This is basically just `{V2,V3,V4}::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Right-handed cross product of 3-dimensional vectors.
#[inline]
pub fn cross<X: Ring>(a: &V3<X>, b: &V3<X>) -> V3<X>
where X: PrimitiveRing,
{
    V3([
        a[1] * b[2] - b[1] * a[2],
        a[2] * b[0] - b[2] * a[0],
        a[0] * b[1] - b[0] * a[1],
    ])
}

/// Squared length, `dot(v, v)`.
#[inline(always)]
pub fn length2<V>(v: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(v, v) }

/// Length, `sqrt(dot(v, v))`.
#[inline(always)]
pub fn length<V>(v: &V) -> ScalarT<V>
where V: Dot, ScalarT<V>: PrimitiveFloat,
{ length2(v).sqrt() }

/// Scale a vector by the reciprocal of its **squared** length.
///
/// This is only a true normalization for vectors that already have unit
/// length (or for reading off a direction when the magnitude is thrown away
/// anyway). Use `{V2,V3,V4}::unit` to divide by the length instead.
///
/// The view builders in `transform` go through this function, so their
/// output is only orthonormal for unit-length inputs.
#[inline]
pub fn normalize<V>(v: &V) -> V
where
    V: Dot,
    ScalarT<V>: Field + PrimitiveFloat,
    for<'a> &'a V: Mul<ScalarT<V>, Output=V>,
{
    let s = <ScalarT<V>>::one() / dot(v, v);
    v * s
}

/// Distance between two points, `length(p1 - p0)`.
#[inline]
pub fn distance<V>(p0: &V, p1: &V) -> ScalarT<V>
where
    V: Dot,
    ScalarT<V>: PrimitiveFloat,
    for<'a> &'a V: Sub<&'a V, Output=V>,
{ length(&(p1 - p0)) }

/// Squared distance between two points, `length2(p1 - p0)`.
#[inline]
pub fn distance2<V>(p0: &V, p1: &V) -> ScalarT<V>
where
    V: Dot,
    for<'a> &'a V: Sub<&'a V, Output=V>,
{ length2(&(p1 - p0)) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;
/// Trait that provides associated types for `V2, V3, V4`.
pub trait IsV {
    type Scalar;
}

gen_each!{
    @{Vn}
    for_each!(
        {$Vn:ident}
    ) => {
        impl<X> IsV for $Vn<X>
        { type Scalar = X; }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> Zero for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of `vee::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn: Sized {
    type Elem;

    fn from_fn(f: impl FnMut(usize) -> Self::Elem) -> Self;
}

// Element-wise construction and mapping, spelled out per size so that
// neither needs `X: Copy`.
macro_rules! impl_elementwise {
    ($Vn:ident [$($i:tt $x:ident)+]) => {
        impl<X> FromFn for $Vn<X> {
            type Elem = X;

            #[inline]
            fn from_fn(mut f: impl FnMut(usize) -> X) -> Self
            { $Vn([$(f($i)),+]) }
        }

        impl<X> $Vn<X> {
            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            {
                let $Vn([$($x),+]) = self;
                $Vn([$(f($x)),+])
            }
        }
    };
}

impl_elementwise!{V2 [0 a 1 b]}
impl_elementwise!{V3 [0 a 1 b 2 c]}
impl_elementwise!{V4 [0 a 1 b 2 c 3 d]}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{V2,V3,V4}::dot`.
///
/// > **_Fuggedaboudit._**
///
/// Without this, the free function `dot` could not be generic over different
/// sizes of V.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Semiring> Dot for $Vn<X>
          where X: PrimitiveSemiring,
        {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> ScalarT<Self>
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    }
}

// ---------------------------------------------------------------------------
