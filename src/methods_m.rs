/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size square matrices, compatible with `V2`/`V3`/`V4`.
//!
//! Matrices are containers of **column** vectors: `m[c]` is column `c`
//! and `m[c][r]` is the element in row `r` of that column. A matrix
//! multiplies column vectors on its right (`&m * &v`), and the
//! product `&a * &b` applies `b` first.

use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::errors::SingularMatrixError;
use crate::vee;
use crate::types::*;

use num_traits::{Zero, One};
use slice_of_array::prelude::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on `(column, row)` indices.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `M33::from_fn`)
#[inline(always)]
pub fn from_fn<M: FromFn<F>, B, F>(f: F) -> M
where F: FnMut(usize, usize) -> B,
{ FromFn::from_fn(f) }

/// Construct a matrix from a 2D array of **columns**.
///
/// `from_array([[a, b], [c, d]])` has first column `(a, b)`, so the
/// scalars are listed column by column.
///
/// The signature is such that type inference will work in the
/// forward direction (deciding the output Matrix shape from
/// the input array).
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

/// Matrix inverse, by closed-form cofactors.
///
/// A singular matrix is not detected; the division by its zero
/// determinant leaves non-finite elements. See `try_inverse`.
#[inline(always)]
pub fn inverse<M: Inv>(m: &M) -> M
{ Inv::inv(m) }

/// Matrix inverse, failing on an exactly zero determinant.
#[inline]
pub fn try_inverse<M: Inv + Det>(m: &M) -> Result<M, SingularMatrixError>
where DetT<M>: Zero,
{
    match m.det().is_zero() {
        true => Err(SingularMatrixError),
        false => Ok(Inv::inv(m)),
    }
}

/// Matrix transpose.
#[inline(always)]
pub fn transpose<M: Transpose>(m: &M) -> M
{ Transpose::t(m) }

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_square_inherent_wrappers!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X> $Mnn<X> {
            /// Construct the identity matrix.
            ///
            /// This is also available as the free function `mat::eye`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn eye() -> Self
            where Self: One,
            { One::one() }

            /// Construct the zero matrix.
            ///
            /// This is also available as the free function `mat::zero`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Construct a matrix from a function on `(column, row)` indices.
            ///
            /// This is also available as the free function `mat::from_fn`;
            /// this static method just provides an easy way to supply a type hint.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { FromFn::from_fn(f) }

            /// Construct a matrix from its column vectors.
            #[inline(always)]
            pub fn from_cols(cols: [$Vn<X>; $n]) -> Self
            { $Mn(cols) }

            /// Matrix determinant.
            #[inline(always)]
            pub fn det(&self) -> DetT<Self>
            where Self: Det,
            { Det::det(self) }

            /// Matrix transpose.
            #[inline(always)]
            pub fn t(&self) -> Self
            where Self: Transpose,
            { Transpose::t(self) }

            /// Cast into a plain `[[X; n]; n]` of columns.
            #[inline(always)]
            pub fn into_array(self) -> [[X; $n]; $n]
            { $Vn(self.0).map(|col| col.0).0 }

            /// View as a plain `&[[X; n]; n]` of columns.
            #[inline(always)]
            pub fn as_array(&self) -> &[[X; $n]; $n] {
                // `$Vn<X>` is a transparent wrapper around `[X; $n]`
                unsafe { &*(&self.0 as *const [$Vn<X>; $n] as *const [[X; $n]; $n]) }
            }

            /// View all elements in column-major order.
            ///
            /// This is the layout graphics APIs expect for a uniform matrix.
            #[inline(always)]
            pub fn as_flat(&self) -> &[X]
            { self.as_array().flat() }

            /// Map each scalar element of a matrix.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Mnn<B>
            where F: FnMut(X) -> B,
            { $Mn($Vn(self.0).map(|col| col.map(&mut f)).0) }
        }
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

/// Implementation detail of some free functions that defer to external traits.
///
/// > **_Fuggedaboudit._**
///
/// Its purpose is to prevent those functions from producing non-matrix types.
pub trait IsMatrix: Sized { }

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_is_matrix!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X> IsMatrix for $Mnn<X> { }
    }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_num_zero!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> Zero for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { from_array([[X::zero(); $n]; $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.0.iter().all(|col| col.iter().all(|x| x.is_zero())) }
        }

        impl<X: Semiring> One for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn one() -> Self
            { from_fn(|c, r| if c == r { X::one() } else { X::zero() }) }

            #[inline]
            fn is_one(&self) -> bool {
                self.iter().enumerate().all(|(c, col)| {
                    col.iter().enumerate().all(|(r, x)| match c == r {
                        true => x.is_one(),
                        false => x.is_zero(),
                    })
                })
            }
        }

        // Every transform builder starts from this.
        impl<X: Semiring> Default for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn default() -> Self
            { One::one() }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_fn`.
///
/// > **_Fuggedaboudit._**
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_from_fn!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X, F> FromFn<F> for $Mnn<X>
          where F: FnMut(usize, usize) -> X,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                $Mn(<$Vn<_>>::from_fn(|c| {
                    <$Vn<_>>::from_fn(|r| f(c, r))
                }).0)
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::from_array`.
///
/// > **_Fuggedaboudit._**
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_into_matrix!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X> IntoMatrix for [[X; $n]; $n] {
            type Matrix = $Mnn<X>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mn($Vn(self).map($Vn).0) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Output of `det`. Probably a scalar type.
pub type DetT<A> = <A as Det>::Output;

/// Implementation detail of the inherent method `{M22,M33,M44}::det`.
///
/// > **_Fuggedaboudit._**
pub trait Det {
    type Output;

    fn det(&self) -> Self::Output;
}

impl<T: Ring> Det for M22<T>
where T: PrimitiveRing,
{
    type Output = T;

    fn det(&self) -> T {
        let [[a, b], [c, d]] = self.into_array();
        a * d - c * b
    }
}

impl<T: Ring> Det for M33<T>
where T: PrimitiveRing,
{
    type Output = T;

    fn det(&self) -> T {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.into_array();

        T::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
     }
}

impl<T: Ring> Det for M44<T>
where T: PrimitiveRing,
{
    type Output = T;

    // expansion along the first column
    fn det(&self) -> T {
        (0..4).map(|r| {
            let minor: M33<T> = from_fn(|c, rr| {
                self[c + 1][if rr < r { rr } else { rr + 1 }]
            });
            match r % 2 {
                0 => self[0][r] * minor.det(),
                _ => -(self[0][r] * minor.det()),
            }
        }).sum()
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the free function `mat::inverse`.
///
/// > **_Fuggedaboudit._**
pub trait Inv {
    fn inv(&self) -> Self;
}

impl<T: Field> Inv for M22<T>
where T: PrimitiveFloat,
{
    fn inv(&self) -> Self {
        let m = self;
        let rdet = T::one() / (m[0][0] * m[1][1] - m[1][0] * m[0][1]);
        from_array([
            [ m[1][1] * rdet, -m[0][1] * rdet],
            [-m[1][0] * rdet,  m[0][0] * rdet],
        ])
    }
}

impl<T: Field> Inv for M33<T>
where T: PrimitiveFloat,
{
    fn inv(&self) -> Self {
        let m = self;
        let rdet = T::one() / (
            m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
        );

        // transposed cofactors, as columns
        let adj = from_array([
            [
                  m[1][1] * m[2][2] - m[2][1] * m[1][2],
                -(m[0][1] * m[2][2] - m[2][1] * m[0][2]),
                  m[0][1] * m[1][2] - m[1][1] * m[0][2],
            ],
            [
                -(m[1][0] * m[2][2] - m[2][0] * m[1][2]),
                  m[0][0] * m[2][2] - m[2][0] * m[0][2],
                -(m[0][0] * m[1][2] - m[1][0] * m[0][2]),
            ],
            [
                  m[1][0] * m[2][1] - m[2][0] * m[1][1],
                -(m[0][0] * m[2][1] - m[2][0] * m[0][1]),
                  m[0][0] * m[1][1] - m[1][0] * m[0][1],
            ],
        ]);
        adj * rdet
    }
}

impl<T: Field> Inv for M44<T>
where T: PrimitiveFloat,
{
    fn inv(&self) -> Self {
        let m = self;

        // 2x2 sub-determinants of the two rightmost columns, paired off
        // against the rows they leave out.
        let coef00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let coef02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
        let coef03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];

        let coef04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let coef06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
        let coef07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];

        let coef08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let coef10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
        let coef11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];

        let coef12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let coef14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
        let coef15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];

        let coef16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let coef18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
        let coef19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];

        let coef20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
        let coef22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
        let coef23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        let fac0 = V4([coef00, coef00, coef02, coef03]);
        let fac1 = V4([coef04, coef04, coef06, coef07]);
        let fac2 = V4([coef08, coef08, coef10, coef11]);
        let fac3 = V4([coef12, coef12, coef14, coef15]);
        let fac4 = V4([coef16, coef16, coef18, coef19]);
        let fac5 = V4([coef20, coef20, coef22, coef23]);

        let vec0 = V4([m[1][0], m[0][0], m[0][0], m[0][0]]);
        let vec1 = V4([m[1][1], m[0][1], m[0][1], m[0][1]]);
        let vec2 = V4([m[1][2], m[0][2], m[0][2], m[0][2]]);
        let vec3 = V4([m[1][3], m[0][3], m[0][3], m[0][3]]);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let (one, neg) = (T::one(), -T::one());
        let sign_a = V4([one, neg, one, neg]);
        let sign_b = V4([neg, one, neg, one]);

        let adj = M4([inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b]);

        let row0 = V4([adj[0][0], adj[1][0], adj[2][0], adj[3][0]]);
        let det = vee::dot(&m[0], &row0);

        adj * (T::one() / det)
    }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `{M22,M33,M44}::t`.
///
/// > **_Fuggedaboudit._**
pub trait Transpose {
    fn t(&self) -> Self;
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_transpose!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X: Copy> Transpose for $Mnn<X> {
            #[inline]
            fn t(&self) -> Self
            { from_fn(|c, r| self[r][c]) }
        }
    }
}

// ---------------------------------------------------------------------------
