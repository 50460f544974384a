/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use num_traits::AsPrimitive;

use crate::traits::{Semiring, Ring};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing};
use crate::{vee, mat};
use crate::types::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are between same-typed vectors, rather than
//       e.g. V3<T> and V3<U> where T: Add<U>.  Mixed element types
//       go through `cast` or `from_parts` first.
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_binops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] - other[k]) }
        }

        // vector * vector (component-wise)
        impl<$($lt_a)* $($lt_b)* X: Semiring> Mul<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] * other[k]) }
        }

        // vector / vector (component-wise)
        impl<$($lt_a)* $($lt_b)* X: Semiring> Div<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, other: $($ref_b)* $Vn<X>) -> Self::Output
            { vee::from_fn(|k| self[k] / other[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_unops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Vn<X>
          where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { vee::from_fn(|k| -self.0[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar `op` vector
gen_each!{
    @{Vn}
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_v_ops!(
        {$Vn:ident}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)*> Mul<$($ref_a)* $Vn<$X>> for $X {
            type Output = $Vn<$X>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* $Vn<$X>) -> Self::Output
            { vector * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar_ops!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        impl<$($lt_a)* X: Semiring> Div<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] / scalar) }
        }

        // vector + scalar
        impl<$($lt_a)* X: Semiring> Add<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] + scalar) }
        }

        // vector - scalar
        impl<$($lt_a)* X: Ring> Sub<X> for $($ref_a)* $Vn<X>
        where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] - scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector assign ops

// vector `op=` vector
gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_assign_ops!(
        {$Vn:ident}
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_b)* X: Semiring> AddAssign<$($ref_b)* $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $($ref_b)* $Vn<X>)
            { *self = &*self + rhs; }
        }

        impl<$($lt_b)* X: Ring> SubAssign<$($ref_b)* $Vn<X>> for $Vn<X>
        where X: PrimitiveRing,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $($ref_b)* $Vn<X>)
            { *self = &*self - rhs; }
        }

        impl<$($lt_b)* X: Semiring> MulAssign<$($ref_b)* $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $($ref_b)* $Vn<X>)
            { *self = &*self * rhs; }
        }

        impl<$($lt_b)* X: Semiring> DivAssign<$($ref_b)* $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $($ref_b)* $Vn<X>)
            { *self = &*self / rhs; }
        }
    }
}

// vector `op=` scalar
//
// The scalar may be any primitive; it is cast to the element type first.
gen_each!{
    @{Vn}
    @{semiring}
    impl_v_scalar_assign_ops!(
        {$Vn:ident}
        {$S:ty}
    ) => {
        impl<X: Semiring> AddAssign<$S> for $Vn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $S)
            { *self = &*self + AsPrimitive::<X>::as_(rhs); }
        }

        impl<X: Ring> SubAssign<$S> for $Vn<X>
        where X: PrimitiveRing, $S: AsPrimitive<X>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $S)
            { *self = &*self - AsPrimitive::<X>::as_(rhs); }
        }

        impl<X: Semiring> MulAssign<$S> for $Vn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $S)
            { *self = &*self * AsPrimitive::<X>::as_(rhs); }
        }

        impl<X: Semiring> DivAssign<$S> for $Vn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $S)
            { *self = &*self / AsPrimitive::<X>::as_(rhs); }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    @{Mnn_Mn_Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_binops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn add(self, other: $($ref_b)* $Mnn<X>) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] + other[c][r]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X>
          where X: PrimitiveRing,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Mnn<X>) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] - other[c][r]) }
        }

        // matrix * matrix
        //
        // Column c of the product is `self` applied to column c of `other`.
        impl<$($lt_a)* $($lt_b)* X: Semiring> Mul<$($ref_b)* $Mnn<X>> for $($ref_a)* $Mnn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn mul(self, other: $($ref_b)* $Mnn<X>) -> Self::Output
            { mat::from_fn(|c, r| (0..$n).map(|k| self[k][r] * other[c][k]).sum()) }
        }
    }
}

// matrix * vector, vector * matrix
gen_each!{
    @{Mnn_Mn_Vn_n}
    [ [(   ) (   )] [('m,) (&'m)] ]
    [ [(   ) (   )] [('v,) (&'v)] ]
    impl_m_v_mul!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        [ ($($lt_m:tt)*) ($($ref_m:tt)*) ]
        [ ($($lt_v:tt)*) ($($ref_v:tt)*) ]
    ) => {
        // matrix * column vector
        impl<$($lt_m)* $($lt_v)* X: Semiring> Mul<$($ref_v)* $Vn<X>> for $($ref_m)* $Mnn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, other: $($ref_v)* $Vn<X>) -> Self::Output {
                let matrix = self;
                let vector = other;
                vee::from_fn(|r| (0..$n).map(|c| matrix[c][r] * vector[c]).sum())
            }
        }

        // row vector * matrix
        impl<$($lt_m)* $($lt_v)* X: Semiring> Mul<$($ref_m)* $Mnn<X>> for $($ref_v)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, other: $($ref_m)* $Mnn<X>) -> Self::Output {
                let vector = self;
                let matrix = other;
                vee::from_fn(|c| (0..$n).map(|r| vector[r] * matrix[c][r]).sum())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix unary ops

gen_each!{
    @{Mnn_Mn_Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_unops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Mnn<X>
          where X: PrimitiveRing,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { mat::from_fn(|c, r| -self[c][r]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

gen_each!{
    @{Mnn_Mn_Vn_n}
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_m_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * matrix
        impl<$($lt_a)*> Mul<$($ref_a)* $Mnn<$X>> for $X {
            type Output = $Mnn<$X>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* $Mnn<$X>) -> Self::Output
            { matrix * self }
        }
    }
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_scalar_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Mnn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Semiring> Div<X> for $($ref_a)* $Mnn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Mnn<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix assign ops
//
// These all work column by column, so `a *= b` is the component-wise
// product and NOT the same as `a = &a * &b`.

gen_each!{
    @{Mnn_Mn_Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_assign_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_b)* X: Semiring> AddAssign<$($ref_b)* $Mnn<X>> for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $($ref_b)* $Mnn<X>) {
                for (col, rhs_col) in self.iter_mut().zip(rhs.iter()) {
                    *col += rhs_col;
                }
            }
        }

        impl<$($lt_b)* X: Ring> SubAssign<$($ref_b)* $Mnn<X>> for $Mnn<X>
        where X: PrimitiveRing,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $($ref_b)* $Mnn<X>) {
                for (col, rhs_col) in self.iter_mut().zip(rhs.iter()) {
                    *col -= rhs_col;
                }
            }
        }

        impl<$($lt_b)* X: Semiring> MulAssign<$($ref_b)* $Mnn<X>> for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $($ref_b)* $Mnn<X>) {
                for (col, rhs_col) in self.iter_mut().zip(rhs.iter()) {
                    *col *= rhs_col;
                }
            }
        }

        impl<$($lt_b)* X: Semiring> DivAssign<$($ref_b)* $Mnn<X>> for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $($ref_b)* $Mnn<X>) {
                for (col, rhs_col) in self.iter_mut().zip(rhs.iter()) {
                    *col /= rhs_col;
                }
            }
        }
    }
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    @{semiring}
    impl_m_scalar_assign_ops!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
        {$S:ty}
    ) => {
        impl<X: Semiring> AddAssign<$S> for $Mnn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $S) {
                for col in self.iter_mut() { *col += rhs; }
            }
        }

        impl<X: Ring> SubAssign<$S> for $Mnn<X>
        where X: PrimitiveRing, $S: AsPrimitive<X>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $S) {
                for col in self.iter_mut() { *col -= rhs; }
            }
        }

        impl<X: Semiring> MulAssign<$S> for $Mnn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $S) {
                for col in self.iter_mut() { *col *= rhs; }
            }
        }

        impl<X: Semiring> DivAssign<$S> for $Mnn<X>
        where X: PrimitiveSemiring, $S: AsPrimitive<X>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $S) {
                for col in self.iter_mut() { *col /= rhs; }
            }
        }
    }
}

// ---------------------------------------------------------------------------

// Display applies the format to each element, so `{:.3}` reaches the scalars.
gen_each!{
    [
        {V2 X} {V3 X} {V4 X}
        {M2 V} {M3 V} {M4 V}
    ]
    impl_display!(
        {$Cn:ident $T:ident}
    ) => {
        impl<$T: fmt::Display> fmt::Display for $Cn<$T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, x) in self.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt::Display::fmt(x, f)?;
                }
                write!(f, "]")
            }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v_binops() {
        let a = V3([1, 2, 3]);
        let b = V3([4, 6, 9]);
        assert_eq!(a + b, V3([5, 8, 12]));
        assert_eq!(&b - &a, V3([3, 4, 6]));
        assert_eq!(a * &b, V3([4, 12, 27]));
        assert_eq!(&b / a, V3([4, 3, 3]));
        assert_eq!(-a, V3([-1, -2, -3]));

        assert_eq!(a * 2, V3([2, 4, 6]));
        assert_eq!(2 * a, V3([2, 4, 6]));
        assert_eq!(b / 3, V3([1, 2, 3]));
        assert_eq!(a + 1, V3([2, 3, 4]));
        assert_eq!(&a - 1, V3([0, 1, 2]));
        assert_eq!(0.5 * V2([4.0, 8.0]), V2([2.0, 4.0]));
    }

    #[test]
    fn v_assign_ops() {
        let mut v = V4([1.0, 2.0, 3.0, 4.0]);
        v += V4([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(v, V4([2.0, 3.0, 4.0, 5.0]));
        v *= &V4([2.0, 2.0, 0.5, 1.0]);
        assert_eq!(v, V4([4.0, 6.0, 2.0, 5.0]));
        v -= 1.0;
        assert_eq!(v, V4([3.0, 5.0, 1.0, 4.0]));

        // scalars of other types are cast first
        v *= 2u8;
        assert_eq!(v, V4([6.0, 10.0, 2.0, 8.0]));
        v /= 2i32;
        assert_eq!(v, V4([3.0, 5.0, 1.0, 4.0]));

        let mut v = V2([10u32, 20]);
        v += 2.9f64;
        assert_eq!(v, V2([12, 22]));
        v /= V2([4, 5]);
        assert_eq!(v, V2([3, 4]));
    }

    #[test]
    fn mat_mat() {
        let eye: M22<i32> = mat::eye();

        // columns: [1, 2], [3, 4]; i.e. rows (1 3) and (2 4)
        let a = mat::from_array([[1, 2], [3, 4]]);
        let b = mat::from_array([[0, 1], [1, -1]]);

        // a * b, by rows: (1 3)(0 1 ; 1 -1) = (3 -2), (2 4)(...) = (4 -2)
        let a_dot_b = mat::from_array([[3, 4], [-2, -2]]);

        assert_eq!(a, &eye * &a);
        assert_eq!(a, a * eye);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a + b, mat::from_array([[1, 3], [4, 3]]));
        assert_eq!(a - b, mat::from_array([[1, 1], [2, 5]]));
        assert_eq!(-a, mat::from_array([[-1, -2], [-3, -4]]));
    }

    #[test]
    fn mat_product_composes_maps() {
        let a: M33 = mat::from_fn(|c, r| (c * 3 + r) as f64 - 4.0);
        let b: M33 = mat::from_fn(|c, r| ((c + 2 * r) % 5) as f64);
        let v = V3([1.0, -2.0, 0.5]);
        assert_eq!(&(&a * &b) * &v, &a * &(&b * &v));
    }

    #[test]
    fn mat_vec() {
        // rows (1 3) and (2 4)
        let m = mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(&m * V2([1, 1]), V2([4, 6]));
        assert_eq!(m * V2([1, 0]), m[0]);

        // row vector: each output component is the dot with a column
        assert_eq!(V2([1, 1]) * &m, V2([3, 7]));
        assert_eq!(V2([1, 1]) * m, &m.t() * V2([1, 1]));
    }

    #[test]
    fn mat_scalar() {
        let m = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 2.0, mat::from_array([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * &m, &m * 2.0);
        assert_eq!(m / 2.0, mat::from_array([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn mat_assign_ops_are_componentwise() {
        let a = mat::from_array([[1, 2], [3, 4]]);
        let b = mat::from_array([[0, 1], [1, -1]]);

        let mut m = a;
        m *= b;
        assert_eq!(m, mat::from_array([[0, 2], [3, -4]]));
        assert_ne!(m, &a * &b);

        let mut m = a;
        m += &b;
        assert_eq!(m, a + b);
        m -= b;
        assert_eq!(m, a);
        m /= mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(m, mat::from_array([[1, 1], [1, 1]]));

        let mut m = a;
        m *= 3u8;
        assert_eq!(m, mat::from_array([[3, 6], [9, 12]]));
        m -= 1;
        assert_eq!(m, mat::from_array([[2, 5], [8, 11]]));
        m += 1i64;
        m /= 3.0f32;
        assert_eq!(m, mat::from_array([[1, 2], [3, 4]]));
    }

    #[test]
    fn display() {
        let v = V3([1.0, 0.5, 1.0 / 3.0]);
        assert_eq!(format!("{:.2}", v), "[1.00, 0.50, 0.33]");

        let m = mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(format!("{}", m), "[[1, 2], [3, 4]]");
        assert_eq!(format!("{:.1}", M22::<f64>::eye()), "[[1.0, 0.0], [0.0, 1.0]]");
    }
}
