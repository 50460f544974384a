/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between sizes and element types.
//!
//! Every vector constructor that takes a mixture of scalars and smaller
//! or larger vectors goes through one mechanism, `from_parts`, which
//! lays the components of each part end to end, zero-fills whatever is
//! left over, and drops whatever does not fit.

use num_traits::AsPrimitive;

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::types::*;

/// A value that supplies one or more leading components when building a vector.
///
/// Implemented for every primitive scalar (one component) and for
/// `V2`, `V3`, `V4` of any primitive scalar. Each component is converted
/// to the destination element type with `as` semantics.
pub trait Components<X> {
    /// Write components into the front of `out`, stopping early if it is too short.
    ///
    /// Returns the number of components written.
    fn write_components(&self, out: &mut [X]) -> usize;
}

gen_each!{
    @{semiring}
    impl_scalar_components!({$S:ty}) => {
        impl<X> Components<X> for $S
        where X: Copy + 'static, $S: AsPrimitive<X>,
        {
            #[inline]
            fn write_components(&self, out: &mut [X]) -> usize {
                match out.first_mut() {
                    Some(slot) => { *slot = self.as_(); 1 },
                    None => 0,
                }
            }
        }
    }
}

gen_each!{
    @{Vn}
    impl_vector_components!({$Vn:ident}) => {
        impl<X, S> Components<X> for $Vn<S>
        where X: Copy + 'static, S: AsPrimitive<X>,
        {
            #[inline]
            fn write_components(&self, out: &mut [X]) -> usize {
                let mut written = 0;
                for (slot, &s) in out.iter_mut().zip(&self.0) {
                    *slot = s.as_();
                    written += 1;
                }
                written
            }
        }
    }
}

/// A tuple of `Components`, consumed in order by `from_parts`.
///
/// Implemented for tuples of one to four parts.
pub trait ComponentList<X> {
    /// Fill `out` from the front with each part in turn.
    fn fill(&self, out: &mut [X]);
}

macro_rules! impl_component_list {
    ($($P:ident $p:ident),+) => {
        impl<X, $($P: Components<X>),+> ComponentList<X> for ($($P,)+) {
            #[inline]
            fn fill(&self, out: &mut [X]) {
                let ($(ref $p,)+) = *self;
                let mut pos = 0;
                $( pos += $p.write_components(&mut out[pos..]); )+
                debug_assert!(pos <= out.len());
            }
        }
    };
}

impl_component_list!{A a}
impl_component_list!{A a, B b}
impl_component_list!{A a, B b, C c}
impl_component_list!{A a, B b, C c, D d}

// ---------------------------------------------------------------------------
// vectors

impl<X> V2<X> {
    /// Construct from components.
    #[inline(always)]
    pub const fn new(x: X, y: X) -> Self
    { V2([x, y]) }
}

impl<X> V3<X> {
    /// Construct from components.
    #[inline(always)]
    pub const fn new(x: X, y: X, z: X) -> Self
    { V3([x, y, z]) }
}

impl<X> V4<X> {
    /// Construct from components.
    #[inline(always)]
    pub const fn new(x: X, y: X, z: X, w: X) -> Self
    { V4([x, y, z, w]) }
}

gen_each!{
    @{Vn_n}
    impl_vector_conversions!({$Vn:ident $n:tt}) => {
        impl<X> $Vn<X> {
            /// Build a vector from a tuple of scalars and vectors.
            ///
            /// Components are taken in argument order. Missing trailing
            /// components are zero, and components past the end are dropped.
            /// The `v2!`, `v3!` and `v4!` macros are shorthand for this.
            ///
            /// ```
            /// use minimath::{V2, V3, V4};
            ///
            /// let xy = V2([1.0, 2.0]);
            /// assert_eq!(V4::from_parts((xy, 3, 4u8)), V4([1.0, 2.0, 3.0, 4.0]));
            /// assert_eq!(V3::from_parts((xy,)), V3([1.0, 2.0, 0.0]));
            /// assert_eq!(V2::<f64>::from_parts((V4([5, 6, 7, 8]),)), V2([5.0, 6.0]));
            /// ```
            #[inline]
            pub fn from_parts<P>(parts: P) -> Self
            where
                P: ComponentList<X>,
                X: Semiring + PrimitiveSemiring,
            {
                let mut out = [X::zero(); $n];
                parts.fill(&mut out);
                $Vn(out)
            }

            /// Set every component to the same scalar.
            #[inline]
            pub fn splat<S>(s: S) -> Self
            where
                S: AsPrimitive<X>,
                X: Copy + 'static,
            { $Vn([s.as_(); $n]) }

            /// Convert the element type, with the semantics of `as`.
            #[inline]
            pub fn cast<Y>(self) -> $Vn<Y>
            where
                X: AsPrimitive<Y>,
                Y: Copy + 'static,
            { self.map(|x| x.as_()) }
        }
    }
}

// Same element type, different length: truncate or zero-fill.
gen_each!{
    @{Vn_n_pairs}
    impl_vector_resize!({$Dst:ident $m:tt $Src:ident $n:tt}) => {
        impl<X: Semiring> From<$Src<X>> for $Dst<X>
        where X: PrimitiveSemiring + AsPrimitive<X>,
        {
            #[inline]
            fn from(v: $Src<X>) -> Self
            { $Dst::from_parts((v,)) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrices

// Shrinking keeps the leading block; growing pads with the identity.
gen_each!{
    @{Mnn_n_pairs}
    impl_matrix_resize!({$Dst:ident $m:tt $Src:ident $n:tt}) => {
        impl<X: Semiring> From<$Src<X>> for $Dst<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn from(m: $Src<X>) -> Self {
                crate::mat::from_fn(|c, r| match (c < $n && r < $n, c == r) {
                    (true, _) => m[c][r],
                    (false, true) => X::one(),
                    (false, false) => X::zero(),
                })
            }
        }
    }
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_matrix_cast!({$Mnn:ident $Mn:ident $Vn:ident $n:tt}) => {
        impl<X> $Mnn<X> {
            /// Convert the element type, with the semantics of `as`.
            #[inline]
            pub fn cast<Y>(self) -> $Mnn<Y>
            where
                X: AsPrimitive<Y>,
                Y: Copy + 'static,
            { self.map(|x| x.as_()) }
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn zero_fill_from_smaller() {
        let v = V2([1, 2]);
        assert_eq!(V4::from_parts((v,)), V4([1, 2, 0, 0]));
        assert_eq!(V3::from_parts((v,)), V3([1, 2, 0]));
        assert_eq!(V4::from(v), V4([1, 2, 0, 0]));
        assert_eq!(V3::from(v), V3([1, 2, 0]));
    }

    #[test]
    fn resize_in_generic_code() {
        fn grow<X: Semiring + PrimitiveSemiring + AsPrimitive<X>>(v: V2<X>) -> V4<X> { v.into() }
        fn shrink<X: Semiring + PrimitiveSemiring + AsPrimitive<X>>(v: V4<X>) -> V3<X> { V3::from(v) }

        assert_eq!(grow(V2([1u8, 2])), V4([1, 2, 0, 0]));
        assert_eq!(grow(V2([0.5f32, -1.0])), V4([0.5, -1.0, 0.0, 0.0]));
        assert_eq!(shrink(V4([1i64, 2, 3, 4])), V3([1, 2, 3]));
    }

    #[test]
    fn truncate_from_larger() {
        let v = V4([1.5, 2.5, 3.5, 4.5]);
        assert_eq!(V2::from(v), V2([1.5, 2.5]));
        assert_eq!(V3::from(v), V3([1.5, 2.5, 3.5]));
        assert_eq!(V2::<i32>::from_parts((v,)), V2([1, 2]));
    }

    #[test]
    fn concatenate_in_argument_order() {
        let xy = V2([1.0, 2.0]);
        assert_eq!(v4![xy, 3.0, 4.0], V4([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(v4![3.0, xy, 4.0], V4([3.0, 1.0, 2.0, 4.0]));
        assert_eq!(v4![3.0, 4.0, xy], V4([3.0, 4.0, 1.0, 2.0]));
        assert_eq!(v4![xy, V2([5.0, 6.0])], V4([1.0, 2.0, 5.0, 6.0]));
        assert_eq!(v4![V3([1, 2, 3]), 9], V4([1, 2, 3, 9]));
        assert_eq!(v4![9, V3([1, 2, 3])], V4([9, 1, 2, 3]));
        assert_eq!(v3![xy, 7.0], V3([1.0, 2.0, 7.0]));
        assert_eq!(v3![7.0, xy], V3([7.0, 1.0, 2.0]));
    }

    #[test]
    fn scalars_zero_fill() {
        assert_eq!(V3::<f32>::from_parts((1, 2)), V3([1.0, 2.0, 0.0]));
        assert_eq!(V4::<f32>::from_parts((1,)), V4([1.0, 0.0, 0.0, 0.0]));
        assert_eq!(V4::<f32>::from_parts((1, 2, 3)), V4([1.0, 2.0, 3.0, 0.0]));
    }

    #[test]
    fn extra_components_are_dropped() {
        assert_eq!(v2![V3([1, 2, 3]), 4], V2([1, 2]));
        assert_eq!(v3![V2([1, 2]), V2([3, 4])], V3([1, 2, 3]));
    }

    #[test]
    fn mixed_element_types_are_cast() {
        let v: V3<u8> = v3![1.9f64, -1i32, 300u16];
        // `as` semantics: truncation toward zero, saturation for float -> int,
        // wrapping for int -> int.
        assert_eq!(v, V3([1, 255, 44]));

        assert_eq!(V2::<f32>::splat(3u8), V2([3.0, 3.0]));
        assert_eq!(V3([1.7, -2.2, 0.0]).cast::<i32>(), V3([1, -2, 0]));
    }

    #[test]
    fn matrix_shrink_keeps_leading_block() {
        let eye4: M44 = mat::eye();
        assert_eq!(M22::from(eye4), M22::eye());
        assert_eq!(M33::from(eye4), M33::eye());

        let m: M44<i32> = mat::from_fn(|c, r| (10 * c + r) as i32);
        let small = M22::from(m);
        assert_eq!(small, mat::from_array([[0, 1], [10, 11]]));
    }

    #[test]
    fn matrix_grow_pads_with_identity() {
        let m = mat::from_array([[1, 2], [3, 4]]);
        assert_eq!(M44::from(m), mat::from_array([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 1, 0],
            [0, 0, 0, 1],
        ]));
        assert_eq!(M33::from(m), mat::from_array([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 1],
        ]));
    }

    #[test]
    fn matrix_cast() {
        let m: M22<f64> = mat::from_array([[1.5, 2.0], [-3.5, 4.0]]);
        assert_eq!(m.cast::<i32>(), mat::from_array([[1, 2], [-3, 4]]));
    }
}
