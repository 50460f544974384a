/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// A 2-dimensional vector with operations for linear algebra.
///
/// `Default` is the zero vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct V2<X=f64>(pub [X; 2]);

/// A 3-dimensional vector with operations for linear algebra.
///
/// `Default` is the zero vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct V3<X=f64>(pub [X; 3]);

/// A 4-dimensional vector with operations for linear algebra.
///
/// `Default` is the zero vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct V4<X=f64>(pub [X; 4]);

// ---------------------------------------------------------------------------

/// A linear algebra dense matrix made of 2 column vectors.
///
/// `Default` (for the square `M22`) is the identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct M2<V>(pub [V; 2]);

/// A linear algebra dense matrix made of 3 column vectors.
///
/// `Default` (for the square `M33`) is the identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct M3<V>(pub [V; 3]);

/// A linear algebra dense matrix made of 4 column vectors.
///
/// `Default` (for the square `M44`) is the identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[repr(transparent)]
pub struct M4<V>(pub [V; 4]);

/// A square dense 2x2 matrix, stored as columns.
pub type M22<X=f64> = M2<V2<X>>;
/// A square dense 3x3 matrix, stored as columns.
pub type M33<X=f64> = M3<V3<X>>;
/// A square dense 4x4 matrix, stored as columns.
pub type M44<X=f64> = M4<V4<X>>;

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.
//
// Indexing goes through `Deref`, so `v[i]` and `m[c][r]` are bounds-checked.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

gen_each!{
    [
        {V2 X 2} {V3 X 3} {V4 X 4}
        {M2 V 2} {M3 V 3} {M4 V 4}
    ]
    for_each!(
        {$Cn:ident $T:ident $n:tt}
    ) => {
        impl<$T> Deref for $Cn<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$T> DerefMut for $Cn<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, $T> IntoIterator for &'a $Cn<$T> {
            type Item = &'a $T;
            type IntoIter = Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, $T> IntoIterator for &'a mut $Cn<$T> {
            type Item = &'a mut $T;
            type IntoIter = IterMut<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "V3(...)", so that
        // a matrix prints as its nested list of columns.
        impl<$T: fmt::Debug> fmt::Debug for $Cn<$T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}

// ---------------------------------------------------------------------------
// Component aliases.
//
// Position (x y z w), color (r g b a) and texture (s t p q) names are all
// views of the same array element.

macro_rules! impl_aliases {
    (
        $Vn:ident
        $([$i:tt: $get_a:ident $mut_a:ident, $get_b:ident $mut_b:ident, $get_c:ident $mut_c:ident])+
    ) => {
        impl<X: Copy> $Vn<X> {
            $(
                #[inline(always)] pub fn $get_a(&self) -> X { self.0[$i] }
                #[inline(always)] pub fn $get_b(&self) -> X { self.0[$i] }
                #[inline(always)] pub fn $get_c(&self) -> X { self.0[$i] }
            )+
        }

        impl<X> $Vn<X> {
            $(
                #[inline(always)] pub fn $mut_a(&mut self) -> &mut X { &mut self.0[$i] }
                #[inline(always)] pub fn $mut_b(&mut self) -> &mut X { &mut self.0[$i] }
                #[inline(always)] pub fn $mut_c(&mut self) -> &mut X { &mut self.0[$i] }
            )+
        }
    };
}

impl_aliases!{
    V2
    [0: x x_mut, r r_mut, s s_mut]
    [1: y y_mut, g g_mut, t t_mut]
}

impl_aliases!{
    V3
    [0: x x_mut, r r_mut, s s_mut]
    [1: y y_mut, g g_mut, t t_mut]
    [2: z z_mut, b b_mut, p p_mut]
}

impl_aliases!{
    V4
    [0: x x_mut, r r_mut, s s_mut]
    [1: y y_mut, g g_mut, t t_mut]
    [2: z z_mut, b b_mut, p p_mut]
    [3: w w_mut, a a_mut, q q_mut]
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_share_storage() {
        let mut v = V4([1, 2, 3, 4]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1, 2, 3, 4));
        assert_eq!((v.s(), v.t(), v.p(), v.q()), (1, 2, 3, 4));

        *v.g_mut() = 20;
        assert_eq!(v.y(), 20);
        assert_eq!(v.t(), 20);
        assert_eq!(v[1], 20);

        v[3] = 40;
        assert_eq!(v.a(), 40);
        assert_eq!(v.q(), 40);
    }

    #[test]
    fn columns_index_first() {
        let m = M2([V2([1, 2]), V2([3, 4])]);
        assert_eq!(m[1], V2([3, 4]));
        assert_eq!(m[1][0], 3);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        fn get(v: &V3, i: usize) -> f64 { v[i] }
        get(&V3([1.0, 2.0, 3.0]), 3);
    }

    #[test]
    fn debug_is_nested_list() {
        let m = M2([V2([1, 2]), V2([3, 4])]);
        assert_eq!(format!("{:?}", m), "[[1, 2], [3, 4]]");
    }
}
