/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

pub use self::semiring::Semiring;
mod semiring {
    /// Trait for scalars with addition and multiplication.
    ///
    /// Implemented for the primitive integers and floats, and nothing else.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Trait for scalars with addition, multiplication, and subtraction.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers because a ring must be
    /// closed under negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// Trait for scalars with addition, multiplication, subtraction, and division.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just `f32` and `f64`, which is everything a
    /// transform or projection matrix is ever built from.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}


// Generate the (trivial) impls of Field, Ring, and Semiring.
gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Internal-use marker traits for generic implementations.
///
/// By using these traits instead of generating separate impls for
/// every element type, the operator impls stay generic over `X` and
/// only the orphan-rule-bound ones (`scalar * vector`) are stamped out
/// per type.
pub(crate) mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
    }

    pub trait PrimitiveSemiring
        : Sized + Copy + Clone + Default + 'static
        + PartialEq + PartialOrd
        + SelfAdd + SelfMul + SelfDiv
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
    {
        fn from_uint(u: u8) -> Self;
        #[inline(always)] fn two() -> Self { Self::from_uint(2) }
    }

    gen_each!{
        @{semiring}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T {
                #[inline(always)] fn from_uint(u: u8) -> $T { u as $T }
            }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfSub + SelfNeg
    { }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => { impl PrimitiveRing for $T { } };
    }

    /// The float functions that the transform builders are written against.
    pub trait PrimitiveFloat
        : PrimitiveRing
    {
        fn sqrt(self) -> Self;
        fn abs(self) -> Self;
        fn sin(self) -> Self;
        fn cos(self) -> Self;
        fn tan(self) -> Self;
        fn epsilon() -> Self;
        fn half() -> Self;
    }

    gen_each!{
        @{field}
        for_each!({$T:ty})
        => {
            impl PrimitiveFloat for $T {
                #[inline(always)] fn sqrt(self) -> $T { self.sqrt() }
                #[inline(always)] fn abs(self) -> $T { self.abs() }
                #[inline(always)] fn sin(self) -> $T { self.sin() }
                #[inline(always)] fn cos(self) -> $T { self.cos() }
                #[inline(always)] fn tan(self) -> $T { self.tan() }
                #[inline(always)] fn epsilon() -> $T { <$T>::EPSILON }
                #[inline(always)] fn half() -> $T { 0.5 }
            }
        };
    }
}
