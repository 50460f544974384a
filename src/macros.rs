/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Define a callback macro, then invoke it once for every combination of
/// one token tree from each bracketed group.
///
/// ```ignore
/// cartesian!{
///     [{f32} {f64}]
///     [{V2 2} {V3 3}]
///     impl_thing!({$X:ty} {$Vn:ident $n:tt}) => { /* one impl */ }
/// }
/// ```
///
/// expands `impl_thing!` four times.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @product::next($([$($groups)*])*) -> ($mac!()) }
    };
}

// Recursive worker for `cartesian!`.
macro_rules! cartesian__ {

    (@product::next([$($token:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @product::unpack([$($token)+] $($rest)*) -> $cb } };
    // base case; direct product of no arguments
    (@product::next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // `rest` is wrapped into one tt so it can be repeated alongside each token.
    (@product::unpack([$($token:tt)*] $($rest:tt)*) -> $cb:tt)
    => {cartesian__!{ @product::unpack_2([$($token)*] [$($rest)*]) -> $cb }};

    (@product::unpack_2([$($token:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @product::unpack_3($token $rest) -> $cb } )* };

    // Append the chosen token to the callback's arguments and recurse.
    (@product::unpack_3($token:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @product::next($($rest)*) -> ($mac!($($args)*$token)) }};
}

/// `cartesian!`, plus named groups written `@{name}`.
///
/// The named groups list the scalar types behind `Field`/`Ring`/`Semiring`
/// and the vector and matrix types with their sizes.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    // an explicit group
    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    // NOTE: these lists are the only place the members of the sealed
    //       scalar traits are written down.

    // Types that implement Field
    ([@{field} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    // Types that implement Ring
    ([@{ring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]] }};

    // Types that implement Semiring
    ([@{semiring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]] }};

    // Fixed sized vector types
    ([@{Vn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2} {V3} {V4}
    ]] }};

    // ...along with their size
    ([@{Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2 2} {V3 3} {V4 4}
    ]] }};

    // Square matrices, their vector types, and size
    ([@{Mnn_Mn_Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M22 M2 V2 2} {M33 M3 V3 3} {M44 M4 V4 4}
    ]] }};

    // Ordered pairs of distinct vector sizes (destination, then source)
    ([@{Vn_n_pairs} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2 2 V3 3} {V2 2 V4 4}
        {V3 3 V2 2} {V3 3 V4 4}
        {V4 4 V2 2} {V4 4 V3 3}
    ]] }};

    // Ordered pairs of distinct square matrix sizes (destination, then source)
    ([@{Mnn_n_pairs} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M22 2 M33 3} {M22 2 M44 4}
        {M33 3 M22 2} {M33 3 M44 4}
        {M44 4 M22 2} {M44 4 M33 3}
    ]] }};

    // all groups collected
    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

/// Build a `V2` from a list of scalars and vectors.
///
/// Shorthand for `V2::from_parts((...))`; see `Components`.
#[macro_export]
macro_rules! v2 {
    ($($part:expr),+ $(,)*) => { $crate::V2::from_parts(($($part,)+)) };
}

/// Build a `V3` from a list of scalars and vectors.
///
/// `v3![v2, 1.0]` concatenates, `v3![v4]` truncates, `v3![v2]` zero-fills.
#[macro_export]
macro_rules! v3 {
    ($($part:expr),+ $(,)*) => { $crate::V3::from_parts(($($part,)+)) };
}

/// Build a `V4` from a list of scalars and vectors.
#[macro_export]
macro_rules! v4 {
    ($($part:expr),+ $(,)*) => { $crate::V4::from_parts(($($part,)+)) };
}

#[cfg(test)]
mod tests {
    trait Len { const LEN: usize; }

    cartesian!{
        [{u8} {i64}]
        [{1} {3}]
        impl_for_arrays!({$T:ty} {$n:expr}) => {
            impl Len for [$T; $n] { const LEN: usize = $n; }
        }
    }

    #[test]
    fn cartesian_covers_every_combination() {
        assert_eq!(<[u8; 1]>::LEN, 1);
        assert_eq!(<[u8; 3]>::LEN, 3);
        assert_eq!(<[i64; 1]>::LEN, 1);
        assert_eq!(<[i64; 3]>::LEN, 3);
    }

    trait Resize { const FROM_TO: (usize, usize); }

    gen_each!{
        @{field}
        @{Mnn_n_pairs}
        impl_for_pairs!({$X:ty} {$Dst:ident $m:tt $Src:ident $n:tt}) => {
            impl Resize for ([[$X; $n]; $n], [[$X; $m]; $m]) {
                const FROM_TO: (usize, usize) = ($n, $m);
            }
        }
    }

    #[test]
    fn named_groups_expand() {
        assert_eq!(<([[f32; 2]; 2], [[f32; 4]; 4])>::FROM_TO, (2, 4));
        assert_eq!(<([[f64; 4]; 4], [[f64; 3]; 3])>::FROM_TO, (4, 3));
    }
}
