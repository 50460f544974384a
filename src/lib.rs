/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size vectors (`V2`, `V3`, `V4`) and square matrices
//! (`M22`, `M33`, `M44`), plus the transforms a renderer needs to
//! place a camera.
//!
//! Matrices are stored column-major: `m[c]` is a column vector and
//! `m[c][r]` is the element in row `r` of that column.

#[cfg(test)]
#[macro_use]
extern crate minimath_assert_close;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;
mod traits;

pub use self::types::*;
mod types;

pub use self::conv::*;
mod conv;

mod ops;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::{dot, cross, length, length2, normalize, distance, distance2};
pub use self::methods_m::{inverse, try_inverse, transpose};

pub use self::errors::SingularMatrixError;
mod errors;

pub mod clip;
pub use self::clip::{ClipConfig, DepthRange, Handedness, YamlRead};

pub mod transform;
pub use self::transform::{
    translate, rotate, scale,
    look_at, look_at_lh, look_at_rh,
    perspective, perspective_lh, perspective_rh,
    perspective_fov, perspective_fov_lh, perspective_fov_rh,
};

pub use self::traits::{Field, Ring, Semiring};

/// `f32` aliases, for code that talks to a graphics API.
pub mod f32s {
    pub type Vec2 = crate::V2<f32>;
    pub type Vec3 = crate::V3<f32>;
    pub type Vec4 = crate::V4<f32>;
    pub type Mat2 = crate::M22<f32>;
    pub type Mat3 = crate::M33<f32>;
    pub type Mat4 = crate::M44<f32>;
}
