/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Model, view, and projection matrices.
//!
//! Every builder returns a column-major `M44` meant to multiply column
//! vectors (`&m * &v`).  The unsuffixed `look_at`, `perspective` and
//! `perspective_fov` are the left-handed versions, and the unsuffixed
//! projections use the default `DepthRange`.  `ClipConfig` binds both
//! choices once for a whole program.

use crate::clip::{DepthRange, Handedness};
use crate::traits::Field;
use crate::traits::internal::PrimitiveFloat;
use crate::methods_v::{cross, dot, normalize};
use crate::types::*;

// ---------------------------------------------------------------------------
// model

/// The identity with its first three diagonal entries replaced by `v`.
///
/// NOTE: Despite the name, this does not move anything; it is the same
///       matrix as `scale(v)`.  Code that wants a translation should set
///       column 3 itself.
pub fn translate<X: Field>(v: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let mut m = M44::eye();
    m[0][0] = v[0];
    m[1][1] = v[1];
    m[2][2] = v[2];
    m
}

/// Scale along each axis.
pub fn scale<X: Field>(v: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let mut m = M44::zero();
    m[0][0] = v[0];
    m[1][1] = v[1];
    m[2][2] = v[2];
    m[3][3] = X::one();
    m
}

/// Rotate by `angle` radians about `axis`, after applying `base`.
///
/// The result is `&base * &r`, where `r` is the rotation.  Pass
/// `M44::eye()` as `base` for a plain rotation.
///
/// The axis goes through `normalize`, so it should already have unit length.
pub fn rotate<X: Field>(base: &M44<X>, angle: X, axis: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let c = angle.cos();
    let s = angle.sin();

    let a = normalize(axis);
    let t = a * (X::one() - c);

    let r = [
        V3([c + t[0] * a[0], t[0] * a[1] + s * a[2], t[0] * a[2] - s * a[1]]),
        V3([t[1] * a[0] - s * a[2], c + t[1] * a[1], t[1] * a[2] + s * a[0]]),
        V3([t[2] * a[0] + s * a[1], t[2] * a[1] - s * a[0], c + t[2] * a[2]]),
    ];

    let col = |k: usize| base[0] * r[k][0] + base[1] * r[k][1] + base[2] * r[k][2];
    M4([col(0), col(1), col(2), base[3]])
}

// ---------------------------------------------------------------------------
// view

/// Left-handed view matrix. Same as `look_at_lh`.
#[inline]
pub fn look_at<X: Field>(eye: &V3<X>, center: &V3<X>, up: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{ look_at_lh(eye, center, up) }

/// Left-handed view matrix, looking from `eye` toward `center`.
///
/// The camera looks down `+z`.  The basis vectors go through `normalize`,
/// so the rows are only unit length when `center - eye` and
/// `cross(up, center - eye)` already are.
pub fn look_at_lh<X: Field>(eye: &V3<X>, center: &V3<X>, up: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let f = normalize(&(center - eye));
    let s = normalize(&cross(up, &f));
    let u = cross(&f, &s);

    view_from_basis(eye, &s, &u, &f)
}

/// Right-handed view matrix, looking from `eye` toward `center`.
///
/// The camera looks down `-z`.
pub fn look_at_rh<X: Field>(eye: &V3<X>, center: &V3<X>, up: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let f = normalize(&(center - eye));
    let s = normalize(&cross(&f, up));
    let u = cross(&s, &f);

    view_from_basis(eye, &s, &u, &-f)
}

// Rows 0..3 are `s`, `u` and `z`, and column 3 moves `eye` to the origin.
fn view_from_basis<X: Field>(eye: &V3<X>, s: &V3<X>, u: &V3<X>, z: &V3<X>) -> M44<X>
where X: PrimitiveFloat,
{
    let mut m = M44::eye();
    for i in 0..3 {
        m[i][0] = s[i];
        m[i][1] = u[i];
        m[i][2] = z[i];
    }
    m[3][0] = -dot(s, eye);
    m[3][1] = -dot(u, eye);
    m[3][2] = -dot(z, eye);
    m
}

// ---------------------------------------------------------------------------
// projection

/// Left-handed perspective projection with the default depth range.
///
/// Same as `perspective_lh(DepthRange::default(), ...)`.
#[inline]
pub fn perspective<X: Field>(fovy: X, aspect: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{ perspective_lh(DepthRange::default(), fovy, aspect, near, far) }

/// Left-handed perspective projection.
///
/// `fovy` is the full vertical field of view in radians, and `aspect`
/// is width over height.
pub fn perspective_lh<X: Field>(depth: DepthRange, fovy: X, aspect: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{
    let (x, y) = fovy_scales(fovy, aspect);
    frustum(Handedness::Left, depth, x, y, near, far)
}

/// Right-handed perspective projection.
pub fn perspective_rh<X: Field>(depth: DepthRange, fovy: X, aspect: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{
    let (x, y) = fovy_scales(fovy, aspect);
    frustum(Handedness::Right, depth, x, y, near, far)
}

/// Left-handed perspective projection from a viewport size, with the default depth range.
///
/// Same as `perspective_fov_lh(DepthRange::default(), ...)`.
#[inline]
pub fn perspective_fov<X: Field>(fov: X, width: X, height: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{ perspective_fov_lh(DepthRange::default(), fov, width, height, near, far) }

/// Left-handed perspective projection from a viewport size.
///
/// `fov` is the full vertical field of view in radians.
pub fn perspective_fov_lh<X: Field>(depth: DepthRange, fov: X, width: X, height: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{
    let (x, y) = fov_scales(fov, width, height);
    frustum(Handedness::Left, depth, x, y, near, far)
}

/// Right-handed perspective projection from a viewport size.
pub fn perspective_fov_rh<X: Field>(depth: DepthRange, fov: X, width: X, height: X, near: X, far: X) -> M44<X>
where X: PrimitiveFloat,
{
    let (x, y) = fov_scales(fov, width, height);
    frustum(Handedness::Right, depth, x, y, near, far)
}

fn fovy_scales<X: Field>(fovy: X, aspect: X) -> (X, X)
where X: PrimitiveFloat,
{
    debug_assert!((aspect - X::epsilon()).abs() > X::zero(), "aspect ratio must be nonzero");

    let tan_half_fovy = (fovy / X::two()).tan();
    (X::one() / (aspect * tan_half_fovy), X::one() / tan_half_fovy)
}

fn fov_scales<X: Field>(fov: X, width: X, height: X) -> (X, X)
where X: PrimitiveFloat,
{
    debug_assert!(width > X::zero(), "viewport width must be positive");
    debug_assert!(height > X::zero(), "viewport height must be positive");
    debug_assert!(fov > X::zero(), "field of view must be positive");

    let half = X::half() * fov;
    let h = half.cos() / half.sin();
    (h * height / width, h)
}

fn frustum<X: Field>(
    handedness: Handedness,
    depth: DepthRange,
    x_scale: X,
    y_scale: X,
    near: X,
    far: X,
) -> M44<X>
where X: PrimitiveFloat,
{
    let one = X::one();
    let two = X::two();

    let (z_scale, z_offset, w_from_z) = match (handedness, depth) {
        (Handedness::Left, DepthRange::ZeroToOne) => (
            far / (far - near),
            -(far * near) / (far - near),
            one,
        ),
        (Handedness::Right, DepthRange::ZeroToOne) => (
            far / (near - far),
            -(far * near) / (far - near),
            -one,
        ),
        (Handedness::Left, DepthRange::NegativeOneToOne) => (
            (far + near) / (far - near),
            -(two * far * near) / (far - near),
            one,
        ),
        (Handedness::Right, DepthRange::NegativeOneToOne) => (
            -(far + near) / (far - near),
            -(two * far * near) / (far - near),
            -one,
        ),
    };

    let mut m = M44::zero();
    m[0][0] = x_scale;
    m[1][1] = y_scale;
    m[2][2] = z_scale;
    m[2][3] = w_from_z;
    m[3][2] = z_offset;
    m
}

// ---------------------------------------------------------------------------
