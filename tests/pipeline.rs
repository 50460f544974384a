/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Model-view-projection chains built only from the public API.

#[macro_use] extern crate minimath_assert_close;

use pretty_assertions::assert_eq;
use minimath::{V3, V4, M44, ClipConfig, DepthRange, Handedness, YamlRead};
use minimath::{mat, transform};
use std::f64::consts::PI;

fn to_ndc(mvp: &M44, p: V3) -> V3 {
    let clip = mvp * minimath::v4![p, 1.0];
    minimath::v3![clip] / clip[3]
}

#[test]
fn center_of_view_lands_on_the_z_axis() {
    for &handedness in &[Handedness::Left, Handedness::Right] {
        for &depth in &[DepthRange::ZeroToOne, DepthRange::NegativeOneToOne] {
            let clip = ClipConfig { depth, handedness };

            let eye = V3([0.0, 0.0, -1.0]);
            let center = V3([0.0, 0.0, 0.0]);
            let view = clip.look_at(&eye, &center, &V3([0.0, 1.0, 0.0]));
            let proj = clip.perspective(PI / 3.0, 1.5, 0.5, 10.0);
            let mvp = &proj * &view;

            let ndc = to_ndc(&mvp, center);
            assert_close!(abs=1e-12, ndc[0], 0.0);
            assert_close!(abs=1e-12, ndc[1], 0.0);

            // one unit from the eye, between the near and far planes
            let (lo, hi) = match depth {
                DepthRange::ZeroToOne => (0.0, 1.0),
                DepthRange::NegativeOneToOne => (-1.0, 1.0),
            };
            assert!(lo < ndc[2] && ndc[2] < hi, "{:?}: {}", clip, ndc[2]);
        }
    }
}

#[test]
fn points_behind_the_far_plane_are_clipped() {
    let clip = ClipConfig { depth: DepthRange::ZeroToOne, handedness: Handedness::Right };
    let proj = clip.perspective(1.0, 1.0, 0.1, 5.0);

    assert!(to_ndc(&proj, V3([0.0, 0.0, -4.0]))[2] < 1.0);
    assert!(to_ndc(&proj, V3([0.0, 0.0, -6.0]))[2] > 1.0);
}

#[test]
fn model_transforms_compose() {
    let model = transform::rotate(&transform::scale(&V3([2.0, 2.0, 2.0])), PI / 2.0, &V3([0.0, 0.0, 1.0]));
    let moved = &model * V4([1.0, 0.0, 0.0, 1.0]);
    assert_close!(abs=1e-12, moved.0, [0.0, 2.0, 0.0, 1.0]);

    let undone = &mat::inverse(&model) * moved;
    assert_close!(abs=1e-12, undone.0, [1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn view_inverse_recovers_the_eye() {
    let eye = V3([0.0, 0.0, 1.0]);
    let view = transform::look_at_rh(&eye, &V3([0.0, 0.0, 0.0]), &V3([0.0, 1.0, 0.0]));
    let world = &minimath::inverse(&view) * V4([0.0, 0.0, 0.0, 1.0]);
    assert_close!(abs=1e-12, world.0, [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn config_from_yaml_drives_builders() {
    let clip = ClipConfig::from_reader("depth: negative-one-to-one\nhandedness: right\n".as_bytes()).unwrap();
    assert_eq!(
        clip.perspective_fov(1.0, 640.0, 480.0, 0.1, 100.0),
        transform::perspective_fov_rh(DepthRange::NegativeOneToOne, 1.0, 640.0, 480.0, 0.1, 100.0),
    );
}

#[test]
fn single_precision_pipeline() {
    use minimath::f32s::{Mat4, Vec3, Vec4};

    let view: Mat4 = transform::look_at(&Vec3::new(0.0, 0.0, -1.0), &Vec3::new(0.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
    let proj: Mat4 = transform::perspective(1.0, 1.0, 0.5, 2.0);
    let clip = &(&proj * &view) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(clip[3], 1.0);
    assert_eq!(proj.as_flat().len(), 16);
}
