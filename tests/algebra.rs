/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate minimath_assert_close;

use pretty_assertions::assert_eq;
use minimath::{V2, V3, V4, M22, M33, M44};
use minimath::{mat, vee};

fn random_m33() -> M33 {
    mat::from_fn(|_, _| ::rand::random::<f64>() - 0.5)
}

#[test]
fn mixed_size_conversions() {
    let m2: M22 = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
    let m4 = M44::from(m2);
    assert_eq!(m4.into_array(), [
        [1.0, 2.0, 0.0, 0.0],
        [3.0, 4.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(M22::from(m4), m2);

    let v = V4::from(V2([1.0, 2.0]));
    assert_eq!(v, V4([1.0, 2.0, 0.0, 0.0]));
    assert_eq!(V3::from(v), V3([1.0, 2.0, 0.0]));
    assert_eq!(minimath::v4![V2([1, 2]), V2([3, 4])], V4([1, 2, 3, 4]));
}

#[test]
fn element_type_conversions() {
    let v = V3([1.7, -2.2, 3.0]);
    assert_eq!(v.cast::<i32>(), V3([1, -2, 3]));
    assert_eq!(v.cast::<f32>(), V3([1.7f32, -2.2, 3.0]));

    let m: M33<i32> = mat::eye();
    assert_eq!(m.cast::<f64>(), M33::eye());
}

#[test]
fn transpose_reverses_products() {
    for _ in 0..10 {
        let (a, b) = (random_m33(), random_m33());
        let lhs = mat::transpose(&(&a * &b));
        let rhs = &b.t() * &a.t();
        assert_close!(abs=1e-12, lhs.into_array(), rhs.into_array());
    }
}

#[test]
fn vector_matrix_products_agree_through_transpose() {
    for _ in 0..10 {
        let m = random_m33();
        let v = V3(::rand::random::<[f64; 3]>());
        assert_close!(abs=1e-12, (v * &m).0, (&m.t() * v).0);
    }
}

#[test]
fn free_functions_match_methods() {
    let (a, b) = (V3([1.0, 2.0, 3.0]), V3([-4.0, 0.5, 2.0]));
    assert_eq!(minimath::dot(&a, &b), a.dot(&b));
    assert_eq!(minimath::cross(&a, &b), a.cross(&b));
    assert_eq!(minimath::length2(&a), 14.0);
    assert_eq!(minimath::length(&a), 14f64.sqrt());
    assert_eq!(minimath::distance2(&a, &b), vee::length2(&(b - a)));
    assert_eq!(minimath::distance(&a, &b), (b - a).length());
}

#[test]
fn serde_uses_plain_arrays() {
    let m: M22 = mat::from_array([[1.0, 2.0], [3.0, 4.0]]);
    let text = serde_json::to_string(&m).unwrap();
    assert_eq!(text, "[[1.0,2.0],[3.0,4.0]]");
    assert_eq!(serde_json::from_str::<M22>(&text).unwrap(), m);
}

#[test]
fn singular_matrices() {
    let m: M33 = mat::from_array([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
    assert_eq!(mat::try_inverse(&m), Err(minimath::SingularMatrixError));
    assert!(mat::try_inverse(&M33::<f64>::eye()).is_ok());
}
