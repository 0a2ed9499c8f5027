//! Rotations through the fourth dimension
//!
//! Each matrix rotates one spatial axis into w and leaves the other two
//! spatial axes untouched.

use nalgebra::{Matrix4, Vector4};

/// 4×4 type used for all plane rotations
type Matrix = Matrix4<f32>;

/// Rotation in the x-w plane
///
/// ```text
/// | c  0  0 -s |
/// | 0  1  0  0 |
/// | 0  0  1  0 |
/// | s  0  0  c |
/// ```
pub fn rotation_xw(angle: f32) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::new(
        c,   0.0, 0.0, -s,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        s,   0.0, 0.0, c,
    )
}

/// Rotation in the y-w plane
pub fn rotation_yw(angle: f32) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c,   0.0, -s,
        0.0, 0.0, 1.0, 0.0,
        0.0, s,   0.0, c,
    )
}

/// Rotation in the z-w plane
pub fn rotation_zw(angle: f32) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, c,   -s,
        0.0, 0.0, s,   c,
    )
}

/// Matrix-vector product
pub fn rotate(matrix: &Matrix, v: Vector4<f32>) -> Vector4<f32> {
    matrix * v
}

/// Number of coordinates in which two points differ
pub fn differing_axes(a: Vector4<f32>, b: Vector4<f32>) -> usize {
    (a - b).iter().filter(|d| **d != 0.0).count()
}
