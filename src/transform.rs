//! Affine transforms for the wireframe pipeline.
//!
//! A [`Transform`] wraps a fixed 4x4 matrix. Elementary transforms are built
//! by the constructors below and combined with [`Transform::compose`], which
//! pre-multiplies the new transform onto an accumulated one and returns the
//! result by value:
//!
//! ```ignore
//! let mut acc = Transform::identity();
//! acc = Transform::rotate('z', 90.0).compose(&acc);
//! acc = Transform::translate(50.0, 0.0, 0.0).compose(&acc);
//! ```

use std::ops::Mul;

use crate::math::{mat4::Mat4, vec4::Vec4};

/// An affine map in homogeneous coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Elementary scale by `(a, b, c)` along x, y, z.
    pub fn scale(a: f32, b: f32, c: f32) -> Self {
        let mut m = Mat4::identity();
        m.set(0, 0, a);
        m.set(1, 1, b);
        m.set(2, 2, c);
        Self { matrix: m }
    }

    /// Elementary translation by `(a, b, c)`.
    pub fn translate(a: f32, b: f32, c: f32) -> Self {
        let mut m = Mat4::identity();
        m.set(0, 3, a);
        m.set(1, 3, b);
        m.set(2, 3, c);
        Self { matrix: m }
    }

    /// Elementary rotation of `deg` degrees about `axis` (`'x'`, `'y'` or `'z'`).
    ///
    /// The y-axis variant places the negative sine at row 2 / col 0, the
    /// opposite corner from the x and z variants. Rotating `(1, 0, 0)` by
    /// 90 degrees about y therefore lands on `(0, 0, -1)`.
    ///
    /// Any other axis character leaves the matrix untouched, so the result
    /// is the identity and composing it is a no-op rather than an error.
    pub fn rotate(axis: char, deg: f32) -> Self {
        let mut m = Mat4::identity();
        let rad = deg.to_radians();
        let c = rad.cos();
        let s = rad.sin();

        match axis {
            'z' => {
                m.set(0, 0, c);
                m.set(0, 1, -s);
                m.set(1, 0, s);
                m.set(1, 1, c);
            }
            'x' => {
                m.set(1, 1, c);
                m.set(1, 2, -s);
                m.set(2, 1, s);
                m.set(2, 2, c);
            }
            'y' => {
                m.set(0, 0, c);
                m.set(2, 0, -s);
                m.set(0, 2, s);
                m.set(2, 2, c);
            }
            _ => {}
        }

        Self { matrix: m }
    }

    /// Pre-multiply `self` onto `accumulated`: returns `self * accumulated`.
    ///
    /// The returned transform applies `accumulated` first, then `self`.
    pub fn compose(&self, accumulated: &Transform) -> Transform {
        Transform {
            matrix: self.matrix * accumulated.matrix,
        }
    }

    /// Apply the transform to a homogeneous point.
    pub fn apply(&self, p: Vec4) -> Vec4 {
        self.matrix * p
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform {
            matrix: self.matrix * rhs.matrix,
        }
    }
}
