//! Curve and solid generators.
//!
//! Every generator appends points or edges to a caller-owned [`EdgeList`].
//! Curves step a parameter `t` from 0 to 1 in fixed [`STEP`] increments;
//! float accumulation may push the final sample slightly past `t = 1`,
//! which is accepted rather than clamped.

use std::f32::consts::PI;

use crate::edgelist::EdgeList;
use crate::error::{Error, Result};
use crate::math::{mat4::Mat4, vec4::Vec4};

/// Parameter increment for curve sampling (100 segments per unit of `t`).
pub const STEP: f32 = 0.01;

#[inline]
fn cubic(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    a * t * t * t + b * t * t + c * t + d
}

/// Sample the cubic `a*t^3 + b*t^2 + c*t + d` for x and y independently,
/// appending one edge per step from `t` to `t + STEP` at `z = 0`.
#[allow(clippy::too_many_arguments)]
pub fn parametric_cubic(
    edges: &mut EdgeList,
    ax: f32,
    bx: f32,
    cx: f32,
    dx: f32,
    ay: f32,
    by: f32,
    cy: f32,
    dy: f32,
) {
    let mut t = 0.0f32;
    while t <= 1.0 {
        edges.push_edge(
            cubic(ax, bx, cx, dx, t),
            cubic(ay, by, cy, dy, t),
            0.0,
            cubic(ax, bx, cx, dx, t + STEP),
            cubic(ay, by, cy, dy, t + STEP),
            0.0,
        );
        t += STEP;
    }
}

/// Append a circular arc of radius `r` centered at `(cx, cy, cz)`.
///
/// `deg` is the angular extent and, despite the name, is consumed as
/// radians: pass `2.0 * PI` for a full circle. The historical name is kept
/// so existing callers read the same.
pub fn circle(edges: &mut EdgeList, cx: f32, cy: f32, cz: f32, r: f32, deg: f32) {
    let mut t = 0.0f32;
    while t <= 1.0 {
        edges.push_edge(
            r * (deg * t).cos() + cx,
            r * (deg * t).sin() + cy,
            cz,
            r * (deg * (t + STEP)).cos() + cx,
            r * (deg * (t + STEP)).sin() + cy,
            cz,
        );
        t += STEP;
    }
}

/// Append a Hermite spline from `(x0, y0)` to `(x1, y1)` with endpoint
/// tangents `(rx0, ry0)` and `(rx1, ry1)`.
#[allow(clippy::too_many_arguments)]
pub fn hermite(
    edges: &mut EdgeList,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    rx0: f32,
    ry0: f32,
    rx1: f32,
    ry1: f32,
) {
    let basis = Mat4::new([
        [2.0, -2.0, 1.0, 1.0],
        [-3.0, 3.0, -2.0, -1.0],
        [0.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ]);

    let cx = basis * Vec4::new(x0, x1, rx0, rx1);
    let cy = basis * Vec4::new(y0, y1, ry0, ry1);

    parametric_cubic(edges, cx.x, cx.y, cx.z, cx.w, cy.x, cy.y, cy.z, cy.w);
}

/// Append a cubic Bezier spline through control points `(x0, y0)..(x3, y3)`.
#[allow(clippy::too_many_arguments)]
pub fn bezier(
    edges: &mut EdgeList,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    x3: f32,
    y3: f32,
) {
    let basis = Mat4::new([
        [-1.0, 3.0, -3.0, 1.0],
        [3.0, -6.0, 3.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ]);

    let cx = basis * Vec4::new(x0, x1, x2, x3);
    let cy = basis * Vec4::new(y0, y1, y2, y3);

    parametric_cubic(edges, cx.x, cx.y, cx.z, cx.w, cy.x, cy.y, cy.z, cy.w);
}

/// Append the 12 edges of a box anchored at `(x, y, z)`, extending `+width`
/// in x, `-height` in y and `-depth` in z. The sign asymmetry is part of
/// the contract.
pub fn add_cube(edges: &mut EdgeList, x: f32, y: f32, z: f32, height: f32, width: f32, depth: f32) {
    let x2 = x + width;
    let y2 = y - height;
    let z2 = z - depth;

    // front face
    edges.push_edge(x, y, z, x, y2, z);
    edges.push_edge(x, y2, z, x2, y2, z);
    edges.push_edge(x2, y2, z, x2, y, z);
    edges.push_edge(x2, y, z, x, y, z);

    // back face
    edges.push_edge(x, y, z2, x, y2, z2);
    edges.push_edge(x, y2, z2, x2, y2, z2);
    edges.push_edge(x2, y2, z2, x2, y, z2);
    edges.push_edge(x2, y, z2, x, y, z2);

    // connecting edges
    edges.push_edge(x, y, z, x, y, z2);
    edges.push_edge(x, y2, z, x, y2, z2);
    edges.push_edge(x2, y2, z, x2, y2, z2);
    edges.push_edge(x2, y, z, x2, y, z2);
}

/// Sample points on a sphere of radius `r` centered at `(cx, cy, cz)`.
///
/// Both angle parameters range over `[0, 1]` and advance by `step`, which
/// is a fractional increment: pass something like `0.05`, not a sample
/// count. A `step >= 1` yields only the poles.
pub fn sphere_points(cx: f32, cy: f32, cz: f32, r: f32, step: f32) -> EdgeList {
    let mut points = EdgeList::new();
    let mut t = 0.0f32;
    while t <= 1.0 {
        let mut t1 = 0.0f32;
        while t1 <= 1.0 {
            points.push_point(
                r * (t1 * PI).cos() + cx,
                r * (t1 * PI).sin() * (t * 2.0 * PI).cos() + cy,
                r * (t1 * PI).sin() * (t * 2.0 * PI).sin() + cz,
            );
            t1 += step;
        }
        t += step;
    }
    points
}

/// Append sphere geometry as edges.
///
/// Each sampled point (except the last) is joined to a synthetic partner
/// offset by exactly `+1` in x, producing degenerate unit-length edges.
/// This placeholder wiring is preserved as-is; callers get one plotted
/// dash per sample rather than a connected mesh.
pub fn add_sphere(edges: &mut EdgeList, cx: f32, cy: f32, cz: f32, r: f32, step: f32) {
    let points = sphere_points(cx, cy, cz, r, step);
    let pts = points.points();
    for p in &pts[..pts.len().saturating_sub(1)] {
        edges.push_edge(p.x, p.y, p.z, p.x + 1.0, p.y, p.z);
    }
}

/// Torus geometry is recognized but not implemented.
///
/// Always returns [`Error::Unsupported`] so callers can tell the stub from
/// a legitimately empty result.
pub fn add_torus(
    _edges: &mut EdgeList,
    _cx: f32,
    _cy: f32,
    _cz: f32,
    _r1: f32,
    _r2: f32,
    _step: f32,
) -> Result<()> {
    Err(Error::Unsupported("torus"))
}

/// Torus point sampling is recognized but not implemented.
pub fn torus_points(_cx: f32, _cy: f32, _cz: f32, _r1: f32, _r2: f32, _step: f32) -> Result<EdgeList> {
    Err(Error::Unsupported("torus"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circle_full_turn_closes() {
        let mut edges = EdgeList::new();
        circle(&mut edges, 0.0, 0.0, 0.0, 1.0, 2.0 * PI);

        let pts = edges.points();
        let first = pts[0];
        let last = pts[pts.len() - 1];
        assert_relative_eq!(first.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-5);
        // The final sample may overshoot t = 1 by up to one step, so the
        // gap is bounded by one step's worth of arc.
        let gap = ((last.x - first.x).powi(2) + (last.y - first.y).powi(2)).sqrt();
        assert!(gap < 2.0 * PI * STEP * 1.5, "gap = {gap}");
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let mut edges = EdgeList::new();
        circle(&mut edges, 3.0, -2.0, 5.0, 2.0, 2.0 * PI);
        for p in edges.points() {
            let d = ((p.x - 3.0).powi(2) + (p.y + 2.0).powi(2)).sqrt();
            assert_relative_eq!(d, 2.0, epsilon = 1e-4);
            assert_relative_eq!(p.z, 5.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_hermite_starts_at_p0() {
        let mut edges = EdgeList::new();
        hermite(&mut edges, 1.0, 2.0, 5.0, -3.0, 0.0, 1.0, 1.0, 0.0);
        let first = edges.points()[0];
        assert_relative_eq!(first.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(first.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_hermite_reaches_p1() {
        let mut edges = EdgeList::new();
        hermite(&mut edges, 0.0, 0.0, 4.0, 4.0, 1.0, 0.0, 0.0, 1.0);
        let last = edges.points()[edges.len() - 1];
        // Final sample overshoots t = 1 by at most one step.
        assert_relative_eq!(last.x, 4.0, epsilon = 0.2);
        assert_relative_eq!(last.y, 4.0, epsilon = 0.2);
    }

    #[test]
    fn test_bezier_collinear_controls_stay_on_line() {
        let mut edges = EdgeList::new();
        // Control points on y = 2x.
        bezier(&mut edges, 0.0, 0.0, 1.0, 2.0, 2.0, 4.0, 3.0, 6.0);
        assert!(!edges.is_empty());
        for p in edges.points() {
            assert_relative_eq!(p.y, 2.0 * p.x, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_bezier_endpoint_interpolation() {
        let mut edges = EdgeList::new();
        bezier(&mut edges, -1.0, 0.5, 0.0, 3.0, 1.0, 3.0, 2.0, 0.5);
        let first = edges.points()[0];
        assert_relative_eq!(first.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(first.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_cube_edge_count_and_corners() {
        let mut edges = EdgeList::new();
        add_cube(&mut edges, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        assert_eq!(edges.edges().count(), 12);
        assert_eq!(edges.len(), 24);

        // Every endpoint must be a corner of {0,1} x {0,-1} x {0,-1}.
        for p in edges.points() {
            assert!(p.x == 0.0 || p.x == 1.0, "x = {}", p.x);
            assert!(p.y == 0.0 || p.y == -1.0, "y = {}", p.y);
            assert!(p.z == 0.0 || p.z == -1.0, "z = {}", p.z);
        }

        // All 8 corners appear among the endpoints.
        for &x in &[0.0f32, 1.0] {
            for &y in &[0.0f32, -1.0] {
                for &z in &[0.0f32, -1.0] {
                    assert!(
                        edges.points().iter().any(|p| p.x == x && p.y == y && p.z == z),
                        "missing corner ({x}, {y}, {z})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sphere_points_fractional_step() {
        // step = 0.5 samples t, t1 in {0, 0.5, 1.0}: 9 points.
        let points = sphere_points(0.0, 0.0, 0.0, 1.0, 0.5);
        assert_eq!(points.len(), 9);
        for p in points.points() {
            let d = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            assert_relative_eq!(d, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_add_sphere_degenerate_edges() {
        let mut edges = EdgeList::new();
        add_sphere(&mut edges, 0.0, 0.0, 0.0, 1.0, 0.5);

        // One edge per sampled point except the last.
        assert_eq!(edges.edges().count(), 8);
        for (a, b) in edges.edges() {
            assert_relative_eq!(b.x - a.x, 1.0, epsilon = 1e-6);
            assert_relative_eq!(b.y, a.y, epsilon = 1e-6);
            assert_relative_eq!(b.z, a.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_torus_is_unsupported() {
        let mut edges = EdgeList::new();
        let err = add_torus(&mut edges, 0.0, 0.0, 0.0, 2.0, 1.0, 0.05).unwrap_err();
        assert!(matches!(err, Error::Unsupported("torus")));
        assert!(edges.is_empty());

        assert!(torus_points(0.0, 0.0, 0.0, 2.0, 1.0, 0.05).is_err());
    }
}
