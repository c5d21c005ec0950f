//! Bresenham line rasterization over four slope octants.
//!
//! The classic algorithm steps along the major axis with an integer
//! decision variable; doubling the coefficients keeps every update
//! integral, so no fractional arithmetic is needed. The four symmetric
//! slope ranges share one stepper parameterized by an [`Octant`] table
//! entry; point-order symmetry covers the remaining four octants.

use super::frame::{Frame, Pixel};
use crate::edgelist::EdgeList;

/// Which coordinate the stepper advances unconditionally.
#[derive(Clone, Copy)]
enum Major {
    X,
    Y,
}

/// One row of the octant dispatch table.
///
/// `d` is seeded per octant; after each major-axis step `d_major` is added,
/// and when the decision variable trips (sign chosen by
/// `advance_minor_on_positive`) the minor axis steps and `d_minor` is added.
struct Octant {
    major: Major,
    major_step: i32,
    minor_step: i32,
    d: i32,
    d_major: i32,
    d_minor: i32,
    advance_minor_on_positive: bool,
}

fn step_octant(frame: &mut Frame, color: Pixel, mut x: i32, mut y: i32, end: i32, oct: Octant) {
    let bound = match oct.major {
        Major::X => frame.width() as i32,
        Major::Y => frame.height() as i32,
    };
    let mut d = oct.d;

    loop {
        let major = match oct.major {
            Major::X => x,
            Major::Y => y,
        };
        let in_span = if oct.major_step > 0 {
            major <= end
        } else {
            major >= end
        };
        if !in_span || major >= bound {
            break;
        }

        frame.plot(x, y, color);

        let trip = if oct.advance_minor_on_positive {
            d > 0
        } else {
            d < 0
        };
        if trip {
            match oct.major {
                Major::X => y += oct.minor_step,
                Major::Y => x += oct.minor_step,
            }
            d += oct.d_minor;
        }

        match oct.major {
            Major::X => x += oct.major_step,
            Major::Y => y += oct.major_step,
        }
        d += oct.d_major;
    }
}

/// Rasterize the segment from `(x1, y1)` to `(x2, y2)` into `frame`.
///
/// Endpoints are normalized so the leftmost comes first, then the slope
/// `m = dy / dx` selects the octant: `[0, 1]` steps x and climbs
/// (octant 1), `> 1` steps y (octant 2), `[-1, 0)` steps x and descends
/// (octant 8), `< -1` steps y downward (octant 7). Both range boundaries
/// are inclusive, so `m == 1` takes octant 1 and `m == -1` takes octant 8.
///
/// A vertical segment divides by zero: ascending y gives `+inf` and falls
/// into octant 2, descending gives `-inf` and falls into octant 7.
/// Coincident endpoints give `0 / 0 = NaN`, which matches no octant, so a
/// degenerate point draws nothing.
pub fn draw_line(frame: &mut Frame, color: Pixel, x1: i32, y1: i32, x2: i32, y2: i32) {
    // Normalize so (x1, y1) is the left endpoint.
    let (x1, y1, x2, y2) = if x1 > x2 {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };

    let a = y2 - y1;
    let b = -(x2 - x1);
    let m = a as f32 / (-b) as f32;

    if (0.0..=1.0).contains(&m) {
        // octant 1: step x, climb y
        step_octant(
            frame,
            color,
            x1,
            y1,
            x2,
            Octant {
                major: Major::X,
                major_step: 1,
                minor_step: 1,
                d: 2 * a + b,
                d_major: 2 * a,
                d_minor: 2 * b,
                advance_minor_on_positive: true,
            },
        );
    } else if m > 1.0 {
        // octant 2: step y, climb x; re-sort by ascending y
        let (x1, y1, x2, y2) = if y1 > y2 {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };
        let a = y2 - y1;
        let b = -(x2 - x1);
        step_octant(
            frame,
            color,
            x1,
            y1,
            y2,
            Octant {
                major: Major::Y,
                major_step: 1,
                minor_step: 1,
                d: a + 2 * b,
                d_major: 2 * b,
                d_minor: 2 * a,
                advance_minor_on_positive: false,
            },
        );
    } else if (-1.0..0.0).contains(&m) {
        // octant 8: step x, descend y
        step_octant(
            frame,
            color,
            x1,
            y1,
            x2,
            Octant {
                major: Major::X,
                major_step: 1,
                minor_step: -1,
                d: 2 * a - b,
                d_major: 2 * a,
                d_minor: -2 * b,
                advance_minor_on_positive: false,
            },
        );
    } else if m < -1.0 {
        // octant 7: step y downward, climb x; re-sort by descending y
        let (x1, y1, x2, y2) = if y1 < y2 {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };
        let a = y2 - y1;
        let b = -(x2 - x1);
        step_octant(
            frame,
            color,
            x1,
            y1,
            y2,
            Octant {
                major: Major::Y,
                major_step: -1,
                minor_step: 1,
                d: a - 2 * b,
                d_major: -2 * b,
                d_minor: 2 * a,
                advance_minor_on_positive: true,
            },
        );
    }
    // NaN slope (coincident endpoints) matches no octant: nothing to draw.
}

/// Rasterize every edge in the list, truncating coordinates to integers.
pub fn draw_edges(frame: &mut Frame, edges: &EdgeList, color: Pixel) {
    for (p, q) in edges.edges() {
        draw_line(frame, color, p.x as i32, p.y as i32, q.x as i32, q.y as i32);
    }
}
