//! Growable list of homogeneous points interpreted pairwise as edges.
//!
//! Shape generators push points into an [`EdgeList`]; consecutive points
//! `2k` and `2k + 1` form line segment `k`. Point-cloud producers (see
//! `shapes::sphere_points`) may leave a trailing unpaired point, which
//! [`EdgeList::edges`] simply ignores.

use crate::math::vec4::Vec4;
use crate::transform::Transform;

/// A growable buffer of homogeneous 3D points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    points: Vec<Vec4>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a single point with `w = 1`.
    pub fn push_point(&mut self, x: f32, y: f32, z: f32) {
        self.points.push(Vec4::point(x, y, z));
    }

    /// Append both endpoints of an edge.
    pub fn push_edge(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
        self.push_point(x1, y1, z1);
        self.push_point(x2, y2, z2);
    }

    /// Number of points (not edges) in the list.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec4] {
        &self.points
    }

    /// Iterate over point pairs as line segments.
    pub fn edges(&self) -> impl Iterator<Item = (Vec4, Vec4)> + '_ {
        self.points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Apply a transform to every point in place.
    pub fn transform(&mut self, t: &Transform) {
        for p in &mut self.points {
            *p = t.apply(*p);
        }
    }
}
