//! CPU-side value objects produced by the importers.

use corelib::{Axis, Bounds, Extent, Vec2, Vec3};

/// Indexed triangle mesh built from one section of the input.
///
/// `indices` is flattened with stride 3. `quads` is only populated when the
/// importer runs with [`QuadPolicy::Preserve`](crate::obj::QuadPolicy).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Name from the `o` record that opened the section, if any.
    pub name: Option<String>,
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub quads: Vec<[u32; 4]>,
    /// One planar UV per vertex.
    pub uvs: Vec<Vec2>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns `true` if there is at least one vertex and one face.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && (!self.indices.is_empty() || !self.quads.is_empty())
    }

    /// `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.vertices)
    }

    pub fn extent(&self, axis: Axis) -> Option<Extent> {
        corelib::extent(&self.vertices, axis)
    }
}

/// Two consecutive vertex records read as one logical marker,
/// e.g. both ends of a curb segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPair {
    pub first: Vec3,
    pub second: Vec3,
}

impl AnchorPair {
    pub fn new(first: Vec3, second: Vec3) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec3 {
        (self.first + self.second) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.first.distance(self.second)
    }
}

impl From<AnchorPair> for (Vec3, Vec3) {
    fn from(pair: AnchorPair) -> Self {
        (pair.first, pair.second)
    }
}
