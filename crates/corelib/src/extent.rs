//! Axis-aligned bounding extents over vertex buffers.
//!
//! An empty buffer has no extent: queries return `None` instead of the
//! inverted `+inf/-inf` pair a sentinel-initialised scan would produce.

use crate::Vec3;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Closed interval `[min, max]` along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f32,
    pub max: f32,
}

impl Extent {
    #[inline]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Degenerate extent covering a single value.
    #[inline]
    pub fn point(v: f32) -> Self {
        Self { min: v, max: v }
    }

    #[inline]
    pub fn expanded(self, v: f32) -> Self {
        Self {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Min/max of `points` along `axis`, or `None` if `points` is empty.
pub fn extent(points: &[Vec3], axis: Axis) -> Option<Extent> {
    let mut it = points.iter().map(|p| axis.component(*p));
    let first = Extent::point(it.next()?);
    Some(it.fold(first, Extent::expanded))
}

/// Axis-aligned bounding box of a vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Single pass over `points`; `None` if there are none.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, &p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            },
        ))
    }

    #[inline]
    pub fn axis(&self, axis: Axis) -> Extent {
        Extent::new(axis.component(self.min), axis.component(self.max))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec3) -> bool {
        Axis::ALL
            .iter()
            .all(|&a| self.axis(a).contains(a.component(p)))
    }
}
