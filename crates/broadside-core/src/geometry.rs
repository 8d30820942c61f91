//! Collision primitives in arena coordinates.
//!
//! Footprints are oriented rectangles rotated about their centre by the
//! owner's heading. Overlap between convex shapes uses the separating-axis
//! test; touching edges count as overlap.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::Arena;

/// Unit vector pointing along `heading_deg` (0° = +x, clockwise on screen).
pub fn heading_vector(heading_deg: f64) -> DVec2 {
    DVec2::from_angle(heading_deg.to_radians())
}

/// A rigid local frame: origin plus heading. Local x runs forward,
/// local y runs to starboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: DVec2,
    pub forward: DVec2,
    pub starboard: DVec2,
}

impl Frame {
    pub fn new(origin: DVec2, heading_deg: f64) -> Self {
        let forward = heading_vector(heading_deg);
        Self {
            origin,
            forward,
            // Screen y grows downward, so the +90° perpendicular is starboard.
            starboard: forward.perp(),
        }
    }

    pub fn to_world(&self, local: DVec2) -> DVec2 {
        self.origin + self.forward * local.x + self.starboard * local.y
    }

    pub fn to_local(&self, world: DVec2) -> DVec2 {
        let d = world - self.origin;
        DVec2::new(d.dot(self.forward), d.dot(self.starboard))
    }
}

/// Oriented bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    pub center: DVec2,
    /// Half length along the heading, half beam across it.
    pub half_extents: DVec2,
    pub heading_deg: f64,
}

impl Obb {
    pub fn new(center: DVec2, length: f64, beam: f64, heading_deg: f64) -> Self {
        Self {
            center,
            half_extents: DVec2::new(length / 2.0, beam / 2.0),
            heading_deg,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.center, self.heading_deg)
    }

    /// Corners in winding order.
    pub fn corners(&self) -> [DVec2; 4] {
        let frame = self.frame();
        let DVec2 { x: hx, y: hy } = self.half_extents;
        [
            frame.to_world(DVec2::new(hx, -hy)),
            frame.to_world(DVec2::new(hx, hy)),
            frame.to_world(DVec2::new(-hx, hy)),
            frame.to_world(DVec2::new(-hx, -hy)),
        ]
    }

    /// Point containment, boundary inclusive.
    pub fn contains(&self, point: DVec2) -> bool {
        let local = self.frame().to_local(point);
        local.x.abs() <= self.half_extents.x && local.y.abs() <= self.half_extents.y
    }

    /// Rectangle vs rectangle overlap.
    pub fn overlaps(&self, other: &Obb) -> bool {
        convex_overlap(&self.corners(), &other.corners())
    }

    /// Overlap with any convex shape given as its vertices
    /// (a two-vertex slice is a line segment).
    pub fn overlaps_shape(&self, vertices: &[DVec2]) -> bool {
        convex_overlap(&self.corners(), vertices)
    }
}

/// Line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn vertices(&self) -> [DVec2; 2] {
        [self.start, self.end]
    }
}

/// Triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle(pub [DVec2; 3]);

impl Triangle {
    pub fn vertices(&self) -> &[DVec2; 3] {
        &self.0
    }

    /// Whether the whole triangle lies within the arena.
    /// Convexity makes the vertex check sufficient.
    pub fn inside(&self, arena: &Arena) -> bool {
        self.0.iter().all(|v| arena.contains(*v))
    }
}

/// Separating-axis test for two convex vertex lists.
pub fn convex_overlap(a: &[DVec2], b: &[DVec2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    !has_separating_edge(a, b) && !has_separating_edge(b, a)
}

fn has_separating_edge(shape: &[DVec2], other: &[DVec2]) -> bool {
    for (i, start) in shape.iter().enumerate() {
        let end = shape[(i + 1) % shape.len()];
        let axis = (end - *start).perp();
        if axis.length_squared() <= f64::EPSILON {
            continue;
        }
        let (min_a, max_a) = project(shape, axis);
        let (min_b, max_b) = project(other, axis);
        if max_a < min_b || max_b < min_a {
            return true;
        }
    }
    false
}

fn project(vertices: &[DVec2], axis: DVec2) -> (f64, f64) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}
