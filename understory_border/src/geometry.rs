// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline and fill geometry of a border region.
//!
//! The outline is a single closed polygon walked counter-clockwise (in y-up
//! pixel space) from the lower-left corner. Each corner contributes either its
//! sharp corner point or `corner_resolution` samples of a quarter circle; the
//! straight sides are implied between consecutive corners. The fill is a
//! triangle fan over the same points, which is valid because the outline is
//! always convex.

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Line, Point, Rect, Vec2};

use crate::state::{Corner, Edge};
use crate::style::{BorderStyle, SegmentVisibility};

/// Arc layout of one corner: where the arc starts and ends relative to its center.
struct CornerArc {
    start_angle: f64,
    /// Unit vector from the arc center to the first sample.
    from: Vec2,
    /// Unit vector from the arc center to the last sample.
    to: Vec2,
}

fn corner_arc(corner: Corner) -> CornerArc {
    match corner {
        Corner::BottomLeft => CornerArc {
            start_angle: 2.0 * FRAC_PI_2,
            from: Vec2::new(-1.0, 0.0),
            to: Vec2::new(0.0, -1.0),
        },
        Corner::BottomRight => CornerArc {
            start_angle: 3.0 * FRAC_PI_2,
            from: Vec2::new(0.0, -1.0),
            to: Vec2::new(1.0, 0.0),
        },
        Corner::TopRight => CornerArc {
            start_angle: 0.0,
            from: Vec2::new(1.0, 0.0),
            to: Vec2::new(0.0, 1.0),
        },
        Corner::TopLeft => CornerArc {
            start_angle: FRAC_PI_2,
            from: Vec2::new(0.0, 1.0),
            to: Vec2::new(-1.0, 0.0),
        },
    }
}

/// Generated outline and fill of a border region.
///
/// Buffers are refilled in place on every rebuild, so their allocations are
/// reused across frames.
#[derive(Clone, Debug, Default)]
pub struct BorderGeometry {
    rect: Rect,
    radius: f64,
    points: Vec<Point>,
    /// `(start, len)` into `points` for each corner, by `Corner::index`.
    corners: [(usize, usize); 4],
    triangles: Vec<[usize; 3]>,
    built_revision: Option<u64>,
}

impl BorderGeometry {
    /// Creates empty geometry that is stale for every revision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the revision the geometry was last built for.
    #[must_use]
    pub fn built_revision(&self) -> Option<u64> {
        self.built_revision
    }

    /// Returns `true` if the geometry was not built for `revision`.
    #[must_use]
    pub fn is_stale(&self, revision: u64) -> bool {
        self.built_revision != Some(revision)
    }

    /// Rebuilds the geometry for `rect` if it is stale for `revision`.
    ///
    /// Returns `true` if a rebuild happened.
    pub fn rebuild(&mut self, rect: Rect, style: &BorderStyle, revision: u64) -> bool {
        if !self.is_stale(revision) {
            return false;
        }
        self.generate(rect.abs(), style);
        self.built_revision = Some(revision);
        tracing::debug!(
            revision,
            points = self.points.len(),
            radius = self.radius,
            "rebuilt border geometry"
        );
        true
    }

    fn generate(&mut self, rect: Rect, style: &BorderStyle) {
        self.rect = rect;
        self.points.clear();
        self.triangles.clear();

        let radius = style.corner_radius_strength() * rect.width().min(rect.height()) * 0.5;
        let resolution = style.corner_resolution() as usize;
        // Degenerate rectangles clamp the radius to zero and keep sharp corners.
        self.radius = if radius.is_finite() && radius > 0.0 && resolution > 0 {
            radius
        } else {
            0.0
        };

        for corner in Corner::ALL {
            let start = self.points.len();
            let sharp = corner_point(rect, corner);
            if self.radius == 0.0 {
                self.points.push(sharp);
            } else {
                let center = arc_center(rect, corner, self.radius);
                push_arc(&mut self.points, center, self.radius, corner, resolution);
            }
            self.corners[corner.index()] = (start, self.points.len() - start);
        }

        for i in 1..self.points.len().saturating_sub(1) {
            self.triangles.push([0, i, i + 1]);
        }
    }

    /// Returns the rectangle the geometry was built for.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the corner radius used for the last build (`0` for sharp corners).
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns every outline point in counter-clockwise order.
    #[must_use]
    pub fn outline(&self) -> &[Point] {
        &self.points
    }

    /// Returns the points contributed by `corner`.
    #[must_use]
    pub fn corner_points(&self, corner: Corner) -> &[Point] {
        let (start, len) = self.corners[corner.index()];
        &self.points[start..start + len]
    }

    /// Returns the center of the arc for `corner`, or the corner itself when sharp.
    #[must_use]
    pub fn arc_center(&self, corner: Corner) -> Point {
        arc_center(self.rect, corner, self.radius)
    }

    /// Returns the straight part of `edge`, between its two corners.
    ///
    /// Before the first build this is the side of the (empty) stored rectangle.
    #[must_use]
    pub fn side(&self, edge: Edge) -> Line {
        let from = self
            .corner_points(edge.start())
            .last()
            .copied()
            .unwrap_or_else(|| corner_point(self.rect, edge.start()));
        let to = self
            .corner_points(edge.end())
            .first()
            .copied()
            .unwrap_or_else(|| corner_point(self.rect, edge.end()));
        Line::new(from, to)
    }

    /// Returns the fill triangles as indices into [`BorderGeometry::outline`].
    #[must_use]
    pub fn fill_triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Returns the closed fill polygon as a path.
    #[must_use]
    pub fn fill_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter().copied();
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    /// Returns the visible part of the outline as a stroke path.
    ///
    /// With both segment groups visible this is the whole closed outline.
    /// Otherwise only the straight sides of the visible group are emitted, as
    /// separate open subpaths.
    #[must_use]
    pub fn outline_path(&self, visibility: SegmentVisibility) -> BezPath {
        if self.points.is_empty() {
            return BezPath::new();
        }
        if visibility.horizontal && visibility.vertical {
            return self.fill_path();
        }
        let mut path = BezPath::new();
        for edge in Edge::ALL {
            let shown = if edge.is_horizontal() {
                visibility.horizontal
            } else {
                visibility.vertical
            };
            if shown {
                let side = self.side(edge);
                path.move_to(side.p0);
                path.line_to(side.p1);
            }
        }
        path
    }
}

fn corner_point(rect: Rect, corner: Corner) -> Point {
    match corner {
        Corner::BottomLeft => Point::new(rect.x0, rect.y0),
        Corner::BottomRight => Point::new(rect.x1, rect.y0),
        Corner::TopRight => Point::new(rect.x1, rect.y1),
        Corner::TopLeft => Point::new(rect.x0, rect.y1),
    }
}

fn arc_center(rect: Rect, corner: Corner, radius: f64) -> Point {
    let (sx, sy) = corner.outward();
    corner_point(rect, corner) - Vec2::new(sx * radius, sy * radius)
}

/// Pushes `resolution` samples of the quarter circle for `corner`.
///
/// The first and last samples are placed exactly on the adjacent straight
/// sides so that the outline has no gaps.
fn push_arc(points: &mut Vec<Point>, center: Point, radius: f64, corner: Corner, resolution: usize) {
    let arc = corner_arc(corner);
    if resolution == 1 {
        let angle = arc.start_angle + FRAC_PI_2 * 0.5;
        points.push(center + Vec2::new(angle.cos(), angle.sin()) * radius);
        return;
    }
    let last = resolution - 1;
    points.reserve(resolution);
    for i in 0..resolution {
        let unit = if i == 0 {
            arc.from
        } else if i == last {
            arc.to
        } else {
            let angle = arc.start_angle + FRAC_PI_2 * (i as f64) / (last as f64);
            Vec2::new(angle.cos(), angle.sin())
        };
        points.push(center + unit * radius);
    }
}
