// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::coords::CoordinateService;

/// The two corners of a border region in normalized viewport coordinates.
///
/// `position` is the lower-left corner and `position2` the upper-right one.
/// Every mutation reorders the corners so that `position <= position2` on both
/// axes, which keeps the derived pixel rectangle from ever being inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    position: Point,
    position2: Point,
}

impl Region {
    /// Creates a region from two opposite corners in any order.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let mut region = Self {
            position: a,
            position2: b,
        };
        region.reorder();
        region
    }

    /// Returns the lower-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the upper-right corner.
    #[must_use]
    pub fn position2(&self) -> Point {
        self.position2
    }

    /// Replaces both corners. Returns `true` if the region changed.
    pub fn set_corners(&mut self, a: Point, b: Point) -> bool {
        if !(a.is_finite() && b.is_finite()) {
            return false;
        }
        let next = Self::new(a, b);
        if next == *self {
            return false;
        }
        *self = next;
        true
    }

    /// Returns the region as a normalized rectangle.
    #[must_use]
    pub fn normalized_rect(&self) -> Rect {
        Rect::from_points(self.position, self.position2)
    }

    /// Returns the region in pixel space, as mapped by `coords`.
    #[must_use]
    pub fn pixel_rect(&self, coords: &impl CoordinateService) -> Rect {
        Rect::from_points(
            coords.to_pixels(self.position),
            coords.to_pixels(self.position2),
        )
    }

    /// Places the region at a pixel-space rectangle. Returns `true` if it changed.
    pub fn set_pixel_rect(&mut self, rect: Rect, coords: &impl CoordinateService) -> bool {
        let rect = rect.abs();
        self.set_corners(
            coords.to_normalized(Point::new(rect.x0, rect.y0)),
            coords.to_normalized(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a pixel-space point to fractions of the region (lower-left origin).
    ///
    /// Degenerate axes map to `0`.
    #[must_use]
    pub fn fraction_of(&self, pixel: Point, coords: &impl CoordinateService) -> Point {
        let rect = self.pixel_rect(coords);
        let fx = if rect.width() > 0.0 {
            (pixel.x - rect.x0) / rect.width()
        } else {
            0.0
        };
        let fy = if rect.height() > 0.0 {
            (pixel.y - rect.y0) / rect.height()
        } else {
            0.0
        };
        Point::new(fx, fy)
    }

    fn reorder(&mut self) {
        let (a, b) = (self.position, self.position2);
        self.position = Point::new(a.x.min(b.x), a.y.min(b.y));
        self.position2 = Point::new(a.x.max(b.x), a.y.max(b.y));
    }
}

impl Default for Region {
    /// The classic placement: 10% of the viewport, 5% in from the lower-left corner.
    fn default() -> Self {
        Self::new(Point::new(0.05, 0.05), Point::new(0.15, 0.15))
    }
}
