// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// Conversion between normalized viewport coordinates and device pixels.
///
/// The border region stores its corners in normalized viewport coordinates
/// (fractions of the viewport, lower-left origin) so that it survives viewport
/// resizes. All hit testing, layout, and geometry happen in pixel space; this
/// trait is the only bridge between the two.
///
/// Implementations must be pure from the region's perspective: the same input
/// yields the same output until the implementation itself is reconfigured.
pub trait CoordinateService {
    /// Converts a normalized viewport point into device pixels.
    fn to_pixels(&self, normalized: Point) -> Point;

    /// Converts a device-pixel point into normalized viewport coordinates.
    fn to_normalized(&self, pixels: Point) -> Point;

    /// Optional pixel-space bound that moving the region should respect.
    fn viewport_bounds(&self) -> Option<Rect> {
        None
    }
}

/// Default [`CoordinateService`] backed by a viewport rectangle in device pixels.
///
/// Pixel space is y-up: normalized `(0, 0)` maps to the lower-left corner of
/// the view rectangle and `(1, 1)` to its upper-right corner.
#[derive(Clone, Debug)]
pub struct ViewportCoordinates {
    view_rect: Rect,
    clamp_moves: bool,
    to_pixels: Affine,
    to_normalized: Affine,
}

impl ViewportCoordinates {
    /// Creates a converter for `view_rect`.
    ///
    /// Moves are not clamped to the viewport by default.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut coords = Self {
            view_rect: view_rect.abs(),
            clamp_moves: false,
            to_pixels: Affine::IDENTITY,
            to_normalized: Affine::IDENTITY,
        };
        coords.rebuild_transforms();
        coords
    }

    /// Creates a converter for a viewport of `width` by `height` pixels at the origin.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// Returns the viewport rectangle in device pixels.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the viewport rectangle in device pixels.
    pub fn set_view_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns `true` if moving the region is kept inside the viewport.
    #[must_use]
    pub fn clamp_moves(&self) -> bool {
        self.clamp_moves
    }

    /// Sets whether moving the region is kept inside the viewport.
    pub fn set_clamp_moves(&mut self, clamp: bool) {
        self.clamp_moves = clamp;
    }

    fn rebuild_transforms(&mut self) {
        let origin = self.view_rect.origin().to_vec2();
        let size = self.view_rect.size();
        self.to_pixels =
            Affine::translate(origin) * Affine::scale_non_uniform(size.width, size.height);
        // A zero-area viewport has no inverse; map every pixel to the normalized origin.
        self.to_normalized = if self.to_pixels.determinant().abs() > f64::EPSILON {
            self.to_pixels.inverse()
        } else {
            Affine::scale(0.0)
        };
    }
}

impl Default for ViewportCoordinates {
    fn default() -> Self {
        Self::from_size(1.0, 1.0)
    }
}

impl CoordinateService for ViewportCoordinates {
    fn to_pixels(&self, normalized: Point) -> Point {
        self.to_pixels * normalized
    }

    fn to_normalized(&self, pixels: Point) -> Point {
        self.to_normalized * pixels
    }

    fn viewport_bounds(&self) -> Option<Rect> {
        self.clamp_moves.then_some(self.view_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_corners_map_to_pixels() {
        let coords = ViewportCoordinates::from_size(1000.0, 1000.0);
        assert_eq!(
            coords.to_pixels(Point::new(0.1, 0.4)),
            Point::new(100.0, 400.0)
        );
        let back = coords.to_normalized(Point::new(100.0, 400.0));
        assert!((back.x - 0.1).abs() < 1e-12, "x round trip: {back:?}");
        assert!((back.y - 0.4).abs() < 1e-12, "y round trip: {back:?}");
    }

    #[test]
    fn offset_viewport_is_respected() {
        let coords = ViewportCoordinates::new(Rect::new(50.0, 20.0, 250.0, 120.0));
        assert_eq!(coords.to_pixels(Point::ZERO), Point::new(50.0, 20.0));
        assert_eq!(
            coords.to_pixels(Point::new(1.0, 1.0)),
            Point::new(250.0, 120.0)
        );
    }

    #[test]
    fn zero_sized_viewport_does_not_produce_nan() {
        let coords = ViewportCoordinates::from_size(0.0, 0.0);
        let p = coords.to_normalized(Point::new(10.0, 10.0));
        assert!(p.x.is_finite() && p.y.is_finite(), "got {p:?}");
    }

    #[test]
    fn bounds_only_reported_when_clamping() {
        let mut coords = ViewportCoordinates::from_size(640.0, 480.0);
        assert_eq!(coords.viewport_bounds(), None);
        coords.set_clamp_moves(true);
        assert_eq!(
            coords.viewport_bounds(),
            Some(Rect::new(0.0, 0.0, 640.0, 480.0))
        );
    }
}
