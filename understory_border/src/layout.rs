// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving and resizing a pixel-space rectangle under drag.
//!
//! ## Usage
//!
//! 1) Classify the pointer with [`classify`](crate::classify) and start a drag
//!    with [`LayoutEngine::start_session`].
//! 2) On each move event, call [`LayoutEngine::step`] with the current
//!    rectangle; it returns the reshaped rectangle, if any.
//! 3) End the drag with [`LayoutEngine::end_session`], or simply drop it: a new
//!    session replaces an abandoned one.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_border::{Corner, InteractionState, LayoutEngine};
//!
//! let mut engine = LayoutEngine::new();
//! let rect = Rect::new(100.0, 100.0, 400.0, 400.0);
//!
//! engine.start_session(Point::new(400.0, 400.0), InteractionState::AdjustingCorner(Corner::TopRight));
//! let resized = engine.step(Point::new(450.0, 420.0), rect).unwrap();
//! assert_eq!(resized, Rect::new(100.0, 100.0, 450.0, 420.0));
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::state::{Corner, Edge, InteractionState};

/// Minimum and maximum pixel size of the region.
///
/// Both bounds are at least one pixel on each axis and `minimum <= maximum`
/// componentwise; the setters restore these invariants instead of failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraints {
    minimum: Size,
    maximum: Size,
}

impl SizeConstraints {
    /// The default upper bound on each axis.
    pub const DEFAULT_MAXIMUM: f64 = 100_000.0;

    /// Creates constraints, repairing bounds that are below one pixel or crossed.
    #[must_use]
    pub fn new(minimum: Size, maximum: Size) -> Self {
        let mut constraints = Self::default();
        constraints.set_minimum(minimum);
        constraints.set_maximum(maximum);
        constraints
    }

    /// Returns the minimum size.
    #[must_use]
    pub fn minimum(&self) -> Size {
        self.minimum
    }

    /// Returns the maximum size.
    #[must_use]
    pub fn maximum(&self) -> Size {
        self.maximum
    }

    /// Sets the minimum size and returns the applied value.
    ///
    /// Components below one pixel are raised to one; the maximum is raised to
    /// the new minimum where needed.
    pub fn set_minimum(&mut self, minimum: Size) -> Size {
        self.minimum = Size::new(at_least_one(minimum.width), at_least_one(minimum.height));
        self.maximum = Size::new(
            self.maximum.width.max(self.minimum.width),
            self.maximum.height.max(self.minimum.height),
        );
        self.minimum
    }

    /// Sets the maximum size and returns the applied value.
    ///
    /// Components below the current minimum are raised to it.
    pub fn set_maximum(&mut self, maximum: Size) -> Size {
        let width = if maximum.width.is_nan() {
            self.maximum.width
        } else {
            maximum.width
        };
        let height = if maximum.height.is_nan() {
            self.maximum.height
        } else {
            maximum.height
        };
        self.maximum = Size::new(
            width.max(self.minimum.width),
            height.max(self.minimum.height),
        );
        self.maximum
    }

    /// Clamps `size` componentwise into `[minimum, maximum]`.
    #[must_use]
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.minimum.width, self.maximum.width),
            size.height.clamp(self.minimum.height, self.maximum.height),
        )
    }

    /// Returns `true` if `size` lies within the bounds, allowing `eps` of slack.
    #[must_use]
    pub fn contains(&self, size: Size, eps: f64) -> bool {
        size.width >= self.minimum.width - eps
            && size.width <= self.maximum.width + eps
            && size.height >= self.minimum.height - eps
            && size.height <= self.maximum.height + eps
    }

    /// The widths for which both `width` and `width / aspect` satisfy the bounds.
    ///
    /// Returns `None` when no such width exists.
    fn aspect_width_range(&self, aspect: f64) -> Option<(f64, f64)> {
        let lo = self.minimum.width.max(self.minimum.height * aspect);
        let hi = self.maximum.width.min(self.maximum.height * aspect);
        (lo <= hi).then_some((lo, hi))
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self {
            minimum: Size::new(1.0, 1.0),
            maximum: Size::new(Self::DEFAULT_MAXIMUM, Self::DEFAULT_MAXIMUM),
        }
    }
}

fn at_least_one(v: f64) -> f64 {
    if v.is_nan() { 1.0 } else { v.max(1.0) }
}

/// Size information supplied by the content shown inside the region.
///
/// A caption, legend, or image placed inside a border knows its natural
/// proportions and the smallest size at which it is still legible. The layout
/// engine uses the former as the target aspect ratio for proportional resizing
/// and the latter during [`LayoutEngine::negotiate`].
pub trait IntrinsicSizeProvider: fmt::Debug {
    /// The natural size of the content; only its aspect ratio is used.
    fn intrinsic_size(&self) -> Size {
        Size::new(1.0, 1.0)
    }

    /// The smallest pixel size at which the content fits.
    fn minimum_size(&self) -> Size {
        Size::ZERO
    }
}

/// Default provider: square aspect, no minimum.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitSize;

impl IntrinsicSizeProvider for UnitSize {}

/// Provider for content with a fixed natural size and minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSize {
    /// Natural size of the content.
    pub intrinsic: Size,
    /// Smallest pixel size at which the content fits.
    pub minimum: Size,
}

impl IntrinsicSizeProvider for FixedSize {
    fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }
}

/// A drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position when the drag started.
    pub anchor: Point,
    /// Interaction state captured when the drag started.
    pub state: InteractionState,
    /// Pointer position at the previous step.
    pub last: Point,
}

impl DragSession {
    /// Starts a session at `pos`.
    #[must_use]
    pub fn new(pos: Point, state: InteractionState) -> Self {
        Self {
            anchor: pos,
            state,
            last: pos,
        }
    }

    /// Records `pos` and returns the movement since the previous step.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Returns the total movement since the drag started.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.anchor
    }
}

/// Which dimension drives an aspect-locked resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Driver {
    Width,
    Height,
}

/// Computes new region rectangles for drags and size negotiation.
///
/// All rectangles are in y-up pixel space. The engine never returns a
/// rectangle whose size violates its [`SizeConstraints`] for a resize.
#[derive(Debug)]
pub struct LayoutEngine {
    constraints: SizeConstraints,
    proportional_resize: bool,
    moving: bool,
    provider: Box<dyn IntrinsicSizeProvider>,
    negotiated: bool,
    session: Option<DragSession>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    /// Creates an engine with default constraints and the [`UnitSize`] provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constraints: SizeConstraints::default(),
            proportional_resize: false,
            moving: false,
            provider: Box::new(UnitSize),
            negotiated: false,
            session: None,
        }
    }

    /// Returns the size constraints.
    #[must_use]
    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    /// Returns the size constraints for modification.
    pub fn constraints_mut(&mut self) -> &mut SizeConstraints {
        &mut self.constraints
    }

    /// Returns `true` if resizing keeps the provider's aspect ratio.
    #[must_use]
    pub fn proportional_resize(&self) -> bool {
        self.proportional_resize
    }

    /// Sets whether resizing keeps the provider's aspect ratio.
    pub fn set_proportional_resize(&mut self, on: bool) {
        self.proportional_resize = on;
    }

    /// Returns `true` if dragging from the interior moves the region.
    #[must_use]
    pub fn moving(&self) -> bool {
        self.moving
    }

    /// Sets whether dragging from the interior moves the region.
    pub fn set_moving(&mut self, on: bool) {
        self.moving = on;
    }

    /// Returns the intrinsic size provider.
    #[must_use]
    pub fn provider(&self) -> &dyn IntrinsicSizeProvider {
        &*self.provider
    }

    /// Replaces the intrinsic size provider and invalidates negotiation.
    pub fn set_provider(&mut self, provider: Box<dyn IntrinsicSizeProvider>) {
        self.provider = provider;
        self.negotiated = false;
    }

    /// Target width / height ratio; falls back to `1` for degenerate providers.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        let size = self.provider.intrinsic_size();
        let aspect = size.width / size.height;
        if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        }
    }

    /// Maps the provider's intrinsic box, `(0, 0)` to its intrinsic size, into `rect`.
    ///
    /// With proportional resizing the scale is uniform and the content is
    /// centered on the axis with slack; otherwise each axis is scaled on its own.
    /// A degenerate intrinsic size is treated as a unit box.
    #[must_use]
    pub fn content_transform(&self, rect: Rect) -> Affine {
        let rect = rect.abs();
        let size = self.provider.intrinsic_size();
        let size = if size.width > 0.0 && size.height > 0.0 && size.is_finite() {
            size
        } else {
            Size::new(1.0, 1.0)
        };
        let (sx, sy) = (rect.width() / size.width, rect.height() / size.height);
        if !self.proportional_resize {
            return Affine::translate(rect.origin().to_vec2()) * Affine::scale_non_uniform(sx, sy);
        }
        let scale = sx.min(sy);
        let slack = Vec2::new(
            rect.width() - size.width * scale,
            rect.height() - size.height * scale,
        );
        Affine::translate(rect.origin().to_vec2() + slack * 0.5) * Affine::scale(scale)
    }

    /// Returns `true` once negotiation ran for the current configuration.
    #[must_use]
    pub fn is_negotiated(&self) -> bool {
        self.negotiated
    }

    /// Forces the next [`LayoutEngine::negotiate`] to query the provider again.
    pub fn invalidate_negotiation(&mut self) {
        self.negotiated = false;
    }

    /// Grows `rect` to the provider's minimum size, once per configuration.
    ///
    /// The lower-left corner stays put. The minimum is capped by the maximum
    /// size constraint. Returns the grown rectangle if anything changed.
    pub fn negotiate(&mut self, rect: Rect) -> Option<Rect> {
        if self.negotiated {
            return None;
        }
        self.negotiated = true;

        let rect = rect.abs();
        let wanted = self.provider.minimum_size();
        let max = self.constraints.maximum();
        let width = grow_to(rect.width(), wanted.width.min(max.width));
        let height = grow_to(rect.height(), wanted.height.min(max.height));
        if width == rect.width() && height == rect.height() {
            return None;
        }
        tracing::debug!(
            from_width = rect.width(),
            from_height = rect.height(),
            width,
            height,
            "growing border region to its negotiated minimum"
        );
        Some(Rect::from_origin_size(rect.origin(), Size::new(width, height)))
    }

    /// Returns the active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Opens a drag session at `pos` for `state`, replacing any previous one.
    pub fn start_session(&mut self, pos: Point, state: InteractionState) {
        tracing::debug!(x = pos.x, y = pos.y, ?state, "border drag started");
        self.session = Some(DragSession::new(pos, state));
    }

    /// Closes the drag session.
    pub fn end_session(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if let Some(session) = &session {
            let total = session.total_offset();
            tracing::debug!(dx = total.x, dy = total.y, "border drag ended");
        }
        session
    }

    /// Advances the drag session to `pos` and reshapes `rect` accordingly.
    ///
    /// Returns `None` without a session or when the session's state does not
    /// reshape the region.
    pub fn step(&mut self, pos: Point, rect: Rect) -> Option<Rect> {
        self.step_within(pos, rect, None)
    }

    /// Like [`LayoutEngine::step`], keeping moves inside `bounds` when given.
    pub fn step_within(&mut self, pos: Point, rect: Rect, bounds: Option<Rect>) -> Option<Rect> {
        let session = self.session.as_mut()?;
        let delta = session.advance(pos);
        let state = session.state;
        self.apply(state, delta, rect, bounds)
    }

    /// Applies a single drag `delta` in `state` to `rect`.
    #[must_use]
    pub fn apply(
        &self,
        state: InteractionState,
        delta: Vec2,
        rect: Rect,
        bounds: Option<Rect>,
    ) -> Option<Rect> {
        let rect = rect.abs();
        match state {
            InteractionState::Outside => None,
            InteractionState::Inside if self.moving => Some(translate(rect, delta, bounds)),
            InteractionState::Inside => None,
            InteractionState::AdjustingCorner(corner) => Some(self.drag_corner(rect, corner, delta)),
            InteractionState::AdjustingEdge(edge) => Some(self.drag_edge(rect, edge, delta)),
        }
    }

    fn drag_corner(&self, rect: Rect, corner: Corner, delta: Vec2) -> Rect {
        let fixed = corner_point(rect, corner.opposite());
        let moved = corner_point(rect, corner) + delta;
        let (sx, sy) = corner.outward();
        // Extents measured away from the fixed corner; negative means the
        // pointer crossed over it, which the clamp turns into the minimum.
        let target = Size::new(sx * (moved.x - fixed.x), sy * (moved.y - fixed.y));
        let mut size = self.constraints.clamp(target);
        if self.proportional_resize {
            let old = rect.size();
            let driver = if relative_change(size.width, old.width)
                >= relative_change(size.height, old.height)
            {
                Driver::Width
            } else {
                Driver::Height
            };
            size = self.fit_aspect(size, driver);
        }
        Rect::from_points(
            fixed,
            fixed + Vec2::new(sx * size.width, sy * size.height),
        )
    }

    fn drag_edge(&self, rect: Rect, edge: Edge, delta: Vec2) -> Rect {
        let (mut x0, mut y0, mut x1, mut y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
        let min = self.constraints.minimum();
        let max = self.constraints.maximum();
        match edge {
            Edge::Bottom => y0 = y1 - (y1 - (y0 + delta.y)).clamp(min.height, max.height),
            Edge::Top => y1 = y0 + ((y1 + delta.y) - y0).clamp(min.height, max.height),
            Edge::Left => x0 = x1 - (x1 - (x0 + delta.x)).clamp(min.width, max.width),
            Edge::Right => x1 = x0 + ((x1 + delta.x) - x0).clamp(min.width, max.width),
        }
        if self.proportional_resize {
            let size = Size::new(x1 - x0, y1 - y0);
            if edge.is_horizontal() {
                let fitted = self.fit_aspect(size, Driver::Height);
                let cx = (x0 + x1) * 0.5;
                x0 = cx - fitted.width * 0.5;
                x1 = cx + fitted.width * 0.5;
                if edge == Edge::Bottom {
                    y0 = y1 - fitted.height;
                } else {
                    y1 = y0 + fitted.height;
                }
            } else {
                let fitted = self.fit_aspect(size, Driver::Width);
                let cy = (y0 + y1) * 0.5;
                y0 = cy - fitted.height * 0.5;
                y1 = cy + fitted.height * 0.5;
                if edge == Edge::Left {
                    x0 = x1 - fitted.width;
                } else {
                    x1 = x0 + fitted.width;
                }
            }
        }
        Rect::new(x0, y0, x1, y1)
    }

    /// Recomputes the non-driving dimension of `size` from the aspect ratio.
    ///
    /// The driving dimension is restricted so that both stay within the
    /// constraints. When the constraints admit no size with this aspect ratio,
    /// `size` is returned as is.
    fn fit_aspect(&self, size: Size, driver: Driver) -> Size {
        let aspect = self.aspect_ratio();
        let Some((lo, hi)) = self.constraints.aspect_width_range(aspect) else {
            return size;
        };
        let width = match driver {
            Driver::Width => size.width.clamp(lo, hi),
            Driver::Height => (size.height * aspect).clamp(lo, hi),
        };
        // Rounding in `width / aspect` may land a hair outside the bounds.
        self.constraints.clamp(Size::new(width, width / aspect))
    }
}

fn grow_to(current: f64, wanted: f64) -> f64 {
    if current < wanted { wanted } else { current }
}

fn relative_change(new: f64, old: f64) -> f64 {
    if old > 0.0 {
        (new / old - 1.0).abs()
    } else {
        f64::INFINITY
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

fn translate(rect: Rect, delta: Vec2, bounds: Option<Rect>) -> Rect {
    let moved = rect + delta;
    let Some(bounds) = bounds else {
        return moved;
    };
    let bounds = bounds.abs();
    let mut origin = moved.origin();
    // An axis that does not fit inside the bounds is left free.
    if moved.width() <= bounds.width() {
        origin.x = origin.x.clamp(bounds.x0, bounds.x1 - moved.width());
    }
    if moved.height() <= bounds.height() {
        origin.y = origin.y.clamp(bounds.y0, bounds.y1 - moved.height());
    }
    Rect::from_origin_size(origin, moved.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(100.0, 100.0, 400.0, 400.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn corner(c: Corner) -> InteractionState {
        InteractionState::AdjustingCorner(c)
    }

    #[test]
    fn corner_drag_holds_the_opposite_corner() {
        let engine = LayoutEngine::new();
        let out = engine
            .apply(corner(Corner::BottomLeft), Vec2::new(20.0, -30.0), RECT, None)
            .unwrap();
        assert_eq!(out, Rect::new(120.0, 70.0, 400.0, 400.0));
    }

    #[test]
    fn corner_drag_clamps_to_minimum_width_only() {
        let mut engine = LayoutEngine::new();
        engine
            .constraints_mut()
            .set_minimum(Size::new(50.0, 50.0));
        let out = engine
            .apply(corner(Corner::BottomLeft), Vec2::new(280.0, 0.0), RECT, None)
            .unwrap();
        assert!(close(out.width(), 50.0), "{out:?}");
        assert!(close(out.height(), 300.0), "{out:?}");
        assert_eq!(out.x1, 400.0);
    }

    #[test]
    fn crossing_the_fixed_corner_never_inverts() {
        let engine = LayoutEngine::new();
        let out = engine
            .apply(corner(Corner::TopRight), Vec2::new(-1000.0, -1000.0), RECT, None)
            .unwrap();
        assert_eq!(out, Rect::new(100.0, 100.0, 101.0, 101.0));
    }

    #[test]
    fn edge_drag_moves_one_coordinate() {
        let engine = LayoutEngine::new();
        let out = engine
            .apply(
                InteractionState::AdjustingEdge(Edge::Top),
                Vec2::new(35.0, 25.0),
                RECT,
                None,
            )
            .unwrap();
        assert_eq!(out, Rect::new(100.0, 100.0, 400.0, 425.0));

        let out = engine
            .apply(
                InteractionState::AdjustingEdge(Edge::Left),
                Vec2::new(-10.0, 99.0),
                RECT,
                None,
            )
            .unwrap();
        assert_eq!(out, Rect::new(90.0, 100.0, 400.0, 400.0));
    }

    #[test]
    fn proportional_corner_drag_keeps_aspect() {
        let mut engine = LayoutEngine::new();
        engine.set_proportional_resize(true);
        engine.set_provider(Box::new(FixedSize {
            intrinsic: Size::new(2.0, 1.0),
            minimum: Size::ZERO,
        }));
        let out = engine
            .apply(corner(Corner::TopRight), Vec2::new(100.0, 5.0), RECT, None)
            .unwrap();
        assert!(close(out.width() / out.height(), 2.0), "{out:?}");
        assert_eq!(out.origin(), Point::new(100.0, 100.0));
        assert!(close(out.width(), 400.0), "{out:?}");
    }

    #[test]
    fn proportional_edge_drag_stays_centered() {
        let mut engine = LayoutEngine::new();
        engine.set_proportional_resize(true);
        let out = engine
            .apply(
                InteractionState::AdjustingEdge(Edge::Bottom),
                Vec2::new(0.0, -100.0),
                RECT,
                None,
            )
            .unwrap();
        assert!(close(out.height(), 400.0), "{out:?}");
        assert!(close(out.width(), 400.0), "{out:?}");
        assert!(close(out.center().x, RECT.center().x), "{out:?}");
        assert_eq!(out.y1, 400.0);
    }

    #[test]
    fn inside_moves_only_when_moving() {
        let mut engine = LayoutEngine::new();
        let delta = Vec2::new(10.0, -5.0);
        assert_eq!(engine.apply(InteractionState::Inside, delta, RECT, None), None);
        assert_eq!(engine.apply(InteractionState::Outside, delta, RECT, None), None);
        engine.set_moving(true);
        assert_eq!(
            engine.apply(InteractionState::Inside, delta, RECT, None),
            Some(RECT + delta)
        );
    }

    #[test]
    fn moves_respect_bounds() {
        let mut engine = LayoutEngine::new();
        engine.set_moving(true);
        let bounds = Rect::new(0.0, 0.0, 500.0, 500.0);
        let out = engine
            .apply(
                InteractionState::Inside,
                Vec2::new(250.0, -250.0),
                RECT,
                Some(bounds),
            )
            .unwrap();
        assert_eq!(out, Rect::new(200.0, 0.0, 500.0, 300.0));
    }

    #[test]
    fn session_steps_use_incremental_deltas() {
        let mut engine = LayoutEngine::new();
        assert_eq!(engine.step(Point::new(1.0, 1.0), RECT), None);

        engine.start_session(Point::new(400.0, 250.0), InteractionState::AdjustingEdge(Edge::Right));
        let rect = engine.step(Point::new(410.0, 250.0), RECT).unwrap();
        let rect = engine.step(Point::new(430.0, 260.0), rect).unwrap();
        assert_eq!(rect, Rect::new(100.0, 100.0, 430.0, 400.0));

        let session = engine.end_session().unwrap();
        assert_eq!(session.total_offset(), Vec2::new(30.0, 10.0));
        assert!(engine.session().is_none());
    }

    #[test]
    fn negotiation_grows_once() {
        let mut engine = LayoutEngine::new();
        engine.set_provider(Box::new(FixedSize {
            intrinsic: Size::new(1.0, 1.0),
            minimum: Size::new(500.0, 120.0),
        }));
        let grown = engine.negotiate(RECT).unwrap();
        assert_eq!(grown, Rect::new(100.0, 100.0, 600.0, 400.0));
        assert!(engine.is_negotiated());
        assert_eq!(engine.negotiate(Rect::new(0.0, 0.0, 1.0, 1.0)), None);

        engine.invalidate_negotiation();
        assert!(engine.negotiate(Rect::new(0.0, 0.0, 1.0, 1.0)).is_some());
    }

    #[test]
    fn content_transform_stretches_or_fits() {
        let mut engine = LayoutEngine::new();
        engine.set_provider(Box::new(FixedSize {
            intrinsic: Size::new(2.0, 1.0),
            minimum: Size::ZERO,
        }));
        let box_rect = Rect::new(0.0, 0.0, 2.0, 1.0);

        let stretched = engine.content_transform(RECT).transform_rect_bbox(box_rect);
        assert_eq!(stretched, RECT);

        engine.set_proportional_resize(true);
        let fitted = engine.content_transform(RECT).transform_rect_bbox(box_rect);
        assert!(close(fitted.x0, 100.0) && close(fitted.x1, 400.0), "{fitted:?}");
        assert!(close(fitted.y0, 175.0) && close(fitted.y1, 325.0), "{fitted:?}");
    }

    #[test]
    fn constraints_repair_themselves() {
        let mut constraints = SizeConstraints::default();
        assert_eq!(
            constraints.set_minimum(Size::new(0.0, -3.0)),
            Size::new(1.0, 1.0)
        );
        constraints.set_minimum(Size::new(200.0, 10.0));
        assert_eq!(
            constraints.set_maximum(Size::new(100.0, 50.0)),
            Size::new(200.0, 50.0)
        );
    }
}
