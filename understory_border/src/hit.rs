// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer classification against the handles of a pixel-space rectangle.
//!
//! A handle is "hit" when the pointer lies within `tolerance` pixels of it on
//! both axes. Each edge owns a band of `2 * tolerance` pixels centered on its
//! line and limited to the edge's span (plus `tolerance` past each end); a
//! corner is the overlap of its two edge bands, so corners always win over
//! edges.

use kurbo::{Point, Rect};

use crate::state::{Corner, Edge, HitModifier, InteractionState};

/// Which handles may be grabbed.
///
/// Horizontal edges (bottom, top) and vertical edges (left, right) can be
/// disabled independently; corners need both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandleMask {
    /// Whether the bottom and top edges can be grabbed.
    pub horizontal_edges: bool,
    /// Whether the left and right edges can be grabbed.
    pub vertical_edges: bool,
}

impl HandleMask {
    /// Every handle is available.
    pub const ALL: Self = Self {
        horizontal_edges: true,
        vertical_edges: true,
    };

    /// No handle is available; the region can still report `Inside`.
    pub const NONE: Self = Self {
        horizontal_edges: false,
        vertical_edges: false,
    };

    /// Returns `true` if corners can be grabbed.
    #[must_use]
    pub const fn corners(self) -> bool {
        self.horizontal_edges && self.vertical_edges
    }

    /// Returns `true` if `edge` can be grabbed.
    #[must_use]
    pub const fn allows(self, edge: Edge) -> bool {
        if edge.is_horizontal() {
            self.horizontal_edges
        } else {
            self.vertical_edges
        }
    }
}

impl Default for HandleMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Classifies `pt` against `rect`.
///
/// `rect` is in y-up pixel space (its `y0` is the bottom edge) and is
/// normalized before use. Corner ties, which only happen for degenerate
/// rectangles, resolve in [`Corner::ALL`] order.
#[must_use]
pub fn classify(
    rect: Rect,
    pt: Point,
    tolerance: f64,
    handles: HandleMask,
    modifier: HitModifier,
) -> InteractionState {
    let rect = rect.abs();
    let tol = tolerance.max(0.0);

    if pt.x < rect.x0 - tol || pt.x > rect.x1 + tol || pt.y < rect.y0 - tol || pt.y > rect.y1 + tol
    {
        return InteractionState::Outside;
    }

    let near = |a: f64, b: f64| (a - b).abs() <= tol;
    // Indexed by `Edge::index`.
    let on_edge = [
        near(pt.y, rect.y0),
        near(pt.x, rect.x1),
        near(pt.y, rect.y1),
        near(pt.x, rect.x0),
    ];

    if modifier != HitModifier::EdgesOnly && handles.corners() {
        for corner in Corner::ALL {
            // Corner k joins edge k-1 and edge k.
            let before = (corner.index() + 3) % 4;
            if on_edge[before] && on_edge[corner.index()] {
                return InteractionState::AdjustingCorner(corner);
            }
        }
    }

    if modifier != HitModifier::CornersOnly {
        for edge in Edge::ALL {
            if on_edge[edge.index()] && handles.allows(edge) {
                return InteractionState::AdjustingEdge(edge);
            }
        }
    }

    if pt.x > rect.x0 && pt.x < rect.x1 && pt.y > rect.y0 && pt.y < rect.y1 {
        InteractionState::Inside
    } else {
        InteractionState::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(100.0, 100.0, 400.0, 400.0);

    fn at(x: f64, y: f64) -> InteractionState {
        classify(RECT, Point::new(x, y), 3.0, HandleMask::ALL, HitModifier::None)
    }

    #[test]
    fn far_points_are_outside() {
        assert_eq!(at(0.0, 0.0), InteractionState::Outside);
        assert_eq!(at(250.0, 404.0), InteractionState::Outside);
        assert_eq!(at(96.0, 250.0), InteractionState::Outside);
    }

    #[test]
    fn interior_points_are_inside() {
        assert_eq!(at(250.0, 250.0), InteractionState::Inside);
        assert_eq!(at(104.0, 104.0), InteractionState::Inside);
    }

    #[test]
    fn corners_are_counter_clockwise_from_bottom_left() {
        assert_eq!(
            at(101.0, 99.0),
            InteractionState::AdjustingCorner(Corner::BottomLeft)
        );
        assert_eq!(
            at(402.0, 98.0),
            InteractionState::AdjustingCorner(Corner::BottomRight)
        );
        assert_eq!(
            at(400.0, 400.0),
            InteractionState::AdjustingCorner(Corner::TopRight)
        );
        assert_eq!(
            at(97.0, 403.0),
            InteractionState::AdjustingCorner(Corner::TopLeft)
        );
    }

    #[test]
    fn edges_only_cover_their_span() {
        assert_eq!(at(250.0, 101.0), InteractionState::AdjustingEdge(Edge::Bottom));
        assert_eq!(at(399.0, 250.0), InteractionState::AdjustingEdge(Edge::Right));
        assert_eq!(at(250.0, 402.0), InteractionState::AdjustingEdge(Edge::Top));
        assert_eq!(at(98.0, 250.0), InteractionState::AdjustingEdge(Edge::Left));
        // On the bottom edge's line but past its end.
        assert_eq!(at(500.0, 100.0), InteractionState::Outside);
    }

    #[test]
    fn degenerate_rect_prefers_first_corner() {
        let rect = Rect::new(50.0, 50.0, 50.0, 50.0);
        let state = classify(
            rect,
            Point::new(50.0, 50.0),
            3.0,
            HandleMask::ALL,
            HitModifier::None,
        );
        assert_eq!(state, InteractionState::AdjustingCorner(Corner::BottomLeft));
    }

    #[test]
    fn modifiers_bias_classification() {
        let corner = Point::new(100.0, 100.0);
        assert_eq!(
            classify(RECT, corner, 3.0, HandleMask::ALL, HitModifier::EdgesOnly),
            InteractionState::AdjustingEdge(Edge::Bottom)
        );
        let edge = Point::new(250.0, 100.0);
        assert_eq!(
            classify(RECT, edge, 3.0, HandleMask::ALL, HitModifier::CornersOnly),
            InteractionState::Outside
        );
        let edge_inside = Point::new(250.0, 102.0);
        assert_eq!(
            classify(RECT, edge_inside, 3.0, HandleMask::ALL, HitModifier::CornersOnly),
            InteractionState::Inside
        );
    }

    #[test]
    fn disabled_handles_fall_through() {
        let horizontal_only = HandleMask {
            horizontal_edges: true,
            vertical_edges: false,
        };
        // Corner needs both axes, so the bottom edge wins.
        assert_eq!(
            classify(
                RECT,
                Point::new(100.0, 100.0),
                3.0,
                horizontal_only,
                HitModifier::None
            ),
            InteractionState::AdjustingEdge(Edge::Bottom)
        );
        assert_eq!(
            classify(
                RECT,
                Point::new(101.0, 250.0),
                3.0,
                horizontal_only,
                HitModifier::None
            ),
            InteractionState::Inside
        );
        assert_eq!(
            classify(
                RECT,
                Point::new(101.0, 250.0),
                3.0,
                HandleMask::NONE,
                HitModifier::None
            ),
            InteractionState::Inside
        );
    }
}
