// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction states and the handles they refer to.

/// A corner handle of the border region.
///
/// Corners are enumerated counter-clockwise starting at the lower-left corner,
/// in a y-up pixel space. This order is also the tie-break order used by hit
/// testing and the order in which outline points are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Lower-left corner (the region's `position`).
    BottomLeft,
    /// Lower-right corner.
    BottomRight,
    /// Upper-right corner (the region's `position2`).
    TopRight,
    /// Upper-left corner.
    TopLeft,
}

impl Corner {
    /// All corners in enumeration order.
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopRight,
        Self::TopLeft,
    ];

    /// Returns the index of this corner in [`Corner::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::BottomLeft => 0,
            Self::BottomRight => 1,
            Self::TopRight => 2,
            Self::TopLeft => 3,
        }
    }

    /// Returns the diagonally opposite corner.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
            Self::TopRight => Self::BottomLeft,
            Self::TopLeft => Self::BottomRight,
        }
    }

    /// Returns `true` for the two corners on the left side.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::BottomLeft | Self::TopLeft)
    }

    /// Returns `true` for the two corners on the bottom side.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// Direction pointing away from the rectangle along each axis (`-1.0` or `1.0`).
    pub(crate) const fn outward(self) -> (f64, f64) {
        let sx = if self.is_left() { -1.0 } else { 1.0 };
        let sy = if self.is_bottom() { -1.0 } else { 1.0 };
        (sx, sy)
    }
}

/// An edge handle of the border region.
///
/// Edges are enumerated counter-clockwise starting at the bottom edge. Edge `k`
/// runs from corner `k` to corner `k + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The bottom (horizontal) edge.
    Bottom,
    /// The right (vertical) edge.
    Right,
    /// The top (horizontal) edge.
    Top,
    /// The left (vertical) edge.
    Left,
}

impl Edge {
    /// All edges in enumeration order.
    pub const ALL: [Self; 4] = [Self::Bottom, Self::Right, Self::Top, Self::Left];

    /// Returns the index of this edge in [`Edge::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Bottom => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Left => 3,
        }
    }

    /// Returns `true` for the bottom and top edges.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }

    /// The corner this edge starts at, walking counter-clockwise.
    #[must_use]
    pub const fn start(self) -> Corner {
        Corner::ALL[self.index()]
    }

    /// The corner this edge ends at, walking counter-clockwise.
    #[must_use]
    pub const fn end(self) -> Corner {
        Corner::ALL[(self.index() + 1) % 4]
    }
}

/// The discrete interaction state of a border region.
///
/// States are recomputed on every pointer-move query. The state captured when a
/// drag starts decides how the drag reshapes the region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// The pointer is not on the region.
    #[default]
    Outside,
    /// The pointer is strictly inside the region, away from every handle.
    Inside,
    /// The pointer is on a corner handle.
    AdjustingCorner(Corner),
    /// The pointer is on an edge handle.
    AdjustingEdge(Edge),
}

impl InteractionState {
    /// The largest valid state index.
    pub const MAX_INDEX: usize = 9;

    /// Converts a state index into a state, clamping out-of-range values.
    ///
    /// Indices follow the classic layout: `0` outside, `1` inside, `2..=5`
    /// corners, `6..=9` edges.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Outside,
            1 => Self::Inside,
            2..=5 => Self::AdjustingCorner(Corner::ALL[index - 2]),
            6..=9 => Self::AdjustingEdge(Edge::ALL[index - 6]),
            _ => Self::AdjustingEdge(Edge::Left),
        }
    }

    /// Returns the index of this state; the inverse of [`InteractionState::from_index`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Outside => 0,
            Self::Inside => 1,
            Self::AdjustingCorner(c) => 2 + c.index(),
            Self::AdjustingEdge(e) => 6 + e.index(),
        }
    }

    /// Returns `true` if the pointer is on a corner or edge handle.
    #[must_use]
    pub const fn is_adjusting(self) -> bool {
        matches!(self, Self::AdjustingCorner(_) | Self::AdjustingEdge(_))
    }
}

/// Caller bias applied when classifying a pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitModifier {
    /// Classify normally: corners, then edges, then the interior.
    #[default]
    None,
    /// Ignore corner handles; only edges can be adjusted.
    EdgesOnly,
    /// Ignore edge handles; only corners can be adjusted.
    CornersOnly,
}
