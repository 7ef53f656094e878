// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_border --heading-base-level=0

//! Understory Border: interactive, resizable border regions.
//!
//! A border region is a rectangle placed in normalized viewport coordinates
//! that the user can hover, move, and resize by grabbing its corners and edges.
//! This crate is headless: it tracks the interaction state, applies constrained
//! resizes, and generates outline/fill geometry, but leaves event dispatch and
//! rasterization to the host.
//!
//! It is organized in small layers:
//! - [`classify`] maps a pointer position to an [`InteractionState`] using a
//!   pixel tolerance band around the rectangle.
//! - [`LayoutEngine`] turns drag offsets into new rectangles under
//!   [`SizeConstraints`], optional aspect locking, and a one-shot negotiation
//!   with an [`IntrinsicSizeProvider`].
//! - [`BorderGeometry`] builds the (optionally rounded) outline polygon and its
//!   fill triangulation.
//! - [`RenderAdapter`] is the seam to a renderer; [`RecordingAdapter`] records
//!   draw calls for tests.
//! - [`BorderRepresentation`] ties them together behind a lazily rebuilt,
//!   revision-counted state object, and [`BorderOptions`] is its flat
//!   configuration surface.
//!
//! Pixel space is y-up with the origin at the lower-left corner of the
//! viewport; the [`CoordinateService`] trait maps between it and the
//! normalized `[0, 1]` coordinates regions are stored in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_border::{
//!     BorderRepresentation, BorderVisibility, HitModifier, RecordingAdapter, ViewportCoordinates,
//! };
//!
//! let mut border = BorderRepresentation::new(ViewportCoordinates::from_size(800.0, 600.0));
//! border.set_corners(Point::new(0.25, 0.25), Point::new(0.5, 0.5));
//! border.set_show_border(BorderVisibility::Active);
//!
//! // Hover the right edge, then drag it 40 px to the right.
//! let grab = Point::new(400.0, 225.0);
//! let state = border.compute_interaction_state(grab, HitModifier::None);
//! assert!(state.is_adjusting());
//! border.start_widget_interaction(grab);
//! border.widget_interaction(Point::new(440.0, 225.0));
//! border.end_widget_interaction();
//! assert!((border.pixel_rect().width() - 240.0).abs() < 1e-9);
//!
//! // The outline is drawn in the overlay pass.
//! let mut recorder = RecordingAdapter::new();
//! assert_eq!(border.render_overlay(Some(&mut recorder)), 1);
//! ```
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing) at
//! `debug` and `trace` levels; install a subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod coords;
mod geometry;
mod hit;
mod layout;
mod options;
mod region;
mod render;
mod representation;
mod state;
mod style;

pub use coords::{CoordinateService, ViewportCoordinates};
pub use geometry::BorderGeometry;
pub use hit::{HandleMask, classify};
pub use layout::{
    DragSession, FixedSize, IntrinsicSizeProvider, LayoutEngine, SizeConstraints, UnitSize,
};
pub use options::{BorderOptions, OptionError};
pub use region::Region;
pub use render::{DrawCall, PrimitiveKind, RecordingAdapter, RenderAdapter, RenderPass};
pub use representation::BorderRepresentation;
pub use state::{Corner, Edge, HitModifier, InteractionState};
pub use style::{BorderStyle, BorderVisibility, FillStyle, ParseVisibilityError, SegmentVisibility};
