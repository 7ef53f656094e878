// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

use crate::coords::{CoordinateService, ViewportCoordinates};
use crate::geometry::BorderGeometry;
use crate::hit::{HandleMask, classify};
use crate::layout::{IntrinsicSizeProvider, LayoutEngine, SizeConstraints};
use crate::region::Region;
use crate::render::{RenderAdapter, RenderPass};
use crate::state::{HitModifier, InteractionState};
use crate::style::{BorderStyle, BorderVisibility, FillStyle, SegmentVisibility};

/// An interactive border region: state, layout, styling, and cached geometry.
///
/// This is the object a host event dispatcher talks to. Per pointer event it
/// is expected to:
///
/// 1) call [`compute_interaction_state`](Self::compute_interaction_state) on
///    pointer moves while no button is held,
/// 2) call [`start_widget_interaction`](Self::start_widget_interaction) on
///    button press, [`widget_interaction`](Self::widget_interaction) on drag,
///    and [`end_widget_interaction`](Self::end_widget_interaction) on release,
/// 3) call the render passes, which rebuild geometry first when needed.
///
/// Every mutation that can affect the geometry bumps a monotonically
/// increasing [`revision`](Self::revision); geometry is regenerated only when
/// it was built for an older revision.
///
/// ```
/// use kurbo::Point;
/// use understory_border::{BorderRepresentation, HitModifier, InteractionState, ViewportCoordinates};
///
/// let mut border = BorderRepresentation::new(ViewportCoordinates::from_size(1000.0, 1000.0));
/// border.set_corners(Point::new(0.1, 0.1), Point::new(0.4, 0.4));
///
/// let state = border.compute_interaction_state(Point::new(250.0, 250.0), HitModifier::None);
/// assert_eq!(state, InteractionState::Inside);
///
/// assert!(border.build_representation());
/// assert!(!border.build_representation());
/// ```
#[derive(Debug)]
pub struct BorderRepresentation<C = ViewportCoordinates> {
    coords: C,
    region: Region,
    border: BorderStyle,
    fill: FillStyle,
    layout: LayoutEngine,
    tolerance: u32,
    state: InteractionState,
    selection_point: Point,
    visibility: SegmentVisibility,
    display_overlay: bool,
    geometry: BorderGeometry,
    revision: u64,
}

impl Default for BorderRepresentation<ViewportCoordinates> {
    fn default() -> Self {
        Self::new(ViewportCoordinates::default())
    }
}

impl<C: CoordinateService> BorderRepresentation<C> {
    /// Smallest accepted hit tolerance in pixels.
    pub const MIN_TOLERANCE: u32 = 1;
    /// Largest accepted hit tolerance in pixels.
    pub const MAX_TOLERANCE: u32 = 10;

    /// Creates a region with default placement and styling over `coords`.
    #[must_use]
    pub fn new(coords: C) -> Self {
        Self {
            coords,
            region: Region::default(),
            border: BorderStyle::default(),
            fill: FillStyle::default(),
            layout: LayoutEngine::new(),
            tolerance: 3,
            state: InteractionState::Outside,
            selection_point: Point::ZERO,
            visibility: SegmentVisibility::ALL,
            display_overlay: true,
            geometry: BorderGeometry::new(),
            revision: 0,
        }
    }

    /// Returns the revision counter.
    ///
    /// The revision is local to this region and bumps on every change that can
    /// affect its geometry.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Bumps the revision if the size constraints differ from `before`.
    ///
    /// A new maximum changes the cap on negotiation, so it also invalidates it.
    fn constraints_changed(&mut self, before: SizeConstraints) {
        let after = *self.layout.constraints();
        if after == before {
            return;
        }
        if after.maximum() != before.maximum() {
            self.layout.invalidate_negotiation();
        }
        self.bump_revision();
    }

    // --- coordinates ---

    /// Returns the coordinate service.
    #[must_use]
    pub fn coordinates(&self) -> &C {
        &self.coords
    }

    /// Returns the coordinate service for modification.
    ///
    /// The revision is bumped unconditionally, since any change to the service
    /// moves the region in pixel space.
    pub fn coordinates_mut(&mut self) -> &mut C {
        self.bump_revision();
        &mut self.coords
    }

    /// Replaces the coordinate service.
    pub fn set_coordinates(&mut self, coords: C) {
        self.coords = coords;
        self.bump_revision();
    }

    // --- region ---

    /// Returns the region in normalized viewport coordinates.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the lower-left corner in normalized viewport coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        self.region.position()
    }

    /// Returns the upper-right corner in normalized viewport coordinates.
    #[must_use]
    pub fn position2(&self) -> Point {
        self.region.position2()
    }

    /// Moves the first corner, keeping the second; corners are reordered as needed.
    pub fn set_position(&mut self, position: Point) {
        self.set_corners(position, self.region.position2());
    }

    /// Moves the second corner, keeping the first; corners are reordered as needed.
    pub fn set_position2(&mut self, position2: Point) {
        self.set_corners(self.region.position(), position2);
    }

    /// Replaces both corners (normalized viewport coordinates, any order).
    pub fn set_corners(&mut self, a: Point, b: Point) {
        if self.region.set_corners(a, b) {
            self.bump_revision();
        }
    }

    /// Returns the region in y-up pixel space.
    #[must_use]
    pub fn pixel_rect(&self) -> Rect {
        self.region.pixel_rect(&self.coords)
    }

    /// Places the region at a y-up pixel-space rectangle.
    pub fn set_pixel_rect(&mut self, rect: Rect) {
        if self.region.set_pixel_rect(rect, &self.coords) {
            self.bump_revision();
        }
    }

    // --- border visibility ---

    /// Returns a combined visibility mode: the horizontal one unless it is
    /// [`BorderVisibility::Off`], otherwise the vertical one.
    #[must_use]
    pub fn show_border(&self) -> BorderVisibility {
        if self.border.horizontal() == BorderVisibility::Off {
            self.border.vertical()
        } else {
            self.border.horizontal()
        }
    }

    /// Sets the visibility mode of both segment groups.
    pub fn set_show_border(&mut self, mode: BorderVisibility) {
        self.border.set_vertical(mode);
        self.border.set_horizontal(mode);
        self.update_visibility();
    }

    /// Returns the visibility mode of the left and right sides.
    #[must_use]
    pub fn show_vertical_border(&self) -> BorderVisibility {
        self.border.vertical()
    }

    /// Sets the visibility mode of the left and right sides.
    pub fn set_show_vertical_border(&mut self, mode: BorderVisibility) {
        self.border.set_vertical(mode);
        self.update_visibility();
    }

    /// Returns the visibility mode of the bottom and top sides.
    #[must_use]
    pub fn show_horizontal_border(&self) -> BorderVisibility {
        self.border.horizontal()
    }

    /// Sets the visibility mode of the bottom and top sides.
    pub fn set_show_horizontal_border(&mut self, mode: BorderVisibility) {
        self.border.set_horizontal(mode);
        self.update_visibility();
    }

    /// Returns the resolved segment visibility from the last update.
    #[must_use]
    pub fn visibility(&self) -> SegmentVisibility {
        self.visibility
    }

    /// Resolves segment visibility against the current interaction state.
    pub fn update_visibility(&mut self) -> SegmentVisibility {
        self.visibility = self.border.visibility(self.state);
        self.visibility
    }

    // --- styling ---

    /// Returns the outline style.
    #[must_use]
    pub fn border_style(&self) -> &BorderStyle {
        &self.border
    }

    /// Returns the fill style.
    #[must_use]
    pub fn fill_style(&self) -> &FillStyle {
        &self.fill
    }

    /// Sets the outline color and returns the applied (opaque) color.
    pub fn set_border_color(&mut self, color: Color) -> Color {
        let before = self.border.color();
        let applied = self.border.set_color(color);
        if applied.components != before.components {
            self.bump_revision();
        }
        applied
    }

    /// Sets the outline thickness and returns the applied value.
    pub fn set_border_thickness(&mut self, thickness: f32) -> f32 {
        let before = self.border.thickness();
        let applied = self.border.set_thickness(thickness);
        if applied != before {
            self.bump_revision();
        }
        applied
    }

    /// Sets the corner radius strength and returns the applied value.
    pub fn set_corner_radius_strength(&mut self, strength: f64) -> f64 {
        let before = self.border.corner_radius_strength();
        let applied = self.border.set_corner_radius_strength(strength);
        if applied != before {
            self.bump_revision();
        }
        applied
    }

    /// Sets the points per rounded corner and returns the applied value.
    pub fn set_corner_resolution(&mut self, resolution: u32) -> u32 {
        let before = self.border.corner_resolution();
        let applied = self.border.set_corner_resolution(resolution);
        if applied != before {
            self.bump_revision();
        }
        applied
    }

    /// Sets the fill color and returns the applied (opaque) color.
    pub fn set_polygon_color(&mut self, color: Color) -> Color {
        let before = self.fill.color();
        let applied = self.fill.set_color(color);
        if applied.components != before.components {
            self.bump_revision();
        }
        applied
    }

    /// Sets the fill opacity and returns the applied value.
    pub fn set_polygon_opacity(&mut self, opacity: f64) -> f64 {
        let before = self.fill.opacity();
        let applied = self.fill.set_opacity(opacity);
        if applied != before {
            self.bump_revision();
        }
        applied
    }

    /// Returns `true` if the region and fill are drawn in the overlay pass.
    #[must_use]
    pub fn display_overlay(&self) -> bool {
        self.display_overlay
    }

    /// Chooses between the overlay pass and the opaque/translucent passes.
    pub fn set_display_overlay(&mut self, overlay: bool) {
        self.display_overlay = overlay;
    }

    // --- interaction settings ---

    /// Returns the hit tolerance in pixels.
    #[must_use]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Sets the hit tolerance, clamped to `[1, 10]` pixels, and returns the applied value.
    pub fn set_tolerance(&mut self, tolerance: u32) -> u32 {
        self.tolerance = tolerance.clamp(Self::MIN_TOLERANCE, Self::MAX_TOLERANCE);
        self.tolerance
    }

    /// Returns `true` if dragging from the interior moves the region.
    #[must_use]
    pub fn moving(&self) -> bool {
        self.layout.moving()
    }

    /// Sets whether dragging from the interior moves the region.
    pub fn set_moving(&mut self, moving: bool) {
        self.layout.set_moving(moving);
    }

    /// Returns `true` if resizing keeps the content's aspect ratio.
    #[must_use]
    pub fn proportional_resize(&self) -> bool {
        self.layout.proportional_resize()
    }

    /// Sets whether resizing keeps the content's aspect ratio.
    pub fn set_proportional_resize(&mut self, on: bool) {
        self.layout.set_proportional_resize(on);
    }

    /// Returns the minimum pixel size.
    #[must_use]
    pub fn minimum_size(&self) -> Size {
        self.layout.constraints().minimum()
    }

    /// Sets the minimum pixel size and returns the applied value.
    pub fn set_minimum_size(&mut self, size: Size) -> Size {
        let before = *self.layout.constraints();
        let applied = self.layout.constraints_mut().set_minimum(size);
        self.constraints_changed(before);
        applied
    }

    /// Returns the maximum pixel size.
    #[must_use]
    pub fn maximum_size(&self) -> Size {
        self.layout.constraints().maximum()
    }

    /// Sets the maximum pixel size and returns the applied value.
    ///
    /// The maximum caps negotiation, so a new maximum makes negotiation run
    /// again on the next build.
    pub fn set_maximum_size(&mut self, size: Size) -> Size {
        let before = *self.layout.constraints();
        let applied = self.layout.constraints_mut().set_maximum(size);
        self.constraints_changed(before);
        applied
    }

    /// Replaces the provider of the content's intrinsic size.
    pub fn set_intrinsic_size_provider(&mut self, provider: Box<dyn IntrinsicSizeProvider>) {
        self.layout.set_provider(provider);
        self.bump_revision();
    }

    /// Returns the layout engine.
    #[must_use]
    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Maps content laid out in its intrinsic box into the region's pixel rectangle.
    ///
    /// The intrinsic box is `(0, 0)` to the provider's
    /// [`intrinsic_size`](IntrinsicSizeProvider::intrinsic_size). With
    /// proportional resizing the region is only a bounding rectangle: the
    /// content is scaled uniformly to fit and centered on the slack axis.
    /// Otherwise it is stretched to fill the region.
    #[must_use]
    pub fn content_transform(&self) -> Affine {
        self.layout.content_transform(self.pixel_rect())
    }

    // --- interaction ---

    /// Returns the state computed by the last classification.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Forces the interaction state from a raw index, clamped to the valid range.
    pub fn set_interaction_state(&mut self, index: usize) -> InteractionState {
        self.state = InteractionState::from_index(index);
        self.update_visibility();
        self.state
    }

    /// Returns the last interior pointer position as fractions of the region.
    #[must_use]
    pub fn selection_point(&self) -> Point {
        self.selection_point
    }

    /// Classifies a y-up pixel position against the region.
    ///
    /// Records the selection point when the position is inside, and refreshes
    /// segment visibility.
    pub fn compute_interaction_state(
        &mut self,
        pixel: Point,
        modifier: HitModifier,
    ) -> InteractionState {
        let handles = HandleMask {
            horizontal_edges: self.border.horizontal() != BorderVisibility::Off,
            vertical_edges: self.border.vertical() != BorderVisibility::Off,
        };
        let state = classify(
            self.pixel_rect(),
            pixel,
            f64::from(self.tolerance),
            handles,
            modifier,
        );
        if state == InteractionState::Inside {
            self.selection_point = self.region.fraction_of(pixel, &self.coords);
        }
        if state != self.state {
            tracing::trace!(from = ?self.state, to = ?state, "border interaction state changed");
        }
        self.state = state;
        self.update_visibility();
        state
    }

    /// Starts a drag at a y-up pixel position using the current state.
    pub fn start_widget_interaction(&mut self, pixel: Point) {
        self.layout.start_session(pixel, self.state);
    }

    /// Continues the drag to `pixel`, reshaping the region and rebuilding geometry.
    ///
    /// Returns `true` if the region changed.
    pub fn widget_interaction(&mut self, pixel: Point) -> bool {
        let rect = self.pixel_rect();
        let bounds = self.coords.viewport_bounds();
        let changed = match self.layout.step_within(pixel, rect, bounds) {
            Some(next) => self.region.set_pixel_rect(next, &self.coords),
            None => false,
        };
        if changed {
            self.bump_revision();
            self.build_representation();
        }
        changed
    }

    /// Ends the drag.
    pub fn end_widget_interaction(&mut self) {
        self.layout.end_session();
    }

    /// Forces the next build to negotiate with the intrinsic size provider again.
    pub fn invalidate_negotiation(&mut self) {
        self.layout.invalidate_negotiation();
        self.bump_revision();
    }

    /// Grows the region to the provider's minimum size, once per configuration.
    ///
    /// Returns `true` if the region changed.
    pub fn negotiate_layout(&mut self) -> bool {
        let Some(grown) = self.layout.negotiate(self.pixel_rect()) else {
            return false;
        };
        let changed = self.region.set_pixel_rect(grown, &self.coords);
        if changed {
            self.bump_revision();
        }
        changed
    }

    // --- geometry and rendering ---

    /// Regenerates geometry if anything changed since the last build.
    ///
    /// Returns `true` if the geometry was rebuilt.
    pub fn build_representation(&mut self) -> bool {
        self.negotiate_layout();
        if !self.geometry.is_stale(self.revision) {
            return false;
        }
        let rect = self.pixel_rect();
        self.geometry.rebuild(rect, &self.border, self.revision)
    }

    /// Returns the geometry from the last build.
    #[must_use]
    pub fn geometry(&self) -> &BorderGeometry {
        &self.geometry
    }

    /// Returns `true` if the translucent pass has anything to draw.
    #[must_use]
    pub fn has_translucent_geometry(&self) -> bool {
        self.fill.is_visible()
    }

    /// Renders the overlay pass. Returns the number of primitives drawn.
    pub fn render_overlay(&mut self, adapter: Option<&mut dyn RenderAdapter>) -> u32 {
        self.render(RenderPass::Overlay, adapter)
    }

    /// Renders the opaque pass. Returns the number of primitives drawn.
    pub fn render_opaque(&mut self, adapter: Option<&mut dyn RenderAdapter>) -> u32 {
        self.render(RenderPass::Opaque, adapter)
    }

    /// Renders the translucent pass. Returns the number of primitives drawn.
    pub fn render_translucent(&mut self, adapter: Option<&mut dyn RenderAdapter>) -> u32 {
        self.render(RenderPass::Translucent, adapter)
    }

    fn render(&mut self, pass: RenderPass, adapter: Option<&mut dyn RenderAdapter>) -> u32 {
        let Some(adapter) = adapter else {
            return 0;
        };
        self.build_representation();

        let (outline, fill) = match pass {
            RenderPass::Overlay => (self.display_overlay, self.display_overlay),
            RenderPass::Opaque => (!self.display_overlay, false),
            RenderPass::Translucent => (false, !self.display_overlay),
        };

        let mut count = 0;
        if outline && self.visibility.any() {
            let path = self.geometry.outline_path(self.visibility);
            if adapter.draw_outline(pass, &path, &self.border) {
                count += 1;
            }
        }
        if fill && self.fill.is_visible() {
            let path = self.geometry.fill_path();
            if adapter.draw_fill(pass, &path, &self.fill) {
                count += 1;
            }
        }
        count
    }
}
