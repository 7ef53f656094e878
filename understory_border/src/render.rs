// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between border geometry and an actual renderer.

use alloc::vec::Vec;

use kurbo::BezPath;
use peniko::Color;

use crate::style::{BorderStyle, FillStyle};

/// The render pass a primitive is submitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Drawn on top of the scene, after all 3D geometry.
    Overlay,
    /// Opaque geometry pass.
    Opaque,
    /// Translucent geometry pass.
    Translucent,
}

/// A renderer able to draw border primitives.
///
/// Paths are in y-up pixel space. Implementations return `true` when they
/// actually drew something, which the render passes sum into their result.
pub trait RenderAdapter {
    /// Strokes the visible outline with `style`'s color and thickness.
    fn draw_outline(&mut self, pass: RenderPass, outline: &BezPath, style: &BorderStyle) -> bool;

    /// Fills the region polygon with `style`'s color at its opacity.
    fn draw_fill(&mut self, pass: RenderPass, fill: &BezPath, style: &FillStyle) -> bool;
}

/// What a [`RecordingAdapter`] was asked to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// An outline stroke.
    Outline,
    /// A polygon fill.
    Fill,
}

/// A single recorded draw call.
#[derive(Clone, Debug)]
pub struct DrawCall {
    /// Pass the call was made in.
    pub pass: RenderPass,
    /// Kind of primitive.
    pub kind: PrimitiveKind,
    /// Path that was submitted.
    pub path: BezPath,
    /// Color used, with opacity applied for fills.
    pub color: Color,
    /// Stroke width for outlines; `0` for fills.
    pub thickness: f32,
}

/// Adapter that records draw calls instead of rasterizing.
///
/// Intended for tests and debugging that want to assert on what a border
/// region submits in each pass.
#[derive(Clone, Debug, Default)]
pub struct RecordingAdapter {
    calls: Vec<DrawCall>,
}

impl RecordingAdapter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded calls in submission order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Returns the recorded calls made in `pass`.
    pub fn calls_in(&self, pass: RenderPass) -> impl Iterator<Item = &DrawCall> + '_ {
        self.calls.iter().filter(move |call| call.pass == pass)
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderAdapter for RecordingAdapter {
    fn draw_outline(&mut self, pass: RenderPass, outline: &BezPath, style: &BorderStyle) -> bool {
        if outline.elements().is_empty() {
            return false;
        }
        self.calls.push(DrawCall {
            pass,
            kind: PrimitiveKind::Outline,
            path: outline.clone(),
            color: style.color(),
            thickness: style.thickness(),
        });
        true
    }

    fn draw_fill(&mut self, pass: RenderPass, fill: &BezPath, style: &FillStyle) -> bool {
        if fill.elements().is_empty() {
            return false;
        }
        self.calls.push(DrawCall {
            pass,
            kind: PrimitiveKind::Fill,
            path: fill.clone(),
            color: style.paint(),
            thickness: 0.0,
        });
        true
    }
}
