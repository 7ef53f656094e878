// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline and fill styling for a border region.
//!
//! Every setter clamps its input into the documented range and returns the
//! value that was actually stored. Non-finite input leaves the field unchanged.

use core::fmt;
use core::str::FromStr;

use peniko::Color;

use crate::state::InteractionState;

/// When a group of border segments is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BorderVisibility {
    /// Never shown. Handles on these segments cannot be grabbed either.
    Off,
    /// Always shown.
    #[default]
    On,
    /// Shown only while the pointer is on or inside the region.
    Active,
}

impl BorderVisibility {
    /// Resolves the visibility for the given interaction state.
    #[must_use]
    pub const fn is_visible(self, state: InteractionState) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::Active => !matches!(state, InteractionState::Outside),
        }
    }

    /// Converts a raw mode (`0` off, `1` on, `2` active), clamping out-of-range values.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Off,
            1 => Self::On,
            _ => Self::Active,
        }
    }

    /// Returns the lowercase name used by textual options.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for BorderVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`BorderVisibility`] from text fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseVisibilityError;

impl fmt::Display for ParseVisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `off`, `on`, or `active`")
    }
}

impl core::error::Error for ParseVisibilityError {}

impl FromStr for BorderVisibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("off") || s == "0" {
            Ok(Self::Off)
        } else if s.eq_ignore_ascii_case("on") || s == "1" {
            Ok(Self::On)
        } else if s.eq_ignore_ascii_case("active") || s == "2" {
            Ok(Self::Active)
        } else {
            Err(ParseVisibilityError)
        }
    }
}

/// Resolved visibility of the two segment groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentVisibility {
    /// Whether the left and right sides are drawn.
    pub vertical: bool,
    /// Whether the bottom and top sides are drawn.
    pub horizontal: bool,
}

impl SegmentVisibility {
    /// Both groups visible.
    pub const ALL: Self = Self {
        vertical: true,
        horizontal: true,
    };

    /// Returns `true` if any segment is visible.
    #[must_use]
    pub const fn any(self) -> bool {
        self.vertical || self.horizontal
    }
}

/// Stores `value` if it is finite, returning whatever is stored afterwards.
fn store_finite(slot: &mut f64, value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        *slot = value.clamp(min, max);
    }
    *slot
}

/// Style of the region's outline.
#[derive(Clone, Debug)]
pub struct BorderStyle {
    color: Color,
    thickness: f32,
    corner_radius_strength: f64,
    corner_resolution: u32,
    vertical: BorderVisibility,
    horizontal: BorderVisibility,
}

impl BorderStyle {
    /// Largest accepted corner resolution.
    pub const MAX_CORNER_RESOLUTION: u32 = 1000;

    /// Returns the outline color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the outline color. Only the RGB channels are used; alpha is forced opaque.
    pub fn set_color(&mut self, color: Color) -> Color {
        self.color = color.with_alpha(1.0);
        self.color
    }

    /// Returns the outline thickness in pixels.
    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Sets the outline thickness, clamped to `[0, f32::MAX]`.
    pub fn set_thickness(&mut self, thickness: f32) -> f32 {
        if !thickness.is_nan() {
            self.thickness = thickness.clamp(0.0, f32::MAX);
        }
        self.thickness
    }

    /// Returns the corner radius strength in `[0, 1]`.
    #[must_use]
    pub fn corner_radius_strength(&self) -> f64 {
        self.corner_radius_strength
    }

    /// Sets the corner radius strength, clamped to `[0, 1]`.
    ///
    /// `0` gives sharp corners; `1` gives the largest radius that still fits,
    /// half of the shorter side.
    pub fn set_corner_radius_strength(&mut self, strength: f64) -> f64 {
        store_finite(&mut self.corner_radius_strength, strength, 0.0, 1.0)
    }

    /// Returns the number of points emitted per rounded corner.
    #[must_use]
    pub fn corner_resolution(&self) -> u32 {
        self.corner_resolution
    }

    /// Sets the number of points emitted per rounded corner, clamped to `[0, 1000]`.
    pub fn set_corner_resolution(&mut self, resolution: u32) -> u32 {
        self.corner_resolution = resolution.min(Self::MAX_CORNER_RESOLUTION);
        self.corner_resolution
    }

    /// Returns the visibility mode of the left and right sides.
    #[must_use]
    pub fn vertical(&self) -> BorderVisibility {
        self.vertical
    }

    /// Sets the visibility mode of the left and right sides.
    pub fn set_vertical(&mut self, mode: BorderVisibility) -> BorderVisibility {
        self.vertical = mode;
        mode
    }

    /// Returns the visibility mode of the bottom and top sides.
    #[must_use]
    pub fn horizontal(&self) -> BorderVisibility {
        self.horizontal
    }

    /// Sets the visibility mode of the bottom and top sides.
    pub fn set_horizontal(&mut self, mode: BorderVisibility) -> BorderVisibility {
        self.horizontal = mode;
        mode
    }

    /// Returns `true` when corners are drawn rounded.
    #[must_use]
    pub fn has_round_corners(&self) -> bool {
        self.corner_radius_strength > 0.0 && self.corner_resolution > 0
    }

    /// Resolves both segment groups against `state`.
    #[must_use]
    pub fn visibility(&self, state: InteractionState) -> SegmentVisibility {
        SegmentVisibility {
            vertical: self.vertical.is_visible(state),
            horizontal: self.horizontal.is_visible(state),
        }
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            thickness: 1.0,
            corner_radius_strength: 0.0,
            corner_resolution: 20,
            vertical: BorderVisibility::On,
            horizontal: BorderVisibility::On,
        }
    }
}

/// Style of the polygon filling the region.
#[derive(Clone, Debug)]
pub struct FillStyle {
    color: Color,
    opacity: f64,
}

impl FillStyle {
    /// Returns the fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the fill color. Only the RGB channels are used; see [`FillStyle::set_opacity`].
    pub fn set_color(&mut self, color: Color) -> Color {
        self.color = color.with_alpha(1.0);
        self.color
    }

    /// Returns the fill opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Sets the fill opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) -> f64 {
        store_finite(&mut self.opacity, opacity, 0.0, 1.0)
    }

    /// Returns `true` if the fill is drawn at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// The fill color with the opacity applied as alpha.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "opacity is clamped to [0, 1]"
    )]
    pub fn paint(&self) -> Color {
        self.color.with_alpha(self.opacity as f32)
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_and_report_applied_value() {
        let mut border = BorderStyle::default();
        assert_eq!(border.set_corner_radius_strength(1.5), 1.0);
        assert_eq!(border.set_corner_radius_strength(-0.5), 0.0);
        assert_eq!(border.set_corner_radius_strength(f64::NAN), 0.0);
        assert_eq!(border.set_corner_resolution(5000), 1000);
        assert_eq!(border.set_thickness(-2.0), 0.0);

        let mut fill = FillStyle::default();
        assert_eq!(fill.set_opacity(2.0), 1.0);
        assert_eq!(fill.set_opacity(f64::INFINITY), 1.0);
        assert_eq!(fill.set_opacity(-1.0), 0.0);
        assert!(!fill.is_visible());
    }

    #[test]
    fn active_visibility_tracks_state() {
        assert!(!BorderVisibility::Active.is_visible(InteractionState::Outside));
        assert!(BorderVisibility::Active.is_visible(InteractionState::Inside));
        assert!(BorderVisibility::On.is_visible(InteractionState::Outside));
        assert!(!BorderVisibility::Off.is_visible(InteractionState::Inside));
    }

    #[test]
    fn visibility_parses_names_and_indices() {
        assert_eq!("Active".parse(), Ok(BorderVisibility::Active));
        assert_eq!(" off ".parse(), Ok(BorderVisibility::Off));
        assert_eq!("1".parse(), Ok(BorderVisibility::On));
        assert_eq!(
            "sometimes".parse::<BorderVisibility>(),
            Err(ParseVisibilityError)
        );
        assert_eq!(BorderVisibility::from_index(7), BorderVisibility::Active);
    }

    #[test]
    fn round_corners_need_strength_and_resolution() {
        let mut border = BorderStyle::default();
        assert!(!border.has_round_corners());
        border.set_corner_radius_strength(0.5);
        assert!(border.has_round_corners());
        border.set_corner_resolution(0);
        assert!(!border.has_round_corners());
    }
}
