// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat, host-facing configuration surface for border regions.
//!
//! [`BorderOptions`] mirrors every tunable of a [`BorderRepresentation`] as
//! plain data. Hosts either fill it in code, deserialize it (with the `serde`
//! feature), or feed it textual `key = value` pairs through
//! [`BorderOptions::set`]. Range violations are not errors: values are clamped
//! when the options are applied.

use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Size};
use peniko::Color;

use crate::coords::CoordinateService;
use crate::representation::BorderRepresentation;
use crate::style::BorderVisibility;

/// Failure to apply a textual option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionError {
    /// The key is not a recognized option.
    UnknownOption(String),
    /// The value could not be parsed for the key.
    InvalidValue {
        /// Option key.
        key: &'static str,
        /// Rejected value, as given.
        value: String,
    },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption(key) => write!(f, "unknown border option `{key}`"),
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value `{value}` for border option `{key}`")
            }
        }
    }
}

impl core::error::Error for OptionError {}

/// Every tunable of a border region, as plain data.
///
/// Colors are linear RGB triples in `0..=1`; sizes are pixel `[width, height]`
/// pairs; positions are normalized viewport `[x, y]` pairs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct BorderOptions {
    /// Visibility of the left and right sides.
    pub show_vertical_border: BorderVisibility,
    /// Visibility of the bottom and top sides.
    pub show_horizontal_border: BorderVisibility,
    /// Keep the content's aspect ratio while resizing.
    pub proportional_resize: bool,
    /// Minimum pixel size.
    pub minimum_size: [f64; 2],
    /// Maximum pixel size.
    pub maximum_size: [f64; 2],
    /// Hit tolerance in pixels.
    pub tolerance: u32,
    /// Dragging the interior moves the region.
    pub moving: bool,
    /// Outline color.
    pub border_color: [f32; 3],
    /// Outline thickness.
    pub border_thickness: f32,
    /// Corner radius as a fraction of half the shorter side.
    pub corner_radius_strength: f64,
    /// Points per rounded corner.
    pub corner_resolution: u32,
    /// Fill color.
    pub polygon_color: [f32; 3],
    /// Fill opacity.
    pub polygon_opacity: f64,
    /// Lower-left corner.
    pub position: [f64; 2],
    /// Upper-right corner.
    pub position2: [f64; 2],
    /// Draw in the overlay pass rather than the opaque/translucent passes.
    pub display_overlay: bool,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            show_vertical_border: BorderVisibility::On,
            show_horizontal_border: BorderVisibility::On,
            proportional_resize: false,
            minimum_size: [1.0, 1.0],
            maximum_size: [100_000.0, 100_000.0],
            tolerance: 3,
            moving: false,
            border_color: [1.0, 1.0, 1.0],
            border_thickness: 1.0,
            corner_radius_strength: 0.0,
            corner_resolution: 20,
            polygon_color: [1.0, 1.0, 1.0],
            polygon_opacity: 0.0,
            position: [0.05, 0.05],
            position2: [0.15, 0.15],
            display_overlay: true,
        }
    }
}

impl BorderOptions {
    /// Keys accepted by [`BorderOptions::set`].
    pub const KEYS: &'static [&'static str] = &[
        "showBorder",
        "showVerticalBorder",
        "showHorizontalBorder",
        "proportionalResize",
        "minimumSize",
        "maximumSize",
        "tolerance",
        "moving",
        "borderColor",
        "borderThickness",
        "cornerRadiusStrength",
        "cornerResolution",
        "polygonColor",
        "polygonOpacity",
        "position",
        "position2",
        "displayOverlay",
    ];

    /// Snapshots the current settings of `border`.
    #[must_use]
    pub fn from_representation<C: CoordinateService>(border: &BorderRepresentation<C>) -> Self {
        let min = border.minimum_size();
        let max = border.maximum_size();
        let position = border.position();
        let position2 = border.position2();
        Self {
            show_vertical_border: border.show_vertical_border(),
            show_horizontal_border: border.show_horizontal_border(),
            proportional_resize: border.proportional_resize(),
            minimum_size: [min.width, min.height],
            maximum_size: [max.width, max.height],
            tolerance: border.tolerance(),
            moving: border.moving(),
            border_color: rgb(border.border_style().color()),
            border_thickness: border.border_style().thickness(),
            corner_radius_strength: border.border_style().corner_radius_strength(),
            corner_resolution: border.border_style().corner_resolution(),
            polygon_color: rgb(border.fill_style().color()),
            polygon_opacity: border.fill_style().opacity(),
            position: [position.x, position.y],
            position2: [position2.x, position2.y],
            display_overlay: border.display_overlay(),
        }
    }

    /// Applies every option to `border`, clamping out-of-range values.
    pub fn apply_to<C: CoordinateService>(&self, border: &mut BorderRepresentation<C>) {
        border.set_show_vertical_border(self.show_vertical_border);
        border.set_show_horizontal_border(self.show_horizontal_border);
        border.set_proportional_resize(self.proportional_resize);
        border.set_minimum_size(Size::new(self.minimum_size[0], self.minimum_size[1]));
        border.set_maximum_size(Size::new(self.maximum_size[0], self.maximum_size[1]));
        border.set_tolerance(self.tolerance);
        border.set_moving(self.moving);
        border.set_border_color(color(self.border_color));
        border.set_border_thickness(self.border_thickness);
        border.set_corner_radius_strength(self.corner_radius_strength);
        border.set_corner_resolution(self.corner_resolution);
        border.set_polygon_color(color(self.polygon_color));
        border.set_polygon_opacity(self.polygon_opacity);
        border.set_corners(
            Point::new(self.position[0], self.position[1]),
            Point::new(self.position2[0], self.position2[1]),
        );
        border.set_display_overlay(self.display_overlay);
    }

    /// Sets a single option from text.
    ///
    /// Keys are the camelCase names in [`BorderOptions::KEYS`]. Values are
    /// `on`/`off`/`active` for visibility, `true`/`false` for switches,
    /// `x,y` for sizes and positions, `r,g,b` for colors, and plain numbers
    /// otherwise. `showBorder` sets both visibility axes.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), OptionError> {
        let key = Self::KEYS
            .iter()
            .copied()
            .find(|k| *k == key)
            .ok_or_else(|| OptionError::UnknownOption(key.to_owned()))?;
        let invalid = || OptionError::InvalidValue {
            key,
            value: value.to_owned(),
        };
        let value = value.trim();

        match key {
            "showBorder" => {
                let mode = BorderVisibility::from_str(value).map_err(|_| invalid())?;
                self.show_vertical_border = mode;
                self.show_horizontal_border = mode;
            }
            "showVerticalBorder" => {
                self.show_vertical_border =
                    BorderVisibility::from_str(value).map_err(|_| invalid())?;
            }
            "showHorizontalBorder" => {
                self.show_horizontal_border =
                    BorderVisibility::from_str(value).map_err(|_| invalid())?;
            }
            "proportionalResize" => self.proportional_resize = parse_bool(value).ok_or_else(invalid)?,
            "minimumSize" => self.minimum_size = parse_list(value).ok_or_else(invalid)?,
            "maximumSize" => self.maximum_size = parse_list(value).ok_or_else(invalid)?,
            "tolerance" => self.tolerance = parse_count(value).ok_or_else(invalid)?,
            "moving" => self.moving = parse_bool(value).ok_or_else(invalid)?,
            "borderColor" => self.border_color = parse_list(value).ok_or_else(invalid)?,
            "borderThickness" => self.border_thickness = value.parse().map_err(|_| invalid())?,
            "cornerRadiusStrength" => {
                self.corner_radius_strength = value.parse().map_err(|_| invalid())?;
            }
            "cornerResolution" => self.corner_resolution = parse_count(value).ok_or_else(invalid)?,
            "polygonColor" => self.polygon_color = parse_list(value).ok_or_else(invalid)?,
            "polygonOpacity" => self.polygon_opacity = value.parse().map_err(|_| invalid())?,
            "position" => self.position = parse_list(value).ok_or_else(invalid)?,
            "position2" => self.position2 = parse_list(value).ok_or_else(invalid)?,
            "displayOverlay" => self.display_overlay = parse_bool(value).ok_or_else(invalid)?,
            _ => return Err(OptionError::UnknownOption(key.to_owned())),
        }
        Ok(())
    }
}

fn rgb(color: Color) -> [f32; 3] {
    let [r, g, b, _] = color.components;
    [r, g, b]
}

fn color([r, g, b]: [f32; 3]) -> Color {
    Color::new([r, g, b, 1.0])
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        v if v.eq_ignore_ascii_case("true") || v == "1" => Some(true),
        v if v.eq_ignore_ascii_case("false") || v == "0" => Some(false),
        _ => None,
    }
}

/// Parses an integer, saturating negative and oversized values into `u32`.
fn parse_count(value: &str) -> Option<u32> {
    let n: i64 = value.parse().ok()?;
    Some(u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

fn parse_list<T: FromStr + Copy + Default, const N: usize>(value: &str) -> Option<[T; N]> {
    let mut out = [T::default(); N];
    let mut parts = value.split(',');
    for slot in &mut out {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ViewportCoordinates;

    #[test]
    fn textual_options_parse() {
        let mut opts = BorderOptions::default();
        opts.set("showBorder", "Active").unwrap();
        opts.set("minimumSize", "50, 40").unwrap();
        opts.set("borderColor", "1,0,0.5").unwrap();
        opts.set("moving", "true").unwrap();
        opts.set("tolerance", "-4").unwrap();
        assert_eq!(opts.show_vertical_border, BorderVisibility::Active);
        assert_eq!(opts.show_horizontal_border, BorderVisibility::Active);
        assert_eq!(opts.minimum_size, [50.0, 40.0]);
        assert_eq!(opts.border_color, [1.0, 0.0, 0.5]);
        assert!(opts.moving);
        assert_eq!(opts.tolerance, 0);
    }

    #[test]
    fn bad_options_are_reported() {
        let mut opts = BorderOptions::default();
        assert_eq!(
            opts.set("colour", "red"),
            Err(OptionError::UnknownOption("colour".into()))
        );
        let err = opts.set("position", "0.1").unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue {
                key: "position",
                value: "0.1".into(),
            }
        );
        assert!(opts.set("displayOverlay", "maybe").is_err());
        assert!(opts.set("borderColor", "1,1,1,1").is_err());
        assert_eq!(opts, BorderOptions::default());
    }

    #[test]
    fn apply_clamps_and_snapshots() {
        let mut opts = BorderOptions::default();
        opts.tolerance = 0;
        opts.polygon_opacity = 2.0;
        opts.corner_resolution = 5000;
        opts.position = [0.4, 0.4];
        opts.position2 = [0.1, 0.1];

        let mut border = BorderRepresentation::new(ViewportCoordinates::from_size(100.0, 100.0));
        opts.apply_to(&mut border);
        assert_eq!(border.tolerance(), 1);
        assert_eq!(border.fill_style().opacity(), 1.0);
        assert_eq!(border.border_style().corner_resolution(), 1000);
        assert_eq!(border.position(), Point::new(0.1, 0.1));

        let snap = BorderOptions::from_representation(&border);
        assert_eq!(snap.tolerance, 1);
        assert_eq!(snap.position, [0.1, 0.1]);
        assert_eq!(snap.position2, [0.4, 0.4]);
    }

    #[test]
    fn defaults_round_trip_through_a_representation() {
        let border: BorderRepresentation = BorderRepresentation::default();
        assert_eq!(BorderOptions::from_representation(&border), BorderOptions::default());
    }
}
