//! Map styling options and the value → colour scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::region::RegionData;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let invalid = || CoreError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Rgb::new(
                    channel(&hex[0..2])?,
                    channel(&hex[2..4])?,
                    channel(&hex[4..6])?,
                )),
                3 => {
                    let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                    Ok(Rgb::new(short(0)?, short(1)?, short(2)?))
                }
                _ => Err(invalid()),
            };
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Rgb::new(0, 0, 0)),
            "white" => Ok(Rgb::new(255, 255, 255)),
            "red" => Ok(Rgb::new(255, 0, 0)),
            "green" => Ok(Rgb::new(0, 128, 0)),
            "blue" => Ok(Rgb::new(0, 0, 255)),
            "gray" | "grey" => Ok(Rgb::new(128, 128, 128)),
            "orange" => Ok(Rgb::new(255, 165, 0)),
            "yellow" => Ok(Rgb::new(255, 255, 0)),
            _ => Err(invalid()),
        }
    }
}

/// Cosmetic options for the map view.
///
/// Colours are kept as strings so a layout can round-trip through config
/// files unchanged; [`MapLayout::color_scale`] validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayout {
    pub title: String,
    pub start_color: String,
    pub end_color: String,
    /// Caption for the value in the legend.
    pub hover_title: String,
    pub no_data_color: String,
    pub border_color: String,
    pub hover_color: String,
    pub hover_border_color: String,
    pub height: f32,
    pub width: f32,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            title: "State Wise Distribution of the Top 3 languages Spoken".to_string(),
            start_color: "#b3d1ff".to_string(),
            end_color: "#005ce6".to_string(),
            hover_title: "Count".to_string(),
            no_data_color: "#f5f5f5".to_string(),
            border_color: "#8D8D8D".to_string(),
            hover_color: "#0080ff".to_string(),
            hover_border_color: "green".to_string(),
            height: 500.0,
            width: 300.0,
        }
    }
}

impl MapLayout {
    /// Build the colour scale for `data`, validating every colour field.
    pub fn color_scale(&self, data: &RegionData) -> CoreResult<ColorScale> {
        Ok(ColorScale {
            start: self.start_color.parse()?,
            end: self.end_color.parse()?,
            no_data: self.no_data_color.parse()?,
            range: data.value_range(),
        })
    }

    /// Parsed `(border, hover fill, hover border)` colours.
    pub fn stroke_colors(&self) -> CoreResult<(Rgb, Rgb, Rgb)> {
        Ok((
            self.border_color.parse()?,
            self.hover_color.parse()?,
            self.hover_border_color.parse()?,
        ))
    }
}

/// Linear colour ramp over a dataset's value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub start: Rgb,
    pub end: Rgb,
    pub no_data: Rgb,
    pub range: Option<(f64, f64)>,
}

impl ColorScale {
    /// Colour for a value; `None` means the region has no data.
    pub fn color_for(&self, value: Option<f64>) -> Rgb {
        let (Some(v), Some((lo, hi))) = (value, self.range) else {
            return self.no_data;
        };
        if !v.is_finite() {
            return self.no_data;
        }
        if hi <= lo {
            return self.end;
        }
        self.start.lerp(self.end, (v - lo) / (hi - lo))
    }
}
