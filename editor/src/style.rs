//! Contains stylistic options for displaying artwork geometry.

use crate::color::Color;
use crate::consts::{DEFAULT_OPACITY, DEFAULT_STROKE_WIDTH};
use crate::params::TransformParams;

use serde::{Deserialize, Serialize};

/// Describes the fill of a layer.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fill {
	#[default]
	None,
	Solid(Color),
}

impl Fill {
	/// Construct a new [Fill::Solid] or [Fill::None] from an optional [Color].
	pub fn solid_or_none(color: Option<Color>) -> Self {
		match color {
			Some(color) => Self::Solid(color),
			None => Self::None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stroke {
	/// Stroke color
	pub color: Option<Color>,
	/// Line thickness
	pub weight: f64,
}

impl Default for Stroke {
	fn default() -> Self {
		Self::new(Some(Color::BLACK), DEFAULT_STROKE_WIDTH)
	}
}

impl Stroke {
	pub const fn new(color: Option<Color>, weight: f64) -> Self {
		Self { color, weight }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
	pub stroke: Option<Stroke>,
	pub fill: Fill,
	pub opacity: f64,
}

impl Default for PathStyle {
	fn default() -> Self {
		Self::new(None, Fill::None)
	}
}

impl PathStyle {
	pub const fn new(stroke: Option<Stroke>, fill: Fill) -> Self {
		Self { stroke, fill, opacity: DEFAULT_OPACITY }
	}

	/// The style a set of parameters paints on every artwork item.
	///
	/// A missing stroke color means no stroke at all, the stroke width alone never creates one.
	pub fn from_params(params: &TransformParams) -> Self {
		Self {
			stroke: params.stroke_color.map(|color| Stroke::new(Some(color), params.stroke_width)),
			fill: Fill::solid_or_none(params.fill_color),
			opacity: params.opacity.clamp(0., 1.),
		}
	}
}
