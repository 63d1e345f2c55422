use crate::color::Color;
use crate::consts::*;
use crate::misc::EditorError;

use bevel_engine::{BevelSettings, BevelType, NodeOverrides};
use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};
use subpath_rs::{scale_about, shear_about};

/// The full set of user-facing transform parameters applied to every artwork item.
///
/// A value is never edited in place by the pipeline: each change produces a new `TransformParams` and triggers one full recompute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
	/// Carried for persistence, currently without a geometric effect.
	pub weight: f64,
	/// Horizontal scale in percent.
	pub width: f64,
	/// Horizontal shear angle in degrees.
	pub slant: f64,
	pub stroke_width: f64,
	pub stroke_color: Option<Color>,
	pub fill_color: Option<Color>,
	pub opacity: f64,
	pub bevel_type: BevelType,
	pub bevel_size: f64,
	pub chamfer_angle: f64,
}

impl Default for TransformParams {
	fn default() -> Self {
		Self {
			weight: DEFAULT_WEIGHT,
			width: DEFAULT_WIDTH,
			slant: DEFAULT_SLANT,
			stroke_width: DEFAULT_STROKE_WIDTH,
			stroke_color: None,
			fill_color: Some(DEFAULT_FILL_COLOR),
			opacity: DEFAULT_OPACITY,
			bevel_type: BevelType::None,
			bevel_size: DEFAULT_BEVEL_SIZE,
			chamfer_angle: DEFAULT_CHAMFER_ANGLE,
		}
	}
}

impl TransformParams {
	/// The global bevel settings these parameters describe.
	pub fn bevel(&self) -> BevelSettings {
		BevelSettings {
			bevel_type: self.bevel_type,
			bevel_size: self.bevel_size,
			chamfer_angle: self.chamfer_angle,
		}
	}

	pub fn with_weight(mut self, weight: f64) -> Self {
		self.weight = weight;
		self
	}

	pub fn with_width(mut self, width: f64) -> Self {
		self.width = width;
		self
	}

	pub fn with_slant(mut self, slant: f64) -> Self {
		self.slant = slant;
		self
	}

	pub fn with_stroke(mut self, stroke_color: Option<Color>, stroke_width: f64) -> Self {
		self.stroke_color = stroke_color;
		self.stroke_width = stroke_width;
		self
	}

	pub fn with_fill(mut self, fill_color: Option<Color>) -> Self {
		self.fill_color = fill_color;
		self
	}

	pub fn with_opacity(mut self, opacity: f64) -> Self {
		self.opacity = opacity;
		self
	}

	pub fn with_bevel(mut self, bevel_type: BevelType, bevel_size: f64) -> Self {
		self.bevel_type = bevel_type;
		self.bevel_size = bevel_size;
		self
	}

	pub fn with_chamfer_angle(mut self, chamfer_angle: f64) -> Self {
		self.chamfer_angle = chamfer_angle;
		self
	}

	/// Whether the width or slant move any geometry.
	pub fn has_geometry_transform(&self) -> bool {
		self.width != DEFAULT_WIDTH || self.slant != DEFAULT_SLANT
	}

	/// The affine transform for the width and slant parameters around `pivot`: the horizontal scale is applied first, then the shear.
	/// Returns `None` when neither parameter moves the geometry.
	pub fn geometry_transform(&self, pivot: DVec2) -> Option<DAffine2> {
		if !self.has_geometry_transform() {
			return None;
		}

		let scale = scale_about(pivot, DVec2::new(self.width / 100., 1.));
		let shear = shear_about(pivot, self.slant.to_radians().tan());
		Some(shear * scale)
	}

	pub fn to_json(&self) -> Result<String, EditorError> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn from_json(json: &str) -> Result<Self, EditorError> {
		Ok(serde_json::from_str(json)?)
	}
}

pub fn overrides_to_json(overrides: &NodeOverrides) -> Result<String, EditorError> {
	Ok(serde_json::to_string(overrides)?)
}

pub fn overrides_from_json(json: &str) -> Result<NodeOverrides, EditorError> {
	Ok(serde_json::from_str(json)?)
}
