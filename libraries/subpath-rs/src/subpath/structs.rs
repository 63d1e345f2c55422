use glam::{DAffine2, DVec2};
use kurbo::{CubicBez, Line, PathSeg, QuadBez};
use std::fmt::{Debug, Formatter, Result};

use crate::utils::dvec2_to_point;

/// Structure used to represent a single anchor with up to two optional associated handles along a `Subpath`.
/// Handles are stored as absolute positions. A missing handle coincides with its anchor.
#[derive(Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManipulatorGroup {
	pub anchor: DVec2,
	pub in_handle: Option<DVec2>,
	pub out_handle: Option<DVec2>,
}

impl Debug for ManipulatorGroup {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match (self.in_handle, self.out_handle) {
			(Some(in_handle), Some(out_handle)) => write!(f, "anchor: {}, in: {}, out: {}", self.anchor, in_handle, out_handle),
			(Some(in_handle), None) => write!(f, "anchor: {}, in: {}, out: n/a", self.anchor, in_handle),
			(None, Some(out_handle)) => write!(f, "anchor: {}, in: n/a, out: {}", self.anchor, out_handle),
			(None, None) => write!(f, "anchor: {}, in: n/a, out: n/a", self.anchor),
		}
	}
}

impl ManipulatorGroup {
	/// Construct a new manipulator group from an anchor, in handle and out handle.
	pub fn new(anchor: DVec2, in_handle: Option<DVec2>, out_handle: Option<DVec2>) -> Self {
		Self { anchor, in_handle, out_handle }
	}

	/// Construct a new manipulator point with just an anchor position.
	pub fn new_anchor(anchor: DVec2) -> Self {
		Self::new(anchor, None, None)
	}

	/// Create a curve that starts at the current [ManipulatorGroup] and finishes in the `end_group` [ManipulatorGroup].
	/// Two handles make a cubic, one handle a quadratic, and no handles a line.
	pub fn to_bezier(&self, end_group: &ManipulatorGroup) -> PathSeg {
		let start = dvec2_to_point(self.anchor);
		let end = dvec2_to_point(end_group.anchor);

		match (self.out_handle, end_group.in_handle) {
			(Some(handle1), Some(handle2)) => PathSeg::Cubic(CubicBez::new(start, dvec2_to_point(handle1), dvec2_to_point(handle2), end)),
			(Some(handle), None) | (None, Some(handle)) => PathSeg::Quad(QuadBez::new(start, dvec2_to_point(handle), end)),
			(None, None) => PathSeg::Line(Line::new(start, end)),
		}
	}

	/// Apply a transformation to all of the [ManipulatorGroup] points.
	pub fn apply_transform(&mut self, affine_transform: DAffine2) {
		self.anchor = affine_transform.transform_point2(self.anchor);
		self.in_handle = self.in_handle.map(|in_handle| affine_transform.transform_point2(in_handle));
		self.out_handle = self.out_handle.map(|out_handle| affine_transform.transform_point2(out_handle));
	}

	/// Swaps the in and out handles, used when reversing the direction of a subpath.
	pub fn flip(mut self) -> Self {
		std::mem::swap(&mut self.in_handle, &mut self.out_handle);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kurbo::ParamCurve;

	#[test]
	fn curve_kind_follows_handles() {
		let start = ManipulatorGroup::new(DVec2::ZERO, None, Some(DVec2::new(1., 1.)));
		let end = ManipulatorGroup::new(DVec2::new(3., 0.), Some(DVec2::new(2., 1.)), None);
		assert!(matches!(start.to_bezier(&end), PathSeg::Cubic(_)));
		assert!(matches!(ManipulatorGroup::new_anchor(DVec2::ZERO).to_bezier(&end), PathSeg::Quad(_)));
		assert!(matches!(ManipulatorGroup::new_anchor(DVec2::ZERO).to_bezier(&ManipulatorGroup::new_anchor(DVec2::X)), PathSeg::Line(_)));
		assert_eq!(start.to_bezier(&end).end(), kurbo::Point::new(3., 0.));
	}

	#[test]
	fn flipping_swaps_handles() {
		let group = ManipulatorGroup::new(DVec2::new(5., 5.), Some(DVec2::new(4., 5.)), None);
		assert_eq!(group.flip(), ManipulatorGroup::new(DVec2::new(5., 5.), None, Some(DVec2::new(4., 5.))));
		assert_eq!(group.flip().flip(), group);
	}

	#[test]
	fn transform_moves_handles_with_anchor() {
		let mut group = ManipulatorGroup::new(DVec2::new(1., 1.), Some(DVec2::new(0., 1.)), Some(DVec2::new(2., 1.)));
		group.apply_transform(DAffine2::from_translation(DVec2::new(10., 0.)));
		assert_eq!(group, ManipulatorGroup::new(DVec2::new(11., 1.), Some(DVec2::new(10., 1.)), Some(DVec2::new(12., 1.))));
	}
}
