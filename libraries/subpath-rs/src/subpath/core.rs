use super::*;
use crate::consts::ELLIPSE_HANDLE_OFFSET_FACTOR;
use crate::utils::dvec2_to_point;

use glam::DVec2;
use kurbo::BezPath;

/// Functionality relating to core `Subpath` operations, such as constructors and `iter`.
impl Subpath {
	/// Create a new `Subpath` using a list of [ManipulatorGroup]s.
	/// A closed `Subpath` with fewer than 2 [ManipulatorGroup]s is allowed but has no curves worth processing.
	pub fn new(manipulator_groups: Vec<ManipulatorGroup>, closed: bool) -> Self {
		Self { manipulator_groups, closed }
	}

	/// Constructs a subpath from a series of points with no handles (making it a polyline or polygon).
	pub fn from_anchors(anchor_positions: impl IntoIterator<Item = DVec2>, closed: bool) -> Self {
		Self::new(anchor_positions.into_iter().map(ManipulatorGroup::new_anchor).collect(), closed)
	}

	/// Constructs a rectangle with `corner1` and `corner2` as the two corners.
	pub fn new_rect(corner1: DVec2, corner2: DVec2) -> Self {
		Self::from_anchors([corner1, DVec2::new(corner2.x, corner1.y), corner2, DVec2::new(corner1.x, corner2.y)], true)
	}

	/// Constructs an ellipse with `corner1` and `corner2` as the two corners of the bounding box.
	pub fn new_ellipse(corner1: DVec2, corner2: DVec2) -> Self {
		let size = (corner1 - corner2).abs();
		let center = (corner1 + corner2) / 2.;
		let top = DVec2::new(center.x, corner1.y);
		let bottom = DVec2::new(center.x, corner2.y);
		let left = DVec2::new(corner1.x, center.y);
		let right = DVec2::new(corner2.x, center.y);

		let handle_offset = size * ELLIPSE_HANDLE_OFFSET_FACTOR * 0.5;

		let manipulator_groups = vec![
			ManipulatorGroup::new(top, Some(top - handle_offset * DVec2::X), Some(top + handle_offset * DVec2::X)),
			ManipulatorGroup::new(right, Some(right - handle_offset * DVec2::Y), Some(right + handle_offset * DVec2::Y)),
			ManipulatorGroup::new(bottom, Some(bottom + handle_offset * DVec2::X), Some(bottom - handle_offset * DVec2::X)),
			ManipulatorGroup::new(left, Some(left + handle_offset * DVec2::Y), Some(left - handle_offset * DVec2::Y)),
		];
		Self::new(manipulator_groups, true)
	}

	/// Converts the `Subpath` into a kurbo [BezPath], ending with a `ClosePath` when the subpath is closed.
	pub fn to_bezpath(&self) -> BezPath {
		let mut bezpath = BezPath::new();
		let Some(first) = self.manipulator_groups.first() else {
			return bezpath;
		};

		bezpath.move_to(dvec2_to_point(first.anchor));
		for segment in self.iter() {
			match segment {
				PathSeg::Line(line) => bezpath.line_to(line.p1),
				PathSeg::Quad(quad) => bezpath.quad_to(quad.p1, quad.p2),
				PathSeg::Cubic(cubic) => bezpath.curve_to(cubic.p1, cubic.p2, cubic.p3),
			}
		}
		if self.closed {
			bezpath.close_path();
		}
		bezpath
	}

	/// Returns true if the `Subpath` contains no [ManipulatorGroup].
	pub fn is_empty(&self) -> bool {
		self.manipulator_groups.is_empty()
	}

	/// Returns the number of [ManipulatorGroup]s contained within the `Subpath`.
	pub fn len(&self) -> usize {
		self.manipulator_groups.len()
	}

	/// Returns the number of segments contained within the `Subpath`.
	pub fn len_segments(&self) -> usize {
		match (self.len(), self.closed) {
			(0, _) | (1, _) => 0,
			(len, true) => len,
			(len, false) => len - 1,
		}
	}

	/// Returns an iterator of the curves along the `Subpath`, including the closing curve of a closed subpath.
	pub fn iter(&self) -> SubpathIter<'_> {
		SubpathIter { subpath: self, index: 0 }
	}

	/// Returns a slice of the [ManipulatorGroup]s in the `Subpath`.
	pub fn manipulator_groups(&self) -> &[ManipulatorGroup] {
		&self.manipulator_groups
	}

	/// Returns a vector of all the anchors (DVec2) for this `Subpath`.
	pub fn anchors(&self) -> Vec<DVec2> {
		self.manipulator_groups().iter().map(|group| group.anchor).collect()
	}

	/// Returns the indices of the anchors before and after `index`, wrapping around on closed subpaths.
	/// Endpoints of open subpaths and subpaths with fewer than 3 anchors have no such pair.
	pub fn neighbors(&self, index: usize) -> Option<(usize, usize)> {
		let len = self.len();
		if len < 3 || index >= len {
			return None;
		}
		if self.closed {
			return Some(((index + len - 1) % len, (index + 1) % len));
		}
		(index > 0 && index < len - 1).then_some((index - 1, index + 1))
	}
}
