use crate::consts::COLLINEAR_CROSS_EPSILON;

use glam::DVec2;
use subpath_rs::Subpath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerType {
	/// The outline turns away from its interior, leaving a protruding tip.
	Convex,
	/// The outline turns into its interior, leaving a notch.
	Concave,
	/// The neighbors are collinear with the anchor, or the anchor has no neighbor on one side.
	Straight,
}

fn turn_from_cross(cross: f64) -> CornerType {
	if cross.abs() < COLLINEAR_CROSS_EPSILON {
		CornerType::Straight
	} else if cross < 0. {
		CornerType::Convex
	} else {
		CornerType::Concave
	}
}

/// Classifies the turn at `point` from the cross product of the incoming and outgoing edge vectors, without regard to winding.
///
/// A negative cross product is convex. This matches a counter-clockwise outline on a Y-down canvas; on a clockwise outline
/// every classification is mirrored, which is why [classify_corner] normalizes the winding first.
pub fn corner_turn(previous: DVec2, point: DVec2, next: DVec2) -> CornerType {
	turn_from_cross((point - previous).perp_dot(next - point))
}

/// Flips the cross product of clockwise outlines so convex corners come out convex in both windings.
/// Open subpaths are measured as if closed by a chord between their endpoints.
fn winding_sign(subpath: &Subpath) -> f64 {
	if subpath.signed_area() > 0. { -1. } else { 1. }
}

fn oriented_corner(subpath: &Subpath, index: usize, sign: f64) -> CornerType {
	let Some((previous, next)) = subpath.neighbors(index) else {
		return CornerType::Straight;
	};
	let groups = subpath.manipulator_groups();
	let (previous, point, next) = (groups[previous].anchor, groups[index].anchor, groups[next].anchor);
	turn_from_cross((point - previous).perp_dot(next - point) * sign)
}

/// Classifies the corner at anchor `index` of `subpath`, independent of the direction the subpath winds.
///
/// Endpoints of open subpaths, out-of-range indices, and subpaths with fewer than 3 anchors are [CornerType::Straight].
pub fn classify_corner(subpath: &Subpath, index: usize) -> CornerType {
	oriented_corner(subpath, index, winding_sign(subpath))
}

/// Classifies every corner of `subpath`, in anchor order.
pub fn classify_corners(subpath: &Subpath) -> Vec<CornerType> {
	let sign = winding_sign(subpath);
	(0..subpath.len()).map(|index| oriented_corner(subpath, index, sign)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> Subpath {
		Subpath::from_anchors([DVec2::ZERO, DVec2::new(10., 0.), DVec2::new(10., 10.), DVec2::new(0., 10.)], true)
	}

	fn l_shape() -> Subpath {
		let anchors = [(0., 0.), (20., 0.), (20., 10.), (10., 10.), (10., 20.), (0., 20.)];
		Subpath::from_anchors(anchors.map(|(x, y)| DVec2::new(x, y)), true)
	}

	#[test]
	fn raw_turn_depends_on_winding() {
		assert_eq!(corner_turn(DVec2::ZERO, DVec2::new(10., 0.), DVec2::new(10., 10.)), CornerType::Concave);
		assert_eq!(corner_turn(DVec2::new(10., 10.), DVec2::new(10., 0.), DVec2::ZERO), CornerType::Convex);
		assert_eq!(corner_turn(DVec2::ZERO, DVec2::new(5., 0.), DVec2::new(10., 0.)), CornerType::Straight);
	}

	#[test]
	fn square_is_convex_in_both_directions() {
		assert_eq!(classify_corners(&square()), vec![CornerType::Convex; 4]);
		assert_eq!(classify_corners(&square().reverse()), vec![CornerType::Convex; 4]);
	}

	#[test]
	fn l_shape_has_one_concave_corner() {
		let expected = vec![
			CornerType::Convex,
			CornerType::Convex,
			CornerType::Convex,
			CornerType::Concave,
			CornerType::Convex,
			CornerType::Convex,
		];
		assert_eq!(classify_corners(&l_shape()), expected);
		assert_eq!(classify_corner(&l_shape().reverse(), 3), CornerType::Concave);
	}

	#[test]
	fn endpoints_and_collinear_anchors_are_straight() {
		let open = Subpath::from_anchors([DVec2::ZERO, DVec2::new(5., 0.), DVec2::new(10., 0.), DVec2::new(10., 10.)], false);
		assert_eq!(classify_corner(&open, 0), CornerType::Straight);
		assert_eq!(classify_corner(&open, 1), CornerType::Straight);
		assert_eq!(classify_corner(&open, 2), CornerType::Convex);
		assert_eq!(classify_corner(&open, 3), CornerType::Straight);
		assert_eq!(classify_corner(&open, 9), CornerType::Straight);
		assert_eq!(classify_corner(&Subpath::from_anchors([DVec2::ZERO, DVec2::X], false), 1), CornerType::Straight);
	}

	#[test]
	fn near_collinear_turns_are_straight() {
		assert_eq!(corner_turn(DVec2::ZERO, DVec2::new(1., 0.), DVec2::new(2., 1e-7)), CornerType::Straight);
	}
}
