use super::*;

use glam::DAffine2;

/// Functionality that transforms Subpaths, such as reversing and affine transformation.
impl Subpath {
	/// Returns a [Subpath] with a reversed winding order.
	/// Note that a reversed closed subpath will start on the same manipulator group and then wind the other direction.
	pub fn reverse(&self) -> Subpath {
		let mut reversed: Vec<ManipulatorGroup> = self.manipulator_groups.iter().rev().map(|group| group.flip()).collect();
		if self.closed && !reversed.is_empty() {
			reversed.rotate_right(1);
		}
		Subpath {
			manipulator_groups: reversed,
			closed: self.closed,
		}
	}

	/// Apply a transformation to all of the [ManipulatorGroup]s in the [Subpath].
	pub fn apply_transform(&mut self, affine_transform: DAffine2) {
		for manipulator_group in &mut self.manipulator_groups {
			manipulator_group.apply_transform(affine_transform);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_manipulator_groups, compare_vec_of_points};
	use crate::{scale_about, shear_about};
	use glam::DVec2;

	fn set_up_closed_subpath() -> Subpath {
		Subpath::new(
			vec![
				ManipulatorGroup::new(DVec2::new(20., 30.), None, Some(DVec2::new(75., 85.))),
				ManipulatorGroup::new(DVec2::new(80., 90.), Some(DVec2::new(40., 30.)), None),
				ManipulatorGroup::new_anchor(DVec2::new(100., 100.)),
			],
			true,
		)
	}

	#[test]
	fn reverse_a_closed_subpath() {
		let subpath = set_up_closed_subpath();
		let reversed = subpath.reverse();

		assert_eq!(reversed[0].anchor, subpath[0].anchor);
		assert_eq!(reversed[1].anchor, subpath[2].anchor);
		assert!(compare_manipulator_groups(&reversed[2], &ManipulatorGroup::new(DVec2::new(80., 90.), None, Some(DVec2::new(40., 30.)))));
		assert_eq!(reversed.reverse(), subpath);
	}

	#[test]
	fn reverse_an_open_subpath() {
		let subpath = Subpath::from_anchors([DVec2::ZERO, DVec2::X, DVec2::ONE], false);
		assert_eq!(subpath.reverse().anchors(), vec![DVec2::ONE, DVec2::X, DVec2::ZERO]);
	}

	#[test]
	fn transform_subpath() {
		let mut subpath = set_up_closed_subpath();
		subpath.apply_transform(DAffine2::IDENTITY);
		assert_eq!(subpath, set_up_closed_subpath());
	}

	#[test]
	fn scale_then_shear_a_square() {
		let mut square = Subpath::new_rect(DVec2::ZERO, DVec2::splat(10.));
		let center = DVec2::splat(5.);
		square.apply_transform(shear_about(center, 1.) * scale_about(center, DVec2::new(2., 1.)));
		let expected = vec![DVec2::new(-10., 0.), DVec2::new(10., 0.), DVec2::new(20., 10.), DVec2::new(0., 10.)];
		assert!(compare_vec_of_points(square.anchors(), expected));
	}
}
