use super::*;
use crate::consts::ARCLEN_ACCURACY;

use glam::DVec2;
use kurbo::{ParamCurveArclen, ParamCurveExtrema};

/// Functionality relating to looking up properties of the `Subpath` or points along the `Subpath`.
impl Subpath {
	/// Returns the arc length of each curve along the `Subpath`, in segment order.
	pub fn curve_lengths(&self) -> Vec<f64> {
		self.iter().map(|curve| curve.arclen(ARCLEN_ACCURACY)).collect()
	}

	/// Signed area of the polygon through the anchors (handles are ignored), closing back to the first anchor.
	/// Open subpaths are measured as if they were closed. Positive when the anchors appear clockwise on a Y-down canvas.
	pub fn signed_area(&self) -> f64 {
		let anchors = self.anchors();
		let len = anchors.len();
		if len < 3 {
			return 0.;
		}
		let twice_area: f64 = (0..len).map(|index| anchors[index].perp_dot(anchors[(index + 1) % len])).sum();
		twice_area / 2.
	}

	/// Return the min and max corners that represent the bounding box of the subpath, including curve extrema.
	pub fn bounding_box(&self) -> Option<[DVec2; 2]> {
		if self.len_segments() == 0 {
			return self.manipulator_groups.first().map(|group| [group.anchor, group.anchor]);
		}
		self.iter()
			.map(|curve| curve.bounding_box())
			.map(|rect| [DVec2::new(rect.x0, rect.y0), DVec2::new(rect.x1, rect.y1)])
			.reduce(|[min1, max1], [min2, max2]| [min1.min(min2), max1.max(max2)])
	}
}

/// Returns the bounding box enclosing every subpath in `subpaths`.
pub fn combined_bounding_box<'a>(subpaths: impl IntoIterator<Item = &'a Subpath>) -> Option<[DVec2; 2]> {
	subpaths
		.into_iter()
		.filter_map(Subpath::bounding_box)
		.reduce(|[min1, max1], [min2, max2]| [min1.min(min2), max1.max(max2)])
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> Subpath {
		Subpath::from_anchors([DVec2::ZERO, DVec2::new(10., 0.), DVec2::new(10., 10.), DVec2::new(0., 10.)], true)
	}

	#[test]
	fn curve_lengths_include_closing_edge() {
		assert_eq!(square().curve_lengths(), vec![10.; 4]);

		let mut arched = square();
		arched[0].out_handle = Some(DVec2::new(5., -5.));
		let lengths = arched.curve_lengths();
		assert!(lengths[0] > 10. && lengths[0] < 15., "{lengths:?}");
		assert_eq!(lengths[1..], [10.; 3]);
	}

	#[test]
	fn signed_area_flips_with_reversal() {
		assert!((square().signed_area() - 100.).abs() < 1e-9);
		assert!((square().reverse().signed_area() + 100.).abs() < 1e-9);
		assert_eq!(Subpath::from_anchors([DVec2::ZERO, DVec2::X], false).signed_area(), 0.);
	}

	#[test]
	fn bounding_box_includes_curve_extrema() {
		let circle = Subpath::new_ellipse(DVec2::new(-1., -1.), DVec2::new(1., 1.));
		let [min, max] = circle.bounding_box().unwrap();
		assert!(min.abs_diff_eq(DVec2::new(-1., -1.), 1e-9));
		assert!(max.abs_diff_eq(DVec2::new(1., 1.), 1e-9));

		let combined = combined_bounding_box([&square(), &circle]).unwrap();
		assert!(combined[0].abs_diff_eq(DVec2::new(-1., -1.), 1e-9));
		assert!(combined[1].abs_diff_eq(DVec2::new(10., 10.), 1e-9));
	}
}
