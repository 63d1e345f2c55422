use glam::{DAffine2, DMat2, DVec2};
use kurbo::Point;

pub fn point_to_dvec2(point: Point) -> DVec2 {
	DVec2 { x: point.x, y: point.y }
}

pub fn dvec2_to_point(value: DVec2) -> Point {
	Point { x: value.x, y: value.y }
}

/// Returns an affine transform that scales by `scale` while keeping `pivot` fixed in place.
pub fn scale_about(pivot: DVec2, scale: DVec2) -> DAffine2 {
	DAffine2::from_translation(pivot) * DAffine2::from_scale(scale) * DAffine2::from_translation(-pivot)
}

/// Returns an affine transform that shears horizontally by `factor` while keeping `pivot` fixed in place.
/// A point at height `y` moves by `factor * (y - pivot.y)` along the X axis.
pub fn shear_about(pivot: DVec2, factor: f64) -> DAffine2 {
	let shear = DMat2::from_cols(DVec2::X, DVec2::new(factor, 1.));
	DAffine2::from_translation(pivot) * DAffine2::from_mat2(shear) * DAffine2::from_translation(-pivot)
}

/// Finds the center and radius of the circle passing through three points, or `None` if they are collinear.
pub(crate) fn circumcircle(a: DVec2, b: DVec2, c: DVec2, epsilon: f64) -> Option<(DVec2, f64)> {
	// Work relative to `a` to keep the determinant well conditioned far from the origin
	let b = b - a;
	let c = c - a;
	let determinant = 2. * b.perp_dot(c);
	if determinant.abs() < epsilon {
		return None;
	}

	let b_squared = b.length_squared();
	let c_squared = c.length_squared();
	let center = DVec2::new(c.y * b_squared - b.y * c_squared, b.x * c_squared - c.x * b_squared) / determinant;

	Some((center + a, center.length()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_points;

	#[test]
	fn scale_keeps_pivot_fixed() {
		let transform = scale_about(DVec2::new(5., 5.), DVec2::new(2., 1.));
		assert!(compare_points(transform.transform_point2(DVec2::new(5., 5.)), DVec2::new(5., 5.)));
		assert!(compare_points(transform.transform_point2(DVec2::new(10., 0.)), DVec2::new(15., 0.)));
	}

	#[test]
	fn shear_moves_points_by_height_above_pivot() {
		let transform = shear_about(DVec2::new(5., 5.), 0.5);
		assert!(compare_points(transform.transform_point2(DVec2::new(5., 5.)), DVec2::new(5., 5.)));
		assert!(compare_points(transform.transform_point2(DVec2::new(0., 10.)), DVec2::new(2.5, 10.)));
		assert!(compare_points(transform.transform_point2(DVec2::new(0., 0.)), DVec2::new(-2.5, 0.)));
	}

	#[test]
	fn circumcircle_of_right_triangle() {
		let (center, radius) = circumcircle(DVec2::new(0., 2.), DVec2::ZERO, DVec2::new(2., 0.), 1e-12).unwrap();
		assert!(compare_points(center, DVec2::new(1., 1.)));
		assert!((radius - 2_f64.sqrt()).abs() < 1e-12);
	}

	#[test]
	fn circumcircle_of_collinear_points() {
		assert!(circumcircle(DVec2::ZERO, DVec2::new(1., 1.), DVec2::new(2., 2.), 1e-12).is_none());
	}
}
