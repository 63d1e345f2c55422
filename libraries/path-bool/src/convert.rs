use crate::{BooleanError, FLATTEN_TOLERANCE};

use geo::{Coord, LineString, MultiPolygon, Polygon};
use glam::DVec2;
use kurbo::PathEl;
use subpath_rs::Subpath;

/// Flattens a closed subpath into a polygon without holes. Line segments keep their exact end points.
pub(crate) fn subpath_to_polygon(subpath: &Subpath) -> Result<Polygon<f64>, BooleanError> {
	if !subpath.closed {
		return Err(BooleanError::OpenPath);
	}

	let bezpath = subpath.to_bezpath();
	let mut coords: Vec<Coord<f64>> = Vec::new();
	kurbo::flatten(bezpath.elements().iter().copied(), FLATTEN_TOLERANCE, |element| {
		if let PathEl::MoveTo(point) | PathEl::LineTo(point) = element {
			let coord = Coord { x: point.x, y: point.y };
			if coords.last() != Some(&coord) {
				coords.push(coord);
			}
		}
	});
	if coords.len() > 1 && coords.first() == coords.last() {
		coords.pop();
	}

	if coords.len() < 3 {
		return Err(BooleanError::Degenerate);
	}
	Ok(Polygon::new(LineString::new(coords), Vec::new()))
}

/// Converts every ring of `polygons` into a closed polyline subpath.
/// Exterior rings are oriented so the sign of their signed area is `exterior_sign`, holes the opposite way.
pub(crate) fn polygons_to_subpaths(polygons: &MultiPolygon<f64>, exterior_sign: f64) -> Vec<Subpath> {
	let mut subpaths = Vec::new();
	for polygon in polygons.iter() {
		subpaths.extend(ring_to_subpath(polygon.exterior(), exterior_sign));
		subpaths.extend(polygon.interiors().iter().filter_map(|ring| ring_to_subpath(ring, -exterior_sign)));
	}
	subpaths
}

fn ring_to_subpath(ring: &LineString<f64>, sign: f64) -> Option<Subpath> {
	let mut points: Vec<DVec2> = ring.coords().map(|coord| DVec2::new(coord.x, coord.y)).collect();
	if points.len() > 1 && points.first() == points.last() {
		points.pop();
	}
	if points.len() < 3 {
		return None;
	}

	let subpath = Subpath::from_anchors(points, true);
	if subpath.signed_area() * sign < 0. { Some(subpath.reverse()) } else { Some(subpath) }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_subpaths_are_rejected() {
		let line = Subpath::from_anchors([DVec2::ZERO, DVec2::X], false);
		assert_eq!(subpath_to_polygon(&line), Err(BooleanError::OpenPath));
	}

	#[test]
	fn collapsed_subpaths_are_degenerate() {
		let collapsed = Subpath::from_anchors([DVec2::ONE, DVec2::ONE, DVec2::ONE], true);
		assert_eq!(subpath_to_polygon(&collapsed), Err(BooleanError::Degenerate));
	}

	#[test]
	fn polygon_keeps_line_vertices() {
		let square = Subpath::new_rect(DVec2::ZERO, DVec2::splat(10.));
		let polygon = subpath_to_polygon(&square).unwrap();
		// The ring is stored closed, repeating its first coordinate
		assert_eq!(polygon.exterior().0.len(), 5);
		assert_eq!(polygon.exterior().0[2], Coord { x: 10., y: 10. });
	}

	#[test]
	fn curves_are_flattened_within_tolerance() {
		let circle = Subpath::new_ellipse(DVec2::splat(-10.), DVec2::splat(10.));
		let polygon = subpath_to_polygon(&circle).unwrap();
		assert!(polygon.exterior().0.len() > 16);
		// The cubic approximation of a circle is itself within 0.03% of the radius
		assert!(polygon.exterior().coords().all(|coord| (DVec2::new(coord.x, coord.y).length() - 10.).abs() < 1e-2));
	}

	#[test]
	fn rings_follow_requested_orientation() {
		let square = Subpath::new_rect(DVec2::ZERO, DVec2::splat(10.));
		let polygons = MultiPolygon::new(vec![subpath_to_polygon(&square).unwrap()]);
		for sign in [1., -1.] {
			let subpaths = polygons_to_subpaths(&polygons, sign);
			assert_eq!(subpaths.len(), 1);
			assert_eq!(subpaths[0].len(), 4);
			assert!(subpaths[0].signed_area() * sign > 0.);
		}
	}
}
