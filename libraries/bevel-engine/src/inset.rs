use crate::params::BevelType;

use glam::{DAffine2, DVec2};
use subpath_rs::Subpath;

/// Builds the shape that is subtracted at a concave corner, centered on `anchor`.
///
/// The shape is sized by `size` (the side of the square, the diameter of the circle) and rotated about the anchor by half of
/// the signed angle between the directions toward `previous` and `next`. Returns `None` for non-concave types and
/// non-positive sizes.
pub fn inset_shape(bevel_type: BevelType, anchor: DVec2, previous: DVec2, next: DVec2, size: f64) -> Option<Subpath> {
	if size.is_nan() || size <= 0. {
		return None;
	}

	let half = DVec2::splat(size / 2.);
	let mut shape = match bevel_type {
		BevelType::ConcaveSquare => Subpath::new_rect(anchor - half, anchor + half),
		BevelType::ConcaveRound => Subpath::new_ellipse(anchor - half, anchor + half),
		BevelType::ConcaveChamfer => chamfered_square(anchor, size),
		BevelType::None | BevelType::Chamfer | BevelType::Fillet => return None,
	};

	let to_previous = (previous - anchor).normalize_or_zero();
	let to_next = (next - anchor).normalize_or_zero();
	let angle = to_previous.perp_dot(to_next).atan2(to_previous.dot(to_next));
	shape.apply_transform(DAffine2::from_translation(anchor) * DAffine2::from_angle(angle / 2.) * DAffine2::from_translation(-anchor));

	Some(shape)
}

/// A square of side `size` with each edge replaced by its middle half: two points per edge, `size / 4` either side of the
/// edge midpoint.
fn chamfered_square(center: DVec2, size: f64) -> Subpath {
	let half = size / 2.;
	let corners = [DVec2::new(-half, -half), DVec2::new(half, -half), DVec2::new(half, half), DVec2::new(-half, half)].map(|corner| center + corner);

	let points = (0..corners.len()).flat_map(|index| {
		let (start, end) = (corners[index], corners[(index + 1) % corners.len()]);
		let midpoint = (start + end) / 2.;
		let direction = (end - start).normalize_or_zero();
		[midpoint - direction * size / 4., midpoint + direction * size / 4.]
	});
	Subpath::from_anchors(points.collect::<Vec<_>>(), true)
}
