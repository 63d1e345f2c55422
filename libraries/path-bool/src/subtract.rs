use crate::BooleanError;
use crate::convert::{polygons_to_subpaths, subpath_to_polygon};
use crate::restore::{curved_segments, restore_curves};

use geo::{BooleanOps, MultiPolygon};
use subpath_rs::Subpath;

/// Removes the area enclosed by `clip` from `subject`.
pub fn subtract(subject: &Subpath, clip: &Subpath) -> Result<Vec<Subpath>, BooleanError> {
	subtract_all(subject, std::slice::from_ref(clip))
}

/// Removes the area enclosed by each of `clips` from `subject`, one clip at a time so that overlapping clips are both removed.
///
/// The result may hold several subpaths: one per remaining region plus one per hole. Regions keep the orientation of `subject` and holes wind the other way.
/// Stretches of the result that follow a curve of an operand are that curve again, and the anchors of `subject` that survive keep
/// their exact positions. An empty result means nothing of `subject` survived.
pub fn subtract_all(subject: &Subpath, clips: &[Subpath]) -> Result<Vec<Subpath>, BooleanError> {
	let mut remaining = MultiPolygon::new(vec![subpath_to_polygon(subject)?]);
	for clip in clips {
		let clip = MultiPolygon::new(vec![subpath_to_polygon(clip)?]);
		remaining = remaining.difference(&clip);
	}

	let exterior_sign = if subject.signed_area() < 0. { -1. } else { 1. };
	let curves = curved_segments(std::iter::once(subject).chain(clips));
	let anchors = subject.anchors();
	let subpaths = polygons_to_subpaths(&remaining, exterior_sign)
		.iter()
		.map(|ring| restore_curves(ring, &curves, &anchors))
		.collect::<Vec<_>>();
	trace!("Subtracted {} clip(s), {} ring(s) remain", clips.len(), subpaths.len());
	Ok(subpaths)
}
