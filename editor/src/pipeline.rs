//! Regenerates displayed artwork from its original geometry and the current parameters.
//!
//! Every recompute starts over from the untouched original snapshot, so applying the same parameters twice yields the same
//! geometry instead of compounding the effect.

use crate::artwork::ArtworkItem;
use crate::params::TransformParams;
use crate::style::PathStyle;

use bevel_engine::{NodeOverrides, PathId, apply_bevel};
use subpath_rs::{Subpath, combined_bounding_box};

/// Rebuilds the live geometry and style of one artwork item.
pub fn recompute_artwork(item: &mut ArtworkItem, params: &TransformParams, overrides: &NodeOverrides) {
	let mut working: Vec<Subpath> = item.ensure_snapshot().to_vec();

	if let Some(transform) = combined_bounding_box(&working).and_then(|[min, max]| params.geometry_transform((min + max) / 2.)) {
		debug!("Transforming {:?} by width {}% and slant {}°", item.id(), params.width, params.slant);
		working.iter_mut().for_each(|subpath| subpath.apply_transform(transform));
	}

	let global = params.bevel();
	let live = working
		.iter()
		.enumerate()
		.flat_map(|(index, subpath)| apply_bevel(subpath, PathId::new(item.id(), index), &global, overrides))
		.collect::<Vec<_>>();
	trace!("Recomputed {:?} into {} subpath(s)", item.id(), live.len());

	item.set_live(live);
	item.style = PathStyle::from_params(params);
}

/// Recomputes every user geometry item, leaving the rest untouched.
pub fn apply_all(items: &mut [ArtworkItem], params: &TransformParams, overrides: &NodeOverrides) {
	for item in items.iter_mut().filter(|item| item.is_user_geometry()) {
		recompute_artwork(item, params, overrides);
	}
}
