use crate::consts::{ANCHOR_MATCH_TOLERANCE, BEVEL_ARCLEN_ACCURACY};
use crate::corner::{CornerType, classify_corners};
use crate::inset::inset_shape;
use crate::params::{BevelSettings, BevelType, NodeId, NodeOverrides, PathId};
use crate::resolve::resolve_node_params;

use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};
use subpath_rs::{Subpath, SubpathBuilder, point_to_dvec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerJoin {
	/// A straight line between the two trim points.
	Line,
	/// A circular arc from the first trim point through the original corner to the second trim point.
	Arc,
}

/// The cut made at one convex corner: both adjacent curves lose `offset` units of arc length next to the corner.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CornerCut {
	join: CornerJoin,
	offset: f64,
}

/// Regenerates `subpath` with its corners beveled.
///
/// Concave corners are notched first by subtracting an inset shape (closed subpaths only), then convex corners are cut with a
/// chamfer or fillet. Settings are resolved per corner from `global` and the `overrides` of the nodes of `path_id`, which must
/// address anchors of this exact `subpath`. The input is never modified and degenerate corners are left sharp.
///
/// The result usually holds one subpath. Insets can split a shape into several pieces or remove it completely.
pub fn apply_bevel(subpath: &Subpath, path_id: PathId, global: &BevelSettings, overrides: &NodeOverrides) -> Vec<Subpath> {
	if subpath.len() < 2 {
		return vec![subpath.clone()];
	}

	let inset_pieces = subtract_concave_insets(subpath, path_id, global, overrides);

	if !global.bevel_type.is_convex() && !overrides.has_overrides_for(path_id) {
		return inset_pieces.unwrap_or_else(|| vec![subpath.clone()]);
	}

	match inset_pieces {
		Some(pieces) => pieces
			.iter()
			.map(|piece| {
				let nodes = match_original_nodes(piece, subpath, path_id);
				cut_convex_corners(piece, &nodes, global, overrides)
			})
			.collect(),
		None => {
			let nodes = (0..subpath.len()).map(|index| Some(path_id.node(index))).collect::<Vec<_>>();
			vec![cut_convex_corners(subpath, &nodes, global, overrides)]
		}
	}
}

/// Subtracts an inset shape at every concave corner whose settings ask for one.
/// Returns `None` when nothing was subtracted, leaving the subpath as it was.
fn subtract_concave_insets(subpath: &Subpath, path_id: PathId, global: &BevelSettings, overrides: &NodeOverrides) -> Option<Vec<Subpath>> {
	if !subpath.closed {
		return None;
	}

	let anchors = subpath.anchors();
	let insets = classify_corners(subpath)
		.into_iter()
		.enumerate()
		.filter(|&(_, corner)| corner == CornerType::Concave)
		.filter_map(|(index, _)| {
			let settings = resolve_node_params(path_id.node(index), global, overrides);
			let (previous, next) = subpath.neighbors(index)?;
			trace!("Concave corner {index} of {path_id:?}: {} of size {}", settings.bevel_type, settings.bevel_size);
			inset_shape(settings.bevel_type, anchors[index], anchors[previous], anchors[next], settings.bevel_size)
		})
		.collect::<Vec<_>>();

	if insets.is_empty() {
		return None;
	}

	match path_bool::subtract_all(subpath, &insets) {
		Ok(pieces) => {
			debug!("Subtracted {} concave inset(s) from {path_id:?}, {} piece(s) remain", insets.len(), pieces.len());
			Some(pieces)
		}
		Err(error) => {
			warn!("Concave insets of {path_id:?} were skipped: {error}");
			None
		}
	}
}

/// Maps each anchor of `piece` back to the node of the anchor it coincides with in `original`.
/// Anchors created by a subtraction have no node.
fn match_original_nodes(piece: &Subpath, original: &Subpath, path_id: PathId) -> Vec<Option<NodeId>> {
	piece
		.manipulator_groups()
		.iter()
		.map(|group| {
			original
				.manipulator_groups()
				.iter()
				.position(|original_group| original_group.anchor.abs_diff_eq(group.anchor, ANCHOR_MATCH_TOLERANCE))
				.map(|index| path_id.node(index))
		})
		.collect()
}

fn corner_cut(subpath: &Subpath, index: usize, settings: &BevelSettings, curve_lengths: &[f64]) -> Option<CornerCut> {
	let join = match settings.bevel_type {
		BevelType::Chamfer => CornerJoin::Line,
		BevelType::Fillet => CornerJoin::Arc,
		BevelType::None | BevelType::ConcaveSquare | BevelType::ConcaveChamfer | BevelType::ConcaveRound => return None,
	};
	if settings.bevel_size.is_nan() || settings.bevel_size <= 0. {
		return None;
	}

	// The incoming curve is the one that starts at the previous anchor
	let (previous, _) = subpath.neighbors(index)?;
	let offset = settings.bevel_size.min(curve_lengths[previous] / 2.).min(curve_lengths[index] / 2.);
	if offset.is_nan() || offset <= 0. {
		trace!("Corner {index} is left sharp, an adjacent curve has no length");
		return None;
	}
	Some(CornerCut { join, offset })
}

/// Cuts every convex corner whose settings ask for a chamfer or fillet.
/// `nodes` holds the node of each anchor of `subpath`, or `None` for anchors that only take the global settings.
fn cut_convex_corners(subpath: &Subpath, nodes: &[Option<NodeId>], global: &BevelSettings, overrides: &NodeOverrides) -> Subpath {
	let curves = subpath.iter().collect::<Vec<PathSeg>>();
	let curve_lengths = subpath.curve_lengths();

	let cuts = classify_corners(subpath)
		.into_iter()
		.enumerate()
		.map(|(index, corner)| {
			if corner != CornerType::Convex {
				return None;
			}
			let settings = nodes.get(index).copied().flatten().map_or(*global, |node| resolve_node_params(node, global, overrides));
			corner_cut(subpath, index, &settings, &curve_lengths)
		})
		.collect::<Vec<_>>();

	if cuts.iter().all(Option::is_none) {
		return subpath.clone();
	}

	// Parametric range of each curve that survives the cuts at its two ends
	let len = subpath.len();
	let trims = curves
		.iter()
		.enumerate()
		.map(|(index, curve)| {
			let start = cuts[index].map_or(0., |cut| curve.inv_arclen(cut.offset, BEVEL_ARCLEN_ACCURACY));
			let end = cuts[(index + 1) % len].map_or(1., |cut| curve.inv_arclen(curve_lengths[index] - cut.offset, BEVEL_ARCLEN_ACCURACY));
			(start, end.max(start))
		})
		.collect::<Vec<_>>();

	// A closed subpath whose first corner is cut starts where its closing curve now ends
	let start = match (subpath.closed, cuts[0], curves.last(), trims.last()) {
		(true, Some(_), Some(closing), Some(&(_, end))) => point_to_dvec2(closing.eval(end)),
		_ => subpath[0].anchor,
	};

	let mut builder = SubpathBuilder::new(start);
	for (index, curve) in curves.iter().enumerate() {
		let (start, end) = trims[index];

		if let Some(cut) = cuts[index] {
			let to = point_to_dvec2(curve.eval(start));
			match cut.join {
				CornerJoin::Line => builder.line_to(to),
				CornerJoin::Arc => builder.arc_through(subpath[index].anchor, to),
			};
		}

		if start == 0. && end == 1. {
			builder.push_curve_between(&subpath[index], &subpath[(index + 1) % len]);
		} else {
			builder.push_segment(curve.subsegment(start..end));
		}
	}
	builder.build(subpath.closed)
}
